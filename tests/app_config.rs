use refswitch::config::{AppConfig, ThemePreference};

#[test]
fn config_defaults_to_system_theme() {
    let config = AppConfig::default();
    assert_eq!(config.theme, ThemePreference::System);
    assert_eq!(config.auto_refresh_secs, 2);
}

#[test]
fn config_parses_empty_file_as_defaults() {
    let config: AppConfig = toml::from_str("").expect("empty config should parse");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn config_parses_partial_file() {
    let config: AppConfig =
        toml::from_str("theme = \"dark\"\n").expect("partial config should parse");
    assert_eq!(config.theme, ThemePreference::Dark);
    assert_eq!(config.auto_refresh_secs, 2);
}

#[test]
fn config_round_trips() {
    let config = AppConfig {
        theme: ThemePreference::Light,
        auto_refresh_secs: 5,
    };

    let raw = toml::to_string(&config).expect("config should serialize");
    let loaded: AppConfig = toml::from_str(&raw).expect("config should deserialize");

    assert_eq!(loaded, config);
}
