use std::time::Duration;

use anyhow::{Context as _, Result};
use gpui::{
    AnyElement, AppContext as _, Application, Context, Entity, FocusHandle, Focusable as _,
    InteractiveElement as _, IntoElement, MouseButton, ParentElement as _, Render, Styled as _,
    Task, Timer, Window, WindowOptions, div, prelude::FluentBuilder as _, px,
};
use gpui_component::input::{InputEvent, InputState};
use gpui_component::{
    ActiveTheme as _, Colorize as _, Root, StyledExt as _, Theme, ThemeMode, h_flex, v_flex,
};
use tracing::{error, info};

use refswitch::checkout::{
    CHECKOUT_COMMAND_NAME, CheckoutOutcome, CheckoutRequest, is_reference_valid, run_checkout,
};
use refswitch::config::{AppConfig, ConfigStore, ThemePreference};
use refswitch::console::{ConsoleLineSeverity, OutputConsole, ProcessesPanel};
use refswitch::git::{
    ChangedFile, FileStatus, Project, RepoSnapshot, checkout_reference, load_snapshot,
};
use refswitch::state::{AppState, AppStateStore};

const FALLBACK_BRANCH_LABEL: &str = "unknown";
const REFERENCE_INPUT_PLACEHOLDER: &str = "Branch, tag or commit hash";

mod controller;
mod render;

pub fn run() -> Result<()> {
    let app = Application::new();
    app.run(|cx| {
        gpui_component::init(cx);

        if let Err(err) = cx.open_window(WindowOptions::default(), |window, cx| {
            let view = cx.new(|cx| RefSwitcher::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        }) {
            error!("failed to open window: {err:#}");
        }
    });

    Ok(())
}

struct RefSwitcher {
    config_store: Option<ConfigStore>,
    config: AppConfig,
    state_store: Option<AppStateStore>,
    app_state: AppState,
    session_id: String,

    project: Option<Project>,
    branch_name: String,
    files: Vec<ChangedFile>,
    error_message: Option<String>,
    attempted_state_fallback: bool,

    processes_panel: ProcessesPanel,
    console_panel_collapsed: bool,

    checkout_target: Option<Project>,
    checkout_dialog_open: bool,
    checkout_loading: bool,
    checkout_task: Task<()>,
    reference_input: Entity<InputState>,

    snapshot_epoch: usize,
    snapshot_task: Task<()>,
    snapshot_loading: bool,
    refresh_epoch: usize,
    auto_refresh_task: Task<()>,

    focus_handle: FocusHandle,
}
