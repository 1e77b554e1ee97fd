impl RefSwitcher {
    fn load_app_config() -> (Option<ConfigStore>, AppConfig) {
        let store = match ConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                error!("failed to initialize config path: {err:#}");
                return (None, AppConfig::default());
            }
        };

        match store.load_or_create_default() {
            Ok(config) => (Some(store), config),
            Err(err) => {
                error!(
                    "failed to load app config from {}: {err:#}",
                    store.path().display()
                );
                (Some(store), AppConfig::default())
            }
        }
    }

    fn load_app_state() -> (Option<AppStateStore>, AppState) {
        let store = match AppStateStore::new() {
            Ok(store) => store,
            Err(err) => {
                error!("failed to initialize state path: {err:#}");
                return (None, AppState::default());
            }
        };

        match store.load_or_default() {
            Ok(state) => (Some(store), state),
            Err(err) => {
                error!(
                    "failed to load app state from {}: {err:#}",
                    store.path().display()
                );
                (Some(store), AppState::default())
            }
        }
    }

    fn apply_theme_preference(&self, window: &mut Window, cx: &mut Context<Self>) {
        let mode = match self.config.theme {
            ThemePreference::System => ThemeMode::from(window.appearance()),
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        };
        Theme::change(mode, Some(window), cx);
    }

    fn persist_config(&self) {
        let Some(store) = &self.config_store else {
            return;
        };

        if let Err(err) = store.save(&self.config) {
            error!(
                "failed to save app config to {}: {err:#}",
                store.path().display()
            );
        }
    }

    fn persist_state(&self) {
        let Some(store) = &self.state_store else {
            return;
        };

        if let Err(err) = store.save(&self.app_state) {
            error!(
                "failed to save app state to {}: {err:#}",
                store.path().display()
            );
        }
    }

    fn sync_theme_with_system_if_needed(&self, window: &mut Window, cx: &mut Context<Self>) {
        if self.config.theme != ThemePreference::System {
            return;
        }
        self.apply_theme_preference(window, cx);
    }

    pub(super) fn set_theme_preference(
        &mut self,
        theme: ThemePreference,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.config.theme == theme {
            return;
        }

        self.config.theme = theme;
        self.apply_theme_preference(window, cx);
        self.persist_config();
        cx.notify();
    }

    fn now_unix_seconds() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.as_secs() as i64)
            .unwrap_or(0)
    }

    pub(super) fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let (config_store, config) = Self::load_app_config();
        let (state_store, app_state) = Self::load_app_state();
        let session_id = format!(
            "session-{}-{}",
            std::process::id(),
            Self::now_unix_seconds()
        );

        let reference_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(REFERENCE_INPUT_PLACEHOLDER)
        });
        cx.subscribe_in(&reference_input, window, Self::on_reference_input_event)
            .detach();

        let mut view = Self {
            config_store,
            config,
            state_store,
            app_state,
            session_id,
            project: None,
            branch_name: FALLBACK_BRANCH_LABEL.to_string(),
            files: Vec::new(),
            error_message: None,
            attempted_state_fallback: false,
            processes_panel: ProcessesPanel::new(),
            console_panel_collapsed: false,
            checkout_target: None,
            checkout_dialog_open: false,
            checkout_loading: false,
            checkout_task: Task::ready(()),
            reference_input,
            snapshot_epoch: 0,
            snapshot_task: Task::ready(()),
            snapshot_loading: false,
            refresh_epoch: 0,
            auto_refresh_task: Task::ready(()),
            focus_handle: cx.focus_handle(),
        };

        view.apply_theme_preference(window, cx);
        cx.observe_window_appearance(window, |this, window, cx| {
            this.sync_theme_with_system_if_needed(window, cx);
        })
        .detach();

        view.request_snapshot_refresh(cx);
        view.start_auto_refresh(cx);
        view
    }

    pub(super) fn request_snapshot_refresh(&mut self, cx: &mut Context<Self>) {
        if self.snapshot_loading {
            return;
        }

        let target_result = match &self.project {
            Some(project) => Ok(project.location().to_path_buf()),
            None => std::env::current_dir().context("failed to resolve current directory"),
        };
        let epoch = self.next_snapshot_epoch();
        self.snapshot_loading = true;

        self.snapshot_task = cx.spawn(async move |this, cx| {
            let result = match target_result {
                Ok(target) => {
                    cx.background_executor()
                        .spawn(async move { load_snapshot(&target) })
                        .await
                }
                Err(err) => Err(err),
            };

            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    if epoch != this.snapshot_epoch {
                        return;
                    }

                    this.snapshot_loading = false;
                    match result {
                        Ok(snapshot) => this.apply_snapshot(snapshot, cx),
                        Err(err) => this.apply_snapshot_error(err, cx),
                    }
                })
                .ok();
            }
        });
    }

    pub(super) fn apply_snapshot(&mut self, snapshot: RepoSnapshot, cx: &mut Context<Self>) {
        let root_changed = self
            .project
            .as_ref()
            .is_none_or(|project| project.location() != snapshot.root);

        if root_changed {
            info!(
                "loaded repository snapshot from {}",
                snapshot.root.display()
            );
            self.app_state.remember_project(&snapshot.root);
            self.persist_state();
        }

        self.project = Some(Project::new(snapshot.root));
        self.branch_name = snapshot.branch_name;
        self.files = snapshot.files;
        self.error_message = None;
        cx.notify();
    }

    fn apply_snapshot_error(&mut self, err: anyhow::Error, cx: &mut Context<Self>) {
        // Launched outside a repository: retry once against the project the
        // user had open last.
        if self.project.is_none()
            && !self.attempted_state_fallback
            && let Some(previous) = self.app_state.last_project_path.clone()
        {
            self.attempted_state_fallback = true;
            info!(
                "no repository at the current directory, retrying last project at {}",
                previous.display()
            );
            self.project = Some(Project::new(previous));
            self.request_snapshot_refresh(cx);
            return;
        }

        self.project = None;
        self.branch_name = FALLBACK_BRANCH_LABEL.to_string();
        self.files.clear();
        self.error_message = Some(err.to_string());
        cx.notify();
    }

    fn next_snapshot_epoch(&mut self) -> usize {
        self.snapshot_epoch = self.snapshot_epoch.saturating_add(1);
        self.snapshot_epoch
    }

    fn start_auto_refresh(&mut self, cx: &mut Context<Self>) {
        let epoch = self.next_refresh_epoch();
        self.schedule_auto_refresh(epoch, cx);
    }

    fn next_refresh_epoch(&mut self) -> usize {
        self.refresh_epoch = self.refresh_epoch.saturating_add(1);
        self.refresh_epoch
    }

    fn auto_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.config.auto_refresh_secs.max(1))
    }

    fn schedule_auto_refresh(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch != self.refresh_epoch {
            return;
        }

        let interval = self.auto_refresh_interval();
        self.auto_refresh_task = cx.spawn(async move |this, cx| {
            Timer::after(interval).await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    // Pause refreshes while a checkout is in flight so the
                    // working tree is not scanned mid-switch.
                    if !this.checkout_loading {
                        this.request_snapshot_refresh(cx);
                    }
                    let next_epoch = this.next_refresh_epoch();
                    this.schedule_auto_refresh(next_epoch, cx);
                })
                .ok();
            }
        });
    }

    pub(super) fn toggle_console_panel(&mut self, cx: &mut Context<Self>) {
        self.console_panel_collapsed = !self.console_panel_collapsed;
        cx.notify();
    }

    pub(super) fn project_display_name(&self) -> String {
        self.project
            .as_ref()
            .and_then(|project| project.location().file_name())
            .map(|name| name.to_string_lossy().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| "RefSwitch".to_string())
    }
}
