impl RefSwitcher {
    /// Opens the checkout dialog against the current project. The target is
    /// held for the lifetime of this dialog session and overwritten the next
    /// time the dialog opens.
    pub(super) fn open_checkout_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(project) = self.project.clone() else {
            Self::push_error_notification(
                "Open a git repository before checking out a reference.".to_string(),
                cx,
            );
            return;
        };

        self.checkout_target = Some(project);
        self.checkout_dialog_open = true;
        self.reference_input.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
        self.reference_input.read(cx).focus_handle(cx).focus(window);
        cx.notify();
    }

    pub(super) fn cancel_checkout_dialog(&mut self, cx: &mut Context<Self>) {
        self.close_checkout_dialog(cx);
    }

    /// Idempotent: a late continuation from an in-flight request may land
    /// after the dialog was already dismissed.
    pub(super) fn close_checkout_dialog(&mut self, cx: &mut Context<Self>) {
        if !self.checkout_dialog_open {
            return;
        }
        self.checkout_dialog_open = false;
        cx.notify();
    }

    pub(super) fn reference_text(&self, cx: &Context<Self>) -> String {
        self.reference_input.read(cx).value().to_string()
    }

    /// The confirm button is enabled exactly when the entered reference is
    /// valid and no attempt is already running.
    pub(super) fn confirm_enabled(&self, cx: &Context<Self>) -> bool {
        is_reference_valid(&self.reference_text(cx)) && !self.checkout_loading
    }

    fn on_reference_input_event(
        &mut self,
        _: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.checkout_dialog_open {
            return;
        }

        match event {
            InputEvent::Change { .. } => cx.notify(),
            InputEvent::PressEnter { .. } => self.submit_checkout_from_input(window, cx),
            _ => {}
        }
    }

    /// Enter-key path: re-validates before submitting, so an empty reference
    /// never reaches the git service.
    pub(super) fn submit_checkout_from_input(&mut self, _: &mut Window, cx: &mut Context<Self>) {
        let reference = self.reference_text(cx);
        if !is_reference_valid(&reference) {
            return;
        }
        self.submit_checkout(reference, cx);
    }

    pub(super) fn submit_checkout(&mut self, reference: String, cx: &mut Context<Self>) {
        if self.checkout_loading {
            return;
        }
        if !is_reference_valid(&reference) {
            return;
        }
        let Some(project) = self.checkout_target.clone() else {
            return;
        };

        let request = CheckoutRequest::new(reference.trim());
        info!(
            "checking out reference {} in {}",
            request.name(),
            project.location().display()
        );

        self.checkout_loading = true;
        cx.notify();

        let checkout_background = cx.background_executor().clone();
        let sync_background = checkout_background.clone();
        let checkout_project = project.clone();
        let sync_project = project;

        self.checkout_task = cx.spawn(async move |this, cx| {
            let outcome = run_checkout(
                request,
                move |request| {
                    checkout_background.spawn(async move {
                        checkout_reference(checkout_project.location(), request.name())
                    })
                },
                move || sync_background.spawn(async move { sync_project.synchronize() }),
            )
            .await;

            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    this.finish_checkout(outcome, cx);
                })
                .ok();
            }
        });
    }

    /// Routes the terminal outcome of one attempt. Both branches end by
    /// closing the dialog, exactly once.
    fn finish_checkout(&mut self, outcome: CheckoutOutcome<RepoSnapshot>, cx: &mut Context<Self>) {
        self.checkout_loading = false;

        match outcome {
            CheckoutOutcome::Completed { synchronized } => {
                if let Some(snapshot) = synchronized {
                    self.apply_snapshot(snapshot, cx);
                }
            }
            CheckoutOutcome::Failed {
                console_message,
                notification_message,
            } => {
                error!("checkout failed: {console_message}");
                let mut console = OutputConsole::new(CHECKOUT_COMMAND_NAME);
                console.print_error(console_message);
                self.processes_panel
                    .add_command_output(self.session_id.clone(), console);
                self.console_panel_collapsed = false;
                Self::push_error_notification(notification_message, cx);
            }
        }

        self.close_checkout_dialog(cx);
        cx.notify();
    }

    fn push_error_notification(message: String, cx: &mut Context<Self>) {
        let window_handles = cx.windows().into_iter().collect::<Vec<_>>();
        if window_handles.is_empty() {
            error!("cannot show checkout error notification: no windows available");
            return;
        }

        for window_handle in window_handles {
            if let Err(err) = cx.update_window(window_handle, |_, window, cx| {
                gpui_component::WindowExt::push_notification(
                    window,
                    gpui_component::notification::Notification::error(message.clone()),
                    cx,
                );
            }) {
                error!("failed to show checkout error notification: {err:#}");
            }
        }
    }
}
