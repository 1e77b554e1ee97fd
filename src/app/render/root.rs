impl RefSwitcher {
    fn render_footer(&self, cx: &mut Context<Self>) -> AnyElement {
        let is_dark = cx.theme().mode.is_dark();

        h_flex()
            .w_full()
            .h_8()
            .items_center()
            .justify_between()
            .gap_2()
            .px_3()
            .border_t_1()
            .border_color(cx.theme().border.opacity(if is_dark { 0.88 } else { 0.68 }))
            .bg(cx.theme().sidebar.blend(
                cx.theme().muted.opacity(if is_dark { 0.18 } else { 0.22 }),
            ))
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.session_id.clone()),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_3()
                    .when(self.snapshot_loading, |this| {
                        this.child(
                            div()
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                                .child("refreshing…"),
                        )
                    })
                    .child(
                        div()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("{} command runs", self.processes_panel.len())),
                    ),
            )
            .into_any_element()
    }
}

impl Render for RefSwitcher {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .relative()
            .key_context("RefSwitcher")
            .track_focus(&self.focus_handle)
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.render_toolbar(cx))
            .child(div().flex_1().min_h_0().child(self.render_workspace(cx)))
            .child(self.render_console_panel(cx))
            .child(self.render_footer(cx))
            .when(self.checkout_dialog_open, |this| {
                this.child(self.render_checkout_dialog(cx))
            })
            .children(Root::render_dialog_layer(window, cx))
            .children(Root::render_notification_layer(window, cx))
    }
}
