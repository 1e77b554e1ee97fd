impl RefSwitcher {
    fn render_console_panel(&self, cx: &mut Context<Self>) -> AnyElement {
        if self.processes_panel.is_empty() {
            return div().into_any_element();
        }

        let view = cx.entity();
        let is_dark = cx.theme().mode.is_dark();
        let collapsed = self.console_panel_collapsed;

        v_flex()
            .w_full()
            .flex_none()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().sidebar.blend(
                cx.theme().muted.opacity(if is_dark { 0.16 } else { 0.24 }),
            ))
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .justify_between()
                    .px_3()
                    .py_1()
                    .child(
                        div()
                            .text_xs()
                            .font_semibold()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("Command output ({})", self.processes_panel.len())),
                    )
                    .child({
                        let view = view.clone();
                        Button::new("toggle-console-panel")
                            .ghost()
                            .compact()
                            .rounded(px(6.0))
                            .label(if collapsed { "Show" } else { "Hide" })
                            .on_click(move |_, _, cx| {
                                view.update(cx, |this, cx| {
                                    this.toggle_console_panel(cx);
                                });
                            })
                    }),
            )
            .when(!collapsed, |this| {
                this.child(
                    div().max_h(px(180.0)).overflow_y_scrollbar().child(
                        v_flex().w_full().gap_1().px_3().pb_2().children(
                            self.processes_panel
                                .entries()
                                .iter()
                                .enumerate()
                                .map(|(ix, entry)| {
                                    v_flex()
                                        .w_full()
                                        .gap_0p5()
                                        .child(
                                            h_flex()
                                                .items_center()
                                                .gap_1()
                                                .child(
                                                    div()
                                                        .text_xs()
                                                        .font_semibold()
                                                        .text_color(cx.theme().foreground)
                                                        .child(format!(
                                                            "{} #{}",
                                                            entry.console.command_name(),
                                                            ix + 1
                                                        )),
                                                )
                                                .child(
                                                    div()
                                                        .text_xs()
                                                        .text_color(cx.theme().muted_foreground)
                                                        .child(entry.session_id.clone()),
                                                ),
                                        )
                                        .children(entry.console.lines().iter().map(|line| {
                                            div()
                                                .text_xs()
                                                .font_family(cx.theme().mono_font_family.clone())
                                                .text_color(
                                                    if line.severity == ConsoleLineSeverity::Error {
                                                        cx.theme().danger
                                                    } else {
                                                        cx.theme().foreground
                                                    },
                                                )
                                                .child(line.text.clone())
                                        }))
                                        .into_any_element()
                                }),
                        ),
                    ),
                )
            })
            .into_any_element()
    }
}
