impl RefSwitcher {
    fn render_workspace(&self, cx: &mut Context<Self>) -> AnyElement {
        if let Some(error_message) = &self.error_message {
            return v_flex()
                .size_full()
                .items_center()
                .justify_center()
                .gap_2()
                .p_4()
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child(error_message.clone()),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child("Launch RefSwitch from inside a git working copy."),
                )
                .into_any_element();
        }

        let is_dark = cx.theme().mode.is_dark();

        v_flex()
            .size_full()
            .gap_2()
            .p_3()
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child("Working copy changes"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(if self.snapshot_loading {
                                "refreshing…".to_string()
                            } else {
                                format!("{} files", self.files.len())
                            }),
                    ),
            )
            .child(if self.files.is_empty() {
                div()
                    .py_2()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Working copy is clean.")
                    .into_any_element()
            } else {
                div()
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scrollbar()
                    .child(v_flex().w_full().gap_1().children(
                        self.files.iter().enumerate().map(|(ix, file)| {
                            self.render_changed_file_row(ix, file, is_dark, cx)
                        }),
                    ))
                    .into_any_element()
            })
            .into_any_element()
    }

    fn render_changed_file_row(
        &self,
        row_id: usize,
        file: &ChangedFile,
        is_dark: bool,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let status_color = match file.status {
            FileStatus::Added | FileStatus::Untracked => cx.theme().success,
            FileStatus::Deleted => cx.theme().danger,
            FileStatus::Conflicted => cx.theme().warning,
            _ => cx.theme().accent,
        };

        h_flex()
            .id(("changed-file-row", row_id))
            .w_full()
            .items_center()
            .gap_1()
            .px_1()
            .py_0p5()
            .rounded(px(6.0))
            .child(
                div()
                    .px_1()
                    .py_0p5()
                    .rounded(px(4.0))
                    .text_xs()
                    .font_semibold()
                    .bg(status_color.opacity(if is_dark { 0.24 } else { 0.16 }))
                    .text_color(cx.theme().foreground)
                    .child(file.status.tag()),
            )
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .truncate()
                    .text_xs()
                    .text_color(cx.theme().foreground)
                    .child(file.path.clone()),
            )
            .into_any_element()
    }
}
