impl RefSwitcher {
    fn render_checkout_dialog(&self, cx: &mut Context<Self>) -> AnyElement {
        if !self.checkout_dialog_open {
            return div().into_any_element();
        }

        let view = cx.entity();
        let is_dark = cx.theme().mode.is_dark();
        let backdrop_bg = cx.theme().background.opacity(if is_dark { 0.24 } else { 0.12 });
        let panel_bg = cx.theme().popover.blend(
            cx.theme()
                .background
                .opacity(if is_dark { 0.16 } else { 0.05 }),
        );
        let target_label = self
            .checkout_target
            .as_ref()
            .map(|project| project.location().display().to_string())
            .unwrap_or_default();
        let confirm_disabled = !self.confirm_enabled(cx);

        div()
            .id("checkout-dialog-overlay")
            .absolute()
            .top_0()
            .right_0()
            .bottom_0()
            .left_0()
            .bg(backdrop_bg)
            .on_mouse_down(MouseButton::Left, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_mouse_down(MouseButton::Middle, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_mouse_down(MouseButton::Right, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_scroll_wheel(|_, _, cx| {
                cx.stop_propagation();
            })
            .child(
                div()
                    .id("checkout-dialog-anchor")
                    .absolute()
                    .top(px(120.0))
                    .left_0()
                    .right_0()
                    .flex()
                    .justify_center()
                    .child(
                        v_flex()
                            .id("checkout-dialog")
                            .w(px(460.0))
                            .rounded(px(12.0))
                            .border_1()
                            .border_color(cx.theme().border.opacity(if is_dark { 0.92 } else { 0.72 }))
                            .bg(panel_bg)
                            .child(
                                v_flex()
                                    .gap_0p5()
                                    .px_4()
                                    .py_3()
                                    .border_b_1()
                                    .border_color(
                                        cx.theme().border.opacity(if is_dark { 0.92 } else { 0.74 }),
                                    )
                                    .child(
                                        div()
                                            .text_lg()
                                            .font_semibold()
                                            .text_color(cx.theme().foreground)
                                            .child("Checkout Reference"),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(target_label),
                                    ),
                            )
                            .child(
                                v_flex()
                                    .gap_1()
                                    .px_4()
                                    .py_3()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(cx.theme().foreground)
                                            .child("Reference to checkout"),
                                    )
                                    .child(
                                        Input::new(&self.reference_input)
                                            .h(px(36.0))
                                            .rounded(px(8.0))
                                            .border_1()
                                            .border_color(
                                                cx.theme()
                                                    .border
                                                    .opacity(if is_dark { 0.90 } else { 0.72 }),
                                            )
                                            .bg(cx.theme().background.blend(
                                                cx.theme()
                                                    .muted
                                                    .opacity(if is_dark { 0.20 } else { 0.09 }),
                                            ))
                                            .disabled(self.checkout_loading),
                                    ),
                            )
                            .child(
                                h_flex()
                                    .items_center()
                                    .justify_between()
                                    .gap_3()
                                    .px_4()
                                    .py_3()
                                    .border_t_1()
                                    .border_color(
                                        cx.theme().border.opacity(if is_dark { 0.92 } else { 0.74 }),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(if self.checkout_loading {
                                                "Checking out…"
                                            } else {
                                                "Press Enter to checkout."
                                            }),
                                    )
                                    .child(
                                        h_flex()
                                            .items_center()
                                            .gap_2()
                                            .child({
                                                let view = view.clone();
                                                Button::new("checkout-cancel")
                                                    .outline()
                                                    .rounded(px(8.0))
                                                    .label("Cancel")
                                                    .on_click(move |_, _, cx| {
                                                        view.update(cx, |this, cx| {
                                                            this.cancel_checkout_dialog(cx);
                                                        });
                                                    })
                                            })
                                            .child({
                                                let view = view.clone();
                                                Button::new("checkout-confirm")
                                                    .primary()
                                                    .rounded(px(8.0))
                                                    .label("Checkout")
                                                    .disabled(confirm_disabled)
                                                    .on_click(move |_, _, cx| {
                                                        view.update(cx, |this, cx| {
                                                            let reference = this.reference_text(cx);
                                                            this.submit_checkout(reference, cx);
                                                        });
                                                    })
                                            }),
                                    ),
                            ),
                    ),
            )
            .into_any_element()
    }
}
