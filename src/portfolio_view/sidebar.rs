impl PortfolioView {
    pub(super) fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.i18n();

        div()
            .w(px(self.sidebar_width))
            .h_full()
            .flex_shrink_0()
            .relative()
            .border_r_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .child(
                div()
                    .id("sidebar-nav")
                    .v_flex()
                    .size_full()
                    .overflow_y_scroll()
                    .track_scroll(&self.sidebar_scroll)
                    .py_2()
                    .children(content::SECTIONS.into_iter().enumerate().map(
                        |(section_index, section)| {
                            self.render_sidebar_section(section, section_index, i18n, cx)
                        },
                    )),
            )
            .child(
                // Drag handle on the right edge.
                div()
                    .id("sidebar-resizer")
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .right_0()
                    .w(px(4.))
                    .cursor_col_resize()
                    .hover(|this| this.bg(cx.theme().primary.opacity(0.5)))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| {
                            this.sidebar_resizing = true;
                            cx.notify();
                        }),
                    ),
            )
    }

    fn render_sidebar_section(
        &self,
        section: SectionKind,
        section_index: usize,
        i18n: I18n,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let expanded = self.expanded_sections.contains(&section);

        div()
            .v_flex()
            .w_full()
            .child(
                div()
                    .id(("nav-section", section_index))
                    .w_full()
                    .px_2()
                    .py_1()
                    .flex()
                    .items_center()
                    .gap_1()
                    .cursor_pointer()
                    .hover(|this| this.bg(cx.theme().secondary.opacity(0.85)))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.toggle_section(section, cx);
                    }))
                    .child(
                        Icon::new(if expanded {
                            crate::icons::IconName::ChevronDown
                        } else {
                            crate::icons::IconName::ChevronRight
                        })
                        .size_3()
                        .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Icon::new(crate::icons::IconName::Folder)
                            .size_4()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        div()
                            .text_sm()
                            .whitespace_nowrap()
                            .overflow_hidden()
                            .text_color(cx.theme().foreground)
                            .child(section.label(i18n)),
                    ),
            )
            .when(expanded, |this| {
                this.children(section.pages().iter().enumerate().map(|(page_index, &page)| {
                    let active = self.nav_item_active(page);
                    div()
                        .id(("nav-item", section_index * 10 + page_index))
                        .w_full()
                        .pl_6()
                        .pr_2()
                        .py_1()
                        .flex()
                        .items_center()
                        .gap_2()
                        .cursor_pointer()
                        .when(active, |this| this.bg(cx.theme().selection))
                        .when(!active, |this| {
                            this.hover(|this| this.bg(cx.theme().secondary.opacity(0.85)))
                        })
                        .on_click(cx.listener(move |this, _, _, cx| {
                            this.open_page(page, cx);
                        }))
                        .child(
                            Icon::new(crate::icons::IconName::File)
                                .size_4()
                                .text_color(cx.theme().muted_foreground),
                        )
                        .child(
                            div()
                                .text_sm()
                                .whitespace_nowrap()
                                .overflow_hidden()
                                .text_color(if active {
                                    cx.theme().foreground
                                } else {
                                    cx.theme().muted_foreground
                                })
                                .child(page.label(i18n)),
                        )
                }))
            })
    }
}
