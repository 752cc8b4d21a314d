impl PortfolioView {
    fn toggle_language_menu(&mut self, cx: &mut Context<Self>) {
        self.lang_menu = match self.lang_menu {
            LangMenuState::Closed => LangMenuState::Open { expanded: None },
            LangMenuState::Open { .. } => LangMenuState::Closed,
        };
        cx.notify();
    }

    fn toggle_language_category(&mut self, category: LangCategory, cx: &mut Context<Self>) {
        self.lang_menu = match self.lang_menu {
            LangMenuState::Open {
                expanded: Some(current),
            } if current == category => LangMenuState::Open { expanded: None },
            LangMenuState::Open { .. } | LangMenuState::Closed => LangMenuState::Open {
                expanded: Some(category),
            },
        };
        cx.notify();
    }

    pub(super) fn render_top_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.i18n();

        div()
            .h(px(TOP_BAR_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .bg(cx.theme().title_bar)
            .flex()
            .items_center()
            .justify_between()
            .px_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .font_bold()
                            .text_color(cx.theme().foreground)
                            .child("Yve Hu"),
                    ),
            )
            .child(
                div().flex().items_center().gap_1().child(
                    Button::new("language-menu")
                        .ghost()
                        .small()
                        .icon(
                            Icon::new(crate::icons::IconName::Globe)
                                .size_4()
                                .text_color(cx.theme().muted_foreground),
                        )
                        .label(i18n.language_button)
                        // The overlay intercepts presses while open, so
                        // this only ever fires to open the menu.
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.toggle_language_menu(cx);
                        })),
                ),
            )
    }

    /// The dropdown plus a full-window overlay that dismisses it, rendered
    /// above everything else while open.
    pub(super) fn render_language_menu(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let LangMenuState::Open { expanded } = self.lang_menu else {
            return None;
        };
        let i18n = self.i18n();

        let mut panel = div()
            .absolute()
            .top(px(TOP_BAR_HEIGHT))
            .right(px(12.))
            .w(px(200.))
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .shadow_lg()
            .py_1()
            .v_flex()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|_, _, _, cx| {
                    cx.stop_propagation();
                }),
            )
            .child(self.render_language_category_row(
                "lang-category-code",
                "🤖",
                LangCategory::Code,
                expanded,
                cx,
            ));

        if expanded == Some(LangCategory::Code) {
            for (index, code_language) in content::CODE_LANGUAGES.into_iter().enumerate() {
                let selected = self.selected_code_language == Some(code_language);
                panel = panel.child(
                    self.render_language_option(("lang-code", index), code_language, selected, cx, {
                        move |this, cx| {
                            this.selected_code_language = Some(code_language);
                            this.lang_menu = LangMenuState::Closed;
                            cx.notify();
                        }
                    }),
                );
            }
        }

        panel = panel.child(self.render_language_category_row(
            "lang-category-human",
            "👤",
            LangCategory::Human,
            expanded,
            cx,
        ));

        if expanded == Some(LangCategory::Human) {
            for (index, language) in [Language::EnUs, Language::ZhCn].into_iter().enumerate() {
                let selected = self.language == language;
                panel = panel.child(self.render_language_option(
                    ("lang-human", index),
                    language.menu_label(),
                    selected,
                    cx,
                    move |this, cx| {
                        this.lang_menu = LangMenuState::Closed;
                        this.set_language(language, cx);
                        cx.notify();
                    },
                ));
            }
        }

        Some(
            div()
                .id("lang-menu-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.close_language_menu(cx);
                    }),
                )
                .child(panel)
                .into_any_element(),
        )
    }

    fn render_language_category_row(
        &self,
        id: &'static str,
        emoji: &'static str,
        category: LangCategory,
        expanded: Option<LangCategory>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let is_expanded = expanded == Some(category);
        div()
            .id(id)
            .px_2()
            .py_1()
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .hover(|this| this.bg(cx.theme().secondary.opacity(0.85)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _, cx| {
                    this.toggle_language_category(category, cx);
                    cx.stop_propagation();
                }),
            )
            .child(div().text_sm().child(emoji))
            .child(
                Icon::new(if is_expanded {
                    crate::icons::IconName::ChevronDown
                } else {
                    crate::icons::IconName::ChevronRight
                })
                .size_3()
                .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_language_option(
        &self,
        id: (&'static str, usize),
        label: &'static str,
        selected: bool,
        cx: &mut Context<Self>,
        on_pick: impl Fn(&mut Self, &mut Context<Self>) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .pl_8()
            .pr_2()
            .py_1()
            .flex()
            .items_center()
            .cursor_pointer()
            .text_sm()
            .text_color(if selected {
                cx.theme().foreground
            } else {
                cx.theme().muted_foreground
            })
            .when(selected, |this| this.bg(cx.theme().selection))
            .hover(|this| this.bg(cx.theme().secondary.opacity(0.85)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _, cx| {
                    on_pick(this, cx);
                    cx.stop_propagation();
                }),
            )
            .child(label)
    }
}
