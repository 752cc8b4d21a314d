impl PortfolioView {
    pub(super) fn render_editor(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.session.active();
        let lines: Vec<String> = if page.reflow_enabled() {
            match self.reflow_cache.as_ref() {
                Some(cache) if cache.page == page && cache.language == self.language => {
                    cache.lines.clone()
                }
                _ => content::page_lines(page, self.language)
                    .iter()
                    .map(|line| (*line).to_string())
                    .collect(),
            }
        } else {
            content::page_lines(page, self.language)
                .iter()
                .map(|line| (*line).to_string())
                .collect()
        };

        div()
            .id("editor-content")
            .flex_1()
            .min_h(px(0.))
            .w_full()
            .overflow_y_scroll()
            .track_scroll(&self.editor_scroll)
            .font_family(EDITOR_FONT_FAMILY)
            .text_size(px(EDITOR_FONT_SIZE))
            .py_2()
            .child(
                div()
                    .v_flex()
                    .w_full()
                    .px(px(reflow::CONTENT_PADDING))
                    .children(
                        lines
                            .iter()
                            .enumerate()
                            .map(|(index, line)| {
                                self.render_editor_line(page, line, index + 1, cx)
                            }),
                    ),
            )
    }

    fn render_editor_line(
        &self,
        page: PageKind,
        line: &str,
        line_num: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        if page == PageKind::Skills {
            if let Some((logos, caption)) = content::skills_logo_row(line, self.language) {
                return self.render_skills_logo_row(logos, caption, line_num, cx);
            }
        }
        if line == content::TOKEN_PROJECT_CARDS {
            return self.render_project_cards(cx);
        }
        if line == content::TOKEN_PROJECT_MEDIA {
            return self.render_project_media(page, cx);
        }
        if page == PageKind::Contact {
            if let Some(entry) = content::contact_entry(line, self.language) {
                return self.render_contact_card(entry, line_num, cx);
            }
        }

        let spans = highlight::highlight_line(page, line);
        let show_gutter = !matches!(
            page,
            PageKind::Games | PageKind::ThreeSins | PageKind::SmileRecovery
        );

        div()
            .flex()
            .flex_row()
            .items_start()
            .w_full()
            .min_h(px(EDITOR_LINE_HEIGHT))
            .when(show_gutter, |this| {
                this.child(self.render_line_number(line_num, cx))
            })
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .children(spans.iter().enumerate().map(|(span_index, span)| {
                        self.render_span_element(page, span, line_num, span_index, cx)
                    })),
            )
            .into_any_element()
    }

    fn render_line_number(&self, line_num: usize, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w(px(reflow::GUTTER_WIDTH))
            .flex_shrink_0()
            .pr(px(reflow::GUTTER_GAP))
            .flex()
            .justify_end()
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground.opacity(0.7))
                    .child(line_num.to_string()),
            )
    }

    // Small hover hint anchored just below the link text.
    fn render_link_tooltip(
        &self,
        group: &'static str,
        label: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .absolute()
            .top(px(EDITOR_LINE_HEIGHT - 6.))
            .left_0()
            .whitespace_nowrap()
            .px_1()
            .rounded_sm()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .text_xs()
            .text_color(cx.theme().muted_foreground)
            .invisible()
            .group_hover(group, |this| this.visible())
            .child(label)
    }

    fn render_span_element(
        &self,
        page: PageKind,
        span: &highlight::Span<'_>,
        line_num: usize,
        span_index: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let text = SharedString::from(span.text.to_string());
        let id = ("editor-span", line_num * 100 + span_index);

        match span.kind {
            SpanKind::Plain => div()
                .whitespace_nowrap()
                .text_color(cx.theme().foreground)
                .child(text)
                .into_any_element(),
            SpanKind::Comment => div()
                .whitespace_nowrap()
                .text_color(rgb(COLOR_COMMENT))
                .child(text)
                .into_any_element(),
            SpanKind::SectionTitle => div()
                .whitespace_nowrap()
                .font_bold()
                .text_color(rgb(COLOR_SECTION_TITLE))
                .child(text)
                .into_any_element(),
            SpanKind::ProperNoun if page == PageKind::Interests => div()
                .id(id)
                .group("idol-link")
                .relative()
                .whitespace_nowrap()
                .cursor_pointer()
                .text_color(rgb(COLOR_PROPER_NOUN))
                .hover(|this| this.underline())
                .on_click(cx.listener(|_, _, _, cx| {
                    cx.open_url(IDOL_WIKI_URL);
                }))
                .child(text)
                .child(self.render_link_tooltip(
                    "idol-link",
                    self.i18n().wikipedia_tooltip,
                    cx,
                ))
                .into_any_element(),
            SpanKind::ProperNoun => div()
                .whitespace_nowrap()
                .text_color(rgb(COLOR_PROPER_NOUN))
                .child(text)
                .into_any_element(),
            SpanKind::TechnicalTerm => div()
                .whitespace_nowrap()
                .text_color(rgb(COLOR_TECHNICAL_TERM))
                .child(text)
                .into_any_element(),
            SpanKind::ConnectorWord => div()
                .whitespace_nowrap()
                .text_color(rgb(COLOR_CONNECTOR_WORD))
                .child(text)
                .into_any_element(),
            SpanKind::Emphasis => div()
                .whitespace_nowrap()
                .italic()
                .text_color(rgb(COLOR_EMPHASIS))
                .child(text)
                .into_any_element(),
            SpanKind::GameName => div()
                .whitespace_nowrap()
                .italic()
                .text_color(rgb(COLOR_GAME_NAME))
                .child(text)
                .into_any_element(),
            SpanKind::Number => div()
                .whitespace_nowrap()
                .text_color(rgb(COLOR_NUMBER))
                .child(text)
                .into_any_element(),
            SpanKind::EmailLink => div()
                .id(id)
                .group("email-link")
                .relative()
                .whitespace_nowrap()
                .cursor_pointer()
                .text_color(rgb(COLOR_LINK))
                .underline()
                .on_click(cx.listener(|_, _, _, cx| {
                    cx.open_url(CONTACT_EMAIL_URL);
                }))
                .child(text)
                .child(self.render_link_tooltip(
                    "email-link",
                    self.i18n().send_email_tooltip,
                    cx,
                ))
                .into_any_element(),
            SpanKind::ContactLabel => div()
                .whitespace_nowrap()
                .px_1()
                .rounded_sm()
                .bg(cx.theme().secondary)
                .flex()
                .items_center()
                .gap_1()
                .child(
                    Icon::new(crate::icons::IconName::Folder)
                        .size_3()
                        .text_color(cx.theme().muted_foreground),
                )
                .child(div().text_color(cx.theme().foreground).child(text))
                .into_any_element(),
            SpanKind::LanguageLabel => div()
                .whitespace_nowrap()
                .px_1()
                .rounded_sm()
                .bg(cx.theme().secondary)
                .flex()
                .items_center()
                .gap_1()
                .child(div().text_color(cx.theme().foreground).child(text))
                .child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child("▶"),
                )
                .into_any_element(),
        }
    }
}
