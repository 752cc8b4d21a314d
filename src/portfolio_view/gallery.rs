impl PortfolioView {
    fn set_gallery_index(&mut self, page: PageKind, index: usize, cx: &mut Context<Self>) {
        if self.gallery_index.get(&page) != Some(&index) {
            self.gallery_index.insert(page, index);
            cx.notify();
        }
    }

    fn render_asset_image(
        &self,
        path: &str,
        width: f32,
        height: f32,
        fit: ObjectFit,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match self.image(path) {
            Some(image) => img(image)
                .w(px(width))
                .h(px(height))
                .object_fit(fit)
                .rounded_sm()
                .into_any_element(),
            None => div()
                .w(px(width))
                .h(px(height))
                .rounded_sm()
                .border_1()
                .border_color(cx.theme().border)
                .bg(cx.theme().secondary)
                .overflow_hidden()
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_xs()
                        .whitespace_nowrap()
                        .text_color(cx.theme().muted_foreground)
                        .child(self.i18n().image_unavailable),
                )
                .into_any_element(),
        }
    }

    pub(super) fn render_skills_logo_row(
        &self,
        logos: &'static [content::Logo],
        caption: &'static str,
        line_num: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        div()
            .flex()
            .flex_row()
            .items_center()
            .w_full()
            .min_h(px(52.))
            .child(self.render_line_number(line_num, cx))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_3()
                    .children(logos.iter().enumerate().map(|(logo_index, logo)| {
                        let image = self.render_asset_image(
                            logo.path,
                            40.,
                            40.,
                            ObjectFit::Contain,
                            cx,
                        );
                        match logo.link {
                            Some(link) => div()
                                .id(("skills-logo", line_num * 10 + logo_index))
                                .cursor_pointer()
                                .on_click(cx.listener(move |_, _, _, cx| {
                                    cx.open_url(link);
                                }))
                                .child(image)
                                .into_any_element(),
                            None => image,
                        }
                    }))
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap_2()
                            .pl_3()
                            .child(div().w_px().h_6().bg(cx.theme().border))
                            .child(
                                div()
                                    .text_xs()
                                    .whitespace_nowrap()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(caption),
                            ),
                    ),
            )
            .into_any_element()
    }

    pub(super) fn render_project_cards(&self, cx: &mut Context<Self>) -> AnyElement {
        let i18n = self.i18n();

        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap_6()
            .p_4()
            .w_full()
            .children(
                content::PROJECT_CARDS
                    .into_iter()
                    .enumerate()
                    .map(|(card_index, card)| {
                        let info = content::project_info(card.page, self.language);
                        let role = info.map(|info| info.role).unwrap_or_default();
                        let title =
                            format!("{} - {}", card.jam_title, card.page.label(i18n));

                        div()
                            .id(("project-card", card_index))
                            .v_flex()
                            .w(px(340.))
                            .gap_2()
                            .p_2()
                            .rounded_md()
                            .border_1()
                            .border_color(cx.theme().border)
                            .hover(|this| this.border_color(cx.theme().primary))
                            .cursor_pointer()
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.open_page(card.page, cx);
                            }))
                            .child(self.render_asset_image(
                                card.cover,
                                320.,
                                180.,
                                ObjectFit::Cover,
                                cx,
                            ))
                            .child(
                                div()
                                    .text_sm()
                                    .font_bold()
                                    .text_color(cx.theme().foreground)
                                    .child(title),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(role),
                                    )
                                    .child(
                                        div()
                                            .flex()
                                            .flex_row()
                                            .items_center()
                                            .gap_1()
                                            .child(self.render_asset_image(
                                                "images/tech-logos/Unity.png",
                                                16.,
                                                16.,
                                                ObjectFit::Contain,
                                                cx,
                                            ))
                                            .child(self.render_asset_image(
                                                "images/tech-logos/Csharp.png",
                                                16.,
                                                16.,
                                                ObjectFit::Contain,
                                                cx,
                                            )),
                                    ),
                            )
                            .when(card.award, |this| {
                                this.child(
                                    div()
                                        .flex()
                                        .flex_row()
                                        .items_center()
                                        .gap_1()
                                        .child(
                                            Icon::new(crate::icons::IconName::Trophy)
                                                .size_3()
                                                .text_color(rgb(COLOR_AWARD)),
                                        )
                                        .child(
                                            div()
                                                .text_xs()
                                                .text_color(rgb(COLOR_AWARD))
                                                .child(i18n.award_winning_badge),
                                        ),
                                )
                            })
                            .into_any_element()
                    }),
            )
            .into_any_element()
    }

    pub(super) fn render_project_media(
        &self,
        page: PageKind,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let Some(info) = content::project_info(page, self.language) else {
            return div().into_any_element();
        };
        let i18n = self.i18n();
        let media = info.media;
        let current = self
            .gallery_index
            .get(&page)
            .copied()
            .unwrap_or(0)
            .min(media.len() - 1);
        let prev = if current == 0 {
            media.len() - 1
        } else {
            current - 1
        };
        let next = if current == media.len() - 1 {
            0
        } else {
            current + 1
        };

        div()
            .v_flex()
            .w_full()
            .gap_4()
            .p_4()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_center()
                    .gap_3()
                    .child(self.render_carousel_preview(page, media[prev], prev, CarouselSide::Left, cx))
                    .child(self.render_carousel_main(page, media[current], prev, next, cx))
                    .child(self.render_carousel_preview(
                        page,
                        media[next],
                        next,
                        CarouselSide::Right,
                        cx,
                    )),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .children(media.iter().enumerate().map(|(slot_index, slot)| {
                        let active = slot_index == current;
                        div()
                            .id(("carousel-thumb", slot_index))
                            .relative()
                            .rounded_sm()
                            .border_2()
                            .border_color(if active {
                                cx.theme().primary
                            } else {
                                cx.theme().border
                            })
                            .cursor_pointer()
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.set_gallery_index(page, slot_index, cx);
                            }))
                            .child(self.render_asset_image(
                                slot.thumbnail(),
                                64.,
                                36.,
                                ObjectFit::Cover,
                                cx,
                            ))
                            .when(slot.is_video(), |this| {
                                this.child(
                                    div()
                                        .absolute()
                                        .top_0()
                                        .left_0()
                                        .right_0()
                                        .bottom_0()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .child(
                                            Icon::new(crate::icons::IconName::Play)
                                                .size_3()
                                                .text_color(cx.theme().foreground),
                                        ),
                                )
                            })
                            .into_any_element()
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_4()
                    .child(self.render_details_panel(info, i18n, cx))
                    .child(self.render_jam_panel(info, i18n, cx)),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_4()
                    .child(self.render_description_panel(info, i18n, cx))
                    .child(self.render_production_panel(info, i18n, cx)),
            )
            .into_any_element()
    }

    fn render_carousel_preview(
        &self,
        page: PageKind,
        slot: content::MediaSlot,
        target_index: usize,
        side: CarouselSide,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let highlighted = self.hovered_nav_button == Some(side);
        let id: (&'static str, usize) = match side {
            CarouselSide::Left => ("carousel-preview", 0),
            CarouselSide::Right => ("carousel-preview", 1),
        };

        div()
            .id(id)
            .cursor_pointer()
            .rounded_sm()
            .overflow_hidden()
            .opacity(if highlighted { 0.9 } else { 0.5 })
            .on_click(cx.listener(move |this, _, _, cx| {
                this.set_gallery_index(page, target_index, cx);
            }))
            .child(self.render_asset_image(slot.thumbnail(), 120., 68., ObjectFit::Cover, cx))
            .into_any_element()
    }

    fn render_carousel_main(
        &self,
        page: PageKind,
        slot: content::MediaSlot,
        prev: usize,
        next: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let i18n = self.i18n();
        let main: AnyElement = match slot {
            content::MediaSlot::Video { url, thumbnail } => div()
                .id("carousel-video")
                .relative()
                .cursor_pointer()
                .on_click(cx.listener(move |_, _, _, cx| {
                    // No embedded player; hand the trailer to the browser.
                    cx.open_url(url);
                }))
                .child(self.render_asset_image(thumbnail, 560., 315., ObjectFit::Cover, cx))
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .flex()
                        .flex_col()
                        .items_center()
                        .justify_center()
                        .gap_2()
                        .child(
                            Icon::new(crate::icons::IconName::Play)
                                .size_8()
                                .text_color(cx.theme().foreground),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(cx.theme().foreground.opacity(0.8))
                                .child(i18n.watch_video_hint),
                        ),
                )
                .into_any_element(),
            content::MediaSlot::Image { path } => self
                .render_asset_image(path, 560., 315., ObjectFit::Cover, cx)
                .into_any_element(),
        };

        div()
            .relative()
            .child(main)
            .child(self.render_carousel_nav_button(page, prev, CarouselSide::Left, cx))
            .child(self.render_carousel_nav_button(page, next, CarouselSide::Right, cx))
            .into_any_element()
    }

    fn render_carousel_nav_button(
        &self,
        page: PageKind,
        target_index: usize,
        side: CarouselSide,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let (id, icon): ((&'static str, usize), crate::icons::IconName) = match side {
            CarouselSide::Left => (("carousel-nav", 0), crate::icons::IconName::ChevronLeft),
            CarouselSide::Right => (("carousel-nav", 1), crate::icons::IconName::ChevronRight),
        };

        div()
            .id(id)
            .absolute()
            .top(px(140.))
            .map(|this| match side {
                CarouselSide::Left => this.left_2(),
                CarouselSide::Right => this.right_2(),
            })
            .w(px(32.))
            .h(px(32.))
            .rounded_full()
            .bg(cx.theme().background.opacity(0.7))
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .on_hover({
                let view = cx.entity();
                move |hovered, _, cx| {
                    let _ = view.update(cx, |this, cx| {
                        let next = if *hovered { Some(side) } else { None };
                        if this.hovered_nav_button != next {
                            this.hovered_nav_button = next;
                            cx.notify();
                        }
                    });
                }
            })
            .on_click(cx.listener(move |this, _, _, cx| {
                this.set_gallery_index(page, target_index, cx);
            }))
            .child(
                Icon::new(icon)
                    .size_4()
                    .text_color(cx.theme().foreground),
            )
            .into_any_element()
    }

    fn render_info_panel(
        &self,
        header: AnyElement,
        content: Vec<AnyElement>,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        div()
            .v_flex()
            .w(px(430.))
            .gap_2()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .child(header)
            .children(content)
            .into_any_element()
    }

    fn panel_header(&self, label: &'static str, cx: &mut Context<Self>) -> AnyElement {
        div()
            .text_sm()
            .font_bold()
            .text_color(cx.theme().foreground)
            .child(label)
            .into_any_element()
    }

    fn panel_row(
        &self,
        label: &'static str,
        value: &'static str,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        div()
            .flex()
            .flex_row()
            .gap_2()
            .text_sm()
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(label),
            )
            .child(div().text_color(cx.theme().foreground).child(value))
            .into_any_element()
    }

    fn render_details_panel(
        &self,
        info: content::ProjectInfo,
        i18n: I18n,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let title = self.session.active().label(i18n);
        let header = self.panel_header(i18n.panel_game_details, cx);
        let content = vec![
            self.panel_row(i18n.label_title, title, cx),
            self.panel_row(i18n.label_genre, info.genre, cx),
            self.panel_row(i18n.label_tags, info.tags, cx),
            self.panel_row(i18n.label_platform, info.platform, cx),
        ];
        self.render_info_panel(header, content, cx)
    }

    fn render_jam_panel(
        &self,
        info: content::ProjectInfo,
        i18n: I18n,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let header = div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .font_bold()
                    .text_color(cx.theme().foreground)
                    .child(info.jam_title),
            )
            .child(
                div()
                    .px_1()
                    .rounded_sm()
                    .bg(cx.theme().primary.opacity(0.2))
                    .text_xs()
                    .text_color(cx.theme().foreground)
                    .child(i18n.official_entry_badge),
            )
            .into_any_element();

        let project_page_url = info.project_page_url;
        let mut content = vec![
            self.panel_row(i18n.label_theme, info.theme, cx),
            div()
                .flex()
                .flex_row()
                .gap_2()
                .text_sm()
                .child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child(i18n.label_project_page),
                )
                .child(
                    div()
                        .id("project-page-link")
                        .cursor_pointer()
                        .text_color(rgb(COLOR_LINK))
                        .hover(|this| this.underline())
                        .on_click(cx.listener(move |_, _, _, cx| {
                            cx.open_url(project_page_url);
                        }))
                        .child(info.project_page_label),
                )
                .into_any_element(),
        ];
        if let Some(award_line) = info.award_line {
            content.push(
                div()
                    .id("award-news-link")
                    .text_xs()
                    .text_color(rgb(COLOR_AWARD))
                    .cursor_pointer()
                    .hover(|this| this.underline())
                    .on_click(cx.listener(|_, _, _, cx| {
                        cx.open_url(content::AWARD_NEWS_URL);
                    }))
                    .child(award_line)
                    .into_any_element(),
            );
        }
        self.render_info_panel(header, content, cx)
    }

    fn render_description_panel(
        &self,
        info: content::ProjectInfo,
        i18n: I18n,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let header = self.panel_header(i18n.panel_game_description, cx);
        let content = info
            .description
            .iter()
            .enumerate()
            .map(|(line_index, line)| {
                if line.is_empty() {
                    div().h_2().into_any_element()
                } else {
                    div()
                        .text_sm()
                        .text_color(cx.theme().foreground)
                        .when(line_index == 0, |this| {
                            this.italic().text_color(cx.theme().muted_foreground)
                        })
                        .child(*line)
                        .into_any_element()
                }
            })
            .collect();
        self.render_info_panel(header, content, cx)
    }

    fn render_production_panel(
        &self,
        info: content::ProjectInfo,
        i18n: I18n,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let header = self.panel_header(i18n.panel_production, cx);
        let content = vec![
            self.panel_row(i18n.label_team_size, info.team_size, cx),
            self.panel_row(i18n.label_her_role, info.role, cx),
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap_2()
                .text_sm()
                .child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child(i18n.label_tech_tools),
                )
                .child(self.render_asset_image(
                    "images/tech-logos/Unity.png",
                    18.,
                    18.,
                    ObjectFit::Contain,
                    cx,
                ))
                .child(self.render_asset_image(
                    "images/tech-logos/Csharp.png",
                    18.,
                    18.,
                    ObjectFit::Contain,
                    cx,
                ))
                .into_any_element(),
        ];
        self.render_info_panel(header, content, cx)
    }

    pub(super) fn render_contact_card(
        &self,
        entry: content::ContactEntry,
        line_num: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let url = entry.url;

        div()
            .flex()
            .flex_row()
            .items_start()
            .w_full()
            .min_h(px(EDITOR_LINE_HEIGHT))
            .child(self.render_line_number(line_num, cx))
            .child(
                div()
                    .id(("contact-card", line_num))
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_3()
                    .p_2()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|this| this.bg(cx.theme().secondary.opacity(0.85)))
                    .on_click(cx.listener(move |_, _, _, cx| {
                        cx.open_url(url);
                    }))
                    .child(self.render_asset_image(
                        entry.icon,
                        40.,
                        40.,
                        ObjectFit::Contain,
                        cx,
                    ))
                    .child(
                        div()
                            .v_flex()
                            .gap_1()
                            .child(
                                div()
                                    .text_sm()
                                    .font_bold()
                                    .text_color(rgb(COLOR_LINK))
                                    .child(entry.platform),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .items_center()
                                    .gap_2()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(cx.theme().foreground)
                                            .child(entry.account),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(COLOR_COMMENT))
                                            .child(entry.description),
                                    ),
                            ),
                    ),
            )
            .into_any_element()
    }
}
