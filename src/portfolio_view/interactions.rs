impl PortfolioView {
    fn record_tab_bounds(&mut self, index: usize, bounds: Bounds<Pixels>) {
        if let Some(slot) = self.tab_bounds.get_mut(index) {
            *slot = Some(bounds);
        }
    }

    // Left..right x ranges of the leftmost and rightmost tabs recorded at
    // paint time. Mid-drag the display order can differ from the committed
    // order, so take the extremes rather than indices 0 and len-1.
    fn tab_edge_bounds(&self) -> Option<((f32, f32), (f32, f32))> {
        let mut first: Option<(f32, f32)> = None;
        let mut last: Option<(f32, f32)> = None;
        for bounds in self.tab_bounds.iter().flatten() {
            let left = f32::from(bounds.origin.x);
            let range = (left, left + f32::from(bounds.size.width));
            if first.is_none_or(|current: (f32, f32)| range.0 < current.0) {
                first = Some(range);
            }
            if last.is_none_or(|current: (f32, f32)| range.1 > current.1) {
                last = Some(range);
            }
        }
        Some((first?, last?))
    }

    fn pointer_over_any_tab(&self, pointer_x: f32) -> bool {
        self.tab_bounds.iter().flatten().any(|bounds| {
            let left = f32::from(bounds.origin.x);
            pointer_x >= left && pointer_x <= left + f32::from(bounds.size.width)
        })
    }

    fn maybe_start_pending_tab_drag(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        let Some((source_index, start_position)) = self.pending_drag_start else {
            return;
        };
        if self.session.is_dragging() {
            return;
        }

        let dx = f32::from(position.x) - f32::from(start_position.x);
        let dy = f32::from(position.y) - f32::from(start_position.y);
        let threshold_sq = TAB_DRAG_START_DISTANCE * TAB_DRAG_START_DISTANCE;
        if dx * dx + dy * dy < threshold_sq {
            return;
        }

        self.pending_drag_start = None;
        if self.session.begin_drag(source_index) {
            self.drag_mouse_position = Some(position);
            self.scroll_tab_bar_to_active();
            cx.notify();
        }
    }

    fn update_drag_mouse_position(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.maybe_start_pending_tab_drag(position, cx);
        if self.session.is_dragging() && self.drag_mouse_position != Some(position) {
            self.drag_mouse_position = Some(position);
            cx.notify();
        }
    }

    fn render_drag_tab_preview(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let source = self.session.drag_source()?;
        let position = self.drag_mouse_position?;
        let page = *self.session.tabs().get(source)?;
        let label = page.label(self.i18n());

        let x: f32 = position.x.into();
        let y: f32 = position.y.into();

        Some(
            div()
                .id("drag-tab-preview")
                .absolute()
                // Keep the pointer outside the preview hit area.
                .left(px(x + 6.0))
                .top(px(y + 6.0))
                .h(px(28.))
                .px_2()
                .flex()
                .items_center()
                .rounded_md()
                .border_1()
                .border_color(cx.theme().primary.opacity(0.65))
                .bg(cx.theme().secondary.opacity(0.65))
                .shadow_lg()
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().foreground.opacity(0.95))
                        .child(label),
                )
                .into_any_element(),
        )
    }

    fn update_tab_drag_over(
        &mut self,
        index: usize,
        position: Point<Pixels>,
        cx: &mut Context<Self>,
    ) {
        if !self.session.is_dragging() {
            return;
        }
        let (to_start, to_end) = match self.tab_bounds.get(index).copied().flatten() {
            Some(bounds) => {
                let left = f32::from(bounds.origin.x);
                let right = left + f32::from(bounds.size.width);
                crate::tabs::edge_zones(
                    index,
                    self.session.tabs().len(),
                    f32::from(position.x),
                    (left, right),
                )
            }
            None => (false, false),
        };
        if self.session.drag_over(index, to_start, to_end) {
            cx.notify();
        }
    }

    fn update_container_drag_over(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        if !self.session.is_dragging() {
            return;
        }
        let pointer_x = f32::from(position.x);
        if self.pointer_over_any_tab(pointer_x) {
            // The tab's own handler owns this hover.
            return;
        }
        let Some((first, last)) = self.tab_edge_bounds() else {
            return;
        };
        if self.session.drag_over_container(pointer_x, first, last) {
            cx.notify();
        }
    }

    fn drop_on_tab(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.pending_drag_start.take().is_some() {
            cx.notify();
        }
        if !self.session.is_dragging() {
            return;
        }
        self.session.drop(index);
        self.drag_mouse_position = None;
        cx.notify();
    }

    fn drop_on_container(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        if self.pending_drag_start.take().is_some() {
            cx.notify();
        }
        if !self.session.is_dragging() {
            return;
        }
        let pointer_x = f32::from(position.x);
        let Some((first, last)) = self.tab_edge_bounds() else {
            self.session.end_drag();
            cx.notify();
            return;
        };
        let target = self.session.container_drop_target(pointer_x, first, last);
        self.session.drop(target);
        self.drag_mouse_position = None;
        cx.notify();
    }

    /// A release that never reached the tab strip cancels the gesture
    /// without reordering.
    fn finish_tab_drag(&mut self, cx: &mut Context<Self>) {
        if self.pending_drag_start.take().is_some() {
            cx.notify();
        }
        if self.session.end_drag() {
            self.drag_mouse_position = None;
            cx.notify();
        }
    }

    fn update_sidebar_resize(
        &mut self,
        position: Point<Pixels>,
        window: &Window,
        cx: &mut Context<Self>,
    ) {
        if !self.sidebar_resizing {
            return;
        }
        let max_width =
            (f32::from(window.bounds().size.width) * SIDEBAR_MAX_FRACTION).max(SIDEBAR_MIN_WIDTH);
        let next = f32::from(position.x).clamp(SIDEBAR_MIN_WIDTH, max_width);
        if next != self.sidebar_width {
            self.sidebar_width = next;
            cx.notify();
        }
    }

    fn finish_sidebar_resize(&mut self, cx: &mut Context<Self>) {
        if self.sidebar_resizing {
            self.sidebar_resizing = false;
            cx.notify();
        }
    }

    pub(super) fn render_tab_bar(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let slots = self.session.preview();
        let tab_count = self.session.tabs().len();
        self.tab_bounds = vec![None; tab_count];
        let active = self.session.active();
        let drag_in_progress = self.session.is_dragging();
        let drag_source = self.session.drag_source();
        let i18n = self.i18n();

        div()
            .h(px(TAB_BAR_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .border_b_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .flex()
            .items_center()
            .px_3()
            .child(
                h_flex()
                    .id("tab-scroll")
                    .h_full()
                    .flex_1()
                    .overflow_x_scroll()
                    .track_scroll(&self.tab_bar_scroll)
                    .items_center()
                    .gap_1()
                    .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _, cx| {
                        this.update_container_drag_over(event.position, cx);
                    }))
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(|this, event: &MouseUpEvent, _, cx| {
                            this.drop_on_container(event.position, cx);
                        }),
                    )
                    .children({
                        let mut elements = Vec::new();

                        for (slot_index, slot) in slots.iter().enumerate() {
                            let page = match slot {
                                TabSlot::Placeholder => {
                                    // The gap where the dragged tab will land.
                                    elements.push(
                                        div()
                                            .id(("tab-placeholder", slot_index))
                                            .w(px(56.))
                                            .h(px(24.))
                                            .flex_shrink_0()
                                            .rounded_md()
                                            .border_1()
                                            .border_color(cx.theme().primary.opacity(0.4))
                                            .bg(cx.theme().primary.opacity(0.12))
                                            .into_any_element(),
                                    );
                                    continue;
                                }
                                TabSlot::Tab(page) => *page,
                            };

                            let index = self.session.index_of(page).unwrap_or(0);
                            let is_active = active == page;
                            let is_drag_source = drag_source == Some(index);
                            let show_close_button = is_active || self.hovered_tab == Some(page);
                            let close_icon_color = if show_close_button {
                                cx.theme().muted_foreground
                            } else {
                                cx.theme().muted_foreground.opacity(0.0)
                            };
                            let label = page.label(i18n);

                            elements.push(
                                div()
                                    .id(("tab", index))
                                    .h(px(28.))
                                    .px_2()
                                    .flex_shrink_0()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .rounded_md()
                                    .relative()
                                    .bg(cx.theme().secondary)
                                    .when(is_active, |this| this.bg(cx.theme().background))
                                    .when(!is_active, |this| {
                                        this.hover(|this| {
                                            this.bg(cx.theme().secondary.opacity(0.85))
                                        })
                                    })
                                    .when(is_drag_source, |this| {
                                        this.border_1()
                                            .border_color(cx.theme().primary)
                                            .bg(cx.theme().selection)
                                            .shadow_lg()
                                    })
                                    .on_hover({
                                        let view = cx.entity();
                                        move |hovered, _, cx| {
                                            let _ = view.update(cx, |this, cx| {
                                                if *hovered {
                                                    if this.hovered_tab != Some(page) {
                                                        this.hovered_tab = Some(page);
                                                        cx.notify();
                                                    }
                                                } else if this.hovered_tab == Some(page) {
                                                    this.hovered_tab = None;
                                                    cx.notify();
                                                }
                                            });
                                        }
                                    })
                                    .on_mouse_move(cx.listener(
                                        move |this, event: &MouseMoveEvent, _, cx| {
                                            this.update_drag_mouse_position(event.position, cx);
                                            this.update_tab_drag_over(index, event.position, cx);
                                        },
                                    ))
                                    .on_mouse_down(
                                        MouseButton::Left,
                                        cx.listener(move |this, event: &MouseDownEvent, _, cx| {
                                            if index < this.session.tabs().len() {
                                                this.pending_drag_start =
                                                    Some((index, event.position));
                                                cx.notify();
                                            }
                                        }),
                                    )
                                    .on_mouse_up(
                                        MouseButton::Left,
                                        cx.listener(move |this, _: &MouseUpEvent, _, cx| {
                                            this.drop_on_tab(index, cx);
                                        }),
                                    )
                                    .child({
                                        let view = cx.entity();
                                        canvas(
                                            move |bounds, _, cx| {
                                                view.update(cx, |this, _| {
                                                    this.record_tab_bounds(index, bounds);
                                                });
                                            },
                                            |_, _, _, _| {},
                                        )
                                        .absolute()
                                        .size_full()
                                    })
                                    .child(
                                        div()
                                            .text_sm()
                                            .whitespace_nowrap()
                                            .text_color(if is_active || is_drag_source {
                                                cx.theme().foreground
                                            } else {
                                                cx.theme().muted_foreground
                                            })
                                            .child(label),
                                    )
                                    .child(
                                        Button::new(("close-tab", index))
                                            .xsmall()
                                            .ghost()
                                            .icon(
                                                Icon::new(crate::icons::IconName::WindowClose)
                                                    .size_3()
                                                    .text_color(close_icon_color),
                                            )
                                            .on_click(cx.listener(move |this, _, _, cx| {
                                                this.close_page(page, cx);
                                            })),
                                    )
                                    .on_click(cx.listener(move |this, _, _, cx| {
                                        if !this.session.is_dragging() {
                                            this.activate_page(page, cx);
                                        }
                                    }))
                                    .when(drag_in_progress, |this| this.cursor_grab())
                                    .when(!drag_in_progress, |this| this.cursor_pointer())
                                    .into_any_element(),
                            );
                        }

                        elements
                    }),
            )
    }
}
