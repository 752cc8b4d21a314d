impl PortfolioView {
    fn open_page(&mut self, page: PageKind, cx: &mut Context<Self>) {
        // Reopening a project page restarts its carousel.
        if matches!(page, PageKind::ThreeSins | PageKind::SmileRecovery) {
            self.gallery_index.insert(page, 0);
        }
        if self.session.open(page) {
            self.editor_scroll.set_offset(Point::default());
            self.scroll_tab_bar_to_active();
            cx.notify();
        }
    }

    fn activate_page(&mut self, page: PageKind, cx: &mut Context<Self>) {
        if self.session.activate(page) {
            self.editor_scroll.set_offset(Point::default());
            self.scroll_tab_bar_to_active();
            cx.notify();
        }
    }

    fn close_page(&mut self, page: PageKind, cx: &mut Context<Self>) {
        if self.session.close(page) {
            self.editor_scroll.set_offset(Point::default());
            self.scroll_tab_bar_to_active();
            cx.notify();
        }
    }

    fn close_active_page(&mut self, cx: &mut Context<Self>) {
        self.close_page(self.session.active(), cx);
    }

    fn activate_tab_by_offset(&mut self, offset: isize, cx: &mut Context<Self>) {
        let len = self.session.tabs().len();
        if len < 2 {
            return;
        }
        let current = self
            .session
            .index_of(self.session.active())
            .unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(len as isize) as usize;
        let page = self.session.tabs()[next];
        self.activate_page(page, cx);
    }

    fn activate_tab_by_index(&mut self, index: usize, cx: &mut Context<Self>) {
        let len = self.session.tabs().len();
        if len == 0 {
            return;
        }
        let page = self.session.tabs()[index.min(len - 1)];
        self.activate_page(page, cx);
    }

    fn scroll_tab_bar_to_active(&self) {
        if let Some(index) = self.session.index_of(self.session.active()) {
            self.tab_bar_scroll.scroll_to_item(index);
        }
    }

    fn handle_key_down(
        &mut self,
        event: &gpui::KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let is_primary_modifier = event.keystroke.modifiers.secondary();
        let key = event.keystroke.key.as_str();

        if key == "escape" {
            if self.lang_menu != LangMenuState::Closed {
                self.close_language_menu(cx);
                cx.stop_propagation();
            }
            return;
        }

        // Handle Cmd/Ctrl+W to close the current tab
        if key == "w" && is_primary_modifier {
            self.close_active_page(cx);
            cx.stop_propagation();
        }
        // Handle Cmd/Ctrl+Shift+[ to switch to the previous tab
        else if key == "[" && is_primary_modifier && event.keystroke.modifiers.shift {
            self.activate_tab_by_offset(-1, cx);
            cx.stop_propagation();
        }
        // Handle Cmd/Ctrl+Shift+] to switch to the next tab
        else if key == "]" && is_primary_modifier && event.keystroke.modifiers.shift {
            self.activate_tab_by_offset(1, cx);
            cx.stop_propagation();
        }
        // Handle Cmd/Ctrl+1..9 to jump between tabs
        else if is_primary_modifier {
            if let Some(digit) = key.chars().next().and_then(|ch| ch.to_digit(10)) {
                if digit >= 1 && key.len() == 1 {
                    let index = if digit == 9 {
                        usize::MAX
                    } else {
                        (digit - 1) as usize
                    };
                    self.activate_tab_by_index(index, cx);
                    cx.stop_propagation();
                }
            }
        }
    }
}
