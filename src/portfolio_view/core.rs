impl PortfolioView {
    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    fn set_language(&mut self, language: Language, cx: &mut Context<Self>) {
        if self.language == language {
            return;
        }
        self.language = language;
        // The text changed, so every cached wrap width is stale.
        self.reflow_cache = None;
        configure_app_menus(cx, self.i18n());
        cx.notify();
    }

    fn toggle_section(&mut self, section: SectionKind, cx: &mut Context<Self>) {
        if !self.expanded_sections.remove(&section) {
            self.expanded_sections.insert(section);
        }
        cx.notify();
    }

    fn close_language_menu(&mut self, cx: &mut Context<Self>) {
        if self.lang_menu != LangMenuState::Closed {
            self.lang_menu = LangMenuState::Closed;
            cx.notify();
        }
    }

    // The Games entry stays highlighted while one of its project pages is
    // in front.
    fn nav_item_active(&self, page: PageKind) -> bool {
        let active = self.session.active();
        if active == page {
            return true;
        }
        page == PageKind::Games
            && matches!(active, PageKind::ThreeSins | PageKind::SmileRecovery)
    }

    fn estimated_pane_width(&self, window: &Window) -> f32 {
        let window_width = f32::from(window.bounds().size.width);
        (window_width - self.sidebar_width - ESTIMATE_PADDING)
            .max(reflow::MIN_ESTIMATED_WIDTH)
    }

    /// Rewraps the active prose page when the page, language or pane width
    /// changed since the cached wrap.
    fn ensure_reflowed_lines(&mut self, window: &Window) {
        let page = self.session.active();
        if !page.reflow_enabled() {
            self.reflow_cache = None;
            return;
        }

        let usable_width = reflow::usable_text_width(self.estimated_pane_width(window));
        let fresh = self.reflow_cache.as_ref().is_some_and(|cache| {
            cache.page == page
                && cache.language == self.language
                && cache.usable_width == usable_width
        });
        if fresh {
            return;
        }

        let logical = content::page_lines(page, self.language);
        let mut measure = WindowTextMeasure::new(window, EDITOR_FONT_FAMILY);
        let lines = reflow::reflow(logical, usable_width, EDITOR_FONT_SIZE, &mut measure);
        self.reflow_cache = Some(ReflowCache {
            page,
            language: self.language,
            usable_width,
            lines,
        });
    }

    fn image(&self, path: &str) -> Option<Arc<RenderImage>> {
        match self.images.get(path) {
            Some(ImageSlot::Ready(image)) => Some(image.clone()),
            _ => None,
        }
    }

    /// Fire-and-forget batch load of every referenced image. Each load is
    /// independent; failures are logged and the slot degrades to a
    /// placeholder.
    fn preload_images(&mut self, cx: &mut Context<Self>) {
        for path in content::PRELOAD_IMAGES
            .into_iter()
            .chain(content::CONTACT_ICONS)
        {
            self.load_image(path, cx);
        }
    }

    fn load_image(&mut self, path: &'static str, cx: &mut Context<Self>) {
        if self.images.contains_key(path) {
            return;
        }
        self.images.insert(path, ImageSlot::Loading);

        cx.spawn(async move |view, cx| {
            let loaded = cx
                .background_executor()
                .spawn(async move { decode_image_asset(path) })
                .await;

            let _ = view.update(cx, |this, cx| {
                match loaded {
                    Ok(image) => {
                        this.images.insert(path, ImageSlot::Ready(image));
                    }
                    Err(err) => {
                        crate::debug_log!("[images] failed to load {}: {:#}", path, err);
                        this.images.insert(path, ImageSlot::Failed);
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn open_logs_directory(&self) {
        let Some(log_path) = crate::logger::log_file_path() else {
            return;
        };
        let Some(log_dir) = log_path.parent() else {
            return;
        };
        if std::fs::create_dir_all(log_dir).is_err() {
            return;
        }

        #[cfg(target_os = "macos")]
        let result = std::process::Command::new("open").arg(log_dir).status();
        #[cfg(target_os = "windows")]
        let result = std::process::Command::new("explorer").arg(log_dir).status();
        #[cfg(all(unix, not(target_os = "macos")))]
        let result = std::process::Command::new("xdg-open").arg(log_dir).status();

        if let Err(err) = result {
            crate::debug_log!("[logs] failed to open {}: {}", log_dir.display(), err);
        }
    }
}

fn decode_image_asset(path: &str) -> anyhow::Result<Arc<RenderImage>> {
    let resolved = crate::assets::resolve_asset(path)
        .ok_or_else(|| anyhow!("asset not found: {path}"))?;
    let bytes = std::fs::read(&resolved)
        .with_context(|| format!("read {}", resolved.display()))?;
    let rgba = image::load_from_memory(&bytes)
        .with_context(|| format!("decode {}", resolved.display()))?
        .into_rgba8();

    let (width, height) = rgba.dimensions();
    let mut bytes = rgba.into_raw();
    // gpui samples render images as BGRA.
    for pixel in bytes.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    let buffer = image::RgbaImage::from_raw(width, height, bytes)
        .ok_or_else(|| anyhow!("cannot rebuild image buffer {}x{}", width, height))?;

    Ok(Arc::new(RenderImage::new([image::Frame::new(buffer)])))
}
