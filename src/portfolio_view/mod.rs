mod measure;

use crate::content::{self, PageKind, SectionKind};
use crate::highlight::{self, SpanKind};
use crate::i18n::{I18n, Language};
use crate::reflow;
use crate::tabs::{TabSession, TabSlot};
use crate::{DisableLoggingMenu, EnableLoggingMenu, OpenLogsMenu, configure_app_menus};
use anyhow::{Context as _, anyhow};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{button::*, *};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

include!("types.rs");
include!("constants.rs");

use self::measure::WindowTextMeasure;

pub struct PortfolioView {
    focus_handle: FocusHandle,
    language: Language,
    session: TabSession,
    expanded_sections: HashSet<SectionKind>,
    sidebar_width: f32,
    sidebar_resizing: bool,
    lang_menu: LangMenuState,
    selected_code_language: Option<&'static str>,
    // Carousel slot per project page; reset when the page is (re)opened.
    gallery_index: HashMap<PageKind, usize>,
    hovered_tab: Option<PageKind>,
    hovered_nav_button: Option<CarouselSide>,
    // 拖动相关状态
    drag_mouse_position: Option<Point<Pixels>>,
    pending_drag_start: Option<(usize, Point<Pixels>)>,
    tab_bounds: Vec<Option<Bounds<Pixels>>>,
    tab_bar_scroll: ScrollHandle,
    editor_scroll: ScrollHandle,
    sidebar_scroll: ScrollHandle,
    reflow_cache: Option<ReflowCache>,
    images: HashMap<&'static str, ImageSlot>,
    needs_initial_focus: bool,
}

impl PortfolioView {
    pub fn new(language: Language, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            focus_handle: cx.focus_handle(),
            language,
            session: TabSession::new(),
            expanded_sections: HashSet::from([SectionKind::Home]),
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            sidebar_resizing: false,
            lang_menu: LangMenuState::Closed,
            selected_code_language: None,
            gallery_index: HashMap::new(),
            hovered_tab: None,
            hovered_nav_button: None,
            drag_mouse_position: None,
            pending_drag_start: None,
            tab_bounds: Vec::new(),
            tab_bar_scroll: ScrollHandle::new(),
            editor_scroll: ScrollHandle::new(),
            sidebar_scroll: ScrollHandle::new(),
            reflow_cache: None,
            images: HashMap::new(),
            needs_initial_focus: true,
        };

        view.preload_images(cx);
        view
    }
}

include!("core.rs");
include!("tab_actions.rs");
include!("interactions.rs");
include!("top_bar.rs");
include!("sidebar.rs");
include!("editor.rs");
include!("gallery.rs");

impl Focusable for PortfolioView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for PortfolioView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            cx.focus_self(window);
        }

        window.set_rem_size(cx.theme().font_size);

        // Page, language and pane width all key the cache; rendering every
        // frame means a resize recomputes at most once per display refresh.
        self.ensure_reflowed_lines(window);

        let lang_menu = self.render_language_menu(cx);
        let drag_tab_preview = self.render_drag_tab_preview(cx);
        let i18n = self.i18n();

        div()
            .size_full()
            .on_action(cx.listener(|this, _: &EnableLoggingMenu, _, cx| {
                if crate::logger::enable_file_logging() {
                    configure_app_menus(cx, this.i18n());
                }
            }))
            .on_action(cx.listener(|this, _: &DisableLoggingMenu, _, cx| {
                crate::logger::disable_file_logging();
                configure_app_menus(cx, this.i18n());
            }))
            .on_action(cx.listener(|this, _: &OpenLogsMenu, _, _| {
                this.open_logs_directory();
            }))
            .child(
                div()
                    .v_flex()
                    .size_full()
                    .bg(cx.theme().background)
                    .relative()
                    .track_focus(&self.focus_handle)
                    .capture_key_down(cx.listener(
                        |this, event: &gpui::KeyDownEvent, window, cx| {
                            this.handle_key_down(event, window, cx);
                        },
                    ))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, window, cx| {
                            this.close_language_menu(cx);
                            window.focus(&this.focus_handle);
                        }),
                    )
                    .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, window, cx| {
                        this.update_drag_mouse_position(event.position, cx);
                        this.update_sidebar_resize(event.position, window, cx);
                    }))
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| {
                            this.finish_sidebar_resize(cx);
                            this.finish_tab_drag(cx);
                        }),
                    )
                    .child(self.render_top_bar(cx))
                    .child(
                        div()
                            .flex_1()
                            .min_h(px(0.))
                            .w_full()
                            .flex()
                            .overflow_hidden()
                            .child(self.render_sidebar(cx))
                            .child(
                                div()
                                    .v_flex()
                                    .h_full()
                                    .flex_1()
                                    .overflow_hidden()
                                    .child(self.render_tab_bar(cx))
                                    .child(self.render_editor(cx)),
                            ),
                    )
                    .child(
                        div()
                            .h(px(STATUS_BAR_HEIGHT))
                            .w_full()
                            .flex_shrink_0()
                            .border_t_1()
                            .border_color(cx.theme().border)
                            .bg(cx.theme().secondary)
                            .flex()
                            .items_center()
                            .px_3()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!(
                                        "{}: {}",
                                        i18n.last_updated, i18n.last_updated_date
                                    )),
                            ),
                    )
                    .when(drag_tab_preview.is_some(), |this| {
                        this.child(drag_tab_preview.unwrap())
                    })
                    .when(lang_menu.is_some(), |this| this.child(lang_menu.unwrap())),
            )
    }
}
