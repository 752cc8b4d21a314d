#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

pub mod assets;
pub mod content;
pub mod highlight;
pub mod i18n;
pub mod icons;
pub mod logger;
mod portfolio_view;
pub mod reflow;
pub mod tabs;

use gpui::*;
use gpui_component::*;
use portfolio_view::PortfolioView;

gpui::actions!(
    folio,
    [EnableLoggingMenu, DisableLoggingMenu, OpenLogsMenu]
);

pub(crate) fn configure_app_menus(cx: &mut App, i18n: i18n::I18n) {
    let mut items = Vec::new();

    if logger::file_logging_enabled() {
        items.extend([
            MenuItem::action(i18n.open_logs_button, OpenLogsMenu),
            MenuItem::separator(),
            MenuItem::action(i18n.disable_logging_button, DisableLoggingMenu),
        ]);
    } else {
        items.push(MenuItem::action(
            i18n.enable_logging_button,
            EnableLoggingMenu,
        ));
    }

    cx.set_menus(vec![Menu {
        name: "Folio".into(),
        items,
    }]);
}

fn main() {
    logger::initialize();

    let app = Application::new().with_assets(icons::Assets);
    let language = i18n::Language::detect();
    let i18n = i18n::I18n::new(language);

    app.run(move |cx| {
        configure_app_menus(cx, i18n);

        gpui_component::init(cx);
        Theme::change(cx.window_appearance(), None, cx);

        #[cfg(target_os = "macos")]
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let window_options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("Folio".into()),
                ..TitlebarOptions::default()
            }),
            ..WindowOptions::default()
        };

        if let Err(err) = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| PortfolioView::new(language, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        }) {
            crate::debug_log!("[window] failed to open main window: {}", err);
        }

        cx.activate(true);
    });
}
