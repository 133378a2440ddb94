//! Window setup and the GPUI application loop.

use crate::config::Config;
use crate::ui::calculator::CalculatorView;
use gpui::{
    AnyView, App, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;

const WINDOW_TITLE: &str = "Calculator";

/// Open the calculator window and run until it is closed.
pub fn run(config: Config) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let window_size = size(px(config.window.width), px(config.window.height));
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let display_options = config.display;
        let opened = cx.open_window(options, |window, cx| {
            let view: AnyView = cx.new(|_| CalculatorView::new(display_options)).into();
            cx.new(|cx| Root::new(view, window, cx))
        });

        if let Err(err) = opened {
            tracing::error!("Failed to open calculator window: {err:#}");
            cx.quit();
            return;
        }

        tracing::info!(
            width = config.window.width,
            height = config.window.height,
            "Calculator window opened"
        );

        cx.on_window_closed(|cx| cx.quit()).detach();
        cx.activate(true);
    });
}
