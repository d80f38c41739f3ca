//! simulador-ui: desktop app for the Simulador Societário
//!
//! GPUI shell with five pages. Only the partner setup page has behavior.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::Root;
use simulador_core::SimuladorConfig;
use simulador_paths::SimuladorPaths;

mod assets;
mod components;
mod state;
mod theme;
mod theme_bridge;
mod views;

use state::AppState;
use views::MainView;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut startup_errors = Vec::new();
    let config = match SimuladorConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(event = "ui.config.load_failed", error = %e);
            startup_errors.push(e.to_string());
            SimuladorConfig::default()
        }
    };

    let paths = SimuladorPaths::resolve()
        .inspect_err(|e| tracing::warn!(event = "ui.paths.resolve_failed", error = %e))
        .ok();
    let logo = assets::resolve_logo(&config.ui, paths.as_ref());

    Application::new().run(move |cx: &mut App| {
        // Initialize gpui-component (must be first)
        gpui_component::init(cx);

        theme_bridge::apply_joicont_theme(cx);

        let state = AppState::new(config, startup_errors);
        let bounds = Bounds::centered(None, size(px(1200.0), px(800.0)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("Simulador Societário")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| MainView::new(state, logo, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .expect("Failed to open window");
    });
}
