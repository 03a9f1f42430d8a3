mod accounts;
mod app;
mod components;
mod dialog;
mod keyboard;
mod logger;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::tao::window::Icon;
use dioxus::desktop::{Config, WindowBuilder};

const WINDOW_WIDTH: f64 = 520.0;
const WINDOW_HEIGHT: f64 = 560.0;

fn load_icon() -> Option<Icon> {
    let icon_bytes = include_bytes!("../icons/icon.png");
    let image = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).ok()
}

fn main() {
    logger::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let window_builder = WindowBuilder::new()
        .with_title("User Accounts")
        .with_window_icon(load_icon())
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_min_inner_size(LogicalSize::new(360.0, 400.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .launch(app::App);
}
