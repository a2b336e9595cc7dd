#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use campusgate_core::{logging, PageConfig, ScreenSize};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::app::StartPage;

/// campusgate - Student account creation and login
#[derive(Parser, Debug)]
#[command(name = "campusgate-desktop")]
#[command(about = "campusgate - Student account creation and login")]
struct Args {
    /// Page to open first
    #[arg(short, long, value_enum, default_value_t = StartPage::CreateAccount)]
    page: StartPage,

    /// Document language attribute
    #[arg(long, default_value = "en")]
    lang: String,

    /// Screen size used for layout decisions, e.g. 390x844 (defaults to the monitor size)
    #[arg(long)]
    screen: Option<ScreenSize>,

    /// Background carousel image (repeatable; defaults to the bundled portraits)
    #[arg(long = "background-image")]
    background_images: Vec<String>,

    /// Log level for campusgate crates (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    logging::init(args.log_level.as_deref());

    let config = PageConfig::default()
        .with_language(args.lang)
        .with_background_images(args.background_images)
        .with_screen(args.screen);

    // Window sized like a laptop browser viewport
    let window_width = 1280.0;
    let window_height = 800.0;

    tracing::info!(
        page = ?args.page,
        lang = %config.language,
        images = config.background_images.len(),
        "Starting campusgate"
    );

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("campusgate")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .with_context(args.page)
        .launch(app::App);
}
