use campusgate_core::{MemorySessionStore, PageConfig, SessionMirror, Viewport};
use clap::ValueEnum;
use dioxus::prelude::*;

use crate::context::detect_screen;
use crate::pages::{CreateAccount, ForgetPassword, Login, Otp};
use crate::theme::{root_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Redirects to the page chosen on the command line
/// - `/create-account` - Three-card sign-up wizard
/// - `/login` - Email and password card
/// - `/forget-password` - Password recovery card
/// - `/otp` - One-time-code verification boxes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Start {},
    #[route("/create-account")]
    CreateAccount {},
    #[route("/login")]
    Login {},
    #[route("/forget-password")]
    ForgetPassword {},
    #[route("/otp")]
    Otp {},
}

/// Page shown at startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    #[default]
    CreateAccount,
    Login,
    ForgetPassword,
    Otp,
}

impl StartPage {
    pub fn route(&self) -> Route {
        match self {
            StartPage::CreateAccount => Route::CreateAccount {},
            StartPage::Login => Route::Login {},
            StartPage::ForgetPassword => Route::ForgetPassword {},
            StartPage::Otp => Route::Otp {},
        }
    }
}

/// Root application component.
///
/// Computes the viewport once, provides it and the session mirror as
/// context, and renders global styles and routing.
#[component]
pub fn App() -> Element {
    let config = use_context::<PageConfig>();
    let window = dioxus::desktop::use_window();

    let viewport = use_hook(|| {
        let screen = config
            .screen_override
            .unwrap_or_else(|| detect_screen(&window));
        let viewport = Viewport::from_screen(screen);
        tracing::info!(
            %screen,
            scale = viewport.scale,
            mobile = viewport.is_mobile(),
            "viewport initialized"
        );
        viewport
    });

    use_context_provider(|| viewport);
    use_context_provider(|| SessionMirror::new(MemorySessionStore::shared()));

    let language = config.language.clone();
    use_effect(move || {
        let script = format!("document.documentElement.lang = {language:?};");
        spawn(async move {
            if let Err(err) = document::eval(&script).await {
                tracing::warn!(?err, "could not set document language");
            }
        });
    });

    let root = root_css(&config, &viewport);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {root} }
        Router::<Route> {}
    }
}

/// Redirects to the configured start page.
#[component]
fn Start() -> Element {
    let navigator = use_navigator();
    let start = use_context::<StartPage>();

    use_effect(move || {
        navigator.replace(start.route());
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_page_routes() {
        assert!(StartPage::default().route() == Route::CreateAccount {});
        assert!(StartPage::Otp.route() == Route::Otp {});
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(StartPage::ForgetPassword.route().to_string(), "/forget-password");
    }
}
