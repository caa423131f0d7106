use dioxus::prelude::*;
use vitrine_core::PreferenceStore;

use crate::components::NavBar;
use crate::context::{get_data_dir, open_preferences, use_theme};
use crate::pages::{Gallery, Menu, Portfolio};
use crate::theme::GLOBAL_STYLES;
use crate::StartPage;

/// Application routes.
///
/// - `/` - Restaurant home with the filterable menu
/// - `/gallery` - Photo gallery with lightbox
/// - `/portfolio` - Designer portfolio with filterable projects
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Menu {},
        #[route("/gallery")]
        Gallery {},
        #[route("/portfolio")]
        Portfolio {},
}

impl From<StartPage> for Route {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Menu => Route::Menu {},
            StartPage::Gallery => Route::Gallery {},
            StartPage::Portfolio => Route::Portfolio {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, the preference store, animation timing and routing.
#[component]
pub fn App() -> Element {
    let prefs: Signal<PreferenceStore> = use_signal(|| open_preferences(&get_data_dir()));
    use_context_provider(|| prefs);
    use_context_provider(crate::get_timing);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Navbar, themed page wrapper and the routed page.
#[component]
fn SiteLayout() -> Element {
    let navigator = use_navigator();
    let theme = use_theme();

    // Honour --page once, on first mount
    use_effect(move || {
        let start = Route::from(crate::get_start_page());
        if start != (Route::Menu {}) {
            navigator.replace(start);
        }
    });

    rsx! {
        div { class: "site theme-{theme}",
            NavBar { brand: "Himalayan Momo House" }
            main { class: "page", Outlet::<Route> {} }
            footer { class: "footer",
                p { "\u{00A9} Himalayan Momo House" }
            }
        }
    }
}
