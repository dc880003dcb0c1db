use dioxus::prelude::*;
use shared_types::ShellConfig;

use crate::auth::use_ui_store;
use crate::routes::Route;

/// Landing page after sign-out. Credential entry is handled by the
/// session service, so this page only hands the user back to it.
#[component]
pub fn Login() -> Element {
    let config: ShellConfig = use_context();
    let store = use_ui_store();
    let sign_in_url = config.endpoint("auth/login");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "{config.app_name}" }
                if store.is_authenticated() {
                    p { "You are already signed in." }
                    Link { to: Route::Dashboard {}, class: "login-link", "Go to dashboard" }
                } else {
                    p { "You have been signed out." }
                    a { class: "login-link", href: "{sign_in_url}", "Sign in" }
                }
            }
        }
    }
}
