use dioxus::prelude::*;
use shared_types::load_current_user;

mod auth;
mod config;
mod icons;
mod routes;
mod session;
use auth::UiStore;
use routes::Route;
use session::HttpSessionService;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(config::load);
    let session = use_context_provider(|| HttpSessionService::new(config.clone()));
    let mut store = use_context_provider(UiStore::new);

    // Resolve the signed-in user once; the store starts in the loading state
    // so the overlay covers the shell meanwhile.
    use_hook(move || {
        spawn(async move {
            let user = load_current_user(&session).await;
            store.set_user(user);
            store.set_loading(false);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
