use dioxus::prelude::*;

/// Modal spinner covering the shell while the global loading flag is set.
///
/// The overlay swallows pointer input for everything beneath it. It does not
/// queue or cancel anything.
#[component]
pub fn LoadingOverlay(
    visible: bool,
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "loading-overlay",
            role: "alertdialog",
            "aria-modal": "true",
            "aria-busy": "true",
            onclick: move |evt| evt.stop_propagation(),
            div { class: "loading-spinner" }
            p { class: "loading-message", "{message}" }
        }
    }
}
