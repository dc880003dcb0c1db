use dioxus::prelude::*;

/// Top bar of the shell. Draws a drop shadow once the content below it has
/// scrolled.
#[component]
pub fn Navbar(
    #[props(default = false)] scrolled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "navbar", None, false),
        Attribute::new(
            "data-scrolled",
            if scrolled { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn NavbarTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "navbar-title", {children} }
    }
}

/// Pushes following navbar children to the right edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
