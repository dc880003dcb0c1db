use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::User;
use shared_ui::{Navbar, NavbarSpacer, NavbarTitle, Separator};

use super::session_menu::SessionMenu;

/// Top bar: sidebar toggle, page title and the profile menu.
#[component]
pub fn Header(
    title: String,
    scrolled: bool,
    mut sidebar_open: Signal<bool>,
    user: Option<User>,
) -> Element {
    rsx! {
        Navbar { scrolled,
            button {
                class: "sidebar-trigger",
                r#type: "button",
                "aria-label": "Toggle sidebar",
                "aria-expanded": if sidebar_open() { "true" } else { "false" },
                onclick: move |_| {
                    let next = !sidebar_open();
                    tracing::debug!(open = next, "sidebar toggled");
                    sidebar_open.set(next);
                },
                Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
            }

            Separator { horizontal: false }

            NavbarTitle { "{title}" }

            NavbarSpacer {}

            SessionMenu { user }
        }
    }
}
