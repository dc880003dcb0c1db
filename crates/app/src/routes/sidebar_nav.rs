use dioxus::prelude::*;
use shared_types::{navigation_for, Navigate, Role};
use shared_ui::{SidebarMenu, SidebarMenuButton, SidebarMenuItem};

use crate::icons::NavIconGlyph;
use crate::session::RouterNavigator;

/// Navigation entries visible to `role`, with the one matching
/// `current_path` marked active.
#[component]
pub fn NavList(role: Option<Role>, current_path: String) -> Element {
    let items = navigation_for(role);

    rsx! {
        SidebarMenu {
            for item in items {
                SidebarMenuItem { key: "{item.path}",
                    SidebarMenuButton {
                        active: item.is_active(&current_path),
                        on_select: move |_| RouterNavigator.navigate(item.path),
                        NavIconGlyph { icon: item.icon }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
