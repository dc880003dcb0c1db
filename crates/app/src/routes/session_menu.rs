use dioxus::prelude::*;
use shared_types::{
    sign_out, user_display_name, user_initials, user_role_label, Navigate, ShellConfig, User,
    SIGN_OUT_FAILED_NOTICE,
};
use shared_ui::state::{ListenerRegistry, MenuAction, MenuEvent, MenuMachine};
use shared_ui::{
    use_toast, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuSeparator, DropdownMenuTrigger, InitialsAvatar, ToastOptions,
};

use crate::auth::use_ui_store;
use crate::session::{HttpSessionService, RouterNavigator};

const PROFILE_PATH: &str = "/profile";
const SETTINGS_PATH: &str = "/settings";

/// Close the menu for `action` and follow it. Returns `true` for logout,
/// which the caller runs asynchronously.
fn apply_action<N: Navigate>(menu: &mut MenuMachine, action: MenuAction, navigator: &N) -> bool {
    menu.dispatch(MenuEvent::Select(action));
    match action {
        MenuAction::Profile => {
            navigator.navigate(PROFILE_PATH);
            false
        }
        MenuAction::Settings => {
            navigator.navigate(SETTINGS_PATH);
            false
        }
        MenuAction::Logout => true,
    }
}

/// Avatar button with the profile dropdown.
///
/// The dropdown primitive reports opens and dismissals through
/// `on_open_change`; the machine holds a listener registration only while
/// open and drops it on every way out, including unmount.
#[component]
pub fn SessionMenu(user: Option<User>) -> Element {
    let registry = use_hook(ListenerRegistry::new);
    let mut menu = use_signal(|| MenuMachine::new(registry));
    let mut store = use_ui_store();
    let session: HttpSessionService = use_context();
    let config: ShellConfig = use_context();
    let toast = use_toast();

    let open = menu.read().is_open();

    let initials = user_initials(user.as_ref());
    let name = user_display_name(user.as_ref());
    let role_label = user_role_label(user.as_ref());
    let email = user.as_ref().and_then(|u| u.email.clone());

    let on_select = use_callback(move |action: MenuAction| {
        let logout = apply_action(&mut menu.write(), action, &RouterNavigator);
        if !logout {
            return;
        }
        let session = session.clone();
        let login_path = config.login_path.clone();
        let toast = toast.clone();
        spawn(async move {
            store.set_loading(true);
            let result =
                sign_out(&session, &RouterNavigator, &login_path, || store.clear_user()).await;
            store.set_loading(false);
            if result.is_err() {
                toast.error(SIGN_OUT_FAILED_NOTICE.to_string(), ToastOptions::new());
            }
        });
    });

    rsx! {
        DropdownMenu {
            open,
            on_open_change: move |next: bool| {
                menu.write().open_changed(next);
            },
            DropdownMenuTrigger {
                aria_label: "Open profile menu",
                InitialsAvatar { initials }
            }
            DropdownMenuContent {
                DropdownMenuLabel {
                    p { class: "session-menu-name", "{name}" }
                    if let Some(email) = email {
                        p { class: "session-menu-email", "{email}" }
                    }
                    p { class: "session-menu-role", "{role_label}" }
                }
                DropdownMenuSeparator {}
                DropdownMenuItem::<MenuAction> {
                    value: MenuAction::Profile,
                    index: 0usize,
                    on_select: move |action: MenuAction| on_select.call(action),
                    {MenuAction::Profile.label()}
                }
                DropdownMenuItem::<MenuAction> {
                    value: MenuAction::Settings,
                    index: 1usize,
                    on_select: move |action: MenuAction| on_select.call(action),
                    {MenuAction::Settings.label()}
                }
                DropdownMenuSeparator {}
                DropdownMenuItem::<MenuAction> {
                    value: MenuAction::Logout,
                    index: 2usize,
                    on_select: move |action: MenuAction| on_select.call(action),
                    span { class: "session-menu-logout", {MenuAction::Logout.label()} }
                }
            }
        }
    }
}
