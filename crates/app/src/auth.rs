use dioxus::prelude::*;
use shared_types::{Role, User};

/// Global UI state shared with the shell: the signed-in user and the loading
/// flag that drives the overlay. The shell only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiStore {
    pub current_user: Signal<Option<User>>,
    pub loading: Signal<bool>,
}

impl UiStore {
    /// Starts in the loading state; the session bootstrap clears it once the
    /// current user is known.
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.current_user.set(user);
    }

    pub fn clear_user(&mut self) {
        self.current_user.set(None);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Hook to access the global UI store.
pub fn use_ui_store() -> UiStore {
    use_context::<UiStore>()
}

/// Role of the signed-in user, if any.
pub fn use_user_role() -> Option<Role> {
    let store = use_ui_store();
    let binding = store.current_user.read();
    let role = binding.as_ref().and_then(|u| u.role);
    role
}
