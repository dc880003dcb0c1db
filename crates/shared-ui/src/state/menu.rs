use std::cell::Cell;
use std::rc::Rc;

/// Open/closed state of a dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Actions offered by the profile menu. Selecting any of them closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Profile,
    Settings,
    Logout,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Profile, MenuAction::Settings, MenuAction::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Profile => "Profile",
            MenuAction::Settings => "Settings",
            MenuAction::Logout => "Logout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    /// Pointer-down outside the menu, or focus leaving it.
    OutsidePointerDown,
    Select(MenuAction),
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Transition function. Outside clicks and selections only matter while open.
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle)
            | (MenuState::Open, MenuEvent::OutsidePointerDown)
            | (MenuState::Open, MenuEvent::Select(_)) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }
}

/// Counts live outside-click listeners. Cloning shares the count.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<Cell<usize>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> ListenerRegistration {
        self.active.set(self.active.get() + 1);
        tracing::trace!(active = self.active.get(), "outside-click listener registered");
        ListenerRegistration {
            active: Rc::clone(&self.active),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// A registered outside-click listener. Released when dropped.
#[derive(Debug)]
pub struct ListenerRegistration {
    active: Rc<Cell<usize>>,
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::trace!(active = self.active.get(), "outside-click listener released");
    }
}

/// Dropdown state plus the listener that exists only while open.
///
/// Every transition out of `Open` drops the registration, and dropping the
/// machine itself (component unmount) releases it as well.
#[derive(Debug)]
pub struct MenuMachine {
    state: MenuState,
    registry: ListenerRegistry,
    listener: Option<ListenerRegistration>,
}

impl MenuMachine {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            state: MenuState::Closed,
            registry,
            listener: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the outside-click listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn dispatch(&mut self, event: MenuEvent) -> MenuState {
        let next = self.state.next(event);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?event, "menu transition");
        }
        self.listener = match next {
            MenuState::Open => self.listener.take().or_else(|| Some(self.registry.register())),
            MenuState::Closed => None,
        };
        self.state = next;
        next
    }

    /// Apply an open/closed report from the dropdown primitive. Reports that
    /// match the current state are ignored, so a close that follows a
    /// selection is a no-op.
    pub fn open_changed(&mut self, open: bool) -> MenuState {
        match (self.state, open) {
            (MenuState::Closed, true) => self.dispatch(MenuEvent::Toggle),
            (MenuState::Open, false) => self.dispatch(MenuEvent::OutsidePointerDown),
            (state, _) => state,
        }
    }
}

impl Default for MenuMachine {
    fn default() -> Self {
        Self::new(ListenerRegistry::new())
    }
}
