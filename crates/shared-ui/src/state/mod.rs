//! View-state machines behind the shell components. Free of rendering so
//! they can be driven directly in tests.

pub mod menu;
pub mod scroll;

pub use menu::*;
pub use scroll::*;
