// Standalone components
pub mod badge;
pub mod loading_overlay;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;
pub mod separator;
pub mod toast;

// Navigation & overlays
pub mod dropdown_menu;
pub mod navbar;

// Depends on context provided by the shell
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use dropdown_menu::*;
pub use loading_overlay::*;
pub use navbar::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use toast::*;
