//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod auth;
pub use auth::*;

mod favorites;
pub use favorites::*;

mod storage;
pub use storage::BrowserStorage;

mod format;
pub use format::format_price;

mod components;
pub use components::*;
