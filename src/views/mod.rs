//! HTML views
//!
//! Pages are rendered on the server as plain HTML strings. Every value taken
//! from records or submissions is escaped before it is written out.

pub mod components;
pub mod dashboard;
pub mod layout;
pub mod pages;
pub mod resource;

pub use dashboard::render_dashboard;
pub use layout::{render_layout, APP_TITLE};
pub use resource::{render_resource_page, ResourceView};
