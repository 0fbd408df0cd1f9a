//! Client-side behaviour of the department site.
//!
//! Runs against the in-memory [`dom::Element`] tree: faculty filter chips,
//! header and dropdown widgets, and the staff profile fetch.

mod config;
pub mod dom;
pub mod filters;
pub mod profile;
pub mod widgets;

pub use config::BusinessConfig;
pub use dom::Element;
pub use filters::{ActiveFilters, render_cards, render_filter};
pub use profile::{ProfileClient, ProfileError};
pub use widgets::{DropdownControl, HeaderKind, HeaderSwitcher, WidgetError, Widgets, bootstrap};
