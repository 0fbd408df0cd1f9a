//! Announcement tags and their localized display names.

pub mod storage;

pub use storage::list;
