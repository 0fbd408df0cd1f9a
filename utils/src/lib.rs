//! Shared utilities for the Campus site.
//!
//! This crate contains the types shared by `services` and `business`:
//! supported languages, API payloads used on both sides of the wire,
//! and the static asset build configuration.

pub mod build_config;
pub mod language;
pub mod profile;

pub use language::{Language, LanguageError};
