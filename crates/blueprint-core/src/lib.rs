//! Core types for the Blueprint exporter.
//!
//! This crate provides the data model shared by every other blueprint crate:
//! - The component tree authored by the editor
//! - Style values and the nested style map
//! - The application configuration and its default factory
//! - Name sanitization used for package and file names
//! - Error types

pub mod component;
pub mod config;
pub mod errors;
pub mod naming;
pub mod style;

pub use component::*;
pub use config::*;
pub use errors::*;
pub use naming::sanitize_name;
pub use style::*;
