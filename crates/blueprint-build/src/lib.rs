//! Simulated packaging pipeline for Blueprint projects.
//!
//! The simulator walks a fixed sequence of build stages, reporting each one
//! as a [`BuildEvent`] over a channel, then assembles the project and
//! produces a build-instructions document in place of a real artifact.

pub mod config;
pub mod error;
pub mod instructions;
pub mod simulator;
pub mod stages;

pub use config::{BuildConfig, BuildSettings, BuildType, Platform, Signing};
pub use error::{BuildError, Result};
pub use instructions::{instructions_name, render_instructions};
pub use simulator::{BuildArtifact, BuildEvent, BuildOutcome, BuildSimulator};
pub use stages::Stage;
