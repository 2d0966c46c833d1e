//! Export Blueprint component trees as React Native projects.
//!
//! The exporter is a pure function of a component tree and an app
//! configuration. It resolves each node's style, maps its kind onto a
//! target primitive, lowers the tree into printable elements, and prints
//! them into the entry module of an Expo project alongside the manifest,
//! package descriptor, README, and auxiliary files.
//!
//! # Example
//!
//! ```ignore
//! use blueprint_codegen::assemble;
//! use blueprint_core::{default_config, ComponentNode};
//!
//! let tree = vec![ComponentNode::new("root", "container")
//!     .with_child(ComponentNode::new("hello", "text").with_text("Hello"))];
//! let files = assemble(&tree, &default_config())?;
//! println!("{}", files.get("App.tsx").unwrap_or_default());
//! ```

pub mod archive;
pub mod download;
pub mod error;
pub mod generators;
pub mod imports;
pub mod lower;
pub mod mapper;
pub mod printer;
pub mod resolver;

pub use archive::{archive_bytes, archive_name, write_archive};
pub use download::{downloads, push_downloads, write_project, DirectorySink, Download, DownloadSink};
pub use error::{ExportError, Result};
pub use generators::{assemble, paths, ExpoGenerator, FileSet, ProjectGenerator, TemplateEngine};
pub use imports::{collect_imports, import_statement};
pub use lower::lower;
pub use mapper::{map_kind, Primitive, PrimitiveSpec};
pub use printer::{print, PrintNode};
pub use resolver::{resolve, ResolvedNode};
