//! Integration Harvester - Extract integration metadata from exports.
//!
//! This crate turns heterogeneous integration exports into four normalized
//! entity collections: interfaces, mappings, trading partners and
//! certificates.
//!
//! # Example
//!
//! ```
//! use integration_harvester::harvest;
//! use integration_harvester::input::MemoryInput;
//!
//! let export = r#"<p1:Export xmlns:p1="urn:example">
//!   <p1:IntegratedConfiguration id="ICO_Orders">
//!     <p1:Party>Shop</p1:Party>
//!     <p1:Party>ERP</p1:Party>
//!   </p1:IntegratedConfiguration>
//! </p1:Export>"#;
//!
//! let report = harvest(&[MemoryInput::text("ico_export.xml", export)]);
//! assert_eq!(report.result.interfaces[0].sender, "Shop");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Tag names, limits and dispatch markers
//! - [`types`]: Entity and report types
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace stripping, loading and lookup
//! - [`dialect`]: Configuration-item dialect handlers
//! - [`extract`]: Per-format extractors
//! - [`input`]: Input file abstraction
//! - [`dispatch`]: File classification
//! - [`harvester`]: The harvest run
//! - [`report`]: YAML/JSON report output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dialect;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod harvester;
pub mod input;
pub mod report;
pub mod types;
pub mod xml;

// Re-export main functions
pub use harvester::{harvest, harvest_paths, harvest_with_progress};

// Re-export commonly used items
pub use error::{HarvesterError, Result};
pub use input::{FileInput, InputFile, MemoryInput};
pub use types::{
    Certificate, Interface, Mapping, Partner, RunReport, RunResult,
};
