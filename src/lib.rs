//! Access Classifier Core Library
//!
//! This library classifies access-log URLs from academic publishing platforms
//! (journal aggregators, e-book platforms, indexing services) into normalized
//! records describing what was accessed: its type, format and identifiers.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Decomposition of raw URLs and log text into [`DecomposedUrl`]s
//! - [`platform`] - The `Platform` contract, registry, dispatch wrapper and one rule set per platform
//! - [`record`] - The normalized [`ResultRecord`] and the [`AccessRecord`] context
//! - [`config`] - Optional configuration file for binary defaults

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod parser;
pub mod platform;
pub mod record;

// Re-export commonly used types
pub use parser::{DecomposedUrl, ParseError, ParseResult, parse_input};
pub use platform::{
    Classifier, ClassifyError, Diagnostics, Platform, PlatformRegistry,
    build_default_platform_registry,
};
pub use record::{AccessRecord, MimeType, ResourceType, ResultRecord};
