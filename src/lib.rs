//! # BCF Inspector
//!
//! Reads BIM Collaboration Format (BCF) archives: the zip files review tools
//! exchange to describe issues ("topics") found in building models.
//!
//! ## Features
//!
//! - Parse BCF 2.x/3.x archives from disk or memory
//! - Decode version, project and extensions metadata
//! - Decode each topic's markup: header files, labels, comments, viewpoints
//! - Collect snapshot images with their MIME type
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use bcf_inspector::parser::parse_bcf_file;
//!
//! let archive = parse_bcf_file("review.bcf").expect("Failed to parse");
//! println!("BCF version: {}", archive.version.version_id);
//! println!("Topics: {}", archive.topics.len());
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
