//! Tutorcast Script Parser
//!
//! Turns tutorial scripts into typed annotation records:
//! - **Parser:** One annotation line plus a frame rate in, an [`Annotation`] or `None` out
//! - **Script:** Line-by-line scanning that keeps annotations in script order
//! - **Validate:** Optional range checks layered on top of parsing
//! - **Outline:** Chapter, asset, and annotation extraction from outline markdown
//!
//! This crate is pure computation: no I/O, no shared mutable state.
//! All inputs are data; all outputs are data.
//!
//! [`Annotation`]: tutorcast_script_model::Annotation

pub mod outline;
pub mod parser;
pub mod script;
pub mod validate;

pub use outline::{parse_outline, resolve_annotations};
pub use parser::{parse_annotation, parse_annotation_default, DEFAULT_FPS, GRAMMAR_ORDER};
pub use script::{
    parse_script, scan_script, scan_script_with, LineStyle, RejectedLine, ScannedAnnotation,
    ScriptScan,
};
pub use validate::{validate_annotation, validate_script, RangeIssue, ValidationReport};
