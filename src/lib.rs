//! # macrogram
//!
//! Line-level grammar recognition for macro bodies.
//!
//! A macro body is a sequence of short directive lines: block tags (`<routing>`), properties
//! (`name : value`), limitations (`add max_err : 3`), address ranges
//! (`range 0x1000..0x2000 with secure for M0`), pattern literals and method calls. The
//! [grammar] module recognises one line at a time against a small closed family of grammars
//! and reports a three-way outcome (no match, error, ok) so callers can try grammars
//! speculatively.
//!
//! The [scan] module runs a whole body through the dispatcher, [config] holds the layered
//! settings and [diagnostics] renders errors with source context.

pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod scan;
