//! # Engram Runtime
//!
//! The workbench that drives an associative memory from a set of reference
//! slots and a query buffer.
//!
//! The runtime is the stand-in for a pattern-authoring surface: it holds
//! the patterns being drawn, commits them to the memory, runs queries, and
//! reports what happened as data for a display to render.

pub mod workbench;
pub mod prelude;
