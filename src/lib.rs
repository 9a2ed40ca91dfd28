//! hnsearch library
//!
//! Exports the search view and its HTTP seam for testing and reuse.

pub mod cli;
pub mod config;
pub mod event;
pub mod logging;
pub mod search;
pub mod tui;
pub mod view;
