//! Content Analyzer pipeline: raw page fields plus parsed body markup in,
//! ordered recommendations out.

pub mod checks;
pub mod document;
pub mod handlers;
pub mod keyword;
