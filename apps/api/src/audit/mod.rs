//! Audit pipeline: external page-audit payload in, ordered score cards and
//! recommendations out.

pub mod client;
pub mod handlers;
pub mod payload;
pub mod projector;
