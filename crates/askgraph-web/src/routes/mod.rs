//! Route handlers.

pub mod ask;
pub mod dashboard;
