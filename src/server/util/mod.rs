//! Small helpers shared across layers.

pub mod parse;
pub mod password;
