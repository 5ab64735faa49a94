//! Multi-step fitness assessment and its email submission.

pub mod email;
pub mod form;
