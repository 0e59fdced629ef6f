//! Step definitions for task assignment scenarios.

pub mod given;
pub mod then;
pub mod when;
