//! Step definitions for task board BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
