//! Adapter implementations for board ports.

pub mod local_image;
pub mod memory;
pub mod postgres;
