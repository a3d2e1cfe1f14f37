//! Adapter implementations for board ports.

pub mod memory;
pub mod postgres;
pub mod logging;
