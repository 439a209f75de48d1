//! Domain layer for the dharam-kanta weighbridge register
//!
//! Models the weighment slip lifecycle, slip-number allocation, and the
//! persistence adapter traits the stores are built on.

pub mod model;
pub mod repository;
pub mod service;
