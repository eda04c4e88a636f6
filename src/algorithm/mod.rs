//! Geometry algorithms.

pub mod kernel;
