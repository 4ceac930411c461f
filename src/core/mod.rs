//! Core building blocks: mirror parameters, the flip itself, encoder
//! compatibility conversions, and output path planning. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
