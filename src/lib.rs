//! radar-rs: radar (spider) chart layout engine.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split
//! between pure layout math, renderer-agnostic draw primitives, and
//! interaction classification for radial category charts.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LayoutOutcome, RadarChartConfig, RadarChartEngine, RadarChartOptions, RenderModel};
pub use error::{RadarError, RadarResult};
