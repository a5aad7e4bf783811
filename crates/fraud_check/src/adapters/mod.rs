// Rust guideline compliant 2026-10-16

//! Adapters (secondary ports) for the fraud-check binary.
//!
//! Each sub-module implements the `PredictionService` port defined in the
//! `domain` crate.

pub mod demo_prediction;
pub mod http_prediction;
