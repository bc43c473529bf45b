//! HTTP route handlers

pub mod progress;
pub mod questions;
pub mod stats;
pub mod study;
