//! HTTP front end: configuration, server wiring, upload handling and report
//! rendering.

pub mod app;
pub mod config;
