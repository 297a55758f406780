//! Workforce Cost Optimization Engine
//!
//! This crate estimates and compares workforce staffing costs (full-time
//! employees vs. contractors) across a catalog of job roles and locations,
//! and generates fixed-policy comparison scenarios with a plain-language
//! savings narrative.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod explain;
pub mod models;
