//! Consolidated test utilities and helpers for the OneM2M appliance exporter.
//!
//! This module provides a centralized location for test configuration builders,
//! gateway fixtures and mock implementations used throughout the codebase.

#![cfg(test)]

pub mod config;
pub mod mocks;
