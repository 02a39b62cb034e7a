//! Integration tests for Mycelium.
//!
//! This module organises integration tests by component.

pub mod engine;
pub mod programs;
pub mod runner;
