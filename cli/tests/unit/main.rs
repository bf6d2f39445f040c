//! Unit tests for hostprep
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod doctor_service;
mod helpers;
mod property_tests;
