// src/dev/mod.rs
// Helpers shared by the developer binaries and the integration tests.
pub mod check;
pub mod generator;
