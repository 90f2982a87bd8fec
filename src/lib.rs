// Library target exists solely for integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can import types via `cluegrid::puzzle::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod puzzle;

// Private: required transitively by app/ui (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
