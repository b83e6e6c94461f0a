// tests/integration/mod.rs
//! Integration tests for notion-unfurler
//!
//! These run whole link batches through the resolution engine and the
//! guardian gate, with the workspace and visibility probe faked.

#[cfg(test)]
mod link_resolution;

#[cfg(test)]
mod guardian_gate;
