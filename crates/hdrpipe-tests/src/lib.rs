//! Integration tests for the hdr-pipeline-rs crates.
//!
//! End-to-end scenarios that walk real content through the full display
//! path and cross-check the colorimetric crates against each other.
