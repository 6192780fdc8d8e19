//! Blocktint - palette-driven texture recoloring
//!
//! Batch recoloring of block-game texture packs against curated palettes.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
