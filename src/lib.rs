//! Terrain - body constitution quiz and classification engine
//!
//! This crate turns a user's goal-filtered quiz answers into a terrain
//! classification (primary type plus optional modifier) and commits it to
//! their stored profile.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
