//! Testing infrastructure for catalog integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative CLI test setup
//! - `MockApi`: In-process `GET /api/products` server
//! - `assertions`: Custom assertions over the CLI's JSON output
//! - `fixtures`: Sample product collections

pub mod assertions;
pub mod fixtures;
pub mod mock_api;
pub mod world;

pub use mock_api::{MockApi, MockResponse};
pub use world::TestWorld;
