//! Client library for a REST-backed Pokémon collection.
//!
//! Layering follows the usual split: `domain` holds the entities,
//! `application` the gateway port, store and form rules, `infra` the HTTP
//! adapter and telemetry, and `presentation` the terminal view models.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
