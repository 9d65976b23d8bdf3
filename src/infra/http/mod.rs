//! HTTP adapter for the collection backend.

mod client;
mod mapping;

pub use client::HttpPokemonGateway;
