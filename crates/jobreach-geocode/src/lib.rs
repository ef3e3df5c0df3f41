//! Address geocoding for the jobreach pipeline.
//!
//! A thin typed client for the US Census one-line-address geocoder plus
//! the total participant-resolution chain that falls back to the static
//! reference tables in `jobreach-core` whenever the oracle cannot help.

pub mod client;
pub mod error;
pub mod resolve;
pub mod types;

pub use client::GeocoderClient;
pub use error::GeocodeError;
pub use resolve::resolve_participant;
