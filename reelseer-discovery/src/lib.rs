//! Client layer for the Reelseer media-discovery integration.
//!
//! Three concerns live here:
//!
//! - [`client::DiscoveryClient`]: HTTP client for the discovery/request
//!   backend. Transport and decode failures are absorbed at this boundary
//!   and surface as typed result shapes, never as errors.
//! - [`images::resolve_artwork`]: pure cascade picking the best artwork
//!   reference for a playable item descriptor.
//! - [`state`]: async state holders for search-as-you-type and media
//!   requests, built against the [`service::DiscoveryService`] seam so they
//!   are testable without a network.

pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod service;
pub mod session;
pub mod state;

pub use client::DiscoveryClient;
pub use config::DiscoveryConfig;
pub use error::DiscoveryError;
pub use images::{ImageUrlBuilder, resolve_artwork, resolve_artwork_url};
pub use service::DiscoveryService;
pub use session::{NoSession, SessionProvider, SharedSession};
pub use state::{RequestState, SearchSession, SearchState};
