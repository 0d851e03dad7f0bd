//! Async state holders layered on the discovery service.

pub mod request;
pub mod search;

pub use request::RequestState;
pub use search::{SearchSession, SearchState};
