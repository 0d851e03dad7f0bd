//! Wire and domain types shared across the Reelseer discovery layer.
//!
//! The discovery backend speaks camelCase JSON; the media server reports
//! playable items in PascalCase. Both contracts live here so the client and
//! its consumers agree on field names.

pub mod discovery;
pub mod image;
pub mod item;

pub use discovery::{
    BackendStatus, DiscoveredMedia, MediaKind, RequestOutcome, SearchPage,
};
pub use image::{BackdropSize, ImageKind, ImageRef, PosterSize};
pub use item::ItemDescriptor;
