//! Artwork kinds, resolved references, and CDN size tokens.

use serde::{Deserialize, Serialize};

/// Artwork categories the resolver can pick from.
///
/// The server tags items with more kinds than these
/// ([`crate::ItemDescriptor::image_tags`] keeps them all by name); these
/// are the ones artwork resolution consumes. The serialized form matches
/// the server's PascalCase tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKind {
    /// Wide scene artwork
    Backdrop,
    /// Landscape thumbnail
    Thumb,
    /// Portrait primary artwork
    Primary,
}

impl ImageKind {
    /// Token used by the image URL builder.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Backdrop => "Backdrop",
            ImageKind::Thumb => "Thumb",
            ImageKind::Primary => "Primary",
        }
    }
}

/// A resolved artwork reference, ready to hand to the image URL builder.
///
/// Computed on demand and never cached; holds everything the builder is
/// keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Server hosting the owning item.
    pub server_id: String,
    /// Item that owns the artwork (may be a parent or album, not the item
    /// the reference was resolved for).
    pub item_id: String,
    /// Which artwork category was picked.
    pub kind: ImageKind,
    /// Server-side cache tag for the artwork.
    pub tag: String,
    /// Width hint for server-side scaling, in pixels.
    pub max_width: u32,
}

/// Poster size tokens understood by the artwork CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PosterSize {
    /// 92px wide
    W92,
    /// 154px wide
    W154,
    /// 185px wide
    W185,
    /// 342px wide
    W342,
    /// 500px wide (default for result cards)
    #[default]
    W500,
    /// 780px wide
    W780,
    /// Unscaled original
    Original,
}

impl PosterSize {
    /// URL path segment for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop size tokens understood by the artwork CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackdropSize {
    /// 300px wide
    W300,
    /// 780px wide
    W780,
    /// 1280px wide (default for detail views)
    #[default]
    W1280,
    /// Unscaled original
    Original,
}

impl BackdropSize {
    /// URL path segment for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}
