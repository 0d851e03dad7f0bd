//! Playable-item descriptor as reported by the media server.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Descriptor of a playable item.
///
/// The server populates whatever it has; no field is guaranteed present and
/// any subset may be missing. Artwork tag fields only identify an image
/// together with their paired item id (see the resolver in
/// `reelseer-discovery`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemDescriptor {
    /// The item's own id.
    pub id: Option<String>,
    /// Server hosting the item; artwork cannot be resolved without it.
    pub server_id: Option<String>,
    /// Backdrop tags for the item itself, best first.
    pub backdrop_image_tags: Vec<String>,
    /// Item owning the parent backdrops.
    pub parent_backdrop_item_id: Option<String>,
    /// Backdrop tags inherited from the parent, best first.
    pub parent_backdrop_image_tags: Vec<String>,
    /// The item's own artwork tags, keyed by kind name (`"Primary"`,
    /// `"Thumb"`, ...). The server emits more kinds than this layer
    /// consumes (`"Logo"`, `"Banner"`, ...); all of them deserialize.
    pub image_tags: HashMap<String, String>,
    /// Item owning the parent thumb.
    pub parent_thumb_item_id: Option<String>,
    /// Thumb tag inherited from the parent.
    pub parent_thumb_image_tag: Option<String>,
    /// Album the item belongs to, for audio tracks.
    pub album_id: Option<String>,
    /// Primary artwork tag of that album.
    pub album_primary_image_tag: Option<String>,
}
