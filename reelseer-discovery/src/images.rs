//! Artwork resolution for playable items.

use log::debug;

use reelseer_model::{ImageKind, ImageRef, ItemDescriptor};

/// Fraction of the screen width used as the scaling hint. The consuming
/// element has not been laid out when artwork is resolved, so its true
/// rendered width is unknown; a fixed fraction of the viewport stands in.
const SCREEN_WIDTH_FRACTION: f64 = 0.20;

/// Builds a fetchable URL from a resolved artwork reference.
///
/// Owned by the imaging subsystem; this layer only picks the reference.
pub trait ImageUrlBuilder {
    /// URL serving the referenced artwork, scaled to `image.max_width`.
    fn scaled_image_url(&self, image: &ImageRef) -> String;
}

/// Pick the best available artwork reference for `item`.
///
/// Candidates are tried in fixed priority order — own backdrop, parent
/// backdrop, own thumb, parent thumb, own primary, album primary — and the
/// first one carrying both an owning item id and a tag wins. The order is a
/// business rule: a wide backdrop beats a portrait primary for the surfaces
/// this feeds.
///
/// Returns `None` when nothing is usable (callers show a placeholder; this
/// is not an error) or when the item has no server id, since the URL
/// builder is keyed by server.
pub fn resolve_artwork(item: &ItemDescriptor, screen_width: u32) -> Option<ImageRef> {
    let server_id = item.server_id.as_deref()?;
    let max_width = (f64::from(screen_width) * SCREEN_WIDTH_FRACTION).round() as u32;

    let candidates = [
        (
            ImageKind::Backdrop,
            item.id.as_deref(),
            item.backdrop_image_tags.first().map(String::as_str),
        ),
        (
            ImageKind::Backdrop,
            item.parent_backdrop_item_id.as_deref(),
            item.parent_backdrop_image_tags.first().map(String::as_str),
        ),
        (
            ImageKind::Thumb,
            item.id.as_deref(),
            item.image_tags.get(ImageKind::Thumb.as_str()).map(String::as_str),
        ),
        (
            ImageKind::Thumb,
            item.parent_thumb_item_id.as_deref(),
            item.parent_thumb_image_tag.as_deref(),
        ),
        (
            ImageKind::Primary,
            item.id.as_deref(),
            item.image_tags.get(ImageKind::Primary.as_str()).map(String::as_str),
        ),
        (
            ImageKind::Primary,
            item.album_id.as_deref(),
            item.album_primary_image_tag.as_deref(),
        ),
    ];

    for (kind, item_id, tag) in candidates {
        match (item_id, tag) {
            (Some(item_id), Some(tag)) => {
                return Some(ImageRef {
                    server_id: server_id.to_string(),
                    item_id: item_id.to_string(),
                    kind,
                    tag: tag.to_string(),
                    max_width,
                });
            }
            (None, None) => {}
            (item_id, tag) => {
                // Half-specified pair: not usable, skip to the next source.
                debug!(
                    "[Artwork] Skipping {} candidate with id={} tag={}",
                    kind.as_str(),
                    item_id.is_some(),
                    tag.is_some()
                );
            }
        }
    }

    None
}

/// Resolve `item`'s artwork and turn it into a fetchable URL.
///
/// Convenience over [`resolve_artwork`]; `None` means "show a placeholder".
pub fn resolve_artwork_url(
    item: &ItemDescriptor,
    screen_width: u32,
    builder: &impl ImageUrlBuilder,
) -> Option<String> {
    resolve_artwork(item, screen_width).map(|image| builder.scaled_image_url(&image))
}
