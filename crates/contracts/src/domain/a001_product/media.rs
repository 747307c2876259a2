//! Media resolution for the product gallery.
//!
//! A product carries up to three media-bearing fields. [`resolve`] flattens
//! them into one ordered [`MediaSequence`]:
//!
//! ```text
//! preview_image  -> [image]
//! gallery_images -> [image, image, ...]
//! video_urls     -> [video, video, ...]
//! ```
//!
//! References that start with the `blob:` placeholder point at uploads that
//! only exist in the storage bucket and are rewritten against the configured
//! storage origin. Everything else is passed through untouched.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// Marker prefix of a not-yet-persisted local upload reference
pub const PLACEHOLDER_PREFIX: &str = "blob:";

/// Fixed path under the storage origin where public objects live
pub const PUBLIC_OBJECT_PATH: &str = "storage/v1/object/public";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One displayable gallery item. `url` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaEntry {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

pub type MediaSequence = Vec<MediaEntry>;

/// Base origin of the storage service, e.g. `https://abc.supabase.co`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageOrigin(String);

impl StorageOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self(origin.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rewrite a placeholder reference to a public object URL.
    ///
    /// `blob://bucket/x.png` -> `{origin}/storage/v1/object/public/bucket/x.png`
    pub fn resolve_reference(&self, reference: &str) -> String {
        match reference.strip_prefix(PLACEHOLDER_PREFIX) {
            Some(rest) => format!(
                "{}/{}/{}",
                self.0,
                PUBLIC_OBJECT_PATH,
                rest.trim_start_matches('/')
            ),
            None => reference.to_string(),
        }
    }
}

/// Build the ordered media sequence for a product.
///
/// Order: preview, gallery (source order), videos (source order). No
/// de-duplication is performed. A blank preview counts as absent.
pub fn resolve(product: &Product, origin: &StorageOrigin) -> MediaSequence {
    let gallery = product.gallery_images.as_deref().unwrap_or_default();
    let videos = product.video_urls.as_deref().unwrap_or_default();

    let mut media = Vec::with_capacity(1 + gallery.len() + videos.len());

    if let Some(preview) = product
        .preview_image
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        media.push(MediaEntry {
            kind: MediaKind::Image,
            url: origin.resolve_reference(preview),
        });
    }

    media.extend(gallery.iter().map(|image| MediaEntry {
        kind: MediaKind::Image,
        url: origin.resolve_reference(image),
    }));

    media.extend(videos.iter().map(|video| MediaEntry {
        kind: MediaKind::Video,
        url: origin.resolve_reference(video),
    }));

    media
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;
    use crate::domain::a002_category::CategoryId;
    use chrono::Utc;

    const ORIGIN: &str = "https://store.example.com";

    fn product() -> Product {
        Product::new(ProductId(1), "Shoe".into(), CategoryId(1), Utc::now())
    }

    #[test]
    fn test_placeholder_is_rewritten_against_origin() {
        let origin = StorageOrigin::new(ORIGIN);
        assert_eq!(
            origin.resolve_reference("blob://bucket/x.png"),
            "https://store.example.com/storage/v1/object/public/bucket/x.png"
        );
        assert_eq!(
            origin.resolve_reference("blob:bucket/x.png"),
            "https://store.example.com/storage/v1/object/public/bucket/x.png"
        );
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let origin = StorageOrigin::new(ORIGIN);
        assert_eq!(
            origin.resolve_reference("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_origin_trailing_slash_is_ignored() {
        let origin = StorageOrigin::new("https://store.example.com/ ");
        assert_eq!(origin.as_str(), ORIGIN);
        assert_eq!(
            origin.resolve_reference("blob://b/y.jpg"),
            "https://store.example.com/storage/v1/object/public/b/y.jpg"
        );
    }

    #[test]
    fn test_empty_product_yields_empty_sequence() {
        let media = resolve(&product(), &StorageOrigin::new(ORIGIN));
        assert!(media.is_empty());

        let mut p = product();
        p.preview_image = Some("   ".into());
        p.gallery_images = Some(vec![]);
        p.video_urls = Some(vec![]);
        assert!(resolve(&p, &StorageOrigin::new(ORIGIN)).is_empty());
    }

    #[test]
    fn test_order_is_preview_then_gallery_then_videos() {
        let mut p = product();
        p.video_urls = Some(vec!["https://v.example.com/a.mp4".into()]);
        p.gallery_images = Some(vec!["blob://b/g1.png".into(), "https://c.example.com/g2.png".into()]);
        p.preview_image = Some("https://c.example.com/p.png".into());

        let media = resolve(&p, &StorageOrigin::new(ORIGIN));
        let kinds: Vec<MediaKind> = media.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Image, MediaKind::Image, MediaKind::Image, MediaKind::Video]
        );
        assert_eq!(media[0].url, "https://c.example.com/p.png");
        assert_eq!(
            media[1].url,
            "https://store.example.com/storage/v1/object/public/b/g1.png"
        );
        assert_eq!(media[2].url, "https://c.example.com/g2.png");
        assert!(media[3].is_video());
    }

    #[test]
    fn test_length_is_sum_of_present_fields() {
        let origin = StorageOrigin::new(ORIGIN);
        for preview in [None, Some("p.png")] {
            for gallery_len in 0..4usize {
                for video_len in 0..3usize {
                    let mut p = product();
                    p.preview_image = preview.map(str::to_string);
                    p.gallery_images = Some((0..gallery_len).map(|i| format!("g{i}.png")).collect());
                    p.video_urls = Some((0..video_len).map(|i| format!("v{i}.mp4")).collect());

                    let expected = preview.map_or(0, |_| 1) + gallery_len + video_len;
                    assert_eq!(resolve(&p, &origin).len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut p = product();
        p.preview_image = Some("same.png".into());
        p.gallery_images = Some(vec!["same.png".into(), "same.png".into()]);
        assert_eq!(resolve(&p, &StorageOrigin::new(ORIGIN)).len(), 3);
    }
}
