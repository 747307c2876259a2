use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_category::CategoryId;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog product identifier, the `:id` segment of `/product/:id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        <u32 as AggregateId>::from_string(s).map(ProductId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Outbound link to the same product on an external marketplace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceLink {
    pub label: String,
    pub url: String,
}

/// Catalog product.
///
/// Media references are stored raw; they may be absolute URLs or
/// `blob:` placeholders and are only turned into displayable URLs by
/// [`super::media::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub preview_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub video_urls: Option<Vec<String>>,
    #[serde(default)]
    pub marketplace_links: Vec<MarketplaceLink>,
    pub date_added: DateTime<Utc>,
}

impl Product {
    pub fn new(id: ProductId, name: String, category_id: CategoryId, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description: None,
            category_id,
            preview_image: None,
            gallery_images: None,
            video_urls: None,
            marketplace_links: Vec::new(),
            date_added,
        }
    }

    /// Image shown on listing cards: the preview, falling back to the first gallery image.
    pub fn card_image(&self) -> Option<&str> {
        self.preview_image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.gallery_images
                    .as_ref()
                    .and_then(|g| g.first())
                    .map(|s| s.as_str())
            })
    }

    /// Case-insensitive substring match on name and description
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .map_or(false, |d| d.to_lowercase().contains(&needle))
    }

    pub fn to_list_item(&self) -> ProductListItemDto {
        ProductListItemDto {
            id: self.id,
            name: self.name.clone(),
            image: self.card_image().map(str::to_string),
            date_added: self.date_added,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Listing card row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItemDto {
    pub id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub date_added: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Product {
        let mut p = Product::new(
            ProductId::new(7),
            "Trail Runner".into(),
            CategoryId::new(4),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        );
        p.description = Some("Lightweight running shoe".into());
        p
    }

    #[test]
    fn test_card_image_falls_back_to_gallery() {
        let mut p = sample();
        assert_eq!(p.card_image(), None);

        p.gallery_images = Some(vec!["g1.png".into(), "g2.png".into()]);
        assert_eq!(p.card_image(), Some("g1.png"));

        p.preview_image = Some("p.png".into());
        assert_eq!(p.card_image(), Some("p.png"));
    }

    #[test]
    fn test_matches_search() {
        let p = sample();
        assert!(p.matches_search(""));
        assert!(p.matches_search("  trail "));
        assert!(p.matches_search("RUNNING"));
        assert!(!p.matches_search("laptop"));
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("12"), Ok(ProductId(12)));
        assert!(ProductId::from_string("x").is_err());
    }
}
