//! Mock catalog contents.

use chrono::{Duration, Utc};
use contracts::domain::a001_product::{MarketplaceLink, Product, ProductId};
use contracts::domain::a002_category::{Category, CategoryId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PHOTO_IDS: [&str; 10] = [
    "1649972904349-6e44c42644a7",
    "1488590528505-98d2b5aba04b",
    "1518770660439-4636190af475",
    "1461749280684-dccba630e2f6",
    "1486312338219-ce68d2c6f44d",
    "1581091226825-a6a2a5aee158",
    "1485827404703-89b55fcc595e",
    "1526374965328-7f61d4dc18c5",
    "1531297484001-80022131f5a1",
    "1487058792275-0ad4aaf24ca7",
];

/// Products are spread over roughly the last four months
const MAX_AGE_MS: i64 = 10_000_000_000;

const FIRST_TITLE_NUMBER: u32 = 381;

fn unsplash(photo_id: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo_id}?auto=format&fit=crop&w={width}&q=80")
}

pub fn categories() -> Vec<Category> {
    let rows: [(u32, &str, &str, &str); 6] = [
        (1, "Smartphones", "1511707171634-5f897ff02aa9", "linear-gradient(135deg, #a855f7, #ec4899)"),
        (2, "Laptops", "1496181133206-80ce9b88a853", "linear-gradient(135deg, #3b82f6, #06b6d4)"),
        (3, "Tablets", "1544244015-0df4b3ffc6b0", "linear-gradient(135deg, #22c55e, #10b981)"),
        (4, "Accessories", "1572569511254-d8f925fe2cbb", "linear-gradient(135deg, #f97316, #ef4444)"),
        (5, "Wearables", "1434494878577-86c23bcb06b9", "linear-gradient(135deg, #eab308, #f97316)"),
        (6, "Gaming", "1550745165-9bc0b252726f", "linear-gradient(135deg, #6366f1, #a855f7)"),
    ];

    rows.iter()
        .map(|(id, name, photo, gradient)| Category {
            id: CategoryId::new(*id),
            name: name.to_string(),
            product_count: 0,
            image: unsplash(photo, 800),
            gradient: gradient.to_string(),
        })
        .collect()
}

/// Generate `count` products with ids `1..=count`.
///
/// Every third product gets a storage-hosted gallery image and every fourth
/// one a video, so the gallery has all media kinds to show.
pub fn generate_products(count: u32, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let now = Utc::now();
    let category_names: Vec<String> = categories().into_iter().map(|c| c.name).collect();

    (0..count)
        .map(|index| {
            let title = format!("YY{}", FIRST_TITLE_NUMBER + index);
            let slug = title.to_lowercase();
            let photo = PHOTO_IDS[index as usize % PHOTO_IDS.len()];
            let category_idx = index as usize % category_names.len();
            let age = Duration::milliseconds(rng.gen_range(0..MAX_AGE_MS));

            let mut product = Product::new(
                ProductId::new(index + 1),
                title.clone(),
                CategoryId::new(category_idx as u32 + 1),
                now - age,
            );
            product.description = Some(format!(
                "{} from our {} collection.",
                title, category_names[category_idx]
            ));
            product.preview_image = Some(unsplash(photo, 400));

            let mut gallery: Vec<String> = (1..=2)
                .map(|offset| unsplash(PHOTO_IDS[(index as usize + offset) % PHOTO_IDS.len()], 1200))
                .collect();
            if index % 3 == 0 {
                gallery.push(format!("blob://product-media/{slug}/detail.jpg"));
            }
            product.gallery_images = Some(gallery);

            if index % 4 == 0 {
                product.video_urls = Some(vec![format!("blob://product-media/{slug}/overview.mp4")]);
            }

            product.marketplace_links = vec![
                MarketplaceLink {
                    label: "Amazon".into(),
                    url: format!("https://www.amazon.com/s?k={slug}"),
                },
                MarketplaceLink {
                    label: "eBay".into(),
                    url: format!("https://www.ebay.com/sch/i.html?_nkw={slug}"),
                },
            ];

            product
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_products_titles_and_ids() {
        let products = generate_products(12, 1);
        assert_eq!(products.len(), 12);
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[0].name, "YY381");
        assert_eq!(products[11].name, "YY392");
        assert!(products.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_generate_products_is_seeded() {
        let a: Vec<i64> = generate_products(5, 7)
            .iter()
            .map(|p| p.date_added.timestamp())
            .collect();
        let b: Vec<i64> = generate_products(5, 7)
            .iter()
            .map(|p| p.date_added.timestamp())
            .collect();
        // Both runs use `Utc::now()` as the anchor, allow a second of drift
        assert!(a.iter().zip(&b).all(|(x, y)| (x - y).abs() <= 1));
    }

    #[test]
    fn test_media_mix() {
        let products = generate_products(4, 1);
        assert!(products[0]
            .gallery_images
            .as_ref()
            .unwrap()
            .iter()
            .any(|g| g.starts_with("blob:")));
        assert!(products[0].video_urls.is_some());
        assert!(products[1].video_urls.is_none());
    }
}
