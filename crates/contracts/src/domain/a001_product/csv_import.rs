//! Product import from the management screen's CSV format.
//!
//! Columns are positional: name, link, category, description, preview image,
//! gallery images. The gallery column holds `;`-separated references.

use serde::{Deserialize, Serialize};

use crate::shared::delimited::{parse_delimited, DelimitedRecord, DelimitedSchema, ImportError, RowError};

pub const PRODUCT_IMPORT_FIELDS: [&str; 6] = [
    "name",
    "link",
    "category",
    "description",
    "previewImage",
    "galleryImages",
];

/// Header row of the downloadable template
pub const TEMPLATE_HEADERS: [&str; 6] = [
    "Product Name",
    "Product Link",
    "Category",
    "Description",
    "Preview Image URL",
    "Gallery Image URLs (semicolon separated)",
];

pub const TEMPLATE_FILE_NAME: &str = "product_template.csv";

const GALLERY_DELIMITER: char = ';';

/// Product row managed on the import screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedProduct {
    pub name: String,
    pub link: String,
    pub category: String,
    pub description: String,
    pub preview_image: String,
    pub gallery_images: Vec<String>,
}

impl ImportedProduct {
    fn from_record(record: &DelimitedRecord) -> Self {
        Self {
            name: record.get("name").to_string(),
            link: strip_protocol(record.get("link")).to_string(),
            category: record.get("category").to_string(),
            description: record.get("description").to_string(),
            preview_image: record.get("previewImage").to_string(),
            gallery_images: split_gallery(record.get("galleryImages")),
        }
    }

    /// Validation for the manual "add product" form
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err("Please fill in at least the product name and category".into());
        }
        Ok(())
    }

    /// Copy ready to be appended to the product table
    pub fn normalized(&self) -> Self {
        Self {
            link: strip_protocol(self.link.trim()).to_string(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImport {
    pub products: Vec<ImportedProduct>,
    pub row_errors: Vec<RowError>,
}

pub fn import_products(text: &str) -> Result<ProductImport, ImportError> {
    let schema = DelimitedSchema::comma(&PRODUCT_IMPORT_FIELDS);
    let table = parse_delimited(text, &schema)?;

    Ok(ProductImport {
        products: table.records.iter().map(ImportedProduct::from_record).collect(),
        row_errors: table.row_errors,
    })
}

/// Drop a leading `http://` or `https://`
pub fn strip_protocol(link: &str) -> &str {
    link.strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link)
}

fn split_gallery(column: &str) -> Vec<String> {
    if column.trim().is_empty() {
        return Vec::new();
    }
    column
        .split(GALLERY_DELIMITER)
        .map(|url| url.trim().to_string())
        .collect()
}

/// Template file contents: header plus two sample rows
pub fn template_csv() -> String {
    let samples: [[&str; 6]; 2] = [
        [
            "Wireless Earbuds",
            "example.com/earbuds",
            "Accessories",
            "Noise cancelling earbuds",
            "https://example.com/images/earbuds.jpg",
            "https://example.com/images/earbuds-1.jpg;https://example.com/images/earbuds-2.jpg",
        ],
        [
            "Smart Watch",
            "example.com/watch",
            "Wearables",
            "Fitness tracking smart watch",
            "https://example.com/images/watch.jpg",
            "https://example.com/images/watch-1.jpg",
        ],
    ];

    let mut rows = vec![TEMPLATE_HEADERS.join(",")];
    rows.extend(samples.iter().map(|row| row.join(",")));
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_product_scenario() {
        let text = "Name,Link,Cat,Desc,Prev,Gal\nShoe,a.com,Shoes,nice,p.png,g1.png;g2.png\n";
        let import = import_products(text).unwrap();

        assert!(import.row_errors.is_empty());
        assert_eq!(
            import.products,
            vec![ImportedProduct {
                name: "Shoe".into(),
                link: "a.com".into(),
                category: "Shoes".into(),
                description: "nice".into(),
                preview_image: "p.png".into(),
                gallery_images: vec!["g1.png".into(), "g2.png".into()],
            }]
        );
    }

    #[test]
    fn test_mismatched_row_does_not_abort() {
        let text = "Name,Link,Cat,Desc,Prev,Gal\n\
                    Broken,a.com,Shoes\n\
                    Hat,https://b.com/hat,Hats,warm,h.png,\n";
        let import = import_products(text).unwrap();

        assert_eq!(import.products.len(), 1);
        assert_eq!(import.products[0].name, "Hat");
        assert_eq!(import.products[0].link, "b.com/hat");
        assert!(import.products[0].gallery_images.is_empty());
        assert_eq!(import.row_errors.len(), 1);
        assert_eq!(import.row_errors[0].line, 2);
    }

    #[test]
    fn test_empty_file_fails() {
        assert_eq!(import_products(""), Err(ImportError::Empty));
    }

    #[test]
    fn test_strip_protocol() {
        assert_eq!(strip_protocol("https://a.com/x"), "a.com/x");
        assert_eq!(strip_protocol("http://a.com"), "a.com");
        assert_eq!(strip_protocol("a.com"), "a.com");
        assert_eq!(strip_protocol("ftp://a.com"), "ftp://a.com");
    }

    #[test]
    fn test_template_reimports() {
        let import = import_products(&template_csv()).unwrap();
        assert_eq!(import.products.len(), 2);
        assert!(import.row_errors.is_empty());
        assert_eq!(import.products[0].gallery_images.len(), 2);
    }

    #[test]
    fn test_manual_product_validation() {
        let mut p = ImportedProduct::default();
        assert!(p.validate().is_err());
        p.name = "Lamp".into();
        assert!(p.validate().is_err());
        p.category = "Home".into();
        assert!(p.validate().is_ok());

        p.link = " https://shop.example.com/lamp ".into();
        assert_eq!(p.normalized().link, "shop.example.com/lamp");
    }
}
