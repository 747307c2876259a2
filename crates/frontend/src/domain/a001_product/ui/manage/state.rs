use contracts::domain::a001_product::csv_import::{ImportedProduct, ProductImport};
use leptos::prelude::*;

/// Fields of the "Add product" dialog
#[derive(Clone, Copy)]
pub struct AddProductForm {
    pub name: RwSignal<String>,
    pub link: RwSignal<String>,
    pub category: RwSignal<String>,
    pub description: RwSignal<String>,
    /// Object URL of the picked preview file
    pub preview_image: RwSignal<String>,
    /// Object URLs of the picked gallery files
    pub gallery_images: RwSignal<Vec<String>>,
}

impl AddProductForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            link: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            preview_image: RwSignal::new(String::new()),
            gallery_images: RwSignal::new(Vec::new()),
        }
    }

    pub fn to_product(&self) -> ImportedProduct {
        ImportedProduct {
            name: self.name.get_untracked(),
            link: self.link.get_untracked(),
            category: self.category.get_untracked(),
            description: self.description.get_untracked(),
            preview_image: self.preview_image.get_untracked(),
            gallery_images: self.gallery_images.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.link.set(String::new());
        self.category.set(String::new());
        self.description.set(String::new());
        self.preview_image.set(String::new());
        self.gallery_images.set(Vec::new());
    }
}

impl Default for AddProductForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Text of the success notification after an import
pub fn import_summary(import: &ProductImport) -> String {
    let imported = format!(
        "Imported {} product{}",
        import.products.len(),
        if import.products.len() == 1 { "" } else { "s" }
    );
    match import.row_errors.len() {
        0 => imported,
        1 => format!("{}, skipped 1 malformed row", imported),
        n => format!("{}, skipped {} malformed rows", imported, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::csv_import::import_products;

    #[test]
    fn test_import_summary() {
        let import = import_products("h1,h2,h3,h4,h5,h6\nA,a.com,C,d,p.png,\n").unwrap();
        assert_eq!(import_summary(&import), "Imported 1 product");

        let import = import_products(
            "h1,h2,h3,h4,h5,h6\nA,a.com,C,d,p.png,\nbroken\nB,b.com,C,d,p.png,\nx,y\n",
        )
        .unwrap();
        assert_eq!(
            import_summary(&import),
            "Imported 2 products, skipped 2 malformed rows"
        );
    }
}
