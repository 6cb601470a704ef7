//! # Catalog Module
//!
//! The read-only product catalog. Loaded once at startup and never
//! mutated at runtime. Price changes are a new build/deployment, not an
//! operation, which is what lets historical sales trust their embedded
//! product snapshots.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Category, Product, Unit};

/// The list of sellable products.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Looks up a product by catalog id.
    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// All products, in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The stock butcher's-counter catalog.
    pub fn butcher_shop() -> Self {
        fn product(
            id: u32,
            name: &str,
            price: i64,
            unit: Unit,
            category: Category,
            image: &str,
        ) -> Product {
            Product {
                id,
                name: name.to_string(),
                price: Money::from_francs(price),
                unit,
                category,
                image: Some(image.to_string()),
            }
        }

        use Category::{Autres, Boeuf, Poulet};
        use Unit::{Kg, Piece};

        Catalog::new(vec![
            // Bœuf
            product(1, "Viande de bœuf", 1500, Kg, Boeuf, "/images/products/beef.png"),
            product(2, "Côtes de bœuf", 1800, Kg, Boeuf, "/images/products/beef.png"),
            product(3, "Foie de bœuf", 1200, Kg, Boeuf, "/images/products/beef.png"),
            product(4, "Rognons de bœuf", 1000, Kg, Boeuf, "/images/products/beef.png"),
            product(5, "Tripes de bœuf", 800, Kg, Boeuf, "/images/products/beef.png"),
            product(6, "Queue de bœuf", 1600, Kg, Boeuf, "/images/products/beef.png"),
            // Poulet
            product(7, "Cuisse de poulet", 750, Piece, Poulet, "/images/products/chicken.png"),
            product(8, "Poulet entier", 3500, Piece, Poulet, "/images/products/chicken.png"),
            product(9, "Ailes de poulet", 500, Piece, Poulet, "/images/products/chicken.png"),
            product(10, "Blanc de poulet", 600, Piece, Poulet, "/images/products/chicken.png"),
            product(11, "Gésiers de poulet", 400, Piece, Poulet, "/images/products/chicken.png"),
            // Autres
            product(12, "Viande de mouton", 2000, Kg, Autres, "/images/products/beef.png"),
            product(13, "Viande de chèvre", 1800, Kg, Autres, "/images/products/beef.png"),
            product(14, "Saucisses", 1200, Kg, Autres, "/images/products/sausages.png"),
            product(15, "Merguez", 1400, Kg, Autres, "/images/products/sausages.png"),
        ])
    }
}
