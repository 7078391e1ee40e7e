//! Product catalog
//!
//! The catalog is an external collaborator of the UI engine: the product
//! detail screen and the `/api/products/{id}` endpoint both read from it.
//! Lookups never fail; an unknown id yields a "not found" sentinel product
//! carrying the requested id.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (e.g. `prod_1`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    /// Hero image URL (empty for the not-found sentinel)
    pub image_url: String,
    /// Short marketing description
    pub description: String,
    /// Discount percentage, when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
}

impl Product {
    /// Name used for the not-found sentinel
    pub const NOT_FOUND_NAME: &'static str = "Unknown Product";

    /// Build the sentinel returned for ids the catalog does not know
    pub fn not_found(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Self::NOT_FOUND_NAME.to_string(),
            price: 99.99,
            image_url: String::new(),
            description: "Product not found".to_string(),
            discount: None,
        }
    }

    /// Whether this is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        self.name == Self::NOT_FOUND_NAME && self.image_url.is_empty()
    }

    /// Price formatted for display, e.g. `$299.99`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Price after the discount is applied
    pub fn sale_price(&self) -> f64 {
        match self.discount {
            Some(pct) => {
                let cents = (self.price * 100.0 * f64::from(100 - pct.min(100)) / 100.0).round();
                cents / 100.0
            }
            None => self.price,
        }
    }
}

/// Read access to the product catalog
pub trait ProductCatalog: Send + Sync {
    /// Look up a product by id, returning the not-found sentinel on a miss
    fn lookup(&self, id: &str) -> Product;

    /// All products in catalog order
    fn all(&self) -> Vec<Product>;
}

/// In-memory catalog seeded with the sample products
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    /// Create the catalog with the built-in sample products
    pub fn new() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Create a catalog over an explicit product list
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticCatalog {
    fn lookup(&self, id: &str) -> Product {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap_or_else(|| Product::not_found(id))
    }

    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}

fn product(
    id: &str,
    name: &str,
    price: f64,
    image_url: &str,
    description: &str,
    discount: Option<u32>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image_url: image_url.to_string(),
        description: description.to_string(),
        discount,
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        product(
            "prod_1",
            "Premium Leather Jacket",
            299.99,
            "https://images.unsplash.com/photo-1551028719-00167b16eac5",
            "Handcrafted Italian leather",
            None,
        ),
        product(
            "prod_2",
            "Silk Evening Dress",
            399.99,
            "https://images.unsplash.com/photo-1595777457583-95e059d581b8",
            "Elegant and timeless",
            None,
        ),
        product(
            "prod_3",
            "Designer Sunglasses",
            159.99,
            "https://images.unsplash.com/photo-1572635196237-14b3f281503f",
            "UV protection with style",
            Some(15),
        ),
        product(
            "prod_4",
            "Cashmere Sweater",
            249.99,
            "https://images.unsplash.com/photo-1576566588028-4147f3842f27",
            "Luxuriously soft",
            None,
        ),
        product(
            "prod_5",
            "Oxford Dress Shoes",
            189.99,
            "https://images.unsplash.com/photo-1614252369475-531eba835eb1",
            "Handmade in Italy",
            Some(25),
        ),
        product(
            "prod_6",
            "Minimalist Watch",
            449.99,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
            "Swiss movement",
            None,
        ),
        product(
            "prod_7",
            "Wool Overcoat",
            499.99,
            "https://images.unsplash.com/photo-1539533018447-63fcce2678e3",
            "Winter elegance",
            None,
        ),
        product(
            "prod_8",
            "Leather Handbag",
            349.99,
            "https://images.unsplash.com/photo-1584917865442-de89df76afd3",
            "Spacious and stylish",
            Some(40),
        ),
    ]
}
