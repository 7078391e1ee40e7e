//! Curated showcase listings
//!
//! Hand-picked product cards, stories and categories that the home
//! compositions place on screen for each time-of-day mode. These are
//! sample merchandising data, separate from the catalog proper.

use serde::{Deserialize, Serialize, Serializer};

/// A product card as rendered inside grids and carousels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Card identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Current price
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    /// Price before discount
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_price"
    )]
    pub original_price: Option<f64>,
    /// Discount percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Average rating (0-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Corner badge text (e.g. "NEW", "FLASH")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Whether the shopper has favorited this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    /// Thumbnail URL
    pub image_url: String,
}

/// Whole prices go out as integers (`189`, not `189.0`)
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

fn serialize_optional_price<S: Serializer>(
    price: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match price {
        Some(price) => serialize_price(price, serializer),
        None => serializer.serialize_none(),
    }
}

impl ProductCard {
    /// Create a card with only the required fields
    pub fn new(id: &str, name: &str, price: f64, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            original_price: None,
            discount: None,
            rating: None,
            review_count: None,
            badge: None,
            is_favorite: None,
            image_url: image_url.to_string(),
        }
    }

    /// Mark the card as discounted from `original_price`
    pub fn with_sale(mut self, original_price: f64, discount: u32) -> Self {
        self.original_price = Some(original_price);
        self.discount = Some(discount);
        self
    }

    /// Set rating and review count
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(review_count);
        self
    }

    /// Set the corner badge
    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    /// Set favorite state
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = Some(is_favorite);
        self
    }
}

/// A story bubble in a `story_circle` strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Story identifier
    pub id: String,
    /// Caption under the bubble
    pub name: String,
    /// Whether the shopper has already seen it
    pub viewed: bool,
    /// Bubble image URL
    pub image_url: String,
}

/// A selectable category chip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: String,
    /// Chip label
    pub name: String,
}

/// An image tile in a `horizontal_list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Tile identifier
    pub id: String,
    /// Tile caption
    pub title: String,
    /// Tile image URL
    pub image_url: String,
}

fn placeholder(size: &str, bg: &str, fg: &str, text: &str) -> String {
    format!("https://via.placeholder.com/{}/{}/{}?text={}", size, bg, fg, text)
}

/// Minimal single-column picks for late-night browsing
pub fn midnight_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("p1", "Midnight Silk Robe", 189.0, &placeholder("200", "1A1A2E", "FFFFFF", "Silk+Robe")),
        ProductCard::new("p2", "Noir Leather Wallet", 129.0, &placeholder("200", "2C2C3E", "FFFFFF", "Wallet")),
        ProductCard::new("p3", "Dark Essence Fragrance", 159.0, &placeholder("200", "1A1A2E", "FFFFFF", "Fragrance")),
    ]
}

/// Early-bird carousel
pub fn morning_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("m1", "Morning Brew Coffee Maker", 79.0, &placeholder("200", "FF9800", "FFFFFF", "Coffee"))
            .with_sale(99.0, 20)
            .with_rating(4.5, 128)
            .with_badge("NEW")
            .favorite(false),
        ProductCard::new("m2", "Sunrise Yoga Mat", 45.0, &placeholder("200", "FFC107", "FFFFFF", "Yoga+Mat"))
            .with_sale(60.0, 25)
            .with_rating(4.8, 95)
            .favorite(true),
        ProductCard::new("m3", "Fresh Start Smoothie Blender", 89.0, &placeholder("200", "FF9800", "FFFFFF", "Blender"))
            .with_rating(4.6, 203)
            .with_badge("SALE")
            .favorite(false),
    ]
}

/// Dense lunch-hour flash deals
pub fn flash_sale_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("fs1", "Wireless Earbuds", 39.0, &placeholder("200", "FF4757", "FFFFFF", "Earbuds"))
            .with_sale(99.0, 60)
            .with_rating(4.3, 542)
            .with_badge("FLASH")
            .favorite(false),
        ProductCard::new("fs2", "Smart Watch", 89.0, &placeholder("200", "FF6B6B", "FFFFFF", "Watch"))
            .with_sale(199.0, 55)
            .with_rating(4.7, 287)
            .with_badge("FLASH")
            .favorite(true),
        ProductCard::new("fs3", "Portable Speaker", 29.0, &placeholder("200", "FF4757", "FFFFFF", "Speaker"))
            .with_sale(79.0, 63)
            .with_rating(4.4, 134)
            .with_badge("FLASH")
            .favorite(false),
        ProductCard::new("fs4", "Fitness Tracker", 19.0, &placeholder("200", "FF6B6B", "FFFFFF", "Fitness"))
            .with_sale(49.0, 61)
            .with_rating(4.2, 89)
            .with_badge("FLASH")
            .favorite(false),
    ]
}

/// Afternoon discovery grid
pub fn afternoon_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("a1", "Wireless Earbuds Pro", 149.0, &placeholder("200", "00BCD4", "FFFFFF", "Earbuds"))
            .with_sale(199.0, 25)
            .with_rating(4.7, 342)
            .favorite(true),
        ProductCard::new("a2", "Smart Watch Series 5", 299.0, &placeholder("200", "00ACC1", "FFFFFF", "Watch"))
            .with_rating(4.9, 587)
            .with_badge("NEW")
            .favorite(false),
        ProductCard::new("a3", "Portable Speaker", 89.0, &placeholder("200", "0097A7", "FFFFFF", "Speaker"))
            .with_sale(120.0, 26)
            .with_rating(4.5, 234)
            .favorite(false),
        ProductCard::new("a4", "USB-C Hub", 59.0, &placeholder("200", "00838F", "FFFFFF", "Hub"))
            .with_rating(4.6, 156)
            .favorite(false),
    ]
}

/// Premium evening collection
pub fn evening_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("e1", "Premium Leather Jacket", 299.0, &placeholder("200", "6C5CE7", "FFFFFF", "Jacket"))
            .with_rating(4.9, 128)
            .with_badge("PREMIUM")
            .favorite(true),
        ProductCard::new("e2", "Silk Evening Dress", 189.0, &placeholder("200", "A29BFE", "FFFFFF", "Dress"))
            .with_rating(4.8, 95)
            .favorite(false),
        ProductCard::new("e3", "Gold-Plated Watch", 459.0, &placeholder("200", "6C5CE7", "FFFFFF", "Watch"))
            .with_rating(4.9, 67)
            .with_badge("LUXURY")
            .favorite(true),
        ProductCard::new("e4", "Designer Handbag", 389.0, &placeholder("200", "A29BFE", "FFFFFF", "Handbag"))
            .with_rating(4.7, 203)
            .favorite(false),
    ]
}

/// Night boutique picks
pub fn night_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("n1", "Midnight Crystal Necklace", 599.0, &placeholder("200", "1A1A2E", "FFD700", "Necklace"))
            .with_rating(5.0, 42)
            .with_badge("BOUTIQUE")
            .favorite(true),
        ProductCard::new("n2", "Black Diamond Ring", 899.0, &placeholder("200", "2C2C3E", "FFD700", "Ring"))
            .with_rating(4.9, 28)
            .favorite(false),
        ProductCard::new("n3", "Limited Edition Perfume", 249.0, &placeholder("200", "1A1A2E", "FFD700", "Perfume"))
            .with_rating(4.8, 56)
            .with_badge("EXCLUSIVE")
            .favorite(true),
    ]
}

/// Everyday grid, also used by the favorites screen
pub fn day_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("d1", "Casual T-Shirt", 29.0, &placeholder("200", "3498DB", "FFFFFF", "T-Shirt"))
            .with_sale(39.0, 26)
            .with_rating(4.5, 128)
            .with_badge("SALE")
            .favorite(false),
        ProductCard::new("d2", "Denim Jeans", 59.0, &placeholder("200", "2C3E50", "FFFFFF", "Jeans"))
            .with_rating(4.7, 256)
            .favorite(true),
        ProductCard::new("d3", "Running Shoes", 89.0, &placeholder("200", "3498DB", "FFFFFF", "Shoes"))
            .with_sale(120.0, 26)
            .with_rating(4.8, 342)
            .with_badge("POPULAR")
            .favorite(false),
        ProductCard::new("d4", "Backpack", 49.0, &placeholder("200", "2C3E50", "FFFFFF", "Backpack"))
            .with_rating(4.6, 189)
            .favorite(false),
    ]
}

/// Story strip shown in the morning
pub fn morning_stories() -> Vec<Story> {
    [
        ("s1", "New In", false, "FF9800", "New"),
        ("s2", "Sale", false, "FFC107", "Sale"),
        ("s3", "Trending", true, "FF9800", "Hot"),
        ("s4", "Deals", false, "FFC107", "Deals"),
    ]
    .into_iter()
    .map(|(id, name, viewed, bg, text)| Story {
        id: id.to_string(),
        name: name.to_string(),
        viewed,
        image_url: placeholder("70", bg, "FFFFFF", text),
    })
    .collect()
}

/// Category chips shown in the morning
pub fn morning_categories() -> Vec<Category> {
    ["New In", "Trending", "Sale", "Premium"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Department tiles shown in the afternoon
pub fn afternoon_departments() -> Vec<ListItem> {
    [
        ("cat1", "Electronics", "00BCD4"),
        ("cat2", "Fashion", "00ACC1"),
        ("cat3", "Home", "0097A7"),
        ("cat4", "Sports", "00838F"),
    ]
    .into_iter()
    .map(|(id, title, bg)| ListItem {
        id: id.to_string(),
        title: title.to_string(),
        image_url: placeholder("130x100", bg, "FFFFFF", title),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_listings() -> Vec<Vec<ProductCard>> {
        vec![
            midnight_products(),
            morning_products(),
            flash_sale_products(),
            afternoon_products(),
            evening_products(),
            night_products(),
            day_products(),
        ]
    }

    #[test]
    fn test_listings_are_non_empty_with_unique_ids() {
        for listing in all_listings() {
            assert!(!listing.is_empty());
            let mut ids: Vec<_> = listing.iter().map(|c| c.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), listing.len());
        }
    }

    #[test]
    fn test_sale_cards_are_cheaper_than_original() {
        for card in all_listings().into_iter().flatten() {
            if let Some(original) = card.original_price {
                assert!(card.price < original, "{} is not discounted", card.id);
                assert!(card.discount.is_some());
            }
        }
    }

    #[test]
    fn test_flash_sale_cards_all_badged() {
        assert!(flash_sale_products()
            .iter()
            .all(|c| c.badge.as_deref() == Some("FLASH")));
    }

    #[test]
    fn test_midnight_cards_are_minimal() {
        let json = serde_json::to_value(&midnight_products()[0]).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "image_url", "name", "price"]);
    }

    #[test]
    fn test_whole_prices_serialize_as_integers() {
        let json = serde_json::to_value(&midnight_products()[0]).unwrap();
        assert_eq!(json["price"], serde_json::json!(189));
        assert!(json["price"].is_u64());

        let sale = ProductCard::new("x", "Sale", 19.99, "").with_sale(40.0, 50);
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["price"], serde_json::json!(19.99));
        assert!(json["original_price"].is_u64());

        let parsed: ProductCard = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sale);
    }

    #[test]
    fn test_morning_stories_and_categories() {
        let stories = morning_stories();
        assert_eq!(stories.len(), 4);
        assert!(stories[2].viewed);
        assert!(stories[0].image_url.contains("text=New"));

        let categories = morning_categories();
        assert_eq!(categories[0].id, "1");
        assert_eq!(categories[3].name, "Premium");
    }

    #[test]
    fn test_afternoon_departments() {
        let tiles = afternoon_departments();
        assert_eq!(tiles.len(), 4);
        assert_eq!(
            tiles[0].image_url,
            "https://via.placeholder.com/130x100/00BCD4/FFFFFF?text=Electronics"
        );
    }
}
