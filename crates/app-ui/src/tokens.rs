//! Design tokens shared by every mode
//!
//! Mode-specific values (colors, font sizes, spacing) live in
//! [`crate::theme`]. The constants here are the mode-independent defaults
//! the component builders fall back to when neither the theme nor the
//! caller says otherwise.

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Product card sizes
    pub mod card {
        /// Card image height (200px)
        pub const IMAGE_HEIGHT: f64 = 200.0;
        /// Inner padding of a card body (12px)
        pub const CONTENT_PADDING: f64 = 12.0;
        /// Carousel card width (200px)
        pub const CAROUSEL_WIDTH: f64 = 200.0;
        /// Carousel row height (320px)
        pub const CAROUSEL_HEIGHT: f64 = 320.0;
    }

    /// Banner sizes
    pub mod banner {
        /// Default banner height (200px)
        pub const HEIGHT: f64 = 200.0;
    }

    /// Horizontal list sizes
    pub mod list {
        /// Row height (140px)
        pub const HEIGHT: f64 = 140.0;
        /// Tile width (130px)
        pub const ITEM_WIDTH: f64 = 130.0;
    }

    /// Avatar sizes
    pub mod avatar {
        /// Profile header avatar (100px)
        pub const PROFILE: f64 = 100.0;
    }

    /// Rating star size (20px)
    pub const STAR: f64 = 20.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f64 = 0.0;
    /// Pill radius for badges and chips (20px)
    pub const PILL: f64 = 20.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Card elevation levels
pub mod elevation {
    /// Resting on the surface
    pub const FLAT: f64 = 1.0;
    /// Default card lift
    pub const RAISED: f64 = 2.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font sizes that do not scale with the mode palette
pub mod font {
    /// Promo badge text (12px)
    pub const BADGE: f64 = 12.0;
}

// =============================================================================
// Layout Tokens
// =============================================================================

/// Grid defaults
pub mod grid {
    /// Default column count
    pub const COLUMNS: u32 = 2;
    /// Portrait card aspect ratio (3:4)
    pub const ASPECT_RATIO: f64 = 0.75;
}

/// Rating widget defaults
pub mod rating {
    /// Number of stars drawn
    pub const MAX_STARS: u32 = 5;
}

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Animated banner entrance (1000ms)
    pub const BANNER: u32 = 1000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tokens() {
        assert!(sizing::card::IMAGE_HEIGHT > sizing::card::CONTENT_PADDING);
        assert!(sizing::card::CAROUSEL_HEIGHT > sizing::card::IMAGE_HEIGHT);
    }

    #[test]
    fn test_radius_ordering() {
        assert!(radius::NONE < radius::PILL);
    }

    #[test]
    fn test_elevation_ordering() {
        assert!(elevation::FLAT < elevation::RAISED);
    }

    #[test]
    fn test_grid_defaults() {
        assert_eq!(grid::COLUMNS, 2);
        assert!(grid::ASPECT_RATIO > 0.0 && grid::ASPECT_RATIO < 1.0);
    }
}
