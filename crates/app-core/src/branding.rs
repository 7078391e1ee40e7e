//! Shapeshift Branding
//!
//! Naming and version constants stamped into every descriptor and log line.

/// Application name
pub const APP_NAME: &str = "Shapeshift Store";

/// Application name short form
pub const APP_NAME_SHORT: &str = "Shapeshift";

/// Application tagline
pub const APP_TAGLINE: &str = "A storefront that changes with the clock";

/// Crate version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Descriptor format version reported in `metadata.version`
///
/// Clients compare this against the formats they know how to interpret, so
/// it moves independently of the crate version.
pub const DESCRIPTOR_VERSION: &str = "2.0.0";

/// Generator name reported in `metadata.generated_by`
pub const GENERATED_BY: &str = "SDUI Engine";

/// Brand colors shared by every mode palette
pub mod colors {
    /// Success green used for checkout and free-shipping badges
    pub const SUCCESS: &str = "#4CAF50";

    /// Rating star gold
    pub const STAR: &str = "#FFD700";

    /// Plain white
    pub const WHITE: &str = "#FFFFFF";
}

/// Startup banner listing the service endpoints
pub fn endpoint_summary() -> Vec<&'static str> {
    vec![
        "GET  /api/ui-config?screen=<name>",
        "GET  /api/products/<id>",
        "POST /api/analytics",
        "GET  /health",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "Shapeshift Store");
        assert_eq!(APP_NAME_SHORT, "Shapeshift");
    }

    #[test]
    fn test_app_version() {
        assert!(!APP_VERSION.is_empty());
        let parts: Vec<&str> = APP_VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_descriptor_version_is_semver() {
        let parts: Vec<&str> = DESCRIPTOR_VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
    }

    #[test]
    fn test_brand_colors() {
        for color in [colors::SUCCESS, colors::STAR, colors::WHITE] {
            assert!(color.starts_with('#'), "Color should start with #: {}", color);
            assert_eq!(color.len(), 7, "Color should be #RRGGBB: {}", color);
        }
    }

    #[test]
    fn test_endpoint_summary() {
        let endpoints = endpoint_summary();
        assert_eq!(endpoints.len(), 4);
        assert!(endpoints.iter().any(|e| e.contains("ui-config")));
    }
}
