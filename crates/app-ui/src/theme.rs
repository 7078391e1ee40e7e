//! Mode palettes
//!
//! Every [`Mode`] owns one fixed set of visual tokens: colors, a font size
//! per typographic role, a spacing scale and a corner radius. Palettes are
//! constants; nothing at request time overrides them.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::mode::Mode;
//! use app_ui::theme::theme_for;
//!
//! let theme = theme_for(Mode::Night);
//! assert!(theme.is_dark);
//! assert_eq!(theme.font_sizes.headline, 40.0);
//! ```

use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// A linear gradient as clients expect it in a `gradient` style entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Color stops, evenly spaced
    pub colors: Vec<Color>,
}

impl Gradient {
    /// Create a gradient from color stops
    pub fn new(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl From<Gradient> for Value {
    fn from(gradient: Gradient) -> Self {
        json!({ "colors": gradient.colors })
    }
}

// =============================================================================
// Typography and Spacing Scales
// =============================================================================

/// Font size per typographic role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Screen headline
    pub headline: f64,
    /// Section and card titles
    pub title: f64,
    /// Body copy
    pub body: f64,
    /// Captions and fine print
    pub caption: f64,
}

impl FontSizes {
    /// Role names every palette must define
    pub const ROLES: [&'static str; 4] = ["headline", "title", "body", "caption"];

    /// Look up a size by role name
    pub fn get(&self, role: &str) -> Option<f64> {
        match role {
            "headline" => Some(self.headline),
            "title" => Some(self.title),
            "body" => Some(self.body),
            "caption" => Some(self.caption),
            _ => None,
        }
    }
}

/// Spacing scale in t-shirt sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Extra small
    pub xs: f64,
    /// Small
    pub sm: f64,
    /// Medium
    pub md: f64,
    /// Large
    pub lg: f64,
    /// Extra large
    pub xl: f64,
}

impl SpacingScale {
    /// Scale names every palette must define
    pub const SCALES: [&'static str; 5] = ["xs", "sm", "md", "lg", "xl"];

    /// The 4px-based scale most modes share
    pub const STANDARD: SpacingScale = SpacingScale {
        xs: 4.0,
        sm: 8.0,
        md: 16.0,
        lg: 24.0,
        xl: 32.0,
    };

    /// Look up a spacing value by scale name
    pub fn get(&self, scale: &str) -> Option<f64> {
        match scale {
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            _ => None,
        }
    }
}

// =============================================================================
// Theme Tokens
// =============================================================================

/// Complete visual tokens for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Whether clients should use dark system chrome
    #[serde(rename = "is_dark_mode")]
    pub is_dark: bool,
    /// Brand color for headings and prices
    pub primary_color: Color,
    /// Screen background
    pub background_color: Color,
    /// Secondary highlight color
    pub accent_color: Color,
    /// Font size per role
    pub font_sizes: FontSizes,
    /// Default corner radius
    pub border_radius: f64,
    /// Spacing scale
    pub spacing: SpacingScale,
}

impl ThemeTokens {
    /// Primary-to-accent gradient used by hero banners
    pub fn gradient(&self) -> Gradient {
        Gradient {
            colors: vec![self.primary_color.clone(), self.accent_color.clone()],
        }
    }

    /// Foreground color that reads on this theme's background
    pub fn text_color(&self) -> &'static str {
        if self.is_dark {
            "#FFFFFF"
        } else {
            "#000000"
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn tokens(
    is_dark: bool,
    primary: &str,
    background: &str,
    accent: &str,
    font: [f64; 4],
    border_radius: f64,
    spacing: SpacingScale,
) -> ThemeTokens {
    let [headline, title, body, caption] = font;
    ThemeTokens {
        is_dark,
        primary_color: primary.to_string(),
        background_color: background.to_string(),
        accent_color: accent.to_string(),
        font_sizes: FontSizes {
            headline,
            title,
            body,
            caption,
        },
        border_radius,
        spacing,
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Palette for a mode
pub fn theme_for(mode: Mode) -> ThemeTokens {
    match mode {
        Mode::LateNight => tokens(
            true,
            "#0A0A0A",
            "#000000",
            "#555555",
            [24.0, 18.0, 14.0, 11.0],
            8.0,
            SpacingScale::STANDARD,
        ),
        Mode::Morning => tokens(
            false,
            "#FF9800",
            "#FFFBF5",
            "#FFC107",
            [34.0, 20.0, 16.0, 12.0],
            16.0,
            SpacingScale::STANDARD,
        ),
        Mode::Day => day_theme(),
        Mode::FlashSale => tokens(
            false,
            "#FF4757",
            "#FFFFFF",
            "#FF6B6B",
            [28.0, 18.0, 14.0, 11.0],
            8.0,
            SpacingScale {
                xs: 2.0,
                sm: 4.0,
                md: 8.0,
                lg: 12.0,
                xl: 16.0,
            },
        ),
        Mode::Afternoon => tokens(
            false,
            "#00BCD4",
            "#F0F8FF",
            "#00ACC1",
            [30.0, 19.0, 15.0, 12.0],
            12.0,
            SpacingScale::STANDARD,
        ),
        Mode::Evening => tokens(
            false,
            "#6C5CE7",
            "#FAF9F6",
            "#A29BFE",
            [36.0, 22.0, 17.0, 13.0],
            16.0,
            SpacingScale {
                xs: 4.0,
                sm: 8.0,
                md: 18.0,
                lg: 28.0,
                xl: 40.0,
            },
        ),
        Mode::Night => tokens(
            true,
            "#1A1A1A",
            "#0A0A0A",
            "#FFD700",
            [40.0, 28.0, 18.0, 14.0],
            20.0,
            SpacingScale {
                xs: 4.0,
                sm: 8.0,
                md: 20.0,
                lg: 32.0,
                xl: 48.0,
            },
        ),
    }
}

/// The standard daytime palette, also the fallback for unknown modes
pub fn day_theme() -> ThemeTokens {
    tokens(
        false,
        "#2C3E50",
        "#FFFFFF",
        "#3498DB",
        [32.0, 20.0, 16.0, 12.0],
        12.0,
        SpacingScale::STANDARD,
    )
}

/// Palette for a mode given by name; unknown names get the day palette
pub fn theme_for_name(name: &str) -> ThemeTokens {
    match name.parse::<Mode>() {
        Ok(mode) => theme_for(mode),
        Err(_) => day_theme(),
    }
}

/// Every mode paired with its palette, in clock order
pub fn all_themes() -> Vec<(Mode, ThemeTokens)> {
    Mode::ALL.into_iter().map(|m| (m, theme_for(m))).collect()
}
