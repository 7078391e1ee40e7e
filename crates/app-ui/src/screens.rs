//! Screen composition
//!
//! [`ScreenComposer`] turns `(route, mode, params)` into a
//! [`ScreenDescriptor`]. Routing is a fixed table over [`Screen`]; any
//! route it does not know composes the home screen.
//!
//! The home screen has one hand-curated arrangement per [`Mode`]. The
//! secondary screens (product, cart, search, favorites, profile) have a
//! single arrangement each and only pick up the mode through its palette.

use crate::components::{
    Action, Alignment, Avatar, Banner, Button, CategoryChips, ComponentNode, Container,
    CountdownTimer, Header, HorizontalList, Image, ProductCarousel, ProductGrid, PromoBadge,
    Rating, SearchBar, Spacer, StoryCircle, StyleProps, Styled, Template, TestimonialCard,
};
use crate::descriptor::{Context, LayoutType, Metadata, ScreenDescriptor, ScreenParams};
use crate::mode::Mode;
use crate::navigation::{navigation_for, Screen};
use crate::theme::{theme_for, ThemeTokens};
use crate::tokens::elevation;
use app_core::branding::colors;
use app_core::showcase;
use app_core::{Product, ProductCatalog, StaticCatalog};
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tracing::debug;

/// Builds descriptors; shared read-only across requests
#[derive(Clone)]
pub struct ScreenComposer {
    catalog: Arc<dyn ProductCatalog>,
}

impl Default for ScreenComposer {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::new()))
    }
}

impl ScreenComposer {
    /// Composer reading products from `catalog`
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Compose the screen for `route` in `mode`, stamped with `now`
    pub fn compose(
        &self,
        route: &str,
        mode: Mode,
        params: &ScreenParams,
        now: DateTime<FixedOffset>,
    ) -> ScreenDescriptor {
        let screen = Screen::from_route(route).unwrap_or_else(|| {
            debug!(route, "Unknown route, composing home");
            Screen::Home
        });
        let theme = theme_for(mode);

        let (layout_type, components) = match screen {
            Screen::Home => (LayoutType::Scroll, home_components(mode, &theme)),
            Screen::Product => {
                let product = self.catalog.lookup(params.get("id").map_or("", String::as_str));
                (LayoutType::Scroll, product_components(&product, &theme))
            }
            Screen::Cart => (LayoutType::Scroll, cart_components(&theme)),
            Screen::Profile => (LayoutType::Scroll, profile_components(&theme)),
            Screen::Search => (LayoutType::Scroll, search_components(&theme)),
            Screen::Favorites => (LayoutType::Grid, favorites_components(&theme)),
        };

        debug!(
            screen = screen.screen_id(),
            %mode,
            components = components.len(),
            "Composed screen"
        );

        ScreenDescriptor {
            screen_id: screen.screen_id().to_string(),
            layout_type,
            theme,
            components,
            navigation: navigation_for(screen.path(), mode),
            metadata: Metadata::new(mode, &now),
        }
    }

    /// Compose the screen a request context asks for
    pub fn compose_context(&self, ctx: &Context, mode: Mode) -> ScreenDescriptor {
        debug!(route = %ctx.route, user = ?ctx.user_id, %mode, "Composing for request");
        self.compose(&ctx.route, mode, &ctx.screen_params, ctx.now)
    }
}

// =============================================================================
// Home Screen
// =============================================================================

type Routine = fn(&ThemeTokens) -> Vec<ComponentNode>;

/// Home components for a mode
pub fn home_components(mode: Mode, theme: &ThemeTokens) -> Vec<ComponentNode> {
    let routine: Routine = match mode {
        Mode::LateNight => late_night_home,
        Mode::Morning => morning_home,
        Mode::Day => day_home,
        Mode::FlashSale => flash_sale_home,
        Mode::Afternoon => afternoon_home,
        Mode::Evening => evening_home,
        Mode::Night => night_home,
    };
    routine(theme)
}

/// One calm header and a single column of products
fn late_night_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("night-message", "Still browsing?")
            .with_subtitle("Here's what you might like")
            .with_alignment(Alignment::Center)
            .with_icon("star")
            .with_style(
                StyleProps::new()
                    .with_padding(24.0)
                    .with_color(colors::WHITE)
                    .with_background("#1A1A1A")
                    .with_radius(12.0),
            )
            .build(theme),
        Spacer::new("spacer").with_height(20.0).build(theme),
        ProductGrid::new("minimal-products", showcase::midnight_products())
            .with_columns(1)
            .with_spacing(20.0)
            .with_aspect_ratio(1.5)
            .with_style(
                StyleProps::new()
                    .with_radius(12.0)
                    .set("showDiscount", false)
                    .set("showRating", false)
                    .set("titleSize", 18.0)
                    .set("priceSize", 20.0)
                    .set("priceColor", colors::WHITE)
                    .set("elevation", elevation::FLAT),
            )
            .build(theme),
    ]
}

fn morning_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("morning-greeting", "Good Morning, People! ☀️")
            .with_subtitle("Start your day with great finds")
            .with_alignment(Alignment::Left)
            .with_style(StyleProps::new().with_padding(20.0))
            .build(theme),
        SearchBar::new("search", "What are you looking for?")
            .with_filter(true)
            .with_style(
                StyleProps::new()
                    .with_margin(16.0)
                    .with_background(colors::WHITE)
                    .with_radius(12.0),
            )
            .build(theme),
        StoryCircle::new("morning-stories", showcase::morning_stories()).build(theme),
        Banner::new("morning-deals", "Early Bird Specials")
            .with_subtitle("Extra 15% off before 9 AM")
            .with_button("Shop Now")
            .with_height(180.0)
            .with_action(Action::navigate("/deals"))
            .with_style(StyleProps::new().with_gradient(theme.gradient()))
            .build(theme),
        CategoryChips::new("categories", showcase::morning_categories())
            .with_selected("1")
            .build(theme),
        ProductCarousel::new("featured-products", showcase::morning_products())
            .with_style(
                StyleProps::new()
                    .set("spacing", 12.0)
                    .with_radius(12.0)
                    .set("imageHeight", 180.0),
            )
            .build(theme),
        TestimonialCard::new(
            "review",
            "Sarah M.",
            "Love shopping here in the morning! The early bird deals are amazing and delivery is always on time.",
        )
        .with_subtitle("Verified Buyer")
        .with_rating(5.0)
        .build(theme),
    ]
}

/// The standard storefront, mostly on palette defaults
fn day_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("header", "Welcome Back")
            .with_subtitle("What are you shopping for today?")
            .with_alignment(Alignment::Left)
            .build(theme),
        Banner::new("promo-banner", "New Arrivals")
            .with_subtitle("Fresh styles just in")
            .with_alignment(Alignment::CenterLeft)
            .with_style(
                StyleProps::new()
                    .with_background(&theme.accent_color)
                    .with_radius(16.0),
            )
            .build(theme),
        ProductGrid::new("products", showcase::day_products()).build(theme),
    ]
}

/// Countdown, promo badges, a dense grid and an urgency notice
fn flash_sale_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    let badge_style = || StyleProps::new().set("paddingX", 16.0).set("paddingY", 8.0);

    vec![
        CountdownTimer::new("flash-countdown", "⚡ FLASH SALE ENDS IN", "1:47:23")
            .with_icon(true)
            .with_style(StyleProps::new().with_padding(14.0))
            .build(theme),
        Container::row("promo-row")
            .with_alignment(Alignment::SpaceEvenly)
            .with_style(StyleProps::new().with_padding(12.0))
            .with_child(
                PromoBadge::new("badge1", "UP TO 70% OFF")
                    .with_style(badge_style())
                    .build(theme),
            )
            .with_child(
                PromoBadge::new("badge2", "FREE SHIPPING")
                    .with_style(badge_style().with_background(colors::SUCCESS))
                    .build(theme),
            )
            .build(theme),
        ProductGrid::new("flash-products", showcase::flash_sale_products())
            .with_aspect_ratio(0.68)
            .with_style(
                StyleProps::new()
                    .set("imageHeight", 130.0)
                    .set("showRating", false)
                    .set("showFavorite", false)
                    .set("titleSize", 13.0)
                    .set("elevation", elevation::FLAT)
                    .set("contentPadding", 8.0),
            )
            .build(theme),
        Container::new("urgency")
            .with_style(
                StyleProps::new()
                    .with_background("#FFF3CD")
                    .with_margin(8.0)
                    .with_radius(8.0)
                    .set("borderColor", "#FFB800")
                    .set("borderWidth", 2.0),
            )
            .with_child(
                Header::new("urgency-text", "⚠️ Limited Stock!")
                    .with_subtitle("Items selling fast. Don't miss out!")
                    .with_alignment(Alignment::Center)
                    .with_style(
                        StyleProps::new()
                            .with_font_size(16.0)
                            .with_color("#856404")
                            .with_padding(0.0)
                            .set("subtitleSize", 13.0),
                    )
                    .build(theme),
            )
            .build(theme),
    ]
}

fn afternoon_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("afternoon-header", "Discover Something New")
            .with_subtitle("Curated picks just for you")
            .with_alignment(Alignment::Left)
            .with_style(StyleProps::new().with_padding(18.0))
            .build(theme),
        HorizontalList::new("categories-horizontal", showcase::afternoon_departments())
            .with_style(StyleProps::new().set("spacing", 12.0))
            .build(theme),
        Banner::new("afternoon-banner", "Midday Break Deals")
            .with_subtitle("Take a break, save big")
            .with_button("Browse Deals")
            .with_alignment(Alignment::Center)
            .with_style(StyleProps::new().with_radius(14.0))
            .build(theme),
        ProductGrid::new("afternoon-products", showcase::afternoon_products())
            .with_spacing(14.0)
            .with_style(
                StyleProps::new()
                    .set("titleSize", 17.0)
                    .set("priceSize", 19.0),
            )
            .build(theme),
    ]
}

fn evening_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("evening-header", "Evening Selections")
            .with_subtitle("Curated with care for tonight")
            .with_alignment(Alignment::Center)
            .with_icon("star")
            .with_style(
                StyleProps::new()
                    .with_padding(20.0)
                    .set("subtitleSize", 18.0)
                    .set("subtitleColor", theme.accent_color.as_str())
                    .set("subtitleSpacing", 10.0)
                    .set("iconSize", 32.0)
                    .set("letterSpacing", 0.5),
            )
            .build(theme),
        Banner::new("evening-banner", "Sunset Collection")
            .with_subtitle("Premium pieces for your evening")
            .with_button("Explore")
            .with_height(300.0)
            .animated()
            .with_style(
                StyleProps::new()
                    .with_radius(18.0)
                    .with_margin(20.0)
                    .set("titleSize", 32.0)
                    .set("subtitleSize", 18.0)
                    .with_gradient(theme.gradient()),
            )
            .build(theme),
        ProductCarousel::new("featured-carousel", showcase::evening_products())
            .with_height(350.0)
            .with_card_width(240.0)
            .with_style(
                StyleProps::new()
                    .with_padding(20.0)
                    .set("spacing", 16.0)
                    .set("imageHeight", 220.0)
                    .set("showDiscount", false)
                    .set("titleSize", 19.0)
                    .set("priceSize", 22.0)
                    .set("elevation", 4.0)
                    .set("contentPadding", 14.0),
            )
            .build(theme),
        ProductGrid::new("evening-grid", showcase::evening_products())
            .with_aspect_ratio(0.8)
            .with_style(
                StyleProps::new()
                    .set("imageHeight", 220.0)
                    .set("showDiscount", false)
                    .set("titleSize", 18.0)
                    .set("priceSize", 20.0)
                    .set("elevation", 3.0)
                    .set("contentPadding", 14.0),
            )
            .build(theme),
    ]
}

/// A tall hero and a single column of large cards
fn night_home(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Banner::new("night-hero", "Midnight Collection")
            .with_subtitle("Curated elegance for the night")
            .with_height(400.0)
            .with_alignment(Alignment::CenterLeft)
            .with_style(
                StyleProps::new()
                    .with_background("#1A1A2E")
                    .with_margin(24.0)
                    .set("titleSize", 40.0)
                    .set("subtitleSize", 20.0)
                    .set("contentPadding", 32.0),
            )
            .build(theme),
        Spacer::new("spacer").with_height(32.0).build(theme),
        ProductGrid::new("night-products", showcase::night_products())
            .with_columns(1)
            .with_spacing(24.0)
            .with_aspect_ratio(1.2)
            .with_style(
                StyleProps::new()
                    .set("imageHeight", 300.0)
                    .set("showDiscount", false)
                    .set("showRating", false)
                    .set("titleSize", 24.0)
                    .set("priceSize", 28.0)
                    .set("priceColor", colors::STAR)
                    .set("contentPadding", 16.0),
            )
            .build(theme),
    ]
}

// =============================================================================
// Secondary Screens
// =============================================================================

fn product_image_url(product: &Product) -> String {
    if product.image_url.is_empty() {
        format!(
            "https://via.placeholder.com/400x500/6C5CE7/FFFFFF?text=Product+{}",
            product.id
        )
    } else {
        product.image_url.clone()
    }
}

fn product_components(product: &Product, theme: &ThemeTokens) -> Vec<ComponentNode> {
    let mut details = vec![
        Header::new("title", product.name.as_str())
            .with_subtitle(product.description.as_str())
            .with_style(StyleProps::new().with_font_size(28.0).with_padding(0.0))
            .build(theme),
        Rating::new("rating", 4.8).build(theme),
    ];

    let price = match product.discount {
        Some(pct) => {
            details.push(
                PromoBadge::new("discount-badge", format!("{}% OFF", pct))
                    .with_style(StyleProps::new().set("paddingX", 16.0).set("paddingY", 8.0))
                    .build(theme),
            );
            Header::new("price", format!("${:.2}", product.sale_price()))
                .with_subtitle(format!("Was {}", product.display_price()))
        }
        None => Header::new("price", product.display_price()),
    };
    details.push(
        price
            .with_style(
                StyleProps::new()
                    .with_font_size(36.0)
                    .set("fontWeight", "bold")
                    .with_padding(8.0),
            )
            .build(theme),
    );

    details.push(
        Button::new("buy-button", "Add to Cart")
            .full_width()
            .with_icon("cart")
            .with_action(Action::command("add_to_cart"))
            .with_style(
                StyleProps::new()
                    .with_background(colors::SUCCESS)
                    .set("paddingY", 18.0)
                    .with_radius(12.0),
            )
            .build(theme),
    );

    vec![
        Image::new("product-images", product_image_url(product))
            .with_size(400.0, 500.0)
            .build(theme),
        Container::new("product-info")
            .with_style(
                StyleProps::new()
                    .with_padding(24.0)
                    .with_background(&theme.background_color),
            )
            .with_children(details)
            .build(theme),
    ]
}

fn cart_components(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![
        Header::new("cart-header", "Shopping Cart")
            .with_subtitle("3 items")
            .build(theme),
        Button::new("checkout-button", "Proceed to Checkout - $589.97")
            .full_width()
            .with_action(Action::command("checkout"))
            .with_style(StyleProps::new().with_background(colors::SUCCESS))
            .build(theme),
    ]
}

fn search_components(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![SearchBar::new("search-input", "Search products...")
        .with_filter(true)
        .build(theme)]
}

fn favorites_components(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![ProductGrid::new("favorites-grid", showcase::day_products()).build(theme)]
}

fn profile_components(theme: &ThemeTokens) -> Vec<ComponentNode> {
    vec![Avatar::new("avatar", "John Doe").build(theme)]
}
