//! Navigation resolution
//!
//! This module computes the tab bar and header state for one request:
//! - Which of the five canonical tabs a mode shows, and in what order
//! - Mode-specific tab labels
//! - Active-tab detection from the current route
//! - Screen titles and back-button visibility
//!
//! Everything is a pure function of `(route, mode)`; nothing is cached
//! between requests.

use crate::components::Action;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Routes and Screens
// =============================================================================

/// Root route
pub const ROOT: &str = "/";

/// Map the home aliases (`""`, `"home"`) to `/`; other routes are unchanged
pub fn normalize_route(route: &str) -> &str {
    match route {
        "" | "home" => ROOT,
        other => other,
    }
}

/// Screens the composer knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Mode-specific storefront
    Home,
    /// Product details
    Product,
    /// Shopping cart
    Cart,
    /// User profile
    Profile,
    /// Product search
    Search,
    /// Saved products
    Favorites,
}

impl Screen {
    /// Every screen
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Product,
        Screen::Cart,
        Screen::Profile,
        Screen::Search,
        Screen::Favorites,
    ];

    /// Screen for a route, after normalization; `None` for unknown routes
    pub fn from_route(route: &str) -> Option<Screen> {
        match normalize_route(route) {
            "/" => Some(Screen::Home),
            "/product" => Some(Screen::Product),
            "/cart" => Some(Screen::Cart),
            "/profile" => Some(Screen::Profile),
            "/search" => Some(Screen::Search),
            "/favorites" => Some(Screen::Favorites),
            _ => None,
        }
    }

    /// Canonical route
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Product => "/product",
            Screen::Cart => "/cart",
            Screen::Profile => "/profile",
            Screen::Search => "/search",
            Screen::Favorites => "/favorites",
        }
    }

    /// Identifier sent as the descriptor's `screen_id`
    pub fn screen_id(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Product => "product",
            Screen::Cart => "cart",
            Screen::Profile => "profile",
            Screen::Search => "search",
            Screen::Favorites => "favorites",
        }
    }

    /// Header title; the root screen has none
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "",
            Screen::Product => "Product Details",
            Screen::Cart => "Cart",
            Screen::Profile => "Profile",
            Screen::Search => "Search",
            Screen::Favorites => "Favorites",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Header title for any route; unknown routes get an empty title
pub fn screen_title(route: &str) -> &'static str {
    Screen::from_route(route).map(|s| s.title()).unwrap_or("")
}

// =============================================================================
// Tabs
// =============================================================================

/// The five canonical bottom-bar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTab {
    /// Storefront
    Home,
    /// Search
    Search,
    /// Cart
    Cart,
    /// Saved products
    Favorites,
    /// Profile
    Profile,
}

impl NavTab {
    /// Canonical tab order
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Search,
        NavTab::Cart,
        NavTab::Favorites,
        NavTab::Profile,
    ];

    /// Tab item id
    pub fn id(&self) -> &'static str {
        match self {
            NavTab::Home => "nav-home",
            NavTab::Search => "nav-search",
            NavTab::Cart => "nav-cart",
            NavTab::Favorites => "nav-favorites",
            NavTab::Profile => "nav-profile",
        }
    }

    /// Icon name
    pub fn icon(&self) -> &'static str {
        match self {
            NavTab::Home => "home",
            NavTab::Search => "search",
            NavTab::Cart => "cart",
            NavTab::Favorites => "favorite",
            NavTab::Profile => "person",
        }
    }

    /// Label when no mode relabels the tab
    pub fn default_label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Search => "Search",
            NavTab::Cart => "Cart",
            NavTab::Favorites => "Favorites",
            NavTab::Profile => "Profile",
        }
    }

    /// Route the tab opens
    pub fn route(&self) -> &'static str {
        match self {
            NavTab::Home => Screen::Home.path(),
            NavTab::Search => Screen::Search.path(),
            NavTab::Cart => Screen::Cart.path(),
            NavTab::Favorites => Screen::Favorites.path(),
            NavTab::Profile => Screen::Profile.path(),
        }
    }

    /// Label shown in `mode`
    pub fn label(&self, mode: Mode) -> &'static str {
        match (mode, self) {
            (Mode::FlashSale, NavTab::Home) => "Deals",
            (Mode::Evening, NavTab::Home) => "Discover",
            (Mode::Evening, NavTab::Favorites) => "Saved",
            (Mode::Evening, NavTab::Profile) => "You",
            (Mode::Night, NavTab::Search) => "Explore",
            _ => self.default_label(),
        }
    }

    /// Whether `route` is one of the tab routes
    pub fn is_canonical_route(route: &str) -> bool {
        NavTab::ALL.iter().any(|t| t.route() == route)
    }
}

/// Tabs shown in a mode, in display order
pub fn tabs_for(mode: Mode) -> &'static [NavTab] {
    use NavTab::*;
    match mode {
        Mode::LateNight => &[Home, Profile],
        Mode::FlashSale => &[Home, Cart],
        Mode::Evening => &[Home, Favorites, Profile],
        Mode::Night => &[Home, Search, Favorites, Profile],
        Mode::Morning | Mode::Day | Mode::Afternoon => &[Home, Search, Cart, Profile],
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// One bottom-bar item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Item id (`nav-home`, ...)
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Route opened on tap
    pub route: String,
    /// Whether this item matches the current route
    pub is_active: bool,
}

impl NavItem {
    /// Item for a tab in a mode, active when the route matches
    pub fn for_tab(tab: NavTab, mode: Mode, current_route: &str) -> Self {
        Self {
            id: tab.id().to_string(),
            label: tab.label(mode).to_string(),
            icon: tab.icon().to_string(),
            route: tab.route().to_string(),
            is_active: tab.route() == normalize_route(current_route),
        }
    }
}

/// Tab bar and header state for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Bottom tab bar
    pub bottom_nav: Vec<NavItem>,
    /// Header actions
    #[serde(default)]
    pub top_actions: Vec<Action>,
    /// Whether the header shows a back button
    pub show_back_button: bool,
    /// Header title
    pub title: String,
}

impl NavigationState {
    /// The active item, if the route is a tab route
    pub fn active_item(&self) -> Option<&NavItem> {
        self.bottom_nav.iter().find(|item| item.is_active)
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.bottom_nav.iter().map(|item| item.label.as_str()).collect()
    }
}

/// Navigation for `route` in `mode`
pub fn navigation_for(route: &str, mode: Mode) -> NavigationState {
    let route = normalize_route(route);
    NavigationState {
        bottom_nav: tabs_for(mode)
            .iter()
            .map(|&tab| NavItem::for_tab(tab, mode, route))
            .collect(),
        top_actions: Vec::new(),
        show_back_button: route != ROOT,
        title: screen_title(route).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Route Tests
    // =========================================================================

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("home"), "/");
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route("/cart"), "/cart");
        assert_eq!(normalize_route("/Home"), "/Home");
    }

    #[test]
    fn test_screen_from_route() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_route(screen.path()), Some(screen));
        }
        assert_eq!(Screen::from_route("home"), Some(Screen::Home));
        assert_eq!(Screen::from_route("/checkout"), None);
        assert_eq!(Screen::from_route("cart"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(screen_title("/"), "");
        assert_eq!(screen_title("home"), "");
        assert_eq!(screen_title("/product"), "Product Details");
        assert_eq!(screen_title("/favorites"), "Favorites");
        assert_eq!(screen_title("/nowhere"), "");
    }

    // =========================================================================
    // Tab Tests
    // =========================================================================

    #[test]
    fn test_tab_ids_and_routes() {
        let ids: Vec<_> = NavTab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec!["nav-home", "nav-search", "nav-cart", "nav-favorites", "nav-profile"]
        );
        assert!(NavTab::is_canonical_route("/favorites"));
        assert!(!NavTab::is_canonical_route("/product"));
    }

    #[test]
    fn test_subsets_per_mode() {
        use NavTab::*;
        assert_eq!(tabs_for(Mode::LateNight), &[Home, Profile]);
        assert_eq!(tabs_for(Mode::FlashSale), &[Home, Cart]);
        assert_eq!(tabs_for(Mode::Evening), &[Home, Favorites, Profile]);
        assert_eq!(tabs_for(Mode::Night), &[Home, Search, Favorites, Profile]);
        for mode in [Mode::Morning, Mode::Day, Mode::Afternoon] {
            assert_eq!(tabs_for(mode), &[Home, Search, Cart, Profile]);
        }
    }

    #[test]
    fn test_labels_per_mode() {
        assert_eq!(navigation_for("/", Mode::Evening).labels(), vec!["Discover", "Saved", "You"]);
        assert_eq!(navigation_for("/", Mode::FlashSale).labels(), vec!["Deals", "Cart"]);
        assert_eq!(
            navigation_for("/", Mode::Night).labels(),
            vec!["Home", "Explore", "Favorites", "Profile"]
        );
        assert_eq!(
            navigation_for("/", Mode::Day).labels(),
            vec!["Home", "Search", "Cart", "Profile"]
        );
    }

    // =========================================================================
    // Active State Tests
    // =========================================================================

    #[test]
    fn test_home_aliases_activate_home() {
        for route in ["", "home", "/"] {
            let nav = navigation_for(route, Mode::Day);
            assert_eq!(nav.active_item().map(|i| i.id.as_str()), Some("nav-home"));
            assert!(!nav.show_back_button);
            assert_eq!(nav.title, "");
        }
    }

    #[test]
    fn test_at_most_one_active() {
        let routes = ["/", "/search", "/cart", "/favorites", "/profile", "/product", "/x"];
        for mode in Mode::ALL {
            for route in routes {
                let nav = navigation_for(route, mode);
                let active = nav.bottom_nav.iter().filter(|i| i.is_active).count();
                let shown = tabs_for(mode).iter().any(|t| t.route() == route);
                assert_eq!(active, usize::from(shown), "{} {}", mode, route);
            }
        }
    }

    #[test]
    fn test_hidden_tab_route_has_no_active_item() {
        let nav = navigation_for("/cart", Mode::Evening);
        assert!(nav.active_item().is_none());
        assert!(nav.show_back_button);
        assert_eq!(nav.title, "Cart");
    }

    #[test]
    fn test_product_route() {
        let nav = navigation_for("/product", Mode::Day);
        assert!(nav.active_item().is_none());
        assert!(nav.show_back_button);
        assert_eq!(nav.title, "Product Details");
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(navigation_for("/profile", Mode::Evening)).unwrap();
        assert_eq!(json["show_back_button"], true);
        assert_eq!(json["title"], "Profile");
        assert_eq!(json["top_actions"], serde_json::json!([]));
        assert_eq!(json["bottom_nav"][2]["label"], "You");
        assert_eq!(json["bottom_nav"][2]["is_active"], true);
        assert_eq!(json["bottom_nav"][1]["icon"], "favorite");
    }
}
