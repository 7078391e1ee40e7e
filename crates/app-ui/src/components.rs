//! Component template library
//!
//! Components are plain data: a [`ComponentNode`] carries an id, a type
//! from the closed [`ComponentKind`] vocabulary, free-form props and style
//! maps, optional children and an optional [`Action`]. Clients interpret
//! nodes generically, so nothing here knows how a component looks on
//! screen.
//!
//! # Component Design
//!
//! Every component type has a typed builder that takes the data it shows
//! and produces a node when given the mode's [`ThemeTokens`]:
//!
//! - Props come from the builder's typed setters
//! - Style starts from theme-derived defaults
//! - Caller overrides (via [`Styled::with_style`]) always win over defaults
//!
//! Builders never read request state and never validate values beyond
//! their Rust types. A negative height is passed through as-is.
//!
//! # Available Components
//!
//! - [`Header`], [`Spacer`], [`Banner`] (plain or animated)
//! - [`SearchBar`], [`StoryCircle`], [`CategoryChips`], [`HorizontalList`]
//! - [`ProductGrid`], [`ProductCarousel`]
//! - [`CountdownTimer`], [`PromoBadge`]
//! - [`Container`] (container or row)
//! - [`Rating`], [`Button`], [`Avatar`], [`Image`], [`TestimonialCard`]

use crate::theme::{Gradient, ThemeTokens};
use crate::tokens::{duration, elevation, font, grid, radius, rating, sizing};
use app_core::branding::colors;
use app_core::showcase::{Category, ListItem, ProductCard, Story};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier, unique within one descriptor
pub type ComponentId = String;

/// Free-form props or style map
pub type PropMap = Map<String, Value>;

/// The closed set of component types clients know how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Title with optional subtitle and icon
    Header,
    /// Vertical gap
    Spacer,
    /// Promotional banner
    Banner,
    /// Banner with an entrance animation
    AnimatedBanner,
    /// Search input
    SearchBar,
    /// Row of story bubbles
    StoryCircle,
    /// Selectable category chips
    CategoryChips,
    /// Horizontally scrolling tiles
    HorizontalList,
    /// Product cards in columns
    ProductGrid,
    /// Horizontally scrolling product cards
    ProductCarousel,
    /// Sale countdown
    CountdownTimer,
    /// Small pill with a promo message
    PromoBadge,
    /// Vertical stack of children
    Container,
    /// Horizontal stack of children
    Row,
    /// Star rating
    Rating,
    /// Tappable button
    Button,
    /// User avatar
    Avatar,
    /// Standalone image
    Image,
    /// Customer quote
    TestimonialCard,
}

impl ComponentKind {
    /// Every component type
    pub const ALL: [ComponentKind; 19] = [
        ComponentKind::Header,
        ComponentKind::Spacer,
        ComponentKind::Banner,
        ComponentKind::AnimatedBanner,
        ComponentKind::SearchBar,
        ComponentKind::StoryCircle,
        ComponentKind::CategoryChips,
        ComponentKind::HorizontalList,
        ComponentKind::ProductGrid,
        ComponentKind::ProductCarousel,
        ComponentKind::CountdownTimer,
        ComponentKind::PromoBadge,
        ComponentKind::Container,
        ComponentKind::Row,
        ComponentKind::Rating,
        ComponentKind::Button,
        ComponentKind::Avatar,
        ComponentKind::Image,
        ComponentKind::TestimonialCard,
    ];

    /// Wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::Spacer => "spacer",
            ComponentKind::Banner => "banner",
            ComponentKind::AnimatedBanner => "animated_banner",
            ComponentKind::SearchBar => "search_bar",
            ComponentKind::StoryCircle => "story_circle",
            ComponentKind::CategoryChips => "category_chips",
            ComponentKind::HorizontalList => "horizontal_list",
            ComponentKind::ProductGrid => "product_grid",
            ComponentKind::ProductCarousel => "product_carousel",
            ComponentKind::CountdownTimer => "countdown_timer",
            ComponentKind::PromoBadge => "promo_badge",
            ComponentKind::Container => "container",
            ComponentKind::Row => "row",
            ComponentKind::Rating => "rating",
            ComponentKind::Button => "button",
            ComponentKind::Avatar => "avatar",
            ComponentKind::Image => "image",
            ComponentKind::TestimonialCard => "testimonial_card",
        }
    }

    /// Whether nodes of this type hold children
    pub fn is_container(&self) -> bool {
        matches!(self, ComponentKind::Container | ComponentKind::Row)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happens when the user taps a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Go to another screen
    Navigate {
        /// Target route
        route: String,
    },
    /// Run a client-side command
    Command {
        /// Command name
        name: String,
    },
}

impl Action {
    /// Navigate to a route
    pub fn navigate(route: impl Into<String>) -> Self {
        Action::Navigate {
            route: route.into(),
        }
    }

    /// Run a named command
    pub fn command(name: impl Into<String>) -> Self {
        Action::Command { name: name.into() }
    }
}

/// Alignment of text or children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    /// Start edge
    Left,
    /// Centered
    Center,
    /// Vertically centered at the start edge
    CenterLeft,
    /// Equal space around children
    SpaceEvenly,
    /// Space only between children
    SpaceBetween,
}

impl Alignment {
    /// Wire name of this alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::CenterLeft => "centerLeft",
            Alignment::SpaceEvenly => "spaceEvenly",
            Alignment::SpaceBetween => "spaceBetween",
        }
    }
}

/// Button style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the primary color
    #[default]
    Primary,
    /// Muted fill
    Secondary,
    /// Border only
    Outline,
}

impl ButtonVariant {
    /// Wire name of this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }
}

// Plain data structs; if serialization ever fails the value degrades to null.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

// =============================================================================
// Component Node
// =============================================================================

/// One node of a descriptor's component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique id within the descriptor
    pub id: ComponentId,
    /// Component type
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Content props
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: PropMap,
    /// Style attributes
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub style: PropMap,
    /// Ordered children, containers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentNode>>,
    /// Tap action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl ComponentNode {
    /// Start building a node
    pub fn builder(id: impl Into<String>, kind: ComponentKind) -> NodeBuilder {
        NodeBuilder::new(id, kind)
    }

    /// Children, empty for leaves
    pub fn children(&self) -> &[ComponentNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Look up a prop
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Look up a style attribute
    pub fn style_value(&self, key: &str) -> Option<&Value> {
        self.style.get(key)
    }

    /// Levels in this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ComponentNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// This node and all descendants in pre-order
    pub fn walk(&self) -> Vec<&ComponentNode> {
        let mut nodes = vec![self];
        for child in self.children() {
            nodes.extend(child.walk());
        }
        nodes
    }

    /// Find a node by id in this subtree
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        self.walk().into_iter().find(|n| n.id == id)
    }
}

/// Fluent construction of a [`ComponentNode`]
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: ComponentNode,
}

impl NodeBuilder {
    /// Empty node of the given type
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            node: ComponentNode {
                id: id.into(),
                kind,
                props: PropMap::new(),
                style: PropMap::new(),
                children: None,
                action: None,
            },
        }
    }

    /// Set a prop
    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.node.props.insert(key.to_string(), value.into());
        self
    }

    /// Set a prop only when a value is present
    pub fn prop_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.prop(key, v),
            None => self,
        }
    }

    /// Set a style attribute
    pub fn style(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.node.style.insert(key.to_string(), value.into());
        self
    }

    /// Set every attribute in a style map
    pub fn styles(mut self, style: StyleProps) -> Self {
        self.node.style.extend(style.into_map());
        self
    }

    /// Append a child
    pub fn child(mut self, child: ComponentNode) -> Self {
        self.node.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Append children in order
    pub fn children(mut self, children: Vec<ComponentNode>) -> Self {
        self.node
            .children
            .get_or_insert_with(Vec::new)
            .extend(children);
        self
    }

    /// Set the tap action
    pub fn action(mut self, action: Action) -> Self {
        self.node.action = Some(action);
        self
    }

    /// Finish the node
    pub fn build(self) -> ComponentNode {
        self.node
    }
}

// =============================================================================
// Style Overrides
// =============================================================================

/// Style attributes supplied by the caller or derived from the theme
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProps(PropMap);

impl StyleProps {
    /// Empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any attribute
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set `padding`
    pub fn with_padding(self, padding: f64) -> Self {
        self.set("padding", padding)
    }

    /// Set `margin`
    pub fn with_margin(self, margin: f64) -> Self {
        self.set("margin", margin)
    }

    /// Set `backgroundColor`
    pub fn with_background(self, color: &str) -> Self {
        self.set("backgroundColor", color)
    }

    /// Set `borderRadius`
    pub fn with_radius(self, radius: f64) -> Self {
        self.set("borderRadius", radius)
    }

    /// Set `fontSize`
    pub fn with_font_size(self, size: f64) -> Self {
        self.set("fontSize", size)
    }

    /// Set `color`
    pub fn with_color(self, color: &str) -> Self {
        self.set("color", color)
    }

    /// Set `gradient`
    pub fn with_gradient(self, gradient: Gradient) -> Self {
        self.set("gradient", gradient)
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether no attribute is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every attribute of `other` over this one
    pub fn merge(&mut self, other: StyleProps) {
        self.0.extend(other.0);
    }

    /// Set an attribute unless the caller already did
    fn or_default(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.entry(key).or_insert_with(|| value.into());
        self
    }

    /// Underlying map
    pub fn into_map(self) -> PropMap {
        self.0
    }
}

/// Builders that accept caller style overrides
pub trait Styled: Sized {
    /// Mutable access to the pending overrides
    fn style_mut(&mut self) -> &mut StyleProps;

    /// Override style attributes; overrides beat theme defaults
    fn with_style(mut self, overrides: StyleProps) -> Self {
        self.style_mut().merge(overrides);
        self
    }
}

/// A typed builder that turns into a node under a theme
pub trait Template {
    /// Build the node, filling unset style from the theme
    fn build(self, theme: &ThemeTokens) -> ComponentNode;
}

macro_rules! impl_styled {
    ($($builder:ty),* $(,)?) => {
        $(
            impl Styled for $builder {
                fn style_mut(&mut self) -> &mut StyleProps {
                    &mut self.style
                }
            }
        )*
    };
}

impl_styled!(
    Header,
    Spacer,
    Banner,
    SearchBar,
    StoryCircle,
    CategoryChips,
    HorizontalList,
    ProductGrid,
    ProductCarousel,
    CountdownTimer,
    PromoBadge,
    Container,
    Rating,
    Button,
    Avatar,
    Image,
    TestimonialCard,
);

// =============================================================================
// Text and Spacing
// =============================================================================

/// Screen or section title
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    id: ComponentId,
    title: String,
    subtitle: Option<String>,
    alignment: Option<Alignment>,
    icon: Option<String>,
    style: StyleProps,
}

impl Header {
    /// Create a header with a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            alignment: None,
            icon: None,
            style: StyleProps::default(),
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set text alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Show an icon next to the title
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Template for Header {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("padding", theme.spacing.md)
            .or_default("fontSize", theme.font_sizes.headline)
            .or_default("color", header_color(theme));
        let node = NodeBuilder::new(self.id, ComponentKind::Header)
            .prop("title", self.title)
            .prop_opt("subtitle", self.subtitle)
            .prop_opt("alignment", self.alignment.map(|a| a.as_str()));
        let node = match self.icon {
            Some(icon) => node.prop("showIcon", true).prop("icon", icon),
            None => node,
        };
        node.styles(style).build()
    }
}

/// Default header color for a palette
fn header_color(theme: &ThemeTokens) -> &str {
    if theme.is_dark {
        theme.text_color()
    } else {
        theme.primary_color.as_str()
    }
}

/// Vertical gap between sections
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    id: ComponentId,
    height: Option<f64>,
    style: StyleProps,
}

impl Spacer {
    /// Spacer of the theme's large spacing
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            height: None,
            style: StyleProps::default(),
        }
    }

    /// Set an explicit height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

impl Template for Spacer {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        NodeBuilder::new(self.id, ComponentKind::Spacer)
            .prop("height", self.height.unwrap_or(theme.spacing.lg))
            .styles(self.style)
            .build()
    }
}

// =============================================================================
// Banners
// =============================================================================

/// Promotional banner, optionally animated
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    id: ComponentId,
    title: String,
    subtitle: Option<String>,
    button_text: Option<String>,
    height: f64,
    alignment: Option<Alignment>,
    duration_ms: Option<u32>,
    action: Option<Action>,
    style: StyleProps,
}

impl Banner {
    /// Create a banner with a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            button_text: None,
            height: sizing::banner::HEIGHT,
            alignment: None,
            duration_ms: None,
            action: None,
            style: StyleProps::default(),
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Show a call-to-action button
    pub fn with_button(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    /// Set the banner height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set content alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Animate the banner in with the default duration
    pub fn animated(self) -> Self {
        self.with_duration(duration::BANNER)
    }

    /// Animate the banner in over `ms` milliseconds
    pub fn with_duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Set the tap action
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl Template for Banner {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let kind = if self.duration_ms.is_some() {
            ComponentKind::AnimatedBanner
        } else {
            ComponentKind::Banner
        };
        let style = self
            .style
            .or_default("backgroundColor", theme.primary_color.as_str())
            .or_default("borderRadius", theme.border_radius)
            .or_default("margin", theme.spacing.md);
        let node = NodeBuilder::new(self.id, kind)
            .prop("title", self.title)
            .prop_opt("subtitle", self.subtitle)
            .prop_opt("buttonText", self.button_text)
            .prop("height", self.height)
            .prop_opt("alignment", self.alignment.map(|a| a.as_str()))
            .prop_opt("duration", self.duration_ms)
            .styles(style);
        match self.action {
            Some(action) => node.action(action).build(),
            None => node.build(),
        }
    }
}

// =============================================================================
// Discovery
// =============================================================================

/// Search input
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBar {
    id: ComponentId,
    placeholder: String,
    show_filter: bool,
    style: StyleProps,
}

impl SearchBar {
    /// Create a search bar with placeholder text
    pub fn new(id: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: placeholder.into(),
            show_filter: false,
            style: StyleProps::default(),
        }
    }

    /// Show the filter button
    pub fn with_filter(mut self, show: bool) -> Self {
        self.show_filter = show;
        self
    }
}

impl Template for SearchBar {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self.style.or_default("borderRadius", theme.border_radius);
        NodeBuilder::new(self.id, ComponentKind::SearchBar)
            .prop("placeholder", self.placeholder)
            .prop("showFilter", self.show_filter)
            .styles(style)
            .build()
    }
}

/// Row of story bubbles
#[derive(Debug, Clone, PartialEq)]
pub struct StoryCircle {
    id: ComponentId,
    stories: Vec<Story>,
    style: StyleProps,
}

impl StoryCircle {
    /// Create a story row
    pub fn new(id: impl Into<String>, stories: Vec<Story>) -> Self {
        Self {
            id: id.into(),
            stories,
            style: StyleProps::default(),
        }
    }
}

impl Template for StoryCircle {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self.style.or_default("padding", theme.spacing.md);
        NodeBuilder::new(self.id, ComponentKind::StoryCircle)
            .prop("stories", to_value(&self.stories))
            .styles(style)
            .build()
    }
}

/// Selectable category chips
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChips {
    id: ComponentId,
    categories: Vec<Category>,
    selected_id: Option<String>,
    style: StyleProps,
}

impl CategoryChips {
    /// Create a chip row
    pub fn new(id: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            id: id.into(),
            categories,
            selected_id: None,
            style: StyleProps::default(),
        }
    }

    /// Mark one category as selected
    pub fn with_selected(mut self, category_id: impl Into<String>) -> Self {
        self.selected_id = Some(category_id.into());
        self
    }
}

impl Template for CategoryChips {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("padding", theme.spacing.md)
            .or_default("selectedColor", theme.primary_color.as_str());
        NodeBuilder::new(self.id, ComponentKind::CategoryChips)
            .prop("categories", to_value(&self.categories))
            .prop_opt("selectedId", self.selected_id)
            .styles(style)
            .build()
    }
}

/// Horizontally scrolling tiles
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalList {
    id: ComponentId,
    items: Vec<ListItem>,
    height: f64,
    item_width: f64,
    style: StyleProps,
}

impl HorizontalList {
    /// Create a tile row
    pub fn new(id: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            id: id.into(),
            items,
            height: sizing::list::HEIGHT,
            item_width: sizing::list::ITEM_WIDTH,
            style: StyleProps::default(),
        }
    }

    /// Set the row height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the tile width
    pub fn with_item_width(mut self, width: f64) -> Self {
        self.item_width = width;
        self
    }
}

impl Template for HorizontalList {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("padding", theme.spacing.md)
            .or_default("spacing", theme.spacing.sm);
        NodeBuilder::new(self.id, ComponentKind::HorizontalList)
            .prop("height", self.height)
            .prop("itemWidth", self.item_width)
            .prop("items", to_value(&self.items))
            .styles(style)
            .build()
    }
}

// =============================================================================
// Products
// =============================================================================

fn card_style(style: StyleProps, theme: &ThemeTokens) -> StyleProps {
    style
        .or_default("imageHeight", sizing::card::IMAGE_HEIGHT)
        .or_default("borderRadius", theme.border_radius)
        .or_default("showDiscount", true)
        .or_default("showRating", true)
        .or_default("showFavorite", true)
        .or_default("titleSize", theme.font_sizes.body)
        .or_default("priceSize", theme.font_sizes.body + 2.0)
        .or_default("priceColor", theme.primary_color.as_str())
        .or_default("elevation", elevation::RAISED)
        .or_default("contentPadding", sizing::card::CONTENT_PADDING)
}

/// Product cards laid out in columns
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGrid {
    id: ComponentId,
    products: Vec<ProductCard>,
    columns: u32,
    spacing: Option<f64>,
    aspect_ratio: f64,
    style: StyleProps,
}

impl ProductGrid {
    /// Two-column grid of products
    pub fn new(id: impl Into<String>, products: Vec<ProductCard>) -> Self {
        Self {
            id: id.into(),
            products,
            columns: grid::COLUMNS,
            spacing: None,
            aspect_ratio: grid::ASPECT_RATIO,
            style: StyleProps::default(),
        }
    }

    /// Set the column count
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the gap between cards
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the card width-to-height ratio
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = ratio;
        self
    }
}

impl Template for ProductGrid {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        NodeBuilder::new(self.id, ComponentKind::ProductGrid)
            .prop("columns", self.columns)
            .prop("spacing", self.spacing.unwrap_or(theme.spacing.md))
            .prop("aspectRatio", self.aspect_ratio)
            .prop("products", to_value(&self.products))
            .styles(card_style(self.style, theme))
            .build()
    }
}

/// Horizontally scrolling product cards
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCarousel {
    id: ComponentId,
    products: Vec<ProductCard>,
    height: f64,
    card_width: f64,
    style: StyleProps,
}

impl ProductCarousel {
    /// Create a carousel of products
    pub fn new(id: impl Into<String>, products: Vec<ProductCard>) -> Self {
        Self {
            id: id.into(),
            products,
            height: sizing::card::CAROUSEL_HEIGHT,
            card_width: sizing::card::CAROUSEL_WIDTH,
            style: StyleProps::default(),
        }
    }

    /// Set the carousel height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the card width
    pub fn with_card_width(mut self, width: f64) -> Self {
        self.card_width = width;
        self
    }
}

impl Template for ProductCarousel {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("padding", theme.spacing.md)
            .or_default("spacing", theme.spacing.sm);
        NodeBuilder::new(self.id, ComponentKind::ProductCarousel)
            .prop("height", self.height)
            .prop("cardWidth", self.card_width)
            .prop("products", to_value(&self.products))
            .styles(card_style(style, theme))
            .build()
    }
}

// =============================================================================
// Promotions
// =============================================================================

/// Sale countdown
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTimer {
    id: ComponentId,
    label: String,
    end_time: String,
    show_icon: bool,
    style: StyleProps,
}

impl CountdownTimer {
    /// Countdown to `end_time`, shown as the client receives it
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            end_time: end_time.into(),
            show_icon: false,
            style: StyleProps::default(),
        }
    }

    /// Show the timer icon
    pub fn with_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }
}

impl Template for CountdownTimer {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("backgroundColor", theme.primary_color.as_str())
            .or_default("padding", theme.spacing.md)
            .or_default("borderRadius", radius::NONE)
            .or_default("fontSize", theme.font_sizes.title)
            .or_default("gradient", theme.gradient());
        NodeBuilder::new(self.id, ComponentKind::CountdownTimer)
            .prop("label", self.label)
            .prop("end_time", self.end_time)
            .prop("showIcon", self.show_icon)
            .styles(style)
            .build()
    }
}

/// Small pill with a promo message
#[derive(Debug, Clone, PartialEq)]
pub struct PromoBadge {
    id: ComponentId,
    text: String,
    style: StyleProps,
}

impl PromoBadge {
    /// Create a badge
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            style: StyleProps::default(),
        }
    }
}

impl Template for PromoBadge {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("backgroundColor", theme.primary_color.as_str())
            .or_default("paddingX", theme.spacing.md)
            .or_default("paddingY", theme.spacing.sm)
            .or_default("borderRadius", radius::PILL)
            .or_default("fontSize", font::BADGE);
        NodeBuilder::new(self.id, ComponentKind::PromoBadge)
            .prop("text", self.text)
            .styles(style)
            .build()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Vertical container or horizontal row of caller-supplied children
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: ComponentId,
    kind: ComponentKind,
    alignment: Option<Alignment>,
    children: Vec<ComponentNode>,
    style: StyleProps,
}

impl Container {
    /// Vertical stack
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ComponentKind::Container,
            alignment: None,
            children: Vec::new(),
            style: StyleProps::default(),
        }
    }

    /// Horizontal stack
    pub fn row(id: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Row,
            ..Self::new(id)
        }
    }

    /// Set child alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children in order
    pub fn with_children(mut self, children: Vec<ComponentNode>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Template for Container {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self.style.or_default("padding", theme.spacing.md);
        NodeBuilder::new(self.id, self.kind)
            .prop_opt("alignment", self.alignment.map(|a| a.as_str()))
            .styles(style)
            .children(self.children)
            .build()
    }
}

// =============================================================================
// Detail Widgets
// =============================================================================

/// Star rating
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    id: ComponentId,
    value: f64,
    max_stars: u32,
    show_value: bool,
    style: StyleProps,
}

impl Rating {
    /// Rating out of five stars, value shown
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            max_stars: rating::MAX_STARS,
            show_value: true,
            style: StyleProps::default(),
        }
    }

    /// Set the number of stars
    pub fn with_max_stars(mut self, max: u32) -> Self {
        self.max_stars = max;
        self
    }

    /// Show or hide the numeric value
    pub fn with_show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }
}

impl Template for Rating {
    fn build(self, _theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("size", sizing::STAR)
            .or_default("color", colors::STAR);
        NodeBuilder::new(self.id, ComponentKind::Rating)
            .prop("rating", self.value)
            .prop("maxStars", self.max_stars)
            .prop("showValue", self.show_value)
            .styles(style)
            .build()
    }
}

/// Tappable button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    id: ComponentId,
    label: String,
    variant: ButtonVariant,
    full_width: bool,
    icon: Option<String>,
    action: Option<Action>,
    style: StyleProps,
}

impl Button {
    /// Create a primary button
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            full_width: false,
            icon: None,
            action: None,
            style: StyleProps::default(),
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Stretch to the full width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the tap action
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl Template for Button {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("backgroundColor", theme.primary_color.as_str())
            .or_default("borderRadius", theme.border_radius)
            .or_default("margin", theme.spacing.md);
        let node = NodeBuilder::new(self.id, ComponentKind::Button)
            .prop("label", self.label)
            .prop("variant", self.variant.as_str())
            .prop("fullWidth", self.full_width)
            .prop_opt("icon", self.icon)
            .styles(style);
        match self.action {
            Some(action) => node.action(action).build(),
            None => node.build(),
        }
    }
}

/// User avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    id: ComponentId,
    name: String,
    image_url: Option<String>,
    style: StyleProps,
}

impl Avatar {
    /// Avatar showing a name's initials until an image is set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            style: StyleProps::default(),
        }
    }

    /// Set the avatar image
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

impl Template for Avatar {
    fn build(self, _theme: &ThemeTokens) -> ComponentNode {
        let style = self.style.or_default("size", sizing::avatar::PROFILE);
        NodeBuilder::new(self.id, ComponentKind::Avatar)
            .prop("name", self.name)
            .prop_opt("imageUrl", self.image_url)
            .styles(style)
            .build()
    }
}

/// Standalone image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    id: ComponentId,
    url: String,
    style: StyleProps,
}

impl Image {
    /// Create an image
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            style: StyleProps::default(),
        }
    }

    /// Set display size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.style = self.style.set("width", width).set("height", height);
        self
    }
}

impl Template for Image {
    fn build(self, _theme: &ThemeTokens) -> ComponentNode {
        let style = self
            .style
            .or_default("borderRadius", radius::NONE)
            .or_default("fit", "cover");
        NodeBuilder::new(self.id, ComponentKind::Image)
            .prop("url", self.url)
            .styles(style)
            .build()
    }
}

/// Customer quote
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialCard {
    id: ComponentId,
    name: String,
    text: String,
    subtitle: Option<String>,
    rating: Option<f64>,
    style: StyleProps,
}

impl TestimonialCard {
    /// Quote `text` attributed to `name`
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            subtitle: None,
            rating: None,
            style: StyleProps::default(),
        }
    }

    /// Set the line under the name
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Attach a star rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Template for TestimonialCard {
    fn build(self, theme: &ThemeTokens) -> ComponentNode {
        let style = self.style.or_default("margin", theme.spacing.md);
        NodeBuilder::new(self.id, ComponentKind::TestimonialCard)
            .prop("name", self.name)
            .prop_opt("subtitle", self.subtitle)
            .prop("text", self.text)
            .prop_opt("rating", self.rating)
            .styles(style)
            .build()
    }
}
