//! Request context and screen descriptors
//!
//! A [`Context`] is what the transport layer knows about a request. A
//! [`ScreenDescriptor`] is what it sends back: theme, component tree,
//! navigation and metadata, fully self-contained.

use crate::components::ComponentNode;
use crate::mode::Mode;
use crate::navigation::{NavTab, NavigationState};
use crate::theme::ThemeTokens;
use app_core::branding::{DESCRIPTOR_VERSION, GENERATED_BY};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Deepest component tree a descriptor may carry
pub const MAX_TREE_DEPTH: usize = 3;

/// Query parameters a screen may read (`id` for products)
pub type ScreenParams = HashMap<String, String>;

// =============================================================================
// Context
// =============================================================================

/// Everything known about one request, built once and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Requested route
    pub route: String,
    /// Screen parameters
    pub screen_params: ScreenParams,
    /// Caller-supplied user id; passed through, not used for composition
    pub user_id: Option<String>,
    /// Request time in the server's local offset
    pub now: DateTime<FixedOffset>,
}

impl Context {
    /// Context for a route at an instant
    pub fn new(route: impl Into<String>, now: DateTime<FixedOffset>) -> Self {
        Self {
            route: route.into(),
            screen_params: ScreenParams::new(),
            user_id: None,
            now,
        }
    }

    /// Add a screen parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.screen_params.insert(key.into(), value.into());
        self
    }

    /// Replace all screen parameters
    pub fn with_params(mut self, params: ScreenParams) -> Self {
        self.screen_params = params;
        self
    }

    /// Attach the caller's user id
    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id.filter(|id| !id.is_empty());
        self
    }

    /// Look up a screen parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.screen_params.get(key).map(String::as_str)
    }

    /// Mode derived from the request time
    pub fn mode(&self) -> Mode {
        Mode::resolve(&self.now)
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// How the client lays out the top-level components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Vertical scroll
    #[default]
    Scroll,
    /// Grid
    Grid,
}

/// Where and when a descriptor was generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Mode the descriptor was composed for
    pub mode: Mode,
    /// Generation time, RFC 3339
    pub timestamp: String,
    /// Generation time as a wall-clock label ("3:04 PM")
    pub server_time: String,
    /// Descriptor format version
    pub version: String,
    /// Generator name
    pub generated_by: String,
}

impl Metadata {
    /// Metadata for a descriptor generated at `now`
    pub fn new(mode: Mode, now: &DateTime<FixedOffset>) -> Self {
        Self {
            mode,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            server_time: now.format("%-I:%M %p").to_string(),
            version: DESCRIPTOR_VERSION.to_string(),
            generated_by: GENERATED_BY.to_string(),
        }
    }
}

/// A complete screen as sent to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    /// Screen identifier (`home`, `product`, ...)
    pub screen_id: String,
    /// Top-level layout
    pub layout_type: LayoutType,
    /// Mode palette
    pub theme: ThemeTokens,
    /// Top-level components in display order
    pub components: Vec<ComponentNode>,
    /// Tab bar and header
    pub navigation: NavigationState,
    /// Generation metadata
    pub metadata: Metadata,
}

/// Structural problems in a composed descriptor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// Two nodes share an id
    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    /// A tab points outside the five tab routes
    #[error("Navigation item {id} points at non-canonical route {route}")]
    NonCanonicalRoute {
        /// Item id
        id: String,
        /// Offending route
        route: String,
    },

    /// More than one tab is active
    #[error("{0} navigation items are active")]
    MultipleActive(usize),

    /// A top-level component nests past the depth limit
    #[error("Component {id} nests {depth} levels deep")]
    TooDeep {
        /// Top-level component id
        id: String,
        /// Measured depth
        depth: usize,
    },
}

impl ScreenDescriptor {
    /// Mode the descriptor was composed for
    pub fn mode(&self) -> Mode {
        self.metadata.mode
    }

    /// Every component in pre-order
    pub fn nodes(&self) -> Vec<&ComponentNode> {
        self.components.iter().flat_map(|c| c.walk()).collect()
    }

    /// Find a component anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes().into_iter().find(|n| n.id == id)
    }

    /// Check the structural invariants clients rely on
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let mut seen = HashSet::new();
        for node in self.nodes() {
            if !seen.insert(node.id.as_str()) {
                return Err(DescriptorError::DuplicateId(node.id.clone()));
            }
        }

        for node in &self.components {
            let depth = node.depth();
            if depth > MAX_TREE_DEPTH {
                return Err(DescriptorError::TooDeep {
                    id: node.id.clone(),
                    depth,
                });
            }
        }

        if let Some(item) = self
            .navigation
            .bottom_nav
            .iter()
            .find(|item| !NavTab::is_canonical_route(&item.route))
        {
            return Err(DescriptorError::NonCanonicalRoute {
                id: item.id.clone(),
                route: item.route.clone(),
            });
        }

        let active = self
            .navigation
            .bottom_nav
            .iter()
            .filter(|item| item.is_active)
            .count();
        if active > 1 {
            return Err(DescriptorError::MultipleActive(active));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentKind, NodeBuilder};
    use crate::navigation::navigation_for;
    use crate::theme::theme_for;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn leaf(id: &str) -> ComponentNode {
        NodeBuilder::new(id, ComponentKind::Spacer).build()
    }

    fn descriptor(components: Vec<ComponentNode>) -> ScreenDescriptor {
        let now = at("2025-01-15T10:00:00Z");
        ScreenDescriptor {
            screen_id: "home".to_string(),
            layout_type: LayoutType::Scroll,
            theme: theme_for(Mode::Day),
            components,
            navigation: navigation_for("/", Mode::Day),
            metadata: Metadata::new(Mode::Day, &now),
        }
    }

    // =========================================================================
    // Context Tests
    // =========================================================================

    #[test]
    fn test_context_mode_uses_local_hour() {
        let ctx = Context::new("/", at("2025-01-15T13:30:00+05:00"));
        assert_eq!(ctx.mode(), Mode::FlashSale);
    }

    #[test]
    fn test_context_params_and_user() {
        let ctx = Context::new("/product", at("2025-01-15T10:00:00Z"))
            .with_param("id", "prod_3")
            .with_user(Some("u-42".to_string()));
        assert_eq!(ctx.param("id"), Some("prod_3"));
        assert_eq!(ctx.param("missing"), None);
        assert_eq!(ctx.user_id.as_deref(), Some("u-42"));

        let anonymous = ctx.with_user(Some(String::new()));
        assert!(anonymous.user_id.is_none());
    }

    // =========================================================================
    // Metadata Tests
    // =========================================================================

    #[test]
    fn test_metadata_formats() {
        let meta = Metadata::new(Mode::FlashSale, &at("2025-01-15T15:04:05Z"));
        assert_eq!(meta.timestamp, "2025-01-15T15:04:05Z");
        assert_eq!(meta.server_time, "3:04 PM");
        assert_eq!(meta.version, "2.0.0");
        assert_eq!(meta.generated_by, "SDUI Engine");

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["mode"], "flash_sale");
    }

    #[test]
    fn test_metadata_keeps_offset() {
        let meta = Metadata::new(Mode::Morning, &at("2025-01-15T07:15:00-05:00"));
        assert_eq!(meta.timestamp, "2025-01-15T07:15:00-05:00");
        assert_eq!(meta.server_time, "7:15 AM");
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_valid_descriptor() {
        let desc = descriptor(vec![leaf("a"), leaf("b")]);
        assert_eq!(desc.validate(), Ok(()));
        assert_eq!(desc.mode(), Mode::Day);
        assert!(desc.find("b").is_some());
    }

    #[test]
    fn test_duplicate_ids_across_levels() {
        let nested = NodeBuilder::new("box", ComponentKind::Container)
            .child(leaf("a"))
            .build();
        let desc = descriptor(vec![leaf("a"), nested]);
        assert_eq!(desc.validate(), Err(DescriptorError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_too_deep() {
        let deep = NodeBuilder::new("l1", ComponentKind::Container)
            .child(
                NodeBuilder::new("l2", ComponentKind::Container)
                    .child(
                        NodeBuilder::new("l3", ComponentKind::Row)
                            .child(leaf("l4"))
                            .build(),
                    )
                    .build(),
            )
            .build();
        let desc = descriptor(vec![deep]);
        assert_eq!(
            desc.validate(),
            Err(DescriptorError::TooDeep {
                id: "l1".to_string(),
                depth: 4
            })
        );
    }

    #[test]
    fn test_bad_navigation() {
        let mut desc = descriptor(vec![]);
        desc.navigation.bottom_nav[1].route = "/deals".to_string();
        assert!(matches!(
            desc.validate(),
            Err(DescriptorError::NonCanonicalRoute { .. })
        ));

        let mut desc = descriptor(vec![]);
        for item in &mut desc.navigation.bottom_nav {
            item.is_active = true;
        }
        assert_eq!(desc.validate(), Err(DescriptorError::MultipleActive(4)));
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(descriptor(vec![leaf("a")])).unwrap();
        for key in ["screen_id", "layout_type", "theme", "components", "navigation", "metadata"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["layout_type"], "scroll");
    }
}
