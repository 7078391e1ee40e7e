//! Descriptor engine for Shapeshift
//!
//! This crate turns a request context into a complete, renderer-agnostic
//! screen descriptor: a theme, an ordered component tree, tab-bar state
//! and metadata. Clients draw descriptors generically.
//!
//! # Pipeline
//!
//! 1. [`mode`] derives a presentation [`Mode`] from the local hour
//! 2. [`theme`] maps the mode to its fixed palette
//! 3. [`screens`] picks a composition for the route, built from the
//!    [`components`] templates
//! 4. [`navigation`] computes the tab bar for `(route, mode)`
//! 5. [`descriptor`] assembles and validates the result
//!
//! Every step is a pure function of its inputs. The only I/O (clock and
//! catalog reads) happens before composition, in the caller.
//!
//! # Example
//!
//! ```rust
//! use app_ui::{Mode, ScreenComposer, ScreenParams};
//! use chrono::DateTime;
//!
//! let now = DateTime::parse_from_rfc3339("2025-01-15T12:30:00Z").unwrap();
//! let mode = Mode::resolve(&now);
//! assert_eq!(mode, Mode::FlashSale);
//!
//! let descriptor = ScreenComposer::default().compose("/", mode, &ScreenParams::new(), now);
//! assert_eq!(descriptor.navigation.labels(), vec!["Deals", "Cart"]);
//! assert!(descriptor.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod descriptor;
pub mod mode;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use components::{
    Action, Alignment, ButtonVariant, ComponentKind, ComponentNode, NodeBuilder, StyleProps,
    Styled, Template,
};

pub use descriptor::{
    Context, DescriptorError, LayoutType, Metadata, ScreenDescriptor, ScreenParams,
};

pub use mode::Mode;

pub use navigation::{navigation_for, normalize_route, NavItem, NavTab, NavigationState, Screen};

pub use screens::ScreenComposer;

pub use theme::{theme_for, theme_for_name, FontSizes, SpacingScale, ThemeTokens};
