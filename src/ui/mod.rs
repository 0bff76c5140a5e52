//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides
//! theme support, responsive layout, and adversarial-text neutralization.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`helpers`]: shared rendering utilities (sanitization, truncation)
//! - [`theme`]: color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, CardMedia, DetailView, EmptyState, FooterInfo, HeaderInfo, NoticeInfo,
    SearchBarInfo, UIViewModel, VariantOption,
};
