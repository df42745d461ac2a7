//! Terminal UI: view models, components and themes.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! - [`viewmodel`]: display-ready types
//! - [`renderer`]: top-level entry point
//! - [`components`]: per-section renderers
//! - [`helpers`]: cursor positioning and truncation
//! - [`theme`]: color schemes and ANSI sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CandidateCard, EmptyState, FooterInfo, HeaderInfo, ResultsBody, SearchBarInfo, UIViewModel,
};
