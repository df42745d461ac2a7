//! Top-level rendering coordinator.
//!
//! ```text
//! AppState ──compute_viewmodel──► UIViewModel ──components──► ANSI output
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame on every
/// render call.
pub fn render(state: &AppState, theme: &Theme, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, theme, cols, rows);
}
