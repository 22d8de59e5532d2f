//! HTML templates and styling for the link graph explorer.
//!
//! This module contains the CSS styles, JavaScript code, and HTML
//! generation functions for the web interface.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (nav bar, base template, cards)
//! - `network_js` - The network-canvas renderer script
//! - `flow_js` - The Sankey flow renderer script

mod components;
mod flow_js;
mod network_js;
mod styles;

pub use components::{bar_list, base_html, html_escape, metric_cards, nav_bar, notice, upload_form};
pub use flow_js::render_flow_js;
pub use network_js::{network_css, render_network_js};
pub use styles::STYLE;

/// Escape a JSON payload for inlining inside a `<script>` block. `<` is
/// replaced with its JSON unicode escape so a value containing "</script>"
/// cannot terminate the block.
pub(crate) fn inline_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
