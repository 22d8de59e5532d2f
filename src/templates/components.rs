//! Shared HTML components for the link graph explorer.
//!
//! Contains the navigation bar, base HTML template, upload form, and the
//! dashboard building blocks (metric cards, horizontal bar lists).

use super::styles::STYLE;
use crate::stats::Headline;

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(dataset: Option<&str>) -> String {
    let dataset_badge = match dataset {
        Some(name) => format!(
            r#"<span class="dataset">{}</span>"#,
            html_escape(name)
        ),
        None => String::new(),
    };

    format!(
        r#"<nav class="nav-bar">
            <a href="/">Dashboard</a>
            <a href="/network">Network</a>
            <a href="/flow">Flow</a>
            <a href="/data">Data</a>
            <span class="spacer"></span>
            {}
        </nav>"#,
        dataset_badge
    )
}

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, content: &str, dataset: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Linkmap</title>
    <style>{}</style>
</head>
<body>
    {}
    <div class="container">
        {}
    </div>
</body>
</html>"#,
        html_escape(title),
        STYLE,
        nav_bar(dataset),
        content
    )
}

// ============================================================================
// Notices and Upload Form
// ============================================================================

/// An inline notice box. `kind` is one of "", "error", "warn".
pub fn notice(kind: &str, message: &str) -> String {
    format!(
        r#"<div class="notice {}">{}</div>"#,
        kind,
        html_escape(message)
    )
}

pub fn upload_form(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => notice("error", msg),
        None => String::new(),
    };

    format!(
        r#"{}
        <div class="upload-box">
            <h2>Load a link export</h2>
            <p>Upload a CSV describing your site's internal links. Both the
            interleaved (source, destination/anchor pairs) and the blocked
            (ordinal-tagged destination and anchor columns) layouts are
            recognized automatically.</p>
            <form action="/upload" method="post" enctype="multipart/form-data">
                <input type="file" name="file" accept=".csv" required>
                <br>
                <button class="btn primary" type="submit">Analyze</button>
            </form>
        </div>"#,
        error_html
    )
}

// ============================================================================
// Dashboard Building Blocks
// ============================================================================

pub fn metric_cards(headline: &Headline) -> String {
    format!(
        r#"<div class="metric-row">
            <div class="metric-card"><div class="value">{}</div><div class="label">Unique source pages</div></div>
            <div class="metric-card"><div class="value">{}</div><div class="label">Links analyzed</div></div>
            <div class="metric-card"><div class="value">{}</div><div class="label">Unique destination pages</div></div>
        </div>"#,
        headline.source_pages, headline.total_links, headline.target_pages
    )
}

/// A titled list of horizontal bars, widths proportional to the top count.
/// `class` picks the bar color ("", "incoming", "anchor"). When `link_base`
/// is set, each name links to `link_base` plus the url-encoded name.
pub fn bar_list(
    title: &str,
    class: &str,
    rows: &[(String, usize)],
    link_base: Option<&str>,
) -> String {
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);

    let mut html = format!(r#"<div class="bar-list"><h3>{}</h3>"#, html_escape(title));
    for (name, count) in rows {
        let width = (*count as f64 / max as f64 * 100.0).round() as usize;
        let label = match link_base {
            Some(base) => format!(
                r#"<a href="{}{}">{}</a>"#,
                base,
                urlencoding::encode(name),
                html_escape(name)
            ),
            None => html_escape(name),
        };
        html.push_str(&format!(
            r#"<div class="bar-row {}">
                <span class="name" title="{}">{}</span>
                <span class="bar" style="width:{}%"></span>
                <span class="count">{}</span>
            </div>"#,
            class,
            html_escape(name),
            label,
            width.max(1),
            count
        ));
    }
    html.push_str("</div>");
    html
}
