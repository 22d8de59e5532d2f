//! CSS styles for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --yellow: #b58900;
    --orange: #cb4b16;
    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1.5em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }
h2 { font-size: 1.2rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}
.nav-bar .spacer { flex: 1; }
.nav-bar .dataset {
    font-size: 0.85rem;
    color: var(--muted);
    font-family: monospace;
}

.btn {
    display: inline-block;
    padding: 0.4rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.9rem;
}
.btn:hover { border-color: var(--base1); text-decoration: none; }
.btn.primary { background: var(--blue); color: var(--base3); border-color: var(--blue); }

.notice {
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-left: 3px solid var(--blue);
    border-radius: 4px;
    background: var(--accent);
    margin: 1rem 0;
}
.notice.error { border-left-color: var(--red); }
.notice.warn { border-left-color: var(--yellow); }

/* Upload form */
.upload-box {
    border: 2px dashed var(--border);
    border-radius: 8px;
    padding: 2rem;
    margin: 2rem 0;
    text-align: center;
}
.upload-box input[type=file] { margin: 1rem 0; }

/* Metric cards */
.metric-row {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
    margin: 1rem 0;
}
.metric-card {
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 1rem;
    background: var(--accent);
}
.metric-card .value { font-size: 1.8rem; font-weight: 600; color: var(--base01); }
.metric-card .label { font-size: 0.85rem; color: var(--muted); }

/* Horizontal bar lists */
.chart-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 1.5rem;
    margin: 1rem 0;
}
.bar-list { border: 1px solid var(--border); border-radius: 6px; padding: 1rem; }
.bar-list h3 { margin-top: 0; font-size: 1rem; }
.bar-row { display: flex; align-items: center; gap: 0.5rem; margin: 0.3rem 0; font-size: 0.8rem; }
.bar-row .name {
    flex: 0 0 45%;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
    font-family: monospace;
    direction: rtl;
    text-align: left;
}
.bar-row .bar {
    height: 12px;
    background: var(--blue);
    border-radius: 2px;
    min-width: 2px;
}
.bar-row.incoming .bar { background: var(--orange); }
.bar-row.anchor .bar { background: var(--cyan); }
.bar-row .count { color: var(--muted); }

/* Data table */
.edge-table { width: 100%; border-collapse: collapse; font-size: 0.85rem; margin: 1rem 0; }
.edge-table th, .edge-table td {
    border: 1px solid var(--border);
    padding: 0.35rem 0.6rem;
    text-align: left;
    font-family: monospace;
}
.edge-table th { background: var(--accent); position: sticky; top: 3rem; }

/* Graph containers */
.graph-container {
    position: relative;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    height: calc(100vh - 260px);
    min-height: 420px;
}
.graph-container svg { width: 100%; height: 100%; }

.graph-stats {
    display: flex;
    gap: 1.5rem;
    font-size: 0.85rem;
    color: var(--muted);
    margin-bottom: 0.5rem;
}

.flow-container {
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    min-height: 420px;
    padding: 0.5rem;
}

.flow-controls { display: flex; gap: 0.5rem; align-items: center; margin: 1rem 0; }
.flow-controls select {
    flex: 1;
    min-width: 300px;
    padding: 0.45rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-family: monospace;
    font-size: 0.85rem;
}
"#;
