//! D3.js network-canvas renderer.
//!
//! Generates the `<script>` block for the interactive network map. The
//! script is a thin subscriber: it draws the inlined graph, forwards node
//! clicks to `POST /api/graph/click`, and applies the returned visibility
//! delta verbatim. All isolation logic lives server-side in the controller.

/// Returns the `<style>` block for the network view, `.nm-` prefixed.
pub fn network_css() -> String {
    r#"
        .nm-edge { stroke: var(--base01); stroke-opacity: 0.55; }
        .nm-edge.hidden { display: none; }

        .nm-node circle { cursor: pointer; fill: var(--blue); stroke: var(--bg); stroke-width: 1.5px; }
        .nm-node.focused circle { fill: var(--orange); }
        .nm-node.hidden { display: none; }
        .nm-node text {
            font-size: 9px;
            fill: var(--fg);
            pointer-events: none;
            text-anchor: middle;
        }
        .nm-node text { opacity: 0; }
        .nm-node:hover text, .nm-node.focused text { opacity: 1; }

        .nm-tooltip {
            position: absolute;
            background: var(--bg);
            border: 1px solid var(--border);
            border-radius: 6px;
            padding: 0.5rem 0.75rem;
            font-size: 0.8rem;
            font-family: monospace;
            pointer-events: none;
            z-index: 1001;
            box-shadow: 0 4px 16px rgba(0,0,0,0.15);
            max-width: 380px;
        }
    "#
    .to_string()
}

/// Build the renderer script with the graph payload inlined. The payload is
/// escaped so no page id or anchor text can close the script block.
pub fn render_network_js(graph_json: &str) -> String {
    let graph_json = super::inline_json(graph_json);
    format!(
        r##"<script src="https://d3js.org/d3.v7.min.js"></script>
        <script>
        (function() {{
            const container = document.querySelector('#graph-container');
            if (!container) return;

            const data = {graph_json};
            const nodes = data.nodes;
            const edges = data.edges.map(e => ({{ id: e.id, source: e.from, target: e.to, anchor: e.anchor }}));

            const width = container.clientWidth;
            const height = container.clientHeight;

            const svg = d3.select(container).append('svg')
                .attr('viewBox', [0, 0, width, height]);
            const root = svg.append('g');

            svg.call(d3.zoom()
                .scaleExtent([0.1, 8])
                .on('zoom', (ev) => root.attr('transform', ev.transform)));

            const sim = d3.forceSimulation(nodes)
                .force('link', d3.forceLink(edges).id(n => n.id).distance(70))
                .force('charge', d3.forceManyBody().strength(-120))
                .force('center', d3.forceCenter(width / 2, height / 2))
                .force('collide', d3.forceCollide().radius(n => Math.sqrt(n.value) * 2 + 4));

            // Overview default: every edge starts hidden.
            const edgeSel = root.append('g').selectAll('line')
                .data(edges)
                .join('line')
                .attr('class', 'nm-edge hidden')
                .attr('marker-end', 'url(#nm-arrow)');

            svg.append('defs').append('marker')
                .attr('id', 'nm-arrow')
                .attr('viewBox', '0 -5 10 10')
                .attr('refX', 16).attr('refY', 0)
                .attr('markerWidth', 6).attr('markerHeight', 6)
                .attr('orient', 'auto')
                .append('path').attr('d', 'M0,-5L10,0L0,5').attr('fill', 'var(--base01)');

            const nodeSel = root.append('g').selectAll('g')
                .data(nodes)
                .join('g')
                .attr('class', 'nm-node');

            nodeSel.append('circle').attr('r', n => Math.sqrt(n.value) * 2);
            nodeSel.append('text').attr('dy', n => -Math.sqrt(n.value) * 2 - 3).text(n => n.id);

            const tooltip = d3.select(container).append('div')
                .attr('class', 'nm-tooltip')
                .style('display', 'none');

            nodeSel
                .on('mouseenter', (ev, n) => {{
                    tooltip.style('display', 'block').text(n.title);
                }})
                .on('mousemove', (ev) => {{
                    const rect = container.getBoundingClientRect();
                    tooltip.style('left', (ev.clientX - rect.left + 12) + 'px')
                           .style('top', (ev.clientY - rect.top + 12) + 'px');
                }})
                .on('mouseleave', () => tooltip.style('display', 'none'));

            nodeSel.call(d3.drag()
                .on('start', (ev, n) => {{ if (!ev.active) sim.alphaTarget(0.3).restart(); n.fx = n.x; n.fy = n.y; }})
                .on('drag', (ev, n) => {{ n.fx = ev.x; n.fy = ev.y; }})
                .on('end', (ev, n) => {{ if (!ev.active) sim.alphaTarget(0); n.fx = null; n.fy = null; }}));

            // --- Click-to-isolate: server decides, we apply the delta ---
            let focused = null;

            function applyDelta(delta) {{
                const showN = new Set(delta.show_nodes);
                const hideN = new Set(delta.hide_nodes);
                const showE = new Set(delta.show_edges);
                const hideE = new Set(delta.hide_edges);
                nodeSel.classed('hidden', function(n) {{
                    if (showN.has(n.id)) return false;
                    if (hideN.has(n.id)) return true;
                    return d3.select(this).classed('hidden');
                }});
                edgeSel.classed('hidden', function(e) {{
                    if (showE.has(e.id)) return false;
                    if (hideE.has(e.id)) return true;
                    return d3.select(this).classed('hidden');
                }});
            }}

            nodeSel.on('click', async (ev, n) => {{
                ev.stopPropagation();
                const resp = await fetch('/api/graph/click', {{
                    method: 'POST',
                    headers: {{ 'content-type': 'application/json' }},
                    body: JSON.stringify({{ id: n.id }})
                }});
                if (!resp.ok) return;
                applyDelta(await resp.json());
                focused = (focused === n.id) ? null : n.id;
                nodeSel.classed('focused', m => m.id === focused);
            }});

            sim.on('tick', () => {{
                edgeSel
                    .attr('x1', e => e.source.x).attr('y1', e => e.source.y)
                    .attr('x2', e => e.target.x).attr('y2', e => e.target.y);
                nodeSel.attr('transform', n => `translate(${{n.x}},${{n.y}})`);
            }});
        }})();
        </script>"##,
        graph_json = graph_json
    )
}
