//! D3 Sankey renderer for the per-page flow diagram.
//!
//! The server supplies labels plus index-form links; d3-sankey does the
//! layout. Nothing here knows how the flow was computed.

/// Build the Sankey script with the flow payload inlined. The payload is
/// escaped so no label can close the script block.
pub fn render_flow_js(flow_json: &str) -> String {
    let flow_json = super::inline_json(flow_json);
    format!(
        r##"<script src="https://d3js.org/d3.v7.min.js"></script>
        <script src="https://unpkg.com/d3-sankey@0.12.3/dist/d3-sankey.min.js"></script>
        <script>
        (function() {{
            const container = document.querySelector('#flow-container');
            if (!container) return;

            const data = {flow_json};
            const nodes = data.labels.map(label => ({{ name: label }}));
            const links = data.sources.map((s, i) => ({{
                source: s, target: data.targets[i], value: data.values[i]
            }}));

            const width = container.clientWidth || 900;
            const height = Math.max(420, nodes.length * 22);

            const svg = d3.select(container).append('svg')
                .attr('viewBox', [0, 0, width, height])
                .attr('width', '100%');

            const sankey = d3.sankey()
                .nodeWidth(18)
                .nodePadding(12)
                .extent([[1, 8], [width - 1, height - 8]]);

            const graph = sankey({{
                nodes: nodes.map(n => Object.assign({{}}, n)),
                links: links.map(l => Object.assign({{}}, l))
            }});

            svg.append('g').selectAll('rect')
                .data(graph.nodes)
                .join('rect')
                .attr('x', n => n.x0).attr('y', n => n.y0)
                .attr('width', n => n.x1 - n.x0)
                .attr('height', n => Math.max(1, n.y1 - n.y0))
                .attr('fill', '#268bd2')
                .append('title').text(n => n.name);

            svg.append('g')
                .attr('fill', 'none')
                .attr('stroke', '#93a1a1')
                .attr('stroke-opacity', 0.45)
                .selectAll('path')
                .data(graph.links)
                .join('path')
                .attr('d', d3.sankeyLinkHorizontal())
                .attr('stroke-width', l => Math.max(1, l.width))
                .append('title').text(l => `${{l.source.name}} → ${{l.target.name}}`);

            svg.append('g').selectAll('text')
                .data(graph.nodes)
                .join('text')
                .attr('x', n => n.x0 < width / 2 ? n.x1 + 6 : n.x0 - 6)
                .attr('y', n => (n.y0 + n.y1) / 2)
                .attr('dy', '0.35em')
                .attr('text-anchor', n => n.x0 < width / 2 ? 'start' : 'end')
                .attr('font-size', '10px')
                .attr('fill', '#657b83')
                .text(n => n.name);
        }})();
        </script>"##,
        flow_json = flow_json
    )
}
