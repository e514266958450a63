/// Embedded web assets for the flowchart viewer.
///
/// The page renders the server-positioned nodes and edges verbatim; all
/// geometry comes from `/api/graph`. Toggling the layout direction refetches,
/// which rebuilds the flowchart server-side from scratch.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>repoflow</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            background: #ffffff;
            color: #111827;
            overflow: hidden;
        }

        body.dark {
            background: #111827;
            color: #f9fafb;
        }

        #wrapper {
            display: flex;
            flex-direction: column;
            height: 100vh;
            background: inherit;
        }

        #header {
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 12px 16px;
            border-bottom: 1px solid #e5e7eb;
        }

        body.dark #header {
            border-bottom-color: #374151;
        }

        #title {
            font-size: 15px;
            font-weight: 600;
        }

        #stats {
            font-size: 12px;
            opacity: 0.65;
            margin-left: 12px;
        }

        #controls button {
            border: 1px solid #d1d5db;
            background: transparent;
            color: inherit;
            border-radius: 6px;
            padding: 5px 10px;
            margin-left: 6px;
            cursor: pointer;
            font-size: 13px;
        }

        #controls button:hover {
            background: rgba(144, 164, 174, 0.15);
        }

        body.dark #controls button {
            border-color: #4b5563;
        }

        #canvas-holder {
            flex: 1;
            position: relative;
        }

        #canvas {
            width: 100%;
            height: 100%;
            cursor: grab;
        }

        #canvas.panning {
            cursor: grabbing;
        }

        .node-label {
            font-size: 13px;
            font-weight: 500;
        }

        .compact-file {
            font-size: 11px;
            cursor: pointer;
        }

        .compact-file:hover {
            text-decoration: underline;
        }

        .overflow-link {
            font-size: 10px;
            fill: #1e88e5;
            cursor: pointer;
        }

        .overflow-link:hover {
            text-decoration: underline;
        }

        .file-label {
            cursor: pointer;
        }

        .file-label:hover {
            text-decoration: underline;
        }

        #minimap {
            position: absolute;
            right: 16px;
            bottom: 16px;
            width: 200px;
            height: 150px;
            border: 1px solid #d1d5db;
            border-radius: 6px;
            background: rgba(255, 255, 255, 0.85);
            display: none;
        }

        body.dark #minimap {
            background: rgba(17, 24, 39, 0.85);
            border-color: #4b5563;
        }

        #minimap.visible {
            display: block;
        }

        #error {
            position: absolute;
            inset: 0;
            display: none;
            align-items: center;
            justify-content: center;
            font-size: 14px;
            opacity: 0.8;
        }
    </style>
</head>
<body>
    <div id="wrapper">
        <div id="header">
            <div style="display: flex; align-items: baseline;">
                <div id="title">repoflow</div>
                <div id="stats"></div>
            </div>
            <div id="controls">
                <button id="btn-direction" title="Toggle layout direction">&#8645;</button>
                <button id="btn-minimap" title="Toggle minimap">&#9635;</button>
                <button id="btn-fullscreen" title="Fullscreen">&#8689;</button>
            </div>
        </div>
        <div id="canvas-holder">
            <svg id="canvas">
                <g id="viewport"></g>
            </svg>
            <svg id="minimap"></svg>
            <div id="error"></div>
        </div>
    </div>

    <script>
        const DEPTH_COLORS = ['#e3f2fd', '#bbdefb', '#90caf9', '#64b5f6', '#42a5f5'];
        const ROOT_ID = '__repo_root__';

        const state = {
            data: null,
            direction: null,
            scale: 1,
            tx: 0,
            ty: 0,
            minimap: false,
        };

        const canvas = document.getElementById('canvas');
        const viewport = document.getElementById('viewport');
        const minimap = document.getElementById('minimap');

        function esc(text) {
            return String(text)
                .replaceAll('&', '&amp;')
                .replaceAll('<', '&lt;')
                .replaceAll('>', '&gt;');
        }

        function depthColor(depth) {
            return DEPTH_COLORS[Math.min(depth, DEPTH_COLORS.length - 1)];
        }

        function blobUrl(path) {
            const m = state.data.metadata;
            return `${m.host}/${m.owner}/${m.repo}/blob/${m.default_branch}/${path}`;
        }

        function treeUrl(path) {
            const m = state.data.metadata;
            return `${m.host}/${m.owner}/${m.repo}/tree/${m.default_branch}/${path}`;
        }

        function applyTheme(theme) {
            const dark = theme === 'dark' ||
                (theme === 'system' && window.matchMedia('(prefers-color-scheme: dark)').matches);
            document.body.classList.toggle('dark', dark);
        }

        async function load(direction) {
            const url = direction ? `/api/graph?direction=${direction}` : '/api/graph';
            let data;
            try {
                const res = await fetch(url);
                data = await res.json();
            } catch (err) {
                const panel = document.getElementById('error');
                panel.textContent = 'Failed to load graph data: ' + err;
                panel.style.display = 'flex';
                return;
            }
            state.data = data;
            state.direction = data.metadata.direction;
            applyTheme(data.metadata.theme);

            const m = data.metadata;
            document.getElementById('title').textContent =
                `\u{1F4E6} ${m.owner}/${m.repo}`;
            document.getElementById('stats').textContent =
                `${m.node_count} nodes • ${m.edge_count} edges • branch ${m.default_branch}`;

            render();
            fitView();
        }

        function edgePath(edge) {
            const byId = state.byId;
            const s = byId.get(edge.source);
            const t = byId.get(edge.target);
            if (!s || !t) return '';
            if (state.direction === 'tb') {
                const sx = s.x + s.width / 2, sy = s.y + s.height;
                const tx = t.x + t.width / 2, ty = t.y;
                const my = (sy + ty) / 2;
                return `M ${sx} ${sy} C ${sx} ${my}, ${tx} ${my}, ${tx} ${ty}`;
            }
            const sx = s.x + s.width, sy = s.y + s.height / 2;
            const tx = t.x, ty = t.y + t.height / 2;
            const mx = (sx + tx) / 2;
            return `M ${sx} ${sy} C ${mx} ${sy}, ${mx} ${ty}, ${tx} ${ty}`;
        }

        function nodeMarkup(node) {
            const dark = document.body.classList.contains('dark');
            const isRoot = node.id === ROOT_ID;
            const color = isRoot ? '#1e88e5' : depthColor(node.depth);
            const fill = isRoot ? 'rgba(66, 165, 245, 0.3)' : color + '40';
            const text = dark ? '#f9fafb' : '#111827';
            const icon = isRoot ? '\u{1F4E6}' : (node.is_folder ? '\u{1F4C1}' : '\u{1F4C4}');

            let parts = [];
            parts.push(`<rect width='${node.width}' height='${node.height}' rx='8'` +
                ` fill='${fill}' stroke='${color}' stroke-width='2'></rect>`);

            const labelClass = node.is_folder ? 'node-label' : 'node-label file-label';
            const labelAttrs = node.is_folder ? '' : ` data-blob='${esc(node.id)}'`;
            parts.push(`<text class='${labelClass}' x='12' y='24' fill='${text}'${labelAttrs}>` +
                `${icon} ${esc(node.label)}</text>`);

            if (node.compacted) {
                const colWidth = node.width / 2;
                node.compacted.names.forEach((name, i) => {
                    const cx = 12 + (i % 2) * colWidth;
                    const cy = 48 + Math.floor(i / 2) * 24;
                    const path = node.id + '/' + name;
                    parts.push(`<text class='compact-file' x='${cx}' y='${cy}'` +
                        ` fill='${text}' data-blob='${esc(path)}'>${esc(name)}</text>`);
                });
                if (node.compacted.hidden > 0) {
                    const cy = node.height - 10;
                    parts.push(`<text class='overflow-link' x='${node.width / 2}' y='${cy}'` +
                        ` text-anchor='middle' data-tree='${esc(node.id)}'>` +
                        `+${node.compacted.hidden} more files</text>`);
                }
            }

            return `<g transform='translate(${node.x}, ${node.y})'>${parts.join('')}</g>`;
        }

        function render() {
            const data = state.data;
            state.byId = new Map(data.nodes.map(n => [n.id, n]));

            const edges = data.edges
                .map(e => `<path d='${edgePath(e)}' fill='none' stroke='#90a4ae' stroke-width='2'></path>`)
                .join('');
            const nodes = data.nodes.map(nodeMarkup).join('');
            viewport.innerHTML = edges + nodes;

            renderMinimap();
        }

        function bounds() {
            const nodes = state.data.nodes;
            let minX = Infinity, minY = Infinity, maxX = -Infinity, maxY = -Infinity;
            for (const n of nodes) {
                minX = Math.min(minX, n.x);
                minY = Math.min(minY, n.y);
                maxX = Math.max(maxX, n.x + n.width);
                maxY = Math.max(maxY, n.y + n.height);
            }
            return { minX, minY, maxX, maxY };
        }

        function applyTransform() {
            viewport.setAttribute('transform',
                `translate(${state.tx}, ${state.ty}) scale(${state.scale})`);
            renderMinimap();
        }

        function fitView() {
            const b = bounds();
            const rect = canvas.getBoundingClientRect();
            const pad = 0.15;
            const w = b.maxX - b.minX, h = b.maxY - b.minY;
            if (w <= 0 || h <= 0) return;
            state.scale = Math.min(
                rect.width * (1 - pad) / w,
                rect.height * (1 - pad) / h,
                2
            );
            state.tx = (rect.width - w * state.scale) / 2 - b.minX * state.scale;
            state.ty = (rect.height - h * state.scale) / 2 - b.minY * state.scale;
            applyTransform();
        }

        function renderMinimap() {
            if (!state.minimap || !state.data) return;
            const b = bounds();
            const w = b.maxX - b.minX, h = b.maxY - b.minY;
            if (w <= 0 || h <= 0) return;
            const scale = Math.min(190 / w, 140 / h);
            const parts = state.data.nodes.map(n => {
                const color = n.id === ROOT_ID ? '#1e88e5' : depthColor(n.depth);
                return `<rect x='${(n.x - b.minX) * scale + 5}' y='${(n.y - b.minY) * scale + 5}'` +
                    ` width='${n.width * scale}' height='${n.height * scale}' fill='${color}'></rect>`;
            });

            // Visible world rectangle back-projected through the transform.
            const rect = canvas.getBoundingClientRect();
            const vx = (-state.tx / state.scale - b.minX) * scale + 5;
            const vy = (-state.ty / state.scale - b.minY) * scale + 5;
            const vw = rect.width / state.scale * scale;
            const vh = rect.height / state.scale * scale;
            parts.push(`<rect x='${vx}' y='${vy}' width='${vw}' height='${vh}'` +
                ` fill='none' stroke='#1e88e5' stroke-width='1.5'></rect>`);

            minimap.innerHTML = parts.join('');
        }

        canvas.addEventListener('wheel', (e) => {
            e.preventDefault();
            const factor = e.deltaY < 0 ? 1.1 : 1 / 1.1;
            const next = Math.min(Math.max(state.scale * factor, 0.1), 4);
            const rect = canvas.getBoundingClientRect();
            const px = e.clientX - rect.left, py = e.clientY - rect.top;
            state.tx = px - (px - state.tx) * (next / state.scale);
            state.ty = py - (py - state.ty) * (next / state.scale);
            state.scale = next;
            applyTransform();
        }, { passive: false });

        let pan = null;
        canvas.addEventListener('mousedown', (e) => {
            pan = { x: e.clientX, y: e.clientY, tx: state.tx, ty: state.ty };
            canvas.classList.add('panning');
        });
        window.addEventListener('mousemove', (e) => {
            if (!pan) return;
            state.tx = pan.tx + e.clientX - pan.x;
            state.ty = pan.ty + e.clientY - pan.y;
            applyTransform();
        });
        window.addEventListener('mouseup', () => {
            pan = null;
            canvas.classList.remove('panning');
        });

        canvas.addEventListener('click', (e) => {
            const target = e.target;
            const blob = target.getAttribute && target.getAttribute('data-blob');
            if (blob) {
                window.open(blobUrl(blob), '_blank');
                return;
            }
            const tree = target.getAttribute && target.getAttribute('data-tree');
            if (tree) {
                window.open(treeUrl(tree), '_blank');
            }
        });

        document.getElementById('btn-direction').addEventListener('click', () => {
            load(state.direction === 'tb' ? 'lr' : 'tb');
        });

        document.getElementById('btn-minimap').addEventListener('click', () => {
            state.minimap = !state.minimap;
            minimap.classList.toggle('visible', state.minimap);
            renderMinimap();
        });

        document.getElementById('btn-fullscreen').addEventListener('click', () => {
            const wrapper = document.getElementById('wrapper');
            if (!document.fullscreenElement) {
                wrapper.requestFullscreen();
            } else {
                document.exitFullscreen();
            }
        });

        // Fullscreen detaches from body styling, so the theme class is
        // re-applied to the fullscreen element itself.
        document.addEventListener('fullscreenchange', () => {
            const el = document.fullscreenElement;
            if (el) {
                const dark = document.body.classList.contains('dark');
                el.classList.toggle('dark', dark);
                el.style.background = dark ? '#111827' : '#ffffff';
            }
        });

        window.addEventListener('resize', renderMinimap);

        load();
    </script>
</body>
</html>
"##;
