//! Tree demo - hierarchy rendering with collapsible branches
//!
//! Layout assigns one cross-axis slot per visible leaf and centers each
//! branch over its children, then maps (depth, slot) onto the panel in
//! either orthogonal or radial form. Edges reuse the same mapping at the
//! midpoint depth for their control points.

use std::collections::HashSet;
use std::f32::consts::TAU;

use egui::epaint::CubicBezierShape;
use egui::{pos2, vec2, Color32, FontId, Pos2, Sense, Stroke, Ui};
use serde_json::{json, Value};

use chartlab_data::{generators, TreeKind, TreeNode};

use crate::{DemoView, DemoViewId, ViewerContext};

const EDGE_COLOR: Color32 = Color32::from_gray(0xaa);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeLayout {
    Orthogonal,
    Radial,
}

impl TreeLayout {
    pub const ALL: [TreeLayout; 2] = [TreeLayout::Orthogonal, TreeLayout::Radial];

    pub fn label(self) -> &'static str {
        match self {
            TreeLayout::Orthogonal => "Orthogonal",
            TreeLayout::Radial => "Radial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOrientation {
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
}

impl TreeOrientation {
    pub const ALL: [TreeOrientation; 4] = [
        TreeOrientation::LeftRight,
        TreeOrientation::RightLeft,
        TreeOrientation::TopBottom,
        TreeOrientation::BottomTop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreeOrientation::LeftRight => "Left to Right",
            TreeOrientation::RightLeft => "Right to Left",
            TreeOrientation::TopBottom => "Top to Bottom",
            TreeOrientation::BottomTop => "Bottom to Top",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeLineStyle {
    Curve,
    Polyline,
}

impl TreeLineStyle {
    pub const ALL: [TreeLineStyle; 2] = [TreeLineStyle::Curve, TreeLineStyle::Polyline];

    pub fn label(self) -> &'static str {
        match self {
            TreeLineStyle::Curve => "Curve",
            TreeLineStyle::Polyline => "Polyline",
        }
    }
}

/// Node colors cycle through a seven-color palette by depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeScheme {
    Default,
    Blue,
    Green,
    Purple,
    Orange,
}

const SCHEME_DEFAULT: [Color32; 7] = [
    Color32::from_rgb(0xc2, 0x35, 0x31),
    Color32::from_rgb(0x2f, 0x45, 0x54),
    Color32::from_rgb(0x61, 0xa0, 0xa8),
    Color32::from_rgb(0xd4, 0x82, 0x65),
    Color32::from_rgb(0x91, 0xc7, 0xae),
    Color32::from_rgb(0x74, 0x9f, 0x83),
    Color32::from_rgb(0xca, 0x86, 0x22),
];

const SCHEME_BLUE: [Color32; 7] = [
    Color32::from_rgb(0x18, 0x90, 0xff),
    Color32::from_rgb(0x09, 0x6d, 0xd9),
    Color32::from_rgb(0x00, 0x50, 0xb3),
    Color32::from_rgb(0x00, 0x3a, 0x8c),
    Color32::from_rgb(0x40, 0xa9, 0xff),
    Color32::from_rgb(0x69, 0xc0, 0xff),
    Color32::from_rgb(0x91, 0xd5, 0xff),
];

const SCHEME_GREEN: [Color32; 7] = [
    Color32::from_rgb(0x52, 0xc4, 0x1a),
    Color32::from_rgb(0x38, 0x9e, 0x0d),
    Color32::from_rgb(0x23, 0x78, 0x04),
    Color32::from_rgb(0x13, 0x52, 0x00),
    Color32::from_rgb(0x73, 0xd1, 0x3d),
    Color32::from_rgb(0x95, 0xde, 0x64),
    Color32::from_rgb(0xb7, 0xeb, 0x8f),
];

const SCHEME_PURPLE: [Color32; 7] = [
    Color32::from_rgb(0x72, 0x2e, 0xd1),
    Color32::from_rgb(0x53, 0x1d, 0xab),
    Color32::from_rgb(0x39, 0x10, 0x85),
    Color32::from_rgb(0x22, 0x07, 0x5e),
    Color32::from_rgb(0x92, 0x54, 0xde),
    Color32::from_rgb(0xb3, 0x7f, 0xeb),
    Color32::from_rgb(0xd3, 0xad, 0xf7),
];

const SCHEME_ORANGE: [Color32; 7] = [
    Color32::from_rgb(0xfa, 0x8c, 0x16),
    Color32::from_rgb(0xd4, 0x6b, 0x08),
    Color32::from_rgb(0xad, 0x4e, 0x00),
    Color32::from_rgb(0x87, 0x38, 0x00),
    Color32::from_rgb(0xff, 0xa9, 0x40),
    Color32::from_rgb(0xff, 0xb3, 0x66),
    Color32::from_rgb(0xff, 0xd5, 0x91),
];

impl TreeScheme {
    pub const ALL: [TreeScheme; 5] = [
        TreeScheme::Default,
        TreeScheme::Blue,
        TreeScheme::Green,
        TreeScheme::Purple,
        TreeScheme::Orange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreeScheme::Default => "Default",
            TreeScheme::Blue => "Blue",
            TreeScheme::Green => "Green",
            TreeScheme::Purple => "Purple",
            TreeScheme::Orange => "Orange",
        }
    }

    pub fn palette(self) -> &'static [Color32; 7] {
        match self {
            TreeScheme::Default => &SCHEME_DEFAULT,
            TreeScheme::Blue => &SCHEME_BLUE,
            TreeScheme::Green => &SCHEME_GREEN,
            TreeScheme::Purple => &SCHEME_PURPLE,
            TreeScheme::Orange => &SCHEME_ORANGE,
        }
    }

    pub fn color_for_depth(self, depth: usize) -> Color32 {
        self.palette()[depth % 7]
    }
}

#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub kind: TreeKind,
    pub layout: TreeLayout,
    pub orientation: TreeOrientation,
    pub line_style: TreeLineStyle,
    pub scheme: TreeScheme,
    pub node_size: f32,
    pub expand_level: usize,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_statistics: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            kind: TreeKind::Organization,
            layout: TreeLayout::Orthogonal,
            orientation: TreeOrientation::LeftRight,
            line_style: TreeLineStyle::Curve,
            scheme: TreeScheme::Default,
            node_size: 12.0,
            expand_level: 3,
            show_labels: true,
            show_values: false,
            show_statistics: true,
        }
    }
}

/// A visible node with its laid-out grid position. Branches that are
/// collapsed occupy a single leaf slot.
struct LaidNode<'a> {
    path: String,
    name: &'a str,
    value: f64,
    depth: usize,
    slot: f64,
    branch: bool,
    collapsed: bool,
}

/// Depth-first slot assignment over the visible part of the hierarchy.
/// Returns the nodes, the parent/child edge indices and the leaf count.
fn layout_nodes<'a>(
    root: &'a TreeNode,
    collapsed: &HashSet<String>,
) -> (Vec<LaidNode<'a>>, Vec<(usize, usize)>, usize) {
    fn visit<'a>(
        node: &'a TreeNode,
        path: String,
        depth: usize,
        collapsed: &HashSet<String>,
        next_slot: &mut f64,
        nodes: &mut Vec<LaidNode<'a>>,
        edges: &mut Vec<(usize, usize)>,
    ) -> usize {
        let branch = !node.children.is_empty();
        let is_collapsed = branch && collapsed.contains(&path);
        let index = nodes.len();
        nodes.push(LaidNode {
            path: path.clone(),
            name: &node.name,
            value: node.value,
            depth,
            slot: 0.0,
            branch,
            collapsed: is_collapsed,
        });

        if branch && !is_collapsed {
            let mut slot_sum = 0.0;
            for (child_position, child) in node.children.iter().enumerate() {
                let child_index = visit(
                    child,
                    format!("{}/{}", path, child_position),
                    depth + 1,
                    collapsed,
                    next_slot,
                    nodes,
                    edges,
                );
                edges.push((index, child_index));
                slot_sum += nodes[child_index].slot;
            }
            nodes[index].slot = slot_sum / node.children.len() as f64;
        } else {
            nodes[index].slot = *next_slot;
            *next_slot += 1.0;
        }
        index
    }

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut next_slot = 0.0;
    visit(
        root,
        "0".to_string(),
        0,
        collapsed,
        &mut next_slot,
        &mut nodes,
        &mut edges,
    );
    (nodes, edges, next_slot as usize)
}

/// Marks every branch at `level` or deeper as collapsed, including ones
/// hidden inside an already collapsed ancestor, so expanding a parent
/// reveals its children one level at a time.
fn collapse_below(
    node: &TreeNode,
    path: String,
    depth: usize,
    level: usize,
    collapsed: &mut HashSet<String>,
) {
    if !node.children.is_empty() && depth >= level {
        collapsed.insert(path.clone());
    }
    for (child_position, child) in node.children.iter().enumerate() {
        collapse_below(
            child,
            format!("{}/{}", path, child_position),
            depth + 1,
            level,
            collapsed,
        );
    }
}

/// Collapsible hierarchy explorer over the generated tree datasets
pub struct TreeView {
    id: DemoViewId,
    title: String,
    pub config: TreeConfig,
    root: TreeNode,
    collapsed: HashSet<String>,
}

impl TreeView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let config = TreeConfig::default();
        let root = generators::tree(config.kind);
        let mut view = Self {
            id,
            title,
            config,
            root,
            collapsed: HashSet::new(),
        };
        view.apply_expand_level();
        view
    }

    fn rebuild(&mut self) {
        self.root = generators::tree(self.config.kind);
        self.apply_expand_level();
    }

    fn apply_expand_level(&mut self) {
        let mut collapsed = HashSet::new();
        collapse_below(&self.root, "0".to_string(), 0, self.config.expand_level, &mut collapsed);
        self.collapsed = collapsed;
    }

    fn draw_tree(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let (nodes, edges, leaf_total) = layout_nodes(&self.root, &self.collapsed);
        let depth_extent = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

        let available = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(vec2(available.x, available.y.max(200.0)), Sense::click());
        let rect = response.rect.shrink(30.0);

        let layout = self.config.layout;
        let orientation = self.config.orientation;
        let place = |depth: f64, slot: f64| -> Pos2 {
            let depth_t = if depth_extent == 0 {
                0.0
            } else {
                (depth / depth_extent as f64) as f32
            };
            let slot_t = if leaf_total <= 1 {
                0.5
            } else {
                (slot / (leaf_total - 1) as f64) as f32
            };
            match layout {
                TreeLayout::Radial => {
                    let angle = (slot / leaf_total.max(1) as f64) as f32 * TAU - TAU / 4.0;
                    let radius = depth_t * (rect.width().min(rect.height()) * 0.5);
                    rect.center() + vec2(angle.cos(), angle.sin()) * radius
                }
                TreeLayout::Orthogonal => match orientation {
                    TreeOrientation::LeftRight => pos2(
                        rect.left() + depth_t * rect.width(),
                        rect.top() + slot_t * rect.height(),
                    ),
                    TreeOrientation::RightLeft => pos2(
                        rect.right() - depth_t * rect.width(),
                        rect.top() + slot_t * rect.height(),
                    ),
                    TreeOrientation::TopBottom => pos2(
                        rect.left() + slot_t * rect.width(),
                        rect.top() + depth_t * rect.height(),
                    ),
                    TreeOrientation::BottomTop => pos2(
                        rect.left() + slot_t * rect.width(),
                        rect.bottom() - depth_t * rect.height(),
                    ),
                },
            }
        };

        let edge_stroke = Stroke::new(1.2, EDGE_COLOR);
        for (parent_index, child_index) in &edges {
            let parent = &nodes[*parent_index];
            let child = &nodes[*child_index];
            let from = place(parent.depth as f64, parent.slot);
            let to = place(child.depth as f64, child.slot);
            let mid_depth = (parent.depth as f64 + child.depth as f64) / 2.0;
            match self.config.line_style {
                TreeLineStyle::Curve => {
                    painter.add(CubicBezierShape::from_points_stroke(
                        [
                            from,
                            place(mid_depth, parent.slot),
                            place(mid_depth, child.slot),
                            to,
                        ],
                        false,
                        Color32::TRANSPARENT,
                        edge_stroke,
                    ));
                }
                TreeLineStyle::Polyline => {
                    let elbow_from = place(mid_depth, parent.slot);
                    let elbow_to = place(mid_depth, child.slot);
                    painter.line_segment([from, elbow_from], edge_stroke);
                    painter.line_segment([elbow_from, elbow_to], edge_stroke);
                    painter.line_segment([elbow_to, to], edge_stroke);
                }
            }
        }

        let node_radius = self.config.node_size * 0.5;
        let label_font = FontId::proportional(12.0);
        let pointer = response.hover_pos();
        let mut hovered_index = None;
        let mut positions = Vec::with_capacity(nodes.len());

        for (index, node) in nodes.iter().enumerate() {
            let pos = place(node.depth as f64, node.slot);
            positions.push(pos);
            let color = self.config.scheme.color_for_depth(node.depth);

            if node.collapsed {
                painter.circle(
                    pos,
                    node_radius,
                    ui.visuals().window_fill(),
                    Stroke::new(2.0, color),
                );
            } else {
                painter.circle_filled(pos, node_radius, color);
            }

            if self.config.show_labels {
                let text = if self.config.show_values {
                    format!("{}: {}", node.name, node.value)
                } else {
                    node.name.to_string()
                };
                // Leaf labels sit past the node in reading direction,
                // branch labels on the near side
                let (anchor, offset) = match (layout, orientation) {
                    (TreeLayout::Radial, _) => {
                        if pos.x >= rect.center().x {
                            (egui::Align2::LEFT_CENTER, vec2(node_radius + 4.0, 0.0))
                        } else {
                            (egui::Align2::RIGHT_CENTER, vec2(-node_radius - 4.0, 0.0))
                        }
                    }
                    (_, TreeOrientation::LeftRight) => {
                        if node.branch && !node.collapsed {
                            (egui::Align2::RIGHT_CENTER, vec2(-node_radius - 4.0, 0.0))
                        } else {
                            (egui::Align2::LEFT_CENTER, vec2(node_radius + 4.0, 0.0))
                        }
                    }
                    (_, TreeOrientation::RightLeft) => {
                        if node.branch && !node.collapsed {
                            (egui::Align2::LEFT_CENTER, vec2(node_radius + 4.0, 0.0))
                        } else {
                            (egui::Align2::RIGHT_CENTER, vec2(-node_radius - 4.0, 0.0))
                        }
                    }
                    (_, TreeOrientation::TopBottom) => {
                        if node.branch && !node.collapsed {
                            (egui::Align2::CENTER_BOTTOM, vec2(0.0, -node_radius - 4.0))
                        } else {
                            (egui::Align2::CENTER_TOP, vec2(0.0, node_radius + 4.0))
                        }
                    }
                    (_, TreeOrientation::BottomTop) => {
                        if node.branch && !node.collapsed {
                            (egui::Align2::CENTER_TOP, vec2(0.0, node_radius + 4.0))
                        } else {
                            (egui::Align2::CENTER_BOTTOM, vec2(0.0, -node_radius - 4.0))
                        }
                    }
                };
                painter.text(pos + offset, anchor, text, label_font.clone(), ui.visuals().text_color());
            }

            if let Some(pointer) = pointer {
                if pointer.distance(pos) <= node_radius.max(6.0) + 3.0 {
                    hovered_index = Some(index);
                }
            }
        }

        if let Some(index) = hovered_index {
            let node = &nodes[index];
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new(("tree_node", self.id)), |ui| {
                ui.label(egui::RichText::new(node.name).strong());
                ui.label(format!("Value: {}", node.value));
                if node.branch {
                    if node.collapsed {
                        ui.label("Click to expand");
                    } else {
                        ui.label("Click to collapse");
                    }
                }
            });

            let mut hovered_data = ctx.hovered_data.write();
            hovered_data.x = positions[index].x as f64;
            hovered_data.y = positions[index].y as f64;
            hovered_data.label = format!("{}: {}", node.name, node.value);
            hovered_data.view_id = Some(self.id);
        }

        let toggled = if response.clicked() {
            hovered_index
                .filter(|index| nodes[*index].branch)
                .map(|index| nodes[index].path.clone())
        } else {
            None
        };
        if let Some(path) = toggled {
            if !self.collapsed.remove(&path) {
                self.collapsed.insert(path);
            }
        }
    }
}

impl DemoView for TreeView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "Tree"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            let previous_kind = self.config.kind;
            egui::ComboBox::from_id_source(format!("tree_kind_{}", self.id))
                .selected_text(self.config.kind.label())
                .show_ui(ui, |ui| {
                    for kind in TreeKind::ALL {
                        ui.selectable_value(&mut self.config.kind, kind, kind.label());
                    }
                });
            if previous_kind != self.config.kind {
                self.rebuild();
            }

            ui.label("Layout:");
            egui::ComboBox::from_id_source(format!("tree_layout_{}", self.id))
                .selected_text(self.config.layout.label())
                .show_ui(ui, |ui| {
                    for layout in TreeLayout::ALL {
                        ui.selectable_value(&mut self.config.layout, layout, layout.label());
                    }
                });

            if self.config.layout == TreeLayout::Orthogonal {
                ui.label("Orientation:");
                egui::ComboBox::from_id_source(format!("tree_orientation_{}", self.id))
                    .selected_text(self.config.orientation.label())
                    .show_ui(ui, |ui| {
                        for orientation in TreeOrientation::ALL {
                            ui.selectable_value(
                                &mut self.config.orientation,
                                orientation,
                                orientation.label(),
                            );
                        }
                    });
            }
        });

        ui.horizontal(|ui| {
            ui.label("Edges:");
            for line_style in TreeLineStyle::ALL {
                ui.selectable_value(&mut self.config.line_style, line_style, line_style.label());
            }
            ui.separator();

            ui.label("Colors:");
            egui::ComboBox::from_id_source(format!("tree_scheme_{}", self.id))
                .selected_text(self.config.scheme.label())
                .show_ui(ui, |ui| {
                    for scheme in TreeScheme::ALL {
                        ui.selectable_value(&mut self.config.scheme, scheme, scheme.label());
                    }
                });

            ui.label("Node size:");
            ui.add(egui::Slider::new(&mut self.config.node_size, 8.0..=30.0));

            ui.label("Expand to level:");
            let level_response =
                ui.add(egui::Slider::new(&mut self.config.expand_level, 1..=5));
            if level_response.changed() {
                self.apply_expand_level();
            }
        });

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.show_labels, "Labels");
            ui.checkbox(&mut self.config.show_values, "Values");
            ui.checkbox(&mut self.config.show_statistics, "Statistics");
        });

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Tree Chart").strong());
            ui.label(egui::RichText::new(self.config.kind.label()).weak());
        });

        if self.config.show_statistics {
            let total = self.root.count_nodes();
            let leaves = self.root.count_leaves();
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!("Nodes: {}", total));
                ui.separator();
                ui.label(format!("Leaves: {}", leaves));
                ui.separator();
                ui.label(format!("Branches: {}", total - leaves));
                ui.separator();
                ui.label(format!("Depth: {}", self.root.max_depth()));
            });
        }

        ui.separator();
        self.draw_tree(ctx, ui);
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "layout": self.config.layout.label(),
            "orientation": self.config.orientation.label(),
            "line_style": self.config.line_style.label(),
            "scheme": self.config.scheme.label(),
            "node_size": self.config.node_size,
            "expand_level": self.config.expand_level,
            "show_labels": self.config.show_labels,
            "show_values": self.config.show_values,
            "show_statistics": self.config.show_statistics,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = TreeKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
            }
        }
        if let Some(label) = config.get("layout").and_then(|v| v.as_str()) {
            if let Some(layout) = TreeLayout::ALL.iter().find(|l| l.label() == label) {
                self.config.layout = *layout;
            }
        }
        if let Some(label) = config.get("orientation").and_then(|v| v.as_str()) {
            if let Some(orientation) = TreeOrientation::ALL.iter().find(|o| o.label() == label) {
                self.config.orientation = *orientation;
            }
        }
        if let Some(label) = config.get("line_style").and_then(|v| v.as_str()) {
            if let Some(line_style) = TreeLineStyle::ALL.iter().find(|s| s.label() == label) {
                self.config.line_style = *line_style;
            }
        }
        if let Some(label) = config.get("scheme").and_then(|v| v.as_str()) {
            if let Some(scheme) = TreeScheme::ALL.iter().find(|s| s.label() == label) {
                self.config.scheme = *scheme;
            }
        }
        if let Some(size) = config.get("node_size").and_then(|v| v.as_f64()) {
            self.config.node_size = (size as f32).clamp(8.0, 30.0);
        }
        if let Some(level) = config.get("expand_level").and_then(|v| v.as_u64()) {
            self.config.expand_level = (level as usize).clamp(1, 5);
        }
        if let Some(flag) = config.get("show_labels").and_then(|v| v.as_bool()) {
            self.config.show_labels = flag;
        }
        if let Some(flag) = config.get("show_values").and_then(|v| v.as_bool()) {
            self.config.show_values = flag;
        }
        if let Some(flag) = config.get("show_statistics").and_then(|v| v.as_bool()) {
            self.config.show_statistics = flag;
        }
        self.rebuild();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        TreeNode::branch(
            "root",
            0.0,
            vec![
                TreeNode::branch(
                    "left",
                    0.0,
                    vec![TreeNode::leaf("a", 1.0), TreeNode::leaf("b", 2.0)],
                ),
                TreeNode::branch(
                    "right",
                    0.0,
                    vec![TreeNode::leaf("c", 3.0), TreeNode::leaf("d", 4.0)],
                ),
            ],
        )
    }

    #[test]
    fn test_leaves_take_consecutive_slots_in_traversal_order() {
        let tree = sample_tree();
        let (nodes, edges, leaf_total) = layout_nodes(&tree, &HashSet::new());

        assert_eq!(nodes.len(), 7);
        assert_eq!(edges.len(), 6);
        assert_eq!(leaf_total, 4);

        let leaf_slots: Vec<f64> = nodes
            .iter()
            .filter(|n| !n.branch)
            .map(|n| n.slot)
            .collect();
        assert_eq!(leaf_slots, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_branches_center_over_their_children() {
        let tree = sample_tree();
        let (nodes, _, _) = layout_nodes(&tree, &HashSet::new());

        let left = nodes.iter().find(|n| n.name == "left").unwrap();
        let right = nodes.iter().find(|n| n.name == "right").unwrap();
        let root = nodes.iter().find(|n| n.name == "root").unwrap();
        assert_eq!(left.slot, 0.5);
        assert_eq!(right.slot, 2.5);
        assert_eq!(root.slot, 1.5);
    }

    #[test]
    fn test_collapsed_branch_occupies_one_slot() {
        let tree = sample_tree();
        let mut collapsed = HashSet::new();
        collapsed.insert("0/0".to_string());
        let (nodes, edges, leaf_total) = layout_nodes(&tree, &collapsed);

        // root + collapsed left + right + its two leaves
        assert_eq!(nodes.len(), 5);
        assert_eq!(edges.len(), 3);
        assert_eq!(leaf_total, 3);

        let left = nodes.iter().find(|n| n.name == "left").unwrap();
        assert!(left.collapsed);
        assert_eq!(left.slot, 0.0);
        let right = nodes.iter().find(|n| n.name == "right").unwrap();
        assert_eq!(right.slot, 1.5);
    }

    #[test]
    fn test_collapse_below_marks_nested_branches_too() {
        let tree = generators::tree(TreeKind::Organization);
        let mut collapsed = HashSet::new();
        collapse_below(&tree, "0".to_string(), 0, 1, &mut collapsed);

        // Every branch except the root is collapsed, so only the root
        // and its direct children remain visible
        let (nodes, _, _) = layout_nodes(&tree, &collapsed);
        assert_eq!(nodes.len(), 1 + tree.children.len());
        assert!(nodes.iter().skip(1).all(|n| !n.branch || n.collapsed));
    }

    #[test]
    fn test_generated_hierarchies_report_expected_shape() {
        let organization = generators::tree(TreeKind::Organization);
        assert_eq!(organization.count_nodes(), 24);
        assert_eq!(organization.count_leaves(), 14);
        assert_eq!(organization.max_depth(), 4);

        let family = generators::tree(TreeKind::Family);
        assert_eq!(family.count_nodes(), 11);
        assert_eq!(family.count_leaves(), 5);
    }

    #[test]
    fn test_depth_colors_cycle_through_palette() {
        assert_eq!(
            TreeScheme::Blue.color_for_depth(0),
            TreeScheme::Blue.color_for_depth(7)
        );
        assert_ne!(
            TreeScheme::Blue.color_for_depth(0),
            TreeScheme::Blue.color_for_depth(1)
        );
    }
}
