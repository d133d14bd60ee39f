use serde::Serialize;

use crate::parsing::tree::{DocTree, NodeId, NodeKind};

/// Nested, id-free form of a parsed document.
///
/// Two trees with the same structure normalise to equal values, which is
/// what structural comparisons and JSON output want.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snap {
    /// Children of the root.
    pub children: Vec<SnapNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapNode {
    Heading {
        level: u8,
        caption: String,
        children: Vec<SnapNode>,
    },
    Paragraph {
        lines: Vec<String>,
    },
    Table {
        rows: Vec<String>,
    },
}

/// Converts a tree into its nested [`Snap`] form.
pub fn normalize(tree: &DocTree) -> Snap {
    Snap {
        children: children_of(tree, tree.root()),
    }
}

fn children_of(tree: &DocTree, id: NodeId) -> Vec<SnapNode> {
    tree.children(id)
        .iter()
        .filter_map(|child| {
            let node = match tree.kind(*child)? {
                NodeKind::Heading { level, caption } => SnapNode::Heading {
                    level: level.depth(),
                    caption: caption.clone(),
                    children: children_of(tree, *child),
                },
                NodeKind::Paragraph { lines } => SnapNode::Paragraph {
                    lines: lines.clone(),
                },
                NodeKind::Table { rows } => SnapNode::Table { rows: rows.clone() },
                NodeKind::Root => return None,
            };
            Some(node)
        })
        .collect()
}
