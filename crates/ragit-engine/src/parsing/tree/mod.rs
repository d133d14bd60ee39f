//! # Document Tree
//!
//! Arena-backed tree of headings and content blocks.
//!
//! Nodes live in a flat `Vec` owned by [`DocTree`]; parent and child links are
//! [`NodeId`] indices into it. The tree only grows by appending, so ids are
//! stable and follow document order. Once [`TreeBuilder::finish`] hands the
//! tree out it is never mutated again.
//!
//! [`TreeBuilder::finish`]: crate::parsing::TreeBuilder::finish

pub mod types;

pub use types::{BlockKind, Candidate, HeadingLevel, Node, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTree {
    nodes: Vec<Node>,
}

impl DocTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: vec![],
            }],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(Node::kind)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children in document order; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    /// Walks parent links from `id` (exclusive) up to the root (inclusive).
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Number of ancestors; the root has depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// All nodes in insertion order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Total node count including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children(self.root()).is_empty()
    }

    /// Appends `kind` as the last child of `parent`.
    ///
    /// The caller has already checked acceptance; this only links.
    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: vec![],
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> Option<&mut NodeKind> {
        self.nodes.get_mut(id.0).map(|n| &mut n.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_is_bare_root() {
        let tree = DocTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.kind(tree.root()), Some(&NodeKind::Root));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn append_links_both_ways() {
        let mut tree = DocTree::new();
        let h1 = tree.append(
            tree.root(),
            NodeKind::Heading {
                level: HeadingLevel::H1,
                caption: "a".into(),
            },
        );
        let para = tree.append(h1, NodeKind::new_block(BlockKind::Paragraph, "x".into()));

        assert_eq!(tree.children(tree.root()), &[h1]);
        assert_eq!(tree.children(h1), &[para]);
        assert_eq!(tree.parent(para), Some(h1));
        assert_eq!(tree.ancestors(para).collect::<Vec<_>>(), vec![h1, NodeId::ROOT]);
        assert_eq!(tree.depth(para), 2);
    }

    #[test]
    fn unknown_id_has_no_children() {
        let tree = DocTree::new();
        assert!(tree.children(NodeId(42)).is_empty());
        assert_eq!(tree.ancestors(NodeId(42)).count(), 0);
    }
}
