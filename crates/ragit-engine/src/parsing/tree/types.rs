use serde::{Deserialize, Serialize};

/// Index of a node in a [`DocTree`](super::DocTree) arena.
///
/// Ids are assigned in insertion order, which is also document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Heading depth for `#`, `##` and `###`.
///
/// Ordering follows nesting: `H1 < H2 < H3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// The numeric level (1–3).
    #[must_use]
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// The markdown marker without the trailing space.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "#",
            HeadingLevel::H2 => "##",
            HeadingLevel::H3 => "###",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

/// The two leaf-bearing block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Paragraph,
    Table,
}

/// The category of a node that is about to be attached somewhere.
///
/// Acceptance is decided on the category alone, so one `Candidate` is
/// tested against every node on the pop path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Heading(HeadingLevel),
    Block(BlockKind),
}

/// Node payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The single tree root. Never a child.
    Root,
    /// A heading scope; owns everything up to the next heading of equal or
    /// shallower level.
    Heading { level: HeadingLevel, caption: String },
    /// Consecutive plain text lines.
    Paragraph { lines: Vec<String> },
    /// Consecutive `|...|` rows.
    Table { rows: Vec<String> },
}

impl NodeKind {
    /// A new block holding a single line.
    pub(crate) fn new_block(kind: BlockKind, line: String) -> Self {
        match kind {
            BlockKind::Paragraph => NodeKind::Paragraph { lines: vec![line] },
            BlockKind::Table => NodeKind::Table { rows: vec![line] },
        }
    }

    /// The containment table.
    ///
    /// | node        | accepts                              |
    /// |-------------|--------------------------------------|
    /// | Root        | H1, H2, H3, Paragraph, Table         |
    /// | Heading(L)  | Heading(> L), Paragraph, Table       |
    /// | Paragraph   | nothing                              |
    /// | Table       | nothing                              |
    #[must_use]
    pub fn accepts(&self, candidate: Candidate) -> bool {
        match (self, candidate) {
            (NodeKind::Root, _) => true,
            (NodeKind::Heading { level, .. }, Candidate::Heading(child)) => child > *level,
            (NodeKind::Heading { .. }, Candidate::Block(_)) => true,
            (NodeKind::Paragraph { .. } | NodeKind::Table { .. }, _) => false,
        }
    }

    /// The category this node has when it is attached as a child.
    /// `None` for the root, which cannot be a child.
    #[must_use]
    pub fn candidate(&self) -> Option<Candidate> {
        match self {
            NodeKind::Root => None,
            NodeKind::Heading { level, .. } => Some(Candidate::Heading(*level)),
            NodeKind::Paragraph { .. } => Some(Candidate::Block(BlockKind::Paragraph)),
            NodeKind::Table { .. } => Some(Candidate::Block(BlockKind::Table)),
        }
    }

    #[must_use]
    pub fn block_kind(&self) -> Option<BlockKind> {
        match self.candidate() {
            Some(Candidate::Block(kind)) => Some(kind),
            _ => None,
        }
    }

    /// Lines of a paragraph or rows of a table.
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            NodeKind::Paragraph { lines } => Some(lines),
            NodeKind::Table { rows } => Some(rows),
            NodeKind::Root | NodeKind::Heading { .. } => None,
        }
    }

    pub(crate) fn push_line(&mut self, line: String) {
        match self {
            NodeKind::Paragraph { lines } => lines.push(line),
            NodeKind::Table { rows } => rows.push(line),
            NodeKind::Root | NodeKind::Heading { .. } => {}
        }
    }

    /// Caption used by the textual dump.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Heading { caption, .. } => caption,
            NodeKind::Paragraph { .. } => "Text",
            NodeKind::Table { .. } => "Table",
        }
    }
}

/// A node in the arena: payload plus structural links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
