use crate::parsing::tree::{DocTree, NodeId, NodeKind};

/// Collects every well-formedness violation in `tree`.
///
/// Checks that:
/// - The root is the only `Root` node and has no parent
/// - Every child/parent link is mirrored, and every parent accepts its child
/// - Headings have a caption and blocks have at least one line
/// - No two adjacent siblings are blocks of the same kind
pub fn violations(tree: &DocTree) -> Vec<String> {
    let mut found = Vec::new();

    match tree.get(tree.root()) {
        Some(root) if root.kind() == &NodeKind::Root && root.parent().is_none() => {}
        _ => found.push("node 0 is not a parentless root".to_string()),
    }

    for (id, node) in tree.nodes() {
        if id != NodeId::ROOT {
            check_child(tree, id, &mut found);
        }

        for pair in node.children().windows(2) {
            let kinds = pair
                .iter()
                .map(|c| tree.kind(*c).and_then(NodeKind::block_kind))
                .collect::<Vec<_>>();
            if let [Some(a), Some(b)] = kinds.as_slice()
                && a == b
            {
                found.push(format!("adjacent {a:?} siblings {pair:?} under {id:?}"));
            }
        }
    }

    found
}

fn check_child(tree: &DocTree, id: NodeId, found: &mut Vec<String>) {
    let Some(kind) = tree.kind(id) else {
        return;
    };

    let Some(candidate) = kind.candidate() else {
        found.push(format!("{id:?} is a second root"));
        return;
    };

    let Some(parent) = tree.parent(id) else {
        found.push(format!("{id:?} has no parent"));
        return;
    };

    let listed = tree.children(parent).iter().filter(|c| **c == id).count();
    if listed != 1 {
        found.push(format!("{id:?} listed {listed} times under {parent:?}"));
    }

    if !tree.kind(parent).is_some_and(|p| p.accepts(candidate)) {
        found.push(format!("{parent:?} cannot contain {id:?} ({candidate:?})"));
    }

    match kind {
        NodeKind::Heading { caption, .. } if caption.is_empty() => {
            found.push(format!("{id:?} heading has an empty caption"));
        }
        NodeKind::Paragraph { lines: l } | NodeKind::Table { rows: l } if l.is_empty() => {
            found.push(format!("{id:?} block has no lines"));
        }
        _ => {}
    }
}

/// Validates parser output invariants.
///
/// # Panics
/// Panics listing every violation found by [`violations`].
pub fn check(tree: &DocTree) {
    let found = violations(tree);
    assert!(found.is_empty(), "malformed tree:\n{}", found.join("\n"));
}
