//! Decision tree traversal
//!
//! Trees are evaluated iteratively from the root. Traversal assumes the
//! structural invariants enforced by forest validation: child and feature
//! indices are in range and every path terminates at a leaf, so the walk
//! itself cannot fail on a validated model.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A feature value after schema verification and vocabulary resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ResolvedValue {
    /// Numeric measurement.
    Numeric(f32),
    /// Vocabulary id of a categorical token.
    Category(u16),
}

/// One tree of the boosted ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Build a tree from its flat node array. Node 0 is the root.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Nodes in storage order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk from the root to a leaf for the resolved feature row.
    pub(crate) fn leaf_scores(&self, row: &[ResolvedValue]) -> &[f32] {
        let mut index = 0usize;

        loop {
            match &self.nodes[index] {
                Node::Leaf { scores } => return scores,
                Node::Numeric {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = match row[*feature as usize] {
                        ResolvedValue::Numeric(v) => v,
                        // Excluded by forest validation
                        ResolvedValue::Category(c) => f32::from(c),
                    };
                    index = if value < *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
                Node::Categorical {
                    feature,
                    left_categories,
                    left,
                    right,
                } => {
                    let id = match row[*feature as usize] {
                        ResolvedValue::Category(c) => c,
                        // Excluded by forest validation
                        ResolvedValue::Numeric(v) => v as u16,
                    };
                    index = if left_categories.contains(&id) {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
            }
        }
    }
}
