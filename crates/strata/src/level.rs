//! Breadth-first level assignment.
//!
//! A node's level is its BFS distance from the nearest source whose frontier
//! reaches it first, not a longest-path rank: when parents on different rows
//! converge on one child, the child lands in the row of whichever frontier
//! dequeues it first. Nodes no frontier ever reaches (cycles without an
//! external entry point, nodes fed only by dangling references) are swept
//! into a single trailing row in declaration order.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::Serialize;
use strata_graphlib::Graph;
use tracing::{debug, trace};

/// Row assignment for every node of a graph.
///
/// `levels` partitions the node-id set exactly once: every node appears in
/// exactly one row, and `level_of` is the inverse index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    levels: Vec<Vec<String>>,
    level_of: BTreeMap<String, usize>,
}

impl Layout {
    /// Rows top-to-bottom; nodes left-to-right in first-visited order.
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    /// The row `id` was placed in. `None` only for ids absent from the graph.
    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.level_of.get(id).copied()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Assigns every node of `graph` to exactly one level.
///
/// Total for any input: cycles, self-loops, dangling edge endpoints, and
/// disconnected components all terminate and land somewhere deterministic.
/// Recomputed from scratch on every call; there is no incremental mode.
pub fn assign_levels(graph: &Graph) -> Layout {
    let mut levels: Vec<Vec<String>> = Vec::new();
    let mut level_of: BTreeMap<String, usize> = BTreeMap::new();
    let mut visited: FxHashSet<&str> = FxHashSet::default();

    let mut frontier: Vec<&str> = graph.sources();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        sources = frontier.len(),
        "seeding level 0"
    );

    while !frontier.is_empty() {
        let mut level: Vec<String> = Vec::new();
        let mut next: Vec<&str> = Vec::new();

        for id in frontier {
            // A node queued by several parents belongs to whichever frontier
            // dequeues it first; later occurrences are no-ops.
            if visited.contains(id) {
                continue;
            }
            // Dangling edge targets are never placed or expanded.
            if !graph.has_node(id) {
                continue;
            }
            visited.insert(id);
            level_of.insert(id.to_string(), levels.len());
            level.push(id.to_string());
            for succ in graph.successors(id) {
                if !visited.contains(succ.as_str()) {
                    next.push(succ);
                }
            }
        }

        // A frontier entirely consumed by earlier rows places nothing; skip
        // it so row indices stay dense.
        if !level.is_empty() {
            trace!(row = levels.len(), width = level.len(), "placed row");
            levels.push(level);
        }
        frontier = next;
    }

    // Everything BFS never reached forms one trailing row.
    let mut orphans: Vec<String> = Vec::new();
    for id in graph.node_ids() {
        if visited.insert(id) {
            orphans.push(id.to_string());
        }
    }
    if !orphans.is_empty() {
        debug!(orphans = orphans.len(), "sweeping unreached nodes into a trailing row");
        for id in &orphans {
            level_of.insert(id.clone(), levels.len());
        }
        levels.push(orphans);
    }

    Layout { levels, level_of }
}
