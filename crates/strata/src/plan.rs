//! The iteration contract a renderer drives.
//!
//! A renderer walks rows top to bottom, draws each node (styling by
//! [`strata_graphlib::NodeKind`] through its own lookup table), then draws one
//! connector per outgoing adjacency slot whose target resolves to a real node.
//! Connectors into an earlier or the same row are reported as such; the layout
//! never repositions nodes to avoid them.

use std::cmp::Ordering;

use strata_graphlib::{Graph, Node};

use crate::level::Layout;

/// How a connector relates to the rows of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// The target sits in a later row.
    Forward,
    /// Both endpoints share a row.
    Flat,
    /// The target sits in an earlier row.
    Backward,
}

/// A drawable edge between two placed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub label: Option<&'a str>,
    pub from_level: usize,
    pub to_level: usize,
}

impl Connector<'_> {
    pub fn kind(&self) -> ConnectorKind {
        match self.to_level.cmp(&self.from_level) {
            Ordering::Greater => ConnectorKind::Forward,
            Ordering::Equal => ConnectorKind::Flat,
            Ordering::Less => ConnectorKind::Backward,
        }
    }
}

/// One row of the computed layout with its nodes resolved.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    pub index: usize,
    pub nodes: Vec<&'a Node>,
}

/// Borrowing view over a graph and its computed layout.
#[derive(Debug, Clone, Copy)]
pub struct RenderPlan<'a> {
    graph: &'a Graph,
    layout: &'a Layout,
}

impl<'a> RenderPlan<'a> {
    pub fn new(graph: &'a Graph, layout: &'a Layout) -> Self {
        Self { graph, layout }
    }

    /// Rows top-to-bottom with their node ids resolved.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + 'a {
        let graph = self.graph;
        let layout = self.layout;
        layout
            .levels()
            .iter()
            .enumerate()
            .map(move |(index, ids)| Row {
                index,
                nodes: ids.iter().filter_map(|id| graph.node(id)).collect(),
            })
    }

    /// Connectors leaving `from`, one per outgoing adjacency slot whose target
    /// resolves to a real node. Labels come from the `(from, to)` lookup, so
    /// duplicate pairs all report the last supplied label.
    pub fn connectors_from(&self, from: &str) -> Vec<Connector<'a>> {
        let graph = self.graph;
        let Some(from_node) = graph.node(from) else {
            return Vec::new();
        };
        let Some(from_level) = self.layout.level_of(from) else {
            return Vec::new();
        };

        let mut out: Vec<Connector<'a>> = Vec::new();
        for to in graph.successors(from) {
            let Some(to_node) = graph.node(to) else {
                continue;
            };
            let Some(to_level) = self.layout.level_of(to) else {
                continue;
            };
            let label = graph.edge(from, to).and_then(|e| e.label.as_deref());
            out.push(Connector {
                from: from_node.id.as_str(),
                to: to_node.id.as_str(),
                label,
                from_level,
                to_level,
            });
        }
        out
    }

    /// Every connector of the diagram, in row order then adjacency order.
    pub fn connectors(&self) -> Vec<Connector<'a>> {
        let mut out: Vec<Connector<'a>> = Vec::new();
        for row in self.layout.levels() {
            for id in row {
                out.extend(self.connectors_from(id));
            }
        }
        out
    }
}
