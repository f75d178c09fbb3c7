//! Graph container APIs used by `strata`.
//!
//! Stores labeled nodes and directed, optionally labeled edges, and derives in one
//! pass the adjacency views (`successors` / `predecessors`) and the `(from, to)`
//! edge lookup the leveling engine and render plan query.
//!
//! Insertion order is preserved everywhere it is observable: node iteration follows
//! the supplied node list, adjacency lists follow the supplied edge list, and edge
//! iteration yields every supplied edge including duplicate `(from, to)` pairs.
//! Edge endpoints are not validated; a reference to an id with no backing node
//! stays in the adjacency maps and is skipped wherever an actual node is required.

use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Rendering category for a node. Layout math never consults this; it rides
/// along for the renderer's style lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    Start,
    #[default]
    Process,
    Decision,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn labeled(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: Some(label.into()),
        }
    }
}

/// Natural key of an edge. The container is not a multigraph: supplying the
/// same ordered pair twice keeps both adjacency slots but the lookup retains
/// only the last write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Copy, Hash)]
struct EdgeKeyView<'a> {
    from: &'a str,
    to: &'a str,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.from == self.from && key.to == self.to
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,

    edges: Vec<Edge>,
    edge_index: HashMap<EdgeKey, usize>,

    outgoing: HashMap<String, Vec<String>>,
    incoming: HashMap<String, Vec<String>>,
}

impl Graph {
    /// Builds the derived structures in a single linear pass over `edges`.
    ///
    /// Node ids are assumed unique; if a duplicate is supplied, the last node
    /// with that id shadows earlier ones in id lookups while the node list
    /// keeps every entry.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut node_index: HashMap<String, usize> = HashMap::default();
        for (idx, node) in nodes.iter().enumerate() {
            node_index.insert(node.id.clone(), idx);
        }

        let mut edge_index: HashMap<EdgeKey, usize> = HashMap::default();
        let mut outgoing: HashMap<String, Vec<String>> = HashMap::default();
        let mut incoming: HashMap<String, Vec<String>> = HashMap::default();
        for (idx, edge) in edges.iter().enumerate() {
            outgoing
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
            incoming
                .entry(edge.to.clone())
                .or_default()
                .push(edge.from.clone());
            edge_index.insert(
                EdgeKey {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                },
                idx,
            );
        }

        Self {
            nodes,
            node_index,
            edges,
            edge_index,
            outgoing,
            incoming,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Nodes in the order they were supplied.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Every supplied edge in order, duplicate pairs included.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_index.contains_key(&EdgeKeyView { from, to })
    }

    /// The edge stored under `(from, to)`; for duplicate pairs this is the
    /// last one supplied. Lookup never allocates.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        let idx = self.edge_index.get(&EdgeKeyView { from, to }).copied()?;
        Some(&self.edges[idx])
    }

    /// Targets of `id`'s outgoing edges, in edge-list order. Empty for ids
    /// with no outgoing edges, including ids that are not nodes at all.
    pub fn successors(&self, id: &str) -> &[String] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of `id`'s incoming edges, in edge-list order.
    pub fn predecessors(&self, id: &str) -> &[String] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node ids with no incoming edges, in node declaration order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| self.predecessors(id).is_empty())
            .collect()
    }

    /// Node ids with no outgoing edges, in node declaration order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| self.successors(id).is_empty())
            .collect()
    }
}
