use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Undirected contact network over dense node indices `0..num_nodes`.
///
/// The campaign engine only reads from it: neighbor and degree queries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    num_nodes: usize,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    pub fn from_edges(num_nodes: usize, edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::new(num_nodes);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Insert the undirected edge (u, v). Out-of-range endpoints,
    /// self-loops and duplicate edges are ignored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u == v || u >= self.num_nodes || v >= self.num_nodes {
            return;
        }
        if !self.adjacency[u].contains(&v) {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.num_nodes
    }

    pub fn neighbors(&self, u: NodeId) -> &[NodeId] {
        self.adjacency.get(u).map(|adj| adj.as_slice()).unwrap_or(&[])
    }

    pub fn degree(&self, u: NodeId) -> usize {
        self.neighbors(u).len()
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Edge list with each undirected edge reported once as (u, v), u < v.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::new();
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Cycle 0-1-...-(n-1)-0.
    pub fn cycle(n: usize) -> Self {
        let mut graph = Self::new(n);
        for i in 0..n {
            graph.add_edge(i, (i + 1) % n);
        }
        graph
    }

    /// Path 0-1-...-(n-1).
    pub fn path(n: usize) -> Self {
        let mut graph = Self::new(n);
        for i in 1..n {
            graph.add_edge(i - 1, i);
        }
        graph
    }

    /// Star with center 0 connected to leaves 1..=leaves.
    pub fn star(leaves: usize) -> Self {
        let mut graph = Self::new(leaves + 1);
        for leaf in 1..=leaves {
            graph.add_edge(0, leaf);
        }
        graph
    }
}
