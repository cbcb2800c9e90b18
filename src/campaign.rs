use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::sampling::PoolSampler;
use crate::state::{NodeState, StateCounts};
use crate::strategy::{InvalidStrategy, Strategy};
use crate::NodeId;

/// Immunization campaign over a fixed contact network.
///
/// Tracks which nodes have been immunized so far, which are exposed
/// (adjacent to an immunized node), and the pool still eligible for
/// selection. Repeated [`Campaign::immunize`] calls compose: the pool
/// shrinks monotonically and the immunized log only grows.
///
/// Single-writer: no internal locking; wrap the campaign in a mutex if
/// concurrent callers are possible.
#[derive(Debug)]
pub struct Campaign {
    graph: Graph,
    strategy: Strategy,
    sampler: PoolSampler,
    states: Vec<NodeState>,
    /// Nodes not yet immunized; ascending order preserved across calls.
    pool: Vec<NodeId>,
    /// Cumulative log, in immunization order.
    immunized: Vec<NodeId>,
    /// Neighbors of immunized nodes, minus the immunized nodes.
    exposed: BTreeSet<NodeId>,
}

/// Owned copy of a campaign's observable state, for handing to a
/// renderer or any other read-only consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub states: Vec<NodeState>,
    pub immunized: Vec<NodeId>,
    pub exposed: Vec<NodeId>,
}

impl Campaign {
    /// Start a campaign with every node susceptible and eligible.
    ///
    /// With `seed: Some(_)` the campaign is fully reproducible: the same
    /// seed and call sequence yield the same batches on any engine.
    pub fn new(graph: Graph, strategy: Strategy, seed: Option<u64>) -> Self {
        let n = graph.num_nodes();
        Self {
            graph,
            strategy,
            sampler: PoolSampler::new(seed),
            states: vec![NodeState::Susceptible; n],
            pool: (0..n).collect(),
            immunized: Vec::new(),
            exposed: BTreeSet::new(),
        }
    }

    /// Like [`Campaign::new`] but with a string selector (`"random"`,
    /// `"hubs"` or `"neighbors"`). A bad selector is rejected before any
    /// campaign state exists.
    pub fn from_selector(
        graph: Graph,
        selector: &str,
        seed: Option<u64>,
    ) -> Result<Self, InvalidStrategy> {
        let strategy = selector.parse()?;
        Ok(Self::new(graph, strategy, seed))
    }

    /// Immunize up to `count` nodes and return this call's batch.
    ///
    /// The batch is clamped to the pool: fewer eligible nodes than
    /// `count` is not an error, and `count == 0` is a no-op. Selected
    /// nodes leave the pool permanently, join the immunized log, and
    /// every susceptible neighbor of the cumulative immunized set is
    /// upgraded to exposed.
    ///
    /// `Hubs` ranks by degree descending with node id ascending as the
    /// tie-break, so its batches are deterministic and seed-independent.
    /// `Neighbors` draws `min(count, pool)` seed nodes and immunizes
    /// still-eligible members of their neighbor union in ascending id
    /// order; its batch may be smaller than the clamp when the union is.
    pub fn immunize(&mut self, count: usize) -> Vec<NodeId> {
        let size = count.min(self.pool.len());
        let batch = match self.strategy {
            Strategy::Random => self.sampler.draw(&self.pool, size),
            Strategy::Hubs => self.select_hubs(size),
            Strategy::Neighbors => self.select_neighbors(size),
        };

        for &node in &batch {
            self.states[node] = NodeState::Immunized;
        }
        self.pool.retain(|node| !batch.contains(node));
        self.immunized.extend_from_slice(&batch);
        self.recompute_exposed();

        batch
    }

    fn select_hubs(&self, size: usize) -> Vec<NodeId> {
        let mut ranked = self.pool.clone();
        ranked.sort_by(|&a, &b| {
            self.graph
                .degree(b)
                .cmp(&self.graph.degree(a))
                .then(a.cmp(&b))
        });
        ranked.truncate(size);
        ranked
    }

    fn select_neighbors(&mut self, size: usize) -> Vec<NodeId> {
        let seeds = self.sampler.draw(&self.pool, size);
        let mut union = BTreeSet::new();
        for &seed in &seeds {
            union.extend(self.graph.neighbors(seed).iter().copied());
        }
        // Pool membership is the source of truth for eligibility:
        // neighbors immunized in an earlier call drop out here.
        union
            .into_iter()
            .filter(|&node| self.states[node] != NodeState::Immunized)
            .take(size)
            .collect()
    }

    /// Rebuild the exposed set from the full immunized log and upgrade
    /// any susceptible member to exposed. Exposure never reverts.
    fn recompute_exposed(&mut self) {
        let mut exposed = BTreeSet::new();
        for &node in &self.immunized {
            exposed.extend(self.graph.neighbors(node).iter().copied());
        }
        for &node in &self.immunized {
            exposed.remove(&node);
        }
        for &node in &exposed {
            if self.states[node] == NodeState::Susceptible {
                self.states[node] = NodeState::Exposed;
            }
        }
        self.exposed = exposed;
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Current per-node states, indexed by node id.
    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    pub fn state_of(&self, node: NodeId) -> Option<NodeState> {
        self.states.get(node).copied()
    }

    /// Cumulative immunized log, in immunization order.
    pub fn immunized(&self) -> &[NodeId] {
        &self.immunized
    }

    pub fn exposed(&self) -> &BTreeSet<NodeId> {
        &self.exposed
    }

    /// Nodes still eligible for immunization.
    pub fn pool(&self) -> &[NodeId] {
        &self.pool
    }

    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(&self.states)
    }

    /// Defensive copy of the observable state.
    pub fn snapshot(&self) -> CampaignSnapshot {
        CampaignSnapshot {
            states: self.states.clone(),
            immunized: self.immunized.clone(),
            exposed: self.exposed.iter().copied().collect(),
        }
    }
}
