use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Immunization status of a single node. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    /// Untouched by the campaign.
    Susceptible,
    /// Adjacent to at least one immunized node, not itself immunized.
    Exposed,
    /// Terminal: the node has received the intervention.
    Immunized,
}

/// State of `node` implied by set membership alone.
///
/// Immunized membership wins; `exposed` is expected to already exclude
/// immunized nodes.
pub fn derive_state(
    node: NodeId,
    immunized: &[NodeId],
    exposed: &BTreeSet<NodeId>,
) -> NodeState {
    if immunized.contains(&node) {
        NodeState::Immunized
    } else if exposed.contains(&node) {
        NodeState::Exposed
    } else {
        NodeState::Susceptible
    }
}

/// Per-state tallies over a whole campaign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub susceptible: usize,
    pub exposed: usize,
    pub immunized: usize,
}

impl StateCounts {
    pub fn tally(states: &[NodeState]) -> Self {
        let mut counts = Self::default();
        for state in states {
            match state {
                NodeState::Susceptible => counts.susceptible += 1,
                NodeState::Exposed => counts.exposed += 1,
                NodeState::Immunized => counts.immunized += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.immunized
    }
}
