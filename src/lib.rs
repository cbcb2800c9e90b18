pub mod campaign;
pub mod graph;
pub mod sampling;
pub mod state;
pub mod strategy;

// Core types
pub type NodeId = usize;

pub use campaign::{Campaign, CampaignSnapshot};
pub use graph::Graph;
pub use sampling::PoolSampler;
pub use state::{derive_state, NodeState, StateCounts};
pub use strategy::{InvalidStrategy, Strategy};
