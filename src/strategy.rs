use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node selection policy for a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform sample from the not-yet-immunized pool.
    Random,
    /// Highest-degree pool nodes first.
    Hubs,
    /// Neighbors of randomly drawn pool nodes.
    Neighbors,
}

/// Rejected strategy selector. Nothing is constructed or mutated when
/// parsing fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid immunization strategy {0:?} (expected \"random\", \"hubs\" or \"neighbors\")")]
pub struct InvalidStrategy(pub String);

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Hubs => "hubs",
            Strategy::Neighbors => "neighbors",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "random" => Ok(Strategy::Random),
            "hubs" => Ok(Strategy::Hubs),
            "neighbors" => Ok(Strategy::Neighbors),
            other => Err(InvalidStrategy(other.to_string())),
        }
    }
}
