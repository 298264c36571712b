//! Agent listings and their JSON form

use crate::agent::Agent;
use crate::error::Result;

/// Ordered sequence of agents. Names need not be unique.
pub type AgentListing = Vec<Agent>;

/// Parse a listing from `[{"name": "A", "category": "SICK"}, ...]`.
pub fn parse_listing(json: &str) -> Result<AgentListing> {
    Ok(serde_json::from_str(json)?)
}

pub fn render_listing(agents: &[Agent]) -> Result<String> {
    Ok(serde_json::to_string(agents)?)
}
