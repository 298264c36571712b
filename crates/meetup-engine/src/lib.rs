pub use meetup_core;

mod processor;

pub use processor::{meetup, MeetupProcessor, PairOutcome, RoundOutcome, RoundStats};

// Re-export core types for convenience
pub use meetup_core::{Agent, AgentListing, Condition, MeetupError, Result};
