//! # Meetup Core
//!
//! Core types for the Meetup agent interaction model.
//!
//! - [`Condition`] is the closed set of health conditions an agent can have.
//! - [`Agent`] pairs an opaque name with a condition.
//! - The IMPROVE and WORSEN tables live on [`MeetingCondition`], the subset
//!   of conditions that take part in a meeting.

pub mod agent;
pub mod condition;
pub mod error;
pub mod listing;

pub use agent::Agent;
pub use condition::{Condition, MeetingCondition};
pub use error::{MeetupError, Result};
pub use listing::{parse_listing, render_listing, AgentListing};

/// Current Meetup version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information for logs and debugging
pub const BUILD_INFO: &str = concat!(
    "Meetup ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);
