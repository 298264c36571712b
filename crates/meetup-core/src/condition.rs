//! Health conditions and the one-step transition tables
//!
//! IMPROVE and WORSEN are only defined for conditions that take part in a
//! meeting. [`MeetingCondition`] is that subset, so the tables are total
//! over it and a `HEALTHY` or `DEAD` lookup can only happen through the
//! checked [`Condition::improve`] / [`Condition::worsen`] entry points.

use crate::error::{MeetupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Cure,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Cure,
        Condition::Healthy,
        Condition::Sick,
        Condition::Dying,
        Condition::Dead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Cure => "CURE",
            Condition::Healthy => "HEALTHY",
            Condition::Sick => "SICK",
            Condition::Dying => "DYING",
            Condition::Dead => "DEAD",
        }
    }

    /// The meeting form of this condition, or `None` for agents that sit
    /// the round out.
    pub fn as_meeting(self) -> Option<MeetingCondition> {
        match self {
            Condition::Cure => Some(MeetingCondition::Cure),
            Condition::Sick => Some(MeetingCondition::Sick),
            Condition::Dying => Some(MeetingCondition::Dying),
            Condition::Healthy | Condition::Dead => None,
        }
    }

    pub fn is_meeter(self) -> bool {
        self.as_meeting().is_some()
    }

    /// IMPROVE table lookup. Fails with [`MeetupError::InvalidState`] for
    /// `HEALTHY` and `DEAD`.
    pub fn improve(self) -> Result<Condition> {
        MeetingCondition::try_from(self).map(|c| c.improve())
    }

    /// WORSEN table lookup. Fails with [`MeetupError::InvalidState`] for
    /// `HEALTHY` and `DEAD`.
    pub fn worsen(self) -> Result<Condition> {
        MeetingCondition::try_from(self).map(|c| c.worsen())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = MeetupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CURE" => Ok(Condition::Cure),
            "HEALTHY" => Ok(Condition::Healthy),
            "SICK" => Ok(Condition::Sick),
            "DYING" => Ok(Condition::Dying),
            "DEAD" => Ok(Condition::Dead),
            _ => Err(MeetupError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// A condition that takes part in a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingCondition {
    Cure,
    Sick,
    Dying,
}

impl MeetingCondition {
    pub fn is_cure(self) -> bool {
        matches!(self, MeetingCondition::Cure)
    }

    /// One step better. CURE maps to itself.
    pub fn improve(self) -> Condition {
        match self {
            MeetingCondition::Sick => Condition::Healthy,
            MeetingCondition::Dying => Condition::Sick,
            MeetingCondition::Cure => Condition::Cure,
        }
    }

    /// One step worse. CURE maps to itself.
    pub fn worsen(self) -> Condition {
        match self {
            MeetingCondition::Sick => Condition::Dying,
            MeetingCondition::Dying => Condition::Dead,
            MeetingCondition::Cure => Condition::Cure,
        }
    }
}

impl TryFrom<Condition> for MeetingCondition {
    type Error = MeetupError;

    fn try_from(category: Condition) -> Result<Self> {
        category
            .as_meeting()
            .ok_or(MeetupError::InvalidState { category })
    }
}

impl From<MeetingCondition> for Condition {
    fn from(condition: MeetingCondition) -> Self {
        match condition {
            MeetingCondition::Cure => Condition::Cure,
            MeetingCondition::Sick => Condition::Sick,
            MeetingCondition::Dying => Condition::Dying,
        }
    }
}
