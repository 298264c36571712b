//! Agent types

use crate::condition::Condition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub category: Condition,
}

impl Agent {
    pub fn new(name: impl Into<String>, category: Condition) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Same agent, new condition. The name is carried over unchanged.
    pub fn with_category(&self, category: Condition) -> Self {
        Self {
            name: self.name.clone(),
            category,
        }
    }
}
