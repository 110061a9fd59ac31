use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Steps of the builder, in the order the visitor goes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderStep {
    /// Laying out modules on the wall
    Layout,
    /// Picking a finish for every module
    Finishes,
    /// Filling in the contact form
    Contact,
    /// Reviewing the estimate before submitting
    Review,
}

impl BuilderStep {
    pub const ALL: [BuilderStep; 4] = [
        BuilderStep::Layout,
        BuilderStep::Finishes,
        BuilderStep::Contact,
        BuilderStep::Review,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Option<BuilderStep> {
        BuilderStep::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<BuilderStep> {
        self.index().checked_sub(1).map(|i| BuilderStep::ALL[i])
    }
}

impl Display for BuilderStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BuilderStep::Layout => "layout",
            BuilderStep::Finishes => "finishes",
            BuilderStep::Contact => "contact",
            BuilderStep::Review => "review",
        };
        write!(f, "{s}")
    }
}
