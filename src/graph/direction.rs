//! Direction selector for neighbor enumeration.

/// Which relationships to follow when enumerating a vertex's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Any relationship, in either role.
    Either,
    /// Relationships originating at the vertex (outward records).
    Outgoing,
    /// Relationships arriving at the vertex (shadows, or real reverse edges).
    Incoming,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Either => "either",
            Self::Outgoing => "from",
            Self::Incoming => "to",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "either" | "both" | "undir" => Some(Self::Either),
            "from" | "out" | "outgoing" => Some(Self::Outgoing),
            "to" | "in" | "incoming" => Some(Self::Incoming),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
