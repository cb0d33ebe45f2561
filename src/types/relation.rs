//! The relationship record — the atomic stored unit of the container.

/// A single stored relationship record at `(source, target, key)`.
///
/// `outward` is true when the relationship actually originates at the
/// source vertex of the record's slot. A record with `outward == false` is
/// a *shadow*: bookkeeping for the reverse side of a directed edge, kept so
/// that side can be queried without scanning the whole graph. A shadow's
/// magnitude equals the real edge's magnitude, but its queried value is the
/// negation of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relation {
    /// True if this record represents a relationship originating here.
    pub outward: bool,
    /// Strength of the relationship.
    pub magnitude: f64,
}

impl Relation {
    /// A record for a relationship that originates at its source slot.
    pub fn real(magnitude: f64) -> Self {
        Self {
            outward: true,
            magnitude,
        }
    }

    /// A shadow record mirroring a directed edge that originates at the
    /// other vertex.
    pub fn shadow(magnitude: f64) -> Self {
        Self {
            outward: false,
            magnitude,
        }
    }

    /// The value this record reports when queried: the magnitude itself
    /// for an outward record, its negation for a shadow.
    pub fn value(&self) -> f64 {
        if self.outward {
            self.magnitude
        } else {
            -self.magnitude
        }
    }
}
