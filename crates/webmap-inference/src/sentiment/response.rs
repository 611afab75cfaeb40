//! Classification response types.

use serde::{Deserialize, Serialize};

/// A single label assigned by a classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Raw label as reported by the provider.
    pub label: String,
    /// Probability in the `[0, 1]` range.
    pub score: f64,
}

impl Classification {
    /// Creates a new classification.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Picks the highest-scoring entry out of a ranked or unranked list.
    ///
    /// Returns `None` for an empty list. Ties keep the earliest entry, which
    /// preserves provider ordering.
    pub fn top(candidates: impl IntoIterator<Item = Self>) -> Option<Self> {
        candidates.into_iter().fold(None, |best, candidate| match best {
            Some(best) if best.score >= candidate.score => Some(best),
            _ => Some(candidate),
        })
    }
}
