use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlap {
    pub intersection: usize,
    pub union: usize,
    pub similarity: f64,
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets are identical (`1.0`); an empty set against a non-empty one
/// shares nothing (`0.0`).
pub fn jaccard_similarity<T: Eq + Hash>(set_a: &HashSet<T>, set_b: &HashSet<T>) -> f64 {
    overlap(set_a, set_b).similarity
}

pub fn overlap<T: Eq + Hash>(set_a: &HashSet<T>, set_b: &HashSet<T>) -> Overlap {
    if set_a.is_empty() && set_b.is_empty() {
        return Overlap {
            intersection: 0,
            union: 0,
            similarity: 1.0,
        };
    }
    if set_a.is_empty() || set_b.is_empty() {
        return Overlap {
            intersection: 0,
            union: set_a.len() + set_b.len(),
            similarity: 0.0,
        };
    }

    let (small, large) = if set_a.len() <= set_b.len() {
        (set_a, set_b)
    } else {
        (set_b, set_a)
    };
    let intersection = small.iter().filter(|token| large.contains(*token)).count();
    let union = set_a.len() + set_b.len() - intersection;
    let similarity = if union == 0 {
        1.0
    } else {
        intersection as f64 / union as f64
    };
    Overlap {
        intersection,
        union,
        similarity,
    }
}
