use crate::jaccard::{Overlap, overlap};
use crate::tokens::{TokenSet, unique_tokens};

pub struct Scenario {
    pub label: &'static str,
    pub set_a: TokenSet,
    pub set_b: TokenSet,
}

impl Scenario {
    fn new(label: &'static str, set_a: &[&str], set_b: &[&str]) -> Self {
        Self {
            label,
            set_a: unique_tokens(set_a),
            set_b: unique_tokens(set_b),
        }
    }

    pub fn overlap(&self) -> Overlap {
        overlap(&self.set_a, &self.set_b)
    }
}

/// Reference scenarios: partial overlap, disjoint, both empty, two matches.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "award criteria vs university records",
            &[
                "research publication",
                "international collaboration",
                "student mobility",
            ],
            &[
                "faculty research",
                "student exchange program",
                "international collaboration",
            ],
        ),
        Scenario::new(
            "disjoint sets",
            &["accreditation", "community extension"],
            &["student housing", "scholarship grants"],
        ),
        Scenario::new("both empty", &[], &[]),
        Scenario::new(
            "multiple matches",
            &["publication", "patent", "grant", "conference"],
            &["grant", "fellowship", "publication"],
        ),
    ]
}

pub fn summarize(scenarios: &[Scenario]) -> String {
    let mut output = String::new();
    for (index, scenario) in scenarios.iter().enumerate() {
        output.push_str(&format!(
            "Example {}: {}\n",
            index + 1,
            format_overlap(&scenario.overlap())
        ));
        output.push_str(&format!("  ({})\n", scenario.label));
    }
    output.trim_end().to_string()
}

pub fn format_overlap(overlap: &Overlap) -> String {
    format!(
        "{:?} (intersection={}, union={})",
        overlap.similarity, overlap.intersection, overlap.union
    )
}
