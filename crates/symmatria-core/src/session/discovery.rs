//! Discovery accumulator.

use serde::{Deserialize, Serialize};

/// Running collection of theorem, conjecture and pattern insights.
///
/// Grows monotonically for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySession {
    pub theorems: Vec<String>,
    pub conjectures: Vec<String>,
    pub patterns: Vec<String>,
}

/// Counts shown in the discovery stats footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryStats {
    pub theorems: usize,
    pub conjectures: usize,
    pub patterns: usize,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files each insight under every category whose keyword it contains.
    pub fn absorb<S: AsRef<str>>(&mut self, insights: &[S]) {
        for insight in insights {
            let insight = insight.as_ref();
            // Matched case-insensitively: the canned insights start with
            // capitalised keywords ("Pattern identified", "Conjecture:").
            let lower = insight.to_lowercase();
            if lower.contains("theorem") {
                self.theorems.push(insight.to_string());
            }
            if lower.contains("conjecture") {
                self.conjectures.push(insight.to_string());
            }
            if lower.contains("pattern") {
                self.patterns.push(insight.to_string());
            }
        }
    }

    pub fn stats(&self) -> DiscoveryStats {
        DiscoveryStats {
            theorems: self.theorems.len(),
            conjectures: self.conjectures.len(),
            patterns: self.patterns.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.theorems.is_empty() && self.conjectures.is_empty() && self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Domain, compose_insights};

    #[test]
    fn test_canned_insights_register() {
        let mut discoveries = DiscoverySession::new();
        discoveries.absorb(&compose_insights(Domain::Topology));

        let stats = discoveries.stats();
        assert_eq!(stats.theorems, 0);
        assert_eq!(stats.conjectures, 1);
        assert_eq!(stats.patterns, 1);
    }

    #[test]
    fn test_absorb_accumulates() {
        let mut discoveries = DiscoverySession::new();
        discoveries.absorb(&["A theorem about patterns"]);
        discoveries.absorb(&["Nothing to see"]);
        discoveries.absorb(&["Another theorem"]);

        assert_eq!(discoveries.theorems.len(), 2);
        assert_eq!(discoveries.patterns, vec!["A theorem about patterns".to_string()]);
        assert!(discoveries.conjectures.is_empty());
    }
}
