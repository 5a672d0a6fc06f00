//! Deterministic reply composition.
//!
//! Replies are assembled from the domain's response template and a fixed
//! list of insights. Nothing here is computed from the meaning of the input.

use serde::{Deserialize, Serialize};

use super::model::Domain;
use super::registry::lookup;

const INPUT_PLACEHOLDER: &str = "{input}";

/// A composed reply to one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub response: String,
    pub insights: Vec<String>,
}

/// Formats the domain template with `input` substituted verbatim.
pub fn compose_response(domain: Domain, input: &str) -> String {
    lookup(domain)
        .response_template
        .replacen(INPUT_PLACEHOLDER, input, 1)
}

/// Returns the four insights attached to every reply.
///
/// Exactly one of them names the domain.
pub fn compose_insights(domain: Domain) -> Vec<String> {
    vec![
        "Pattern identified: Recursive structure in mathematical object".to_string(),
        "Conjecture: This property might generalize to higher dimensions".to_string(),
        format!("Connection: Links to classical results in {}", domain.id()),
        "Open question: Computational complexity implications".to_string(),
    ]
}

/// Builds the full reply for `input` under `domain`.
pub fn compose_reply(domain: Domain, input: &str) -> Reply {
    Reply {
        response: compose_response(domain, input),
        insights: compose_insights(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_reply() {
        let reply = compose_reply(Domain::Topology, "Is X connected?");
        assert!(reply.response.contains("\"Is X connected?\""));
        assert!(reply.response.contains("topological"));
        assert_eq!(reply.insights.len(), 4);
        assert_eq!(
            reply.insights.iter().filter(|i| i.contains("topology")).count(),
            1
        );
    }

    #[test]
    fn test_input_is_substituted_verbatim() {
        let input = "weird {input} text";
        let response = compose_response(Domain::Analysis, input);
        assert!(response.contains("\"weird {input} text\""));
    }

    #[test]
    fn test_reply_is_deterministic() {
        for domain in Domain::all() {
            assert_eq!(compose_reply(domain, "abc"), compose_reply(domain, "abc"));
        }
    }
}
