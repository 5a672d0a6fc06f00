use std::collections::HashSet;

use chrono::Utc;
use symmatria_core::domain::{Domain, compose_reply, lookup};
use symmatria_core::session::{Effect, SessionState};

#[test]
fn test_every_domain_has_distinct_content() {
    let mut labels = HashSet::new();
    let mut glyphs = HashSet::new();
    for domain in Domain::all() {
        let profile = lookup(domain);
        assert_eq!(profile.domain, domain);
        assert!(!profile.suggestions.is_empty(), "{domain} has no suggestions");
        assert!(profile.response_template.contains("{input}"));
        assert!(labels.insert(profile.label));
        assert!(glyphs.insert(profile.glyph));
        // lookup is a pure table read
        assert!(std::ptr::eq(profile, lookup(domain)));
    }
}

#[test]
fn test_domain_ids_parse_back() {
    for domain in Domain::all() {
        assert_eq!(domain.id().parse::<Domain>().unwrap(), domain);
    }
    let err = "geometry".parse::<Domain>().unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_input_is_substituted_verbatim() {
    let input = "  {weird} input with $\\LaTeX$  ";
    let reply = compose_reply(Domain::AlgebraicGeometry, input);
    assert!(reply.response.contains(input));
    assert!(reply.insights[2].ends_with("algebraic-geometry"));
}

#[test]
fn test_pure_session_round() {
    let state = SessionState::new(Domain::Combinatorics);
    let transition = state.submit("count trees", Utc::now());
    let pending = transition.scheduled().cloned().unwrap();
    assert!(transition.state.is_submitting());

    let reply = compose_reply(pending.domain, &pending.text);
    let done = transition.state.complete(reply, Utc::now());
    assert!(done
        .effects
        .iter()
        .any(|effect| matches!(effect, Effect::Publish(_))));
    assert!(!done.state.is_submitting());
    assert_eq!(done.state.turns.len(), 1);
    assert_eq!(done.state.turns[0].domain, Domain::Combinatorics);
}
