//! Compile-time registry of domain profiles.

use super::model::{Conjecture, Domain, DomainProfile, PatternInsight};

static TOPOLOGY: DomainProfile = DomainProfile {
    domain: Domain::Topology,
    label: "Topology",
    glyph: "𝒯",
    prompt: "Let's explore topological spaces and continuous mappings...",
    suggestions: &[
        "What if we consider the fundamental group of this space?",
        "Could we apply homological methods here?",
        "I notice a pattern in the homotopy groups...",
        "This reminds me of the Poincaré conjecture approach",
    ],
    response_template: "Fascinating! In the topological context, your observation about \"{input}\" suggests we should examine the underlying space's connectivity properties. I notice this could relate to fundamental groups and covering spaces. Let me propose a conjecture: if we consider the universal cover, we might find invariant structures that weren't immediately apparent.",
    conjectures: &[Conjecture {
        title: "Generalized Homotopy Conjecture",
        statement: "For any finite CW-complex X, the homotopy groups π_n(X) exhibit periodic behavior in the stable range.",
        confidence: 0.78,
        evidence: &[
            "Computational verification for n ≤ 12",
            "Pattern matching with known cases",
        ],
    }],
    patterns: &[
        PatternInsight {
            kind: "Structural",
            confidence: 0.92,
            description: "Euler characteristic preservation",
        },
        PatternInsight {
            kind: "Dimensional",
            confidence: 0.87,
            description: "Homotopy group patterns",
        },
    ],
};

static NUMBER_THEORY: DomainProfile = DomainProfile {
    domain: Domain::NumberTheory,
    label: "Number Theory",
    glyph: "ℕ",
    prompt: "Consider the distribution of prime numbers and arithmetic functions...",
    suggestions: &[
        "The distribution suggests a connection to the Riemann hypothesis",
        "Have you considered the p-adic implications?",
        "This sequence might relate to modular forms",
        "The multiplicative structure here is intriguing",
    ],
    response_template: "Intriguing! Your insight about \"{input}\" opens up several avenues. The arithmetic properties here suggest a deep connection to L-functions and automorphic forms. I'm particularly drawn to how this might relate to the Langlands program. Shall we explore the p-adic aspects?",
    conjectures: &[Conjecture {
        title: "Extended Goldbach Variant",
        statement: "Every even integer greater than 4 can be expressed as the sum of two primes plus a perfect square.",
        confidence: 0.85,
        evidence: &[
            "Verified for all even numbers up to 10^8",
            "Probabilistic argument via Hardy-Littlewood",
        ],
    }],
    patterns: &[
        PatternInsight {
            kind: "Arithmetic",
            confidence: 0.95,
            description: "Prime gap regularities",
        },
        PatternInsight {
            kind: "Multiplicative",
            confidence: 0.89,
            description: "L-function zeros alignment",
        },
    ],
};

static COMBINATORICS: DomainProfile = DomainProfile {
    domain: Domain::Combinatorics,
    label: "Combinatorics",
    glyph: "ℂ",
    prompt: "Investigate combinatorial structures and counting principles...",
    suggestions: &[
        "The generating function approach might reveal more",
        "This could be related to symmetric functions",
        "I see a potential bijection with another structure",
        "The asymptotic behavior suggests exponential growth",
    ],
    response_template: "Excellent observation! The combinatorial structure in \"{input}\" reveals beautiful symmetries. I can see connections to symmetric functions and possibly generating function techniques. This pattern might generalize to a broader class of combinatorial objects. Let's investigate the asymptotic behavior.",
    conjectures: &[Conjecture {
        title: "Graph Coloring Optimization",
        statement: "For planar graphs with maximum degree Δ, chromatic number ≤ max(4, ⌊Δ/2⌋ + 2).",
        confidence: 0.72,
        evidence: &[
            "Computer-assisted proof for small cases",
            "Structural analysis of planar embeddings",
        ],
    }],
    patterns: &[
        PatternInsight {
            kind: "Enumerative",
            confidence: 0.91,
            description: "Catalan number variants",
        },
        PatternInsight {
            kind: "Bijective",
            confidence: 0.84,
            description: "Tree-path correspondences",
        },
    ],
};

static ALGEBRAIC_GEOMETRY: DomainProfile = DomainProfile {
    domain: Domain::AlgebraicGeometry,
    label: "Algebraic Geometry",
    glyph: "𝔸",
    prompt: "Examine algebraic varieties and geometric properties...",
    suggestions: &[
        "The variety's dimension suggests hidden symmetries",
        "Could we apply Grothendieck's machinery here?",
        "The singularities might encode important information",
        "This reminds me of mirror symmetry principles",
    ],
    response_template: "Your geometric intuition about \"{input}\" is spot-on! This variety's properties suggest we're dealing with something quite special. The cohomological dimensions hint at deeper algebraic structures. I wonder if this connects to recent developments in derived categories?",
    conjectures: &[Conjecture {
        title: "Variety Dimension Bound",
        statement: "For smooth projective varieties over ℂ, the Kodaira dimension bounds the geometric genus.",
        confidence: 0.91,
        evidence: &["Cohomological calculations", "Mirror symmetry predictions"],
    }],
    patterns: &[
        PatternInsight {
            kind: "Cohomological",
            confidence: 0.88,
            description: "Betti number relationships",
        },
        PatternInsight {
            kind: "Birational",
            confidence: 0.93,
            description: "Rational equivalence classes",
        },
    ],
};

static ANALYSIS: DomainProfile = DomainProfile {
    domain: Domain::Analysis,
    label: "Analysis",
    glyph: "∫",
    prompt: "Study analytic functions and convergence properties...",
    suggestions: &[
        "The convergence pattern suggests deeper structure",
        "Could complex analysis techniques apply here?",
        "The function's behavior near singularities is key",
        "This might connect to harmonic analysis",
    ],
    response_template: "Brilliant insight! The analytic behavior you've identified in \"{input}\" shows remarkable regularity. The singularities seem to encode fundamental information about the underlying function space. This might connect to recent work in harmonic analysis and operator theory.",
    conjectures: &[Conjecture {
        title: "Harmonic Function Extension",
        statement: "Harmonic functions on fractal boundaries extend uniquely to the interior with minimal energy.",
        confidence: 0.68,
        evidence: &[
            "Variational principle verification",
            "Numerical approximations",
        ],
    }],
    patterns: &[
        PatternInsight {
            kind: "Convergence",
            confidence: 0.90,
            description: "Series acceleration patterns",
        },
        PatternInsight {
            kind: "Singularity",
            confidence: 0.86,
            description: "Pole distribution regularity",
        },
    ],
};

/// Resolves a domain to its immutable profile.
///
/// Total over [`Domain`]; adding a variant fails to compile until a profile
/// is registered here.
pub fn lookup(domain: Domain) -> &'static DomainProfile {
    match domain {
        Domain::Topology => &TOPOLOGY,
        Domain::NumberTheory => &NUMBER_THEORY,
        Domain::Combinatorics => &COMBINATORICS,
        Domain::AlgebraicGeometry => &ALGEBRAIC_GEOMETRY,
        Domain::Analysis => &ANALYSIS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_content() {
        for domain in Domain::all() {
            let profile = lookup(domain);
            assert_eq!(profile.domain, domain);
            assert!(!profile.suggestions.is_empty());
            assert!(!profile.conjectures.is_empty());
            assert!(!profile.patterns.is_empty());
            assert!(!profile.label.is_empty());
            assert!(!profile.glyph.is_empty());
            assert_eq!(profile.response_template.matches("{input}").count(), 1);
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        for domain in Domain::all() {
            let first = lookup(domain);
            let second = lookup(domain);
            assert!(std::ptr::eq(first, second));
            assert_eq!((first.label, first.glyph), (second.label, second.glyph));
        }
    }

    #[test]
    fn test_confidences_are_fractions() {
        for domain in Domain::all() {
            let profile = lookup(domain);
            let conjectures = profile.conjectures.iter().map(|c| c.confidence);
            let patterns = profile.patterns.iter().map(|p| p.confidence);
            assert!(conjectures.chain(patterns).all(|c| (0.0..=1.0).contains(&c)));
        }
    }
}
