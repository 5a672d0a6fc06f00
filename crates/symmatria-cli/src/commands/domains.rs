use anyhow::Result;
use symmatria_core::domain::{Domain, DomainProfile, lookup};

pub fn list(current: Domain) {
    for domain in Domain::all() {
        let profile = lookup(domain);
        let marker = if domain == current { "*" } else { " " };
        println!("{marker} {} {:<20} {}", profile.glyph, domain.id(), profile.label);
    }
}

pub fn profile(domain: Domain, json: bool) -> Result<()> {
    let profile = lookup(domain);
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print!("{}", describe(profile));
    }
    Ok(())
}

fn describe(profile: &DomainProfile) -> String {
    let mut out = format!("{} {}\n{}\n\n💡 Suggestions:\n", profile.glyph, profile.label, profile.prompt);
    for (i, suggestion) in profile.suggestions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
    }
    out.push_str("\n📐 Conjectures:\n");
    for conjecture in profile.conjectures {
        out.push_str(&format!(
            "  - {} ({:.0}%): {}\n",
            conjecture.title,
            conjecture.confidence * 100.0,
            conjecture.statement
        ));
    }
    out.push_str("\n🔍 Patterns:\n");
    for pattern in profile.patterns {
        out.push_str(&format!("  - [{}] {}\n", pattern.kind, pattern.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_every_suggestion() {
        for domain in Domain::all() {
            let profile = lookup(domain);
            let text = describe(profile);
            assert!(text.contains(profile.label));
            for suggestion in profile.suggestions {
                assert!(text.contains(suggestion));
            }
        }
    }
}
