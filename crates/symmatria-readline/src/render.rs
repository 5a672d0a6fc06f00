//! Colored terminal rendering for session output.

use colored::Colorize;
use symmatria_core::citation::CitationLibrary;
use symmatria_core::contemplation::ReflectionView;
use symmatria_core::domain::{Domain, DomainProfile};
use symmatria_core::session::{ConversationTurn, DiscoverySession, ToolView};
use symmatria_execution::ActivityEvent;

use crate::commands::COMMANDS;

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "=== SYMMATRIA ===".bright_magenta().bold(),
        "Type a question to collaborate, '/help' for commands, or 'quit' to exit.".bright_black()
    )
}

pub fn help() -> String {
    let lines = [
        ("/domain [id]", "show or switch the mathematical domain"),
        ("/domains", "list domains"),
        ("/view [id]", "show or switch the tool panel"),
        ("/home, /think [n], /collaborate, /back", "navigate pages"),
        ("/suggest, /use <n>, /send", "list suggestions, pick one, submit the draft"),
        ("/turns, /discoveries", "conversation history and discovery stats"),
        ("/conjectures, /patterns", "canned insights for the current domain"),
        ("/cite [list|apa|add T | A | Y [| doi [| arxiv]]]", "bibliography"),
        ("/latex [show|clear|insert <template>]", "LaTeX scratch document"),
        ("/export bib|tex", "write bibliography.bib or theorem.tex"),
    ];
    let mut out = format!("{}", format!("{} commands", COMMANDS.len()).bright_yellow());
    for (usage, description) in lines {
        out.push_str(&format!("\n  {:<48} {}", usage.bright_cyan(), description));
    }
    out
}

pub fn domains(current: Domain) -> String {
    Domain::all()
        .map(|domain| {
            let profile = symmatria_core::domain::lookup(domain);
            let marker = if domain == current { "*" } else { " " };
            format!("{marker} {} {:<20} {}", profile.glyph, domain.id(), profile.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn profile(profile: &DomainProfile) -> String {
    let mut out = format!(
        "{} {}\n{}",
        profile.glyph,
        profile.label.bright_magenta().bold(),
        profile.prompt.bright_black()
    );
    out.push('\n');
    out.push_str(&suggestions(profile.suggestions));
    out
}

pub fn suggestions<S: AsRef<str>>(suggestions: &[S]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {}", i + 1, s.as_ref().yellow()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn view(view: ToolView) -> String {
    format!("{} {}", view.glyph(), view.label().bright_cyan())
}

pub fn turn(turn: &ConversationTurn) -> String {
    let mut out = format!(
        "{}\n",
        format!("[AI · {} · #{}]", turn.domain, turn.id).bright_magenta()
    );
    for line in turn.response.lines() {
        out.push_str(&format!("{}\n", line.bright_blue()));
    }
    for insight in &turn.insights {
        out.push_str(&format!("  {}\n", format!("• {insight}").cyan()));
    }
    out
}

pub fn turns(turns: &[ConversationTurn]) -> String {
    if turns.is_empty() {
        return "No turns yet.".bright_black().to_string();
    }
    turns
        .iter()
        .map(|t| {
            format!(
                "{} {}\n{}",
                format!("> {}", t.human).green(),
                format!("({})", t.created_at).bright_black(),
                turn(t)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn discoveries(discoveries: &DiscoverySession) -> String {
    let stats = discoveries.stats();
    let mut out = format!(
        "Theorems: {}  Conjectures: {}  Patterns: {}",
        stats.theorems, stats.conjectures, stats.patterns
    )
    .bright_yellow()
    .to_string();
    for (label, items) in [
        ("theorem", &discoveries.theorems),
        ("conjecture", &discoveries.conjectures),
        ("pattern", &discoveries.patterns),
    ] {
        for item in items {
            out.push_str(&format!("\n  [{label}] {item}"));
        }
    }
    out
}

pub fn conjectures(profile: &DomainProfile) -> String {
    profile
        .conjectures
        .iter()
        .map(|c| {
            let mut out = format!(
                "{} ({:.0}%)\n  {}",
                c.title.bright_magenta(),
                c.confidence * 100.0,
                c.statement
            );
            for evidence in c.evidence {
                out.push_str(&format!("\n    - {}", evidence.bright_black()));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn patterns(profile: &DomainProfile) -> String {
    profile
        .patterns
        .iter()
        .map(|p| {
            format!(
                "{} ({:.0}%) {}",
                p.kind.bright_cyan(),
                p.confidence * 100.0,
                p.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn reflection(view: &ReflectionView) -> String {
    format!(
        "{} {}\n{}\n{}",
        view.title.bright_magenta().bold(),
        format!("[{}/{}]", view.position, view.total).bright_black(),
        view.description.bright_black(),
        view.text
    )
}

pub fn citations(library: &CitationLibrary, apa: bool) -> String {
    if library.is_empty() {
        return "No citations.".bright_black().to_string();
    }
    library
        .citations()
        .iter()
        .map(|c| {
            if apa {
                c.to_apa()
            } else {
                format!("{:>14}  {}  ({})", c.id.bright_black(), c.title, c.year)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn activity(event: &ActivityEvent) -> String {
    format!("· {}", event.message).bright_black().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use symmatria_core::domain::lookup;

    #[test]
    fn test_domains_marks_current() {
        let out = domains(Domain::Analysis);
        assert_eq!(out.lines().count(), 5);
        let current = out.lines().find(|l| l.starts_with('*')).unwrap();
        assert!(current.contains("analysis"));
    }

    #[test]
    fn test_suggestions_are_numbered_from_one() {
        let out = suggestions(lookup(Domain::Topology).suggestions);
        assert!(out.lines().next().unwrap().contains("1."));
    }

    #[test]
    fn test_empty_history() {
        assert!(turns(&[]).contains("No turns yet."));
    }

    #[test]
    fn test_discoveries_counts() {
        let mut session = DiscoverySession::new();
        session.absorb(&["Pattern identified: loops", "Conjecture: holds"]);
        let out = discoveries(&session);
        assert!(out.contains("Conjectures: 1"));
        assert!(out.contains("[pattern] Pattern identified: loops"));
    }

    #[test]
    fn test_citations_apa() {
        let out = citations(&CitationLibrary::new(), true);
        assert!(out.contains("Gauss, C.F. (1799). Fundamental Theorem of Algebra. DOI: 10.1007/example"));
    }
}
