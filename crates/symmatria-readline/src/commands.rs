//! REPL command parsing.

use symmatria_core::citation::CitationDraft;
use symmatria_core::domain::Domain;
use symmatria_core::error::{Result, SymmatriaError};
use symmatria_core::latex::LatexTemplate;
use symmatria_core::session::ToolView;

/// Slash commands offered for completion.
pub const COMMANDS: &[&str] = &[
    "/help",
    "/home",
    "/think",
    "/collaborate",
    "/back",
    "/domain",
    "/domains",
    "/view",
    "/suggest",
    "/use",
    "/send",
    "/turns",
    "/discoveries",
    "/conjectures",
    "/patterns",
    "/cite",
    "/latex",
    "/export",
];

/// Default number of reflections shown by `/think`.
pub const DEFAULT_THINK_REFLECTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Bibliography,
    Latex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiteAction {
    List,
    Apa,
    Add(CitationDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatexAction {
    Show,
    Insert(LatexTemplate),
    Clear,
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Home,
    Think { reflections: usize },
    Collaborate,
    Back,
    /// `None` shows the current domain
    Domain(Option<Domain>),
    Domains,
    View(Option<ToolView>),
    Suggest,
    /// 1-based suggestion number
    Use(usize),
    Send,
    Turns,
    Discoveries,
    Conjectures,
    Patterns,
    Cite(CiteAction),
    Latex(LatexAction),
    Export(ExportTarget),
    Quit,
    /// Free text submitted to the collaborator
    Submit(String),
}

fn parse_number(kind: &'static str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| SymmatriaError::invalid_input(kind, value))
}

/// Parses `title | authors | year [| doi [| arxiv]]`.
fn parse_citation(args: &str) -> Result<CitationDraft> {
    let parts: Vec<&str> = args.split('|').map(str::trim).collect();
    if parts.len() < 2 || parts[0].is_empty() {
        return Err(SymmatriaError::invalid_input("citation", args));
    }
    let mut draft = CitationDraft {
        title: parts[0].to_string(),
        authors: parts[1].to_string(),
        ..CitationDraft::default()
    };
    if let Some(year) = parts.get(2).filter(|y| !y.is_empty()) {
        draft.year = year
            .parse()
            .map_err(|_| SymmatriaError::invalid_input("year", *year))?;
    }
    draft.doi = parts.get(3).map(|s| s.to_string()).unwrap_or_default();
    draft.arxiv = parts.get(4).map(|s| s.to_string()).unwrap_or_default();
    Ok(draft)
}

impl Command {
    /// Parses a trimmed, non-empty input line.
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        if line == "quit" || line == "exit" {
            return Ok(Command::Quit);
        }
        if !line.starts_with('/') {
            return Ok(Command::Submit(line.to_string()));
        }

        let (name, args) = match line.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (line, ""),
        };

        let command = match name {
            "/help" => Command::Help,
            "/home" => Command::Home,
            "/think" if args.is_empty() => Command::Think {
                reflections: DEFAULT_THINK_REFLECTIONS,
            },
            "/think" => Command::Think {
                reflections: parse_number("reflection count", args)?,
            },
            "/collaborate" => Command::Collaborate,
            "/back" => Command::Back,
            "/domain" if args.is_empty() => Command::Domain(None),
            "/domain" => Command::Domain(Some(args.parse()?)),
            "/domains" => Command::Domains,
            "/view" if args.is_empty() => Command::View(None),
            "/view" => Command::View(Some(args.parse()?)),
            "/suggest" => Command::Suggest,
            "/use" => Command::Use(parse_number("suggestion number", args)?),
            "/send" => Command::Send,
            "/turns" => Command::Turns,
            "/discoveries" => Command::Discoveries,
            "/conjectures" => Command::Conjectures,
            "/patterns" => Command::Patterns,
            "/cite" => match args.split_once(char::is_whitespace) {
                Some(("add", rest)) => Command::Cite(CiteAction::Add(parse_citation(rest)?)),
                None if args.is_empty() || args == "list" => Command::Cite(CiteAction::List),
                None if args == "apa" => Command::Cite(CiteAction::Apa),
                _ => return Err(SymmatriaError::invalid_input("cite action", args)),
            },
            "/latex" => match args.split_once(char::is_whitespace) {
                Some(("insert", template)) => {
                    Command::Latex(LatexAction::Insert(template.parse()?))
                }
                None if args.is_empty() || args == "show" => Command::Latex(LatexAction::Show),
                None if args == "clear" => Command::Latex(LatexAction::Clear),
                _ => return Err(SymmatriaError::invalid_input("latex action", args)),
            },
            "/export" => match args {
                "bib" | "bibtex" => Command::Export(ExportTarget::Bibliography),
                "tex" | "latex" => Command::Export(ExportTarget::Latex),
                _ => return Err(SymmatriaError::invalid_input("export target", args)),
            },
            _ => return Err(SymmatriaError::invalid_input("command", name)),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_is_submitted() {
        assert_eq!(
            Command::parse("Is X connected?").unwrap(),
            Command::Submit("Is X connected?".to_string())
        );
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_domain_and_view() {
        assert_eq!(
            Command::parse("/domain number-theory").unwrap(),
            Command::Domain(Some(Domain::NumberTheory))
        );
        assert_eq!(Command::parse("/domain").unwrap(), Command::Domain(None));
        assert_eq!(
            Command::parse("/view proof").unwrap(),
            Command::View(Some(ToolView::Proof))
        );
        assert!(Command::parse("/domain geometry").is_err());
    }

    #[test]
    fn test_numbers_are_positive() {
        assert_eq!(Command::parse("/use 2").unwrap(), Command::Use(2));
        assert!(Command::parse("/use 0").is_err());
        assert!(Command::parse("/use two").is_err());
        assert_eq!(
            Command::parse("/think").unwrap(),
            Command::Think {
                reflections: DEFAULT_THINK_REFLECTIONS
            }
        );
        assert_eq!(
            Command::parse("/think 5").unwrap(),
            Command::Think { reflections: 5 }
        );
    }

    #[test]
    fn test_cite_add() {
        let command =
            Command::parse("/cite add Ricci Flow | Perelman, G. | 2002 | | math/0211159").unwrap();
        match command {
            Command::Cite(CiteAction::Add(draft)) => {
                assert_eq!(draft.title, "Ricci Flow");
                assert_eq!(draft.authors, "Perelman, G.");
                assert_eq!(draft.year, 2002);
                assert_eq!(draft.doi, "");
                assert_eq!(draft.arxiv, "math/0211159");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Command::parse("/cite add only a title").is_err());
        assert!(Command::parse("/cite add T | A | someday").is_err());
    }

    #[test]
    fn test_latex_and_export() {
        assert_eq!(
            Command::parse("/latex insert theorem").unwrap(),
            Command::Latex(LatexAction::Insert(LatexTemplate::Theorem))
        );
        assert_eq!(Command::parse("/latex").unwrap(), Command::Latex(LatexAction::Show));
        assert_eq!(
            Command::parse("/export bib").unwrap(),
            Command::Export(ExportTarget::Bibliography)
        );
        assert!(Command::parse("/export pdf").is_err());
        assert!(Command::parse("/unknown").unwrap_err().is_invalid_input());
    }
}
