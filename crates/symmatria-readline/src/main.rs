use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use symmatria_application::{ContemplationService, ExportService, SessionController};
use symmatria_core::citation::CitationLibrary;
use symmatria_core::config::ConfigRoot;
use symmatria_core::domain::lookup;
use symmatria_core::latex::LatexDocument;
use symmatria_core::session::{Page, SessionEvent, SubmitRejection};
use symmatria_execution::logging::DEFAULT_FILTER;
use symmatria_execution::{ActivityLayer, DelayedResponder, LogOutput, init_tracing};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

mod commands;
mod render;

use commands::{COMMANDS, CiteAction, Command, ExportTarget, LatexAction};

/// Interactive SYMMATRIA session.
#[derive(Parser, Debug)]
#[command(name = "symmatria", version, about)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// rustyline helper completing and highlighting slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Scratch state owned by the REPL alongside the session.
struct Workbench {
    citations: CitationLibrary,
    latex: LatexDocument,
    exporter: ExportService,
    contemplation: ContemplationService,
}

fn load_config(path: Option<PathBuf>) -> Result<ConfigRoot> {
    match path {
        Some(path) => ConfigRoot::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => ConfigRoot::load_default().context("failed to load default config"),
    }
}

/// Shows each new reflection until `count` have been printed or Ctrl-C.
async fn think(service: &ContemplationService, count: usize) {
    let cancel = CancellationToken::new();
    let mut views = service.start(cancel.clone());
    let mut shown = 0;
    let mut last = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            view = views.recv() => {
                let Some(view) = view else { break };
                let key = (view.structure_id, view.position);
                if last == Some(key) {
                    continue;
                }
                last = Some(key);
                println!("{}\n", render::reflection(&view));
                shown += 1;
                if shown == count {
                    break;
                }
            }
        }
    }
    cancel.cancel();
}

async fn handle(command: Command, controller: &SessionController, bench: &mut Workbench) {
    match command {
        Command::Help => println!("{}", render::help()),
        Command::Home | Command::Back => controller.back().await,
        Command::Collaborate => controller.set_page(Page::Collaborate).await,
        Command::Think { reflections } => {
            controller.set_page(Page::Think).await;
            println!("{}", "Contemplating... (Ctrl-C to stop)".bright_black());
            think(&bench.contemplation, reflections).await;
        }
        Command::Domain(None) => println!("{}", render::profile(lookup(controller.domain().await))),
        Command::Domain(Some(domain)) => {
            controller.set_domain(domain).await;
        }
        Command::Domains => println!("{}", render::domains(controller.domain().await)),
        Command::View(None) => println!("{}", render::view(controller.snapshot().await.view)),
        Command::View(Some(view)) => controller.set_view(view).await,
        Command::Suggest => println!("{}", render::suggestions(controller.suggestions().await.as_slice())),
        Command::Use(n) => {
            if controller.apply_suggestion(n - 1).await.is_none() {
                println!("{}", format!("No suggestion #{n}").yellow());
            }
        }
        Command::Send => {
            controller.submit_draft().await;
        }
        Command::Submit(text) => {
            controller.submit(&text).await;
        }
        Command::Turns => println!("{}", render::turns(&controller.turns().await)),
        Command::Discoveries => println!("{}", render::discoveries(&controller.discoveries().await)),
        Command::Conjectures => {
            println!("{}", render::conjectures(lookup(controller.domain().await)))
        }
        Command::Patterns => println!("{}", render::patterns(lookup(controller.domain().await))),
        Command::Cite(CiteAction::List) => println!("{}", render::citations(&bench.citations, false)),
        Command::Cite(CiteAction::Apa) => println!("{}", render::citations(&bench.citations, true)),
        Command::Cite(CiteAction::Add(draft)) => match bench.citations.add(&draft, Utc::now()) {
            Some(citation) => println!("{}", format!("Added {}", citation.to_apa()).green()),
            None => println!("{}", "Citation needs a title".yellow()),
        },
        Command::Latex(LatexAction::Show) => println!("{}", bench.latex.source()),
        Command::Latex(LatexAction::Clear) => bench.latex.set_source(""),
        Command::Latex(LatexAction::Insert(template)) => {
            bench.latex.insert(template);
            println!("{}", format!("Inserted {} template", template.id()).green());
        }
        Command::Export(target) => {
            let written = match target {
                ExportTarget::Bibliography => {
                    bench.exporter.export_bibliography(&bench.citations).await
                }
                ExportTarget::Latex => bench.exporter.export_latex(&bench.latex).await,
            };
            match written {
                Ok(path) => println!("{}", format!("Wrote {}", path.display()).green()),
                Err(e) => eprintln!("{}", format!("Export failed: {e}").red()),
            }
        }
        Command::Quit => {}
    }
}

/// Entry point for the SYMMATRIA REPL.
///
/// Free text is submitted to the session controller; replies arrive on the
/// event channel and are printed by a background task so the prompt stays
/// usable while a reply is pending.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config)?;

    let (activity, mut activity_rx) = ActivityLayer::channel();
    init_tracing(DEFAULT_FILTER, LogOutput::Silent, Some(activity))?;
    tracing::debug!(domain = %config.session.default_domain, "REPL starting");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<SessionEvent>();
    let responder = Arc::new(DelayedResponder::from_config(&config.session));
    let controller =
        SessionController::new(config.session.default_domain, responder).with_event_sender(event_tx);

    let activity_printer = tokio::spawn(async move {
        while let Some(event) = activity_rx.recv().await {
            if event.level != "DEBUG" && event.level != "TRACE" {
                println!("{}", render::activity(&event));
            }
        }
    });

    let event_printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                SessionEvent::SubmissionAccepted { domain, .. } => {
                    println!("{}", format!("Thinking in {domain}...").bright_black());
                }
                SessionEvent::SubmissionRejected {
                    reason: SubmitRejection::InFlight,
                } => {
                    println!("{}", "Still working on the previous question.".bright_black());
                }
                SessionEvent::SubmissionRejected { .. } => {}
                SessionEvent::TurnAppended { turn } => println!("{}", render::turn(&turn)),
                SessionEvent::DomainChanged { domain, .. } => {
                    println!("{}", render::profile(lookup(domain)));
                }
                SessionEvent::ViewChanged { view } => println!("{}", render::view(view)),
                SessionEvent::PageChanged { page } => {
                    println!("{}", format!("Page: {}", page.id()).bright_black());
                }
                SessionEvent::DraftChanged { draft } if !draft.is_empty() => {
                    println!("{}", format!("Draft: {draft} (/send to submit)").yellow());
                }
                SessionEvent::DraftChanged { .. } => {}
            }
        }
    });

    let mut bench = Workbench {
        citations: CitationLibrary::new(),
        latex: LatexDocument::default(),
        exporter: ExportService::new(config.export.output_dir.clone()),
        contemplation: ContemplationService::new(config.contemplation.clone()),
    };

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", render::banner());
    println!("{}", render::profile(lookup(controller.domain().await)));
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match Command::parse(trimmed) {
                    Ok(Command::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Command::Submit(text)) => {
                        println!("{}", format!("> {text}").green());
                        handle(Command::Submit(text), &controller, &mut bench).await;
                    }
                    Ok(command) => handle(command, &controller, &mut bench).await,
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // Closing the event channel ends the printer; the activity channel lives
    // as long as the global subscriber.
    drop(controller);
    let _ = event_printer.await;
    activity_printer.abort();

    Ok(())
}
