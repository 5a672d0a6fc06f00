use std::sync::Arc;
use std::time::Duration;

use symmatria_application::{ExportService, SessionController};
use symmatria_core::citation::{CitationDraft, CitationLibrary};
use symmatria_core::config::ConfigRoot;
use symmatria_core::domain::{Domain, lookup};
use symmatria_core::latex::{LatexDocument, LatexTemplate};
use symmatria_core::session::{Page, SessionEvent, ToolView};
use symmatria_execution::{ActivityLayer, DelayedResponder};
use tempfile::TempDir;
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;

fn controller() -> SessionController {
    let config = ConfigRoot::default();
    SessionController::new(
        config.session.default_domain,
        Arc::new(DelayedResponder::from_config(&config.session)),
    )
}

#[tokio::test(start_paused = true)]
async fn test_turn_ids_strictly_increase() {
    let controller = controller();
    for question in ["first", "second", "third"] {
        controller.submit(question).await.completed().await.unwrap();
    }

    let turns = controller.turns().await;
    let humans: Vec<&str> = turns.iter().map(|t| t.human.as_str()).collect();
    assert_eq!(humans, vec!["first", "second", "third"]);
    assert!(turns.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test(start_paused = true)]
async fn test_discoveries_accumulate_per_turn() {
    let controller = controller();
    controller.submit("loops").await.completed().await.unwrap();
    controller.submit("knots").await.completed().await.unwrap();

    let stats = controller.discoveries().await.stats();
    assert_eq!(stats.patterns, 2);
    assert_eq!(stats.conjectures, 2);
    assert_eq!(stats.theorems, 0);
}

#[tokio::test(start_paused = true)]
async fn test_domain_switch_keeps_history() {
    let controller = controller();
    let before = controller.suggestions().await;
    controller.submit("Is X connected?").await.completed().await.unwrap();

    controller.set_domain(Domain::NumberTheory).await;
    let after = controller.suggestions().await;

    assert_ne!(before, after);
    assert_eq!(after.len(), lookup(Domain::NumberTheory).suggestions.len());
    let turns = controller.turns().await;
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].domain, Domain::Topology);
}

#[tokio::test(start_paused = true)]
async fn test_reply_waits_for_configured_delay() {
    let controller = controller();
    let outcome = controller.submit("compactness").await;
    assert!(outcome.is_accepted());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(controller.turns().await.is_empty());
    assert!(controller.is_submitting().await);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(controller.turns().await.len(), 1);
    assert!(!controller.is_submitting().await);
}

#[tokio::test(start_paused = true)]
async fn test_navigation_events() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = controller().with_event_sender(tx);

    controller.set_page(Page::Collaborate).await;
    controller.set_view(ToolView::Language).await;
    controller.set_view(ToolView::Language).await;
    controller.back().await;
    drop(controller);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    assert_eq!(
        events,
        vec![
            SessionEvent::PageChanged {
                page: Page::Collaborate
            },
            SessionEvent::ViewChanged {
                view: ToolView::Language
            },
            SessionEvent::PageChanged { page: Page::Home },
        ]
    );
}

#[tokio::test]
async fn test_export_user_citation_and_document() {
    let temp_dir = TempDir::new().unwrap();
    let exporter = ExportService::new(temp_dir.path());

    let mut library = CitationLibrary::new();
    let draft = CitationDraft {
        title: "Ricci flow with surgery".to_string(),
        authors: "Perelman, G.".to_string(),
        year: 2003,
        arxiv: "math/0303109".to_string(),
        ..CitationDraft::default()
    };
    assert!(library.add(&draft, chrono::Utc::now()).is_some());

    let bib = exporter.export_bibliography(&library).await.unwrap();
    let content = std::fs::read_to_string(bib).unwrap();
    assert_eq!(content.matches("@article{").count(), 3);
    assert!(content.contains("arxiv={math/0303109}"));

    let mut document = LatexDocument::new("% scratch");
    document.insert(LatexTemplate::Theorem);
    let tex = exporter.export_latex(&document).await.unwrap();
    assert_eq!(std::fs::read_to_string(tex).unwrap(), document.source());
}

#[tokio::test(start_paused = true)]
async fn test_reply_logs_carry_session_span() {
    let (layer, mut rx) = ActivityLayer::channel();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));

    let controller = controller();
    controller.submit("loops").await.completed().await.unwrap();

    let mut appended = None;
    while let Ok(event) = rx.try_recv() {
        if event.message == "Turn appended" {
            appended = Some(event);
        }
    }
    let event = appended.expect("turn append is logged");
    assert_eq!(event.span["session"].as_str(), Some(controller.session_id()));
}
