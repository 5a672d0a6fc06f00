use std::sync::Arc;

use anyhow::{Result, bail};
use symmatria_application::{SessionController, SubmitOutcome};
use symmatria_core::config::SessionConfig;
use symmatria_core::domain::Domain;
use symmatria_core::session::ConversationTurn;
use symmatria_execution::DelayedResponder;

/// Runs one submission through a fresh session and returns the turn.
pub async fn ask(config: &SessionConfig, domain: Domain, text: &str) -> Result<ConversationTurn> {
    let responder = Arc::new(DelayedResponder::from_config(config));
    let controller = SessionController::new(domain, responder);

    match controller.submit(text).await {
        SubmitOutcome::Accepted(handle) => match handle.completed().await {
            Some(turn) => Ok(turn),
            None => bail!("No reply was produced"),
        },
        SubmitOutcome::Rejected(reason) => bail!("Nothing to ask ({reason:?})"),
    }
}

pub async fn run(config: &SessionConfig, domain: Domain, text: &str, json: bool) -> Result<()> {
    let turn = ask(config, domain, text).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&turn)?);
        return Ok(());
    }

    println!("🤖 [{}]", turn.domain);
    println!("{}", turn.response);
    println!();
    for insight in &turn.insights {
        println!("  • {insight}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ask_returns_turn() {
        let turn = ask(&SessionConfig::default(), Domain::Topology, "Is X connected?")
            .await
            .unwrap();
        assert_eq!(turn.human, "Is X connected?");
        assert!(turn.response.contains("topological"));
        assert_eq!(turn.insights.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_question_is_an_error() {
        assert!(ask(&SessionConfig::default(), Domain::Analysis, "  ").await.is_err());
    }
}
