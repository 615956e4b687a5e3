use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talent_scout::adapters::ai::OpenAIProvider;
use talent_scout::application::ScreeningOrchestrator;
use talent_scout::ports::AIProvider;
use talent_scout::config::AppConfig;
use talent_scout::domain::screening::{ConversationTurn, SupportedLanguage, TurnRole};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talent_scout=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let provider = OpenAIProvider::new(config.ai.provider_config()?)
        .context("failed to build completion client")?;
    let provider_info = provider.provider_info();
    info!(
        provider = %provider_info.name,
        model = %provider_info.model,
        language = %config.screening.display_language.as_str(),
        "starting TalentScout"
    );

    let mut orchestrator = ScreeningOrchestrator::new(Arc::new(provider), config.screening.settings());
    print_turns(&orchestrator.start().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        if command == "/reset" {
            print_turns(&orchestrator.reset().await);
            continue;
        }

        if let Some(name) = command.strip_prefix("/lang") {
            match name.trim().parse::<SupportedLanguage>() {
                Ok(language) => {
                    orchestrator.set_display_language(language);
                    println!("(display language set to {})", language.as_str());
                }
                Err(e) => println!("({})", e),
            }
            continue;
        }

        match orchestrator.submit_turn(&line).await {
            Ok(outcome) => print_turns(&outcome.new_turns),
            Err(e) => println!("({})", e),
        }
    }

    info!("input closed, exiting");
    Ok(())
}

fn print_turns(turns: &[ConversationTurn]) {
    for turn in turns.iter().filter(|t| t.role == TurnRole::Assistant) {
        println!("\n{}\n", turn.text);
    }
}
