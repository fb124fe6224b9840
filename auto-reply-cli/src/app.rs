//! Command implementations.

use crate::console::{console_message, ConsoleCommandHandler, StdoutBot};
use anyhow::{Context, Result};
use auto_reply::{
    extract_decision, AutoReplyConfig, AutoReplyHandler, DecisionPipeline, QueueReplyDispatcher,
    ReplyWorker, SharedConfig,
};
use bot_core::{Bot, HandlerResponse};
use handler_chain::HandlerChain;
use llm_client::{EnvLlmConfig, LlmClient, LlmConfig, OpenAILlmClient};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::info;

/// Plugin config from `--config` if given, otherwise from env.
pub fn load_plugin_config(path: Option<&Path>) -> Result<AutoReplyConfig> {
    match path {
        Some(path) => AutoReplyConfig::from_json_file(path),
        None => AutoReplyConfig::from_env(),
    }
}

/// Decision client: decision model, no system prompt so the template alone steers the model.
fn decision_client(llm: &EnvLlmConfig) -> Arc<dyn LlmClient> {
    Arc::new(
        OpenAILlmClient::from_config(llm)
            .with_model(llm.decision_model().to_string())
            .with_system_prompt_opt(None),
    )
}

pub async fn run_chat(
    config: AutoReplyConfig,
    bot_name: String,
    wake_words: Vec<String>,
) -> Result<()> {
    let llm = EnvLlmConfig::from_env().context("Load LLM config from env")?;
    let bot: Arc<dyn Bot> = Arc::new(StdoutBot);

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let worker = ReplyWorker::new(Arc::new(OpenAILlmClient::from_config(&llm)), bot.clone());
    let worker_task = tokio::spawn(worker.run(rx));

    let shared = SharedConfig::new(config);
    let handler = Arc::new(AutoReplyHandler::new(
        Arc::new(shared.clone()),
        DecisionPipeline::new(decision_client(&llm), Arc::new(QueueReplyDispatcher::new(tx))),
    ));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(ConsoleCommandHandler::new(bot.clone(), shared)))
        .add_handler(handler.clone());

    info!(bot_name = %bot_name, wake_words = ?wake_words, "console chat started");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut seq = 0u64;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        seq += 1;
        let message = console_message(seq, &line, &bot_name, &wake_words);
        let response = chain.handle(&message).await?;
        if response == HandlerResponse::Continue {
            println!("[chat {}] (not claimed)", message.chat.id);
        }
    }

    handler.terminate();
    drop(chain);
    drop(handler);
    worker_task.await.context("Reply worker panicked")?;
    Ok(())
}

pub async fn run_decide(config: AutoReplyConfig, text: &str, addressed: bool) -> Result<()> {
    let llm = EnvLlmConfig::from_env().context("Load LLM config from env")?;
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let pipeline =
        DecisionPipeline::new(decision_client(&llm), Arc::new(QueueReplyDispatcher::new(tx)));

    let decision = pipeline
        .decide(&config.decision_making_prompt, text.trim(), addressed)
        .await?;
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

pub async fn run_extract() -> Result<()> {
    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("Read model output from stdin")?;
    let decision = extract_decision(&raw)?;
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}
