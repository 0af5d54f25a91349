//! Implementation of the `adjutant ask` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::build_gateway;
use crate::agents::{
    ChunkConfig, DirectResponder, KnowledgeResponder, PersonaResponder, RetrievalResponder,
};
use crate::cli::output::progress::{start_spinner, SpinnerExt};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::Responder;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Prompt to send (positional argument)
    pub prompt: String,

    /// Persona the responder adopts
    #[arg(short, long)]
    pub persona: Option<String>,

    /// Inline knowledge the answer must stay within
    #[arg(short, long, requires = "persona")]
    pub knowledge: Option<String>,

    /// File whose contents are chunked and searched for the best passage
    #[arg(long, requires = "persona", conflicts_with = "knowledge")]
    pub knowledge_file: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
pub struct AskOutput {
    pub prompt: String,
    pub persona: Option<String>,
    pub response: String,
}

impl CommandOutput for AskOutput {
    fn to_human(&self) -> String {
        format!("{}\n{}", style("Response:").bold(), self.response)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: AskArgs, config: Config, json_mode: bool) -> Result<()> {
    let gateway = build_gateway(&config.gateway)?;

    let responder: Box<dyn Responder> =
        match (args.persona.as_deref(), &args.knowledge, &args.knowledge_file) {
            (Some(persona), _, Some(path)) => {
                let corpus = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read knowledge file {path:?}"))?;
                Box::new(RetrievalResponder::new(
                    gateway,
                    persona,
                    &corpus,
                    ChunkConfig::default(),
                )?)
            }
            (Some(persona), Some(knowledge), None) => Box::new(KnowledgeResponder::new(
                gateway,
                persona,
                knowledge.as_str(),
            )?),
            (Some(persona), None, None) => Box::new(PersonaResponder::new(gateway, persona)?),
            (None, ..) => Box::new(DirectResponder::new(gateway)),
        };

    let spinner = (!json_mode).then(|| start_spinner("Waiting for response"));

    let result = responder.respond(&args.prompt).await;
    if let Some(spinner) = &spinner {
        match &result {
            Ok(_) => spinner.succeed("Response received"),
            Err(_) => spinner.fail("Request failed"),
        }
    }
    let response = result?;

    let out = AskOutput {
        prompt: args.prompt,
        persona: args.persona,
        response,
    };
    output(&out, json_mode);
    Ok(())
}
