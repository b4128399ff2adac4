//! Check an event against a persisted filter
//!
//! Usage: `filter-check <config.yaml> <scope> <tree.json> <event.json>`

use anyhow::{bail, Context, Result};
use tracing::info;
use trigger_filter_sdk::FilterEngineBuilder;

fn main() -> Result<()> {
    init_tracing()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [config_path, scope, tree_path, event_path] = args.as_slice() else {
        bail!("usage: filter-check <config.yaml> <scope> <tree.json> <event.json>");
    };

    let engine = FilterEngineBuilder::new()
        .with_config_file(config_path)
        .enable_tracing(true)
        .build()?;
    info!("Scopes: {:?}", engine.scopes());

    let tree_json = std::fs::read_to_string(tree_path)
        .with_context(|| format!("reading filter {}", tree_path))?;
    let event_json = std::fs::read_to_string(event_path)
        .with_context(|| format!("reading event {}", event_path))?;
    let event: serde_json::Value = serde_json::from_str(&event_json)
        .with_context(|| format!("parsing event {}", event_path))?;

    let decision = engine.decide_json(scope, &tree_json, &event)?;
    println!("filter:  {}", decision.summary);
    println!("matched: {}", decision.matched);
    for trace in &decision.traces {
        println!(
            "  {:<40} observed={:<16} {}",
            trace.rule,
            trace.observed.as_deref().unwrap_or("<absent>"),
            trace.result
        );
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "trigger_filter_sdk=info,trigger_filter_runtime=info".into()
            }),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
