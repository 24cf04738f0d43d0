//! Work order preview
//!
//! Seeds the sample work order, replays an optional action script and prints
//! the rendered table.

mod text;

use anyhow::{Context, Result};
use clap::Parser;
use doc_model::WorkOrder;
use edit_engine::{CommandOutcome, EditAction, EditMode, EditingEngine};
use render_model::{RenderConfig, TableRender, TableRenderer, Toolbar};
use serde::Serialize;
use settings::SettingsManager;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "work-order-preview", about = "Render the work order table")]
struct Args {
    /// Directory holding settings.json
    #[arg(long, default_value = ".")]
    settings: PathBuf,

    /// JSON file with an array of edit actions to apply
    #[arg(long)]
    actions: Option<PathBuf>,

    /// Start in edit mode regardless of settings
    #[arg(long)]
    edit: bool,

    /// Print the render tree as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Preview<'a> {
    version: u64,
    outcomes: &'a [CommandOutcome],
    toolbar: Toolbar,
    table: TableRender,
}

fn load_actions(path: &Path) -> Result<Vec<EditAction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading actions from {}", path.display()))?;
    EditAction::list_from_json(&content)
        .with_context(|| format!("decoding actions in {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut manager = SettingsManager::new(&args.settings);
    let settings = manager.load_sync()?.clone();

    let mode = if args.edit {
        EditMode::Edit
    } else {
        settings.editing.initial_mode()
    };
    let mut engine = EditingEngine::new(WorkOrder::sample()).with_edit_mode(mode);

    let actions = match &args.actions {
        Some(path) => load_actions(path)?,
        None => Vec::new(),
    };
    let outcomes = engine.dispatch_all(&actions);
    tracing::info!(
        applied = outcomes.iter().filter(|o| o.is_applied()).count(),
        total = outcomes.len(),
        "replayed actions"
    );

    let renderer = TableRenderer::new(RenderConfig::from(&settings.render));
    let table = renderer.render_session(engine.state());

    if args.json {
        let preview = Preview {
            version: engine.version(),
            outcomes: &outcomes,
            toolbar: Toolbar::render(engine.state()),
            table,
        };
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        print!("{}", text::render_text(&table));
    }

    Ok(())
}
