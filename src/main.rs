// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wikiview CLI entrypoint.
//!
//! Loads a catalogue file, then prints the catalogue tree, the outline of the selected document
//! and the render result of each of its diagram blocks (using the built-in preview engine).
//! Set `RUST_LOG=wikiview=debug` to trace the render pipeline on stderr.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wikiview::config::ViewerConfig;
use wikiview::model::{NodeKey, TaskDetail};
use wikiview::render::{DiagramRenderer, DiagramView, PreviewEngine, RenderEngine};
use wikiview::store::FileCatalogueSource;
use wikiview::viewport::{BlockView, DocumentViewport, SelectOutcome};

#[derive(Debug, Parser)]
#[command(name = "wikiview", version, about = "Browse a generated repository wiki catalogue")]
struct Cli {
    /// Catalogue JSON: a record list, optionally wrapped in a `{ code, msg, data }` envelope.
    catalogue: PathBuf,
    /// Task detail JSON shown above the catalogue.
    #[arg(long)]
    task: Option<PathBuf>,
    /// Catalogue id of the document to show instead of the first one with content.
    #[arg(long)]
    select: Option<String>,
    /// Viewer config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    debounce_ms: Option<u64>,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Print the catalogue tree.
    #[arg(long)]
    tree: bool,
    /// Print the outline of the selected document.
    #[arg(long)]
    outline: bool,
    /// Render and print the diagrams of the selected document.
    #[arg(long)]
    diagrams: bool,
}

impl Cli {
    fn shows_everything(&self) -> bool {
        !(self.tree || self.outline || self.diagrams)
    }
}

fn print_task(task: &TaskDetail) {
    let status = task.status.map_or("unknown", |status| status.label());
    println!("{} [{}] ({status})", task.project_name, task.task_id);
    if let Some(url) = &task.project_url {
        println!("  {url}");
    }
    if let Some(reason) = &task.fail_reason {
        println!("  failed: {reason}");
    }
    println!();
}

fn print_tree<E: RenderEngine>(viewport: &DocumentViewport<E>) {
    let selected = viewport.selection().active_key();
    for node in viewport.visible_rows() {
        let marker = if node.is_leaf() {
            "·"
        } else if viewport.expansion().is_expanded(node.key()) {
            "▾"
        } else {
            "▸"
        };
        let cursor = if Some(node.key()) == selected { ">" } else { " " };
        println!("{cursor}{}{marker} {}", "  ".repeat(node.level()), node.title());
    }
    println!();
}

fn print_outline<E: RenderEngine>(viewport: &DocumentViewport<E>) {
    let selection = viewport.selection();
    if selection.is_empty() {
        println!("(no document selected)");
        return;
    }
    println!("# {}", selection.title());
    if viewport.outline().is_empty() {
        println!("(no headings)");
    }
    for anchor in viewport.outline() {
        let indent = "  ".repeat(usize::from(anchor.level().saturating_sub(1)));
        println!("{indent}- {} (#{})", anchor.title(), anchor.id());
    }
    println!();
}

fn print_diagrams<E: RenderEngine>(viewport: &DocumentViewport<E>) {
    let mut any = false;
    for block in viewport.document_view() {
        let BlockView::Diagram { slot, source, view } = block else {
            continue;
        };
        any = true;
        println!("{slot}:");
        match view {
            DiagramView::Rendered(body) => println!("{body}"),
            DiagramView::Failed(message) => println!("render failed: {message}"),
            DiagramView::FallbackCode => println!("(shown as code)\n{source}"),
            DiagramView::Pending => println!("(pending)"),
        }
        println!();
    }
    if !any {
        println!("(no diagrams)");
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path).await?,
        None => ViewerConfig::default(),
    }
    .with_overrides(cli.debounce_ms, cli.max_depth);

    let mut source = FileCatalogueSource::new(&cli.catalogue);
    if let Some(task) = &cli.task {
        source = source.with_task_path(task);
    }
    let renderer = DiagramRenderer::new(PreviewEngine::new())
        .with_engine_config(config.engine.clone())
        .with_render_config(config.render);
    let mut viewport = DocumentViewport::open(&source, renderer, &config).await?;

    if let Some(raw) = &cli.select {
        let key: NodeKey = raw.parse()?;
        match viewport.select(&key) {
            SelectOutcome::Selected => {}
            SelectOutcome::IgnoredParent => {
                eprintln!("{key} is a section, not a document; keeping the current selection");
            }
            SelectOutcome::NotFound => {
                return Err(format!("no catalogue entry with id {key}").into());
            }
        }
    }

    if let Some(task) = viewport.task() {
        print_task(task);
    }
    if cli.shows_everything() || cli.tree {
        print_tree(&viewport);
    }
    if cli.shows_everything() || cli.outline {
        print_outline(&viewport);
    }
    if cli.shows_everything() || cli.diagrams {
        viewport.render_diagrams().await;
        print_diagrams(&viewport);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Box::<dyn Error>::from)
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
