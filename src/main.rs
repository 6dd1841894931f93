// src/main.rs

mod svg_backend;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use graph_diagram::generator::MatrixGenerator;
use graph_diagram::graph::Graph;
use graph_diagram::layout;
use graph_diagram::render;

#[derive(Parser, Debug)]
#[command(
    name = "graph_diagram",
    about = "Generate a random graph and render it as an SVG diagram"
)]
struct Cli {
    /// Draw directed edges with arrowheads.
    #[arg(long)]
    directed: bool,

    /// Vertex count. Only the 11-vertex layout template exists today.
    #[arg(long, default_value_t = 11)]
    vertices: usize,

    /// Density parameter: larger values make edges more likely.
    #[arg(long, default_value_t = 0.685)]
    density: f64,

    /// Seed for a reproducible matrix; omit for a fresh graph per run.
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 600)]
    width: i32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 500)]
    height: i32,

    /// Output SVG path.
    #[arg(long, default_value = "graph.svg")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => MatrixGenerator::seeded(seed),
        None => MatrixGenerator::from_entropy(),
    };
    let matrix = if cli.directed {
        generator.directed(cli.vertices, cli.density)
    } else {
        generator.undirected(cli.vertices, cli.density)
    };

    print!("{}", matrix);

    let positions = layout::grid_positions(cli.width, cli.height, cli.vertices)
        .context("failed to lay out vertices")?;
    let graph =
        Graph::new(matrix, positions, cli.directed).context("failed to assemble graph")?;
    let primitives = render::render(&graph).context("failed to render graph")?;

    let title = if cli.directed {
        "Directed Graph"
    } else {
        "Undirected Graph"
    };
    log::info!(
        "{}: {} primitives for {} vertices",
        title,
        primitives.len(),
        cli.vertices
    );

    let document = svg_backend::document(&primitives, cli.width, cli.height, title);
    svg::save(&cli.out, &document)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    Ok(())
}
