//! Collabgraph batch analysis
//!
//! Reads a JSON array of interactions, builds one graph view over them and prints
//! the full metric report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use collabgraph::graph::export_tables;
use collabgraph::{
    AnalysisConfig, Analyzer, Backing, GraphReport, Interaction, InteractionGraphBuilder,
    RankedVertex,
};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "collabgraph", version, about = "Interaction graph analytics")]
struct Cli {
    /// JSON file holding an array of {source, target, kind} interactions
    input: PathBuf,

    /// YAML analysis configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which interactions become edges
    #[arg(long, default_value = "integrated")]
    graph: GraphKind,

    /// Storage backing, overrides the configuration
    #[arg(long)]
    backing: Option<Backing>,

    /// Seed for label propagation, overrides the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Also write `<prefix>_nodes.csv` and `<prefix>_edges.csv`
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphKind {
    Integrated,
    Comments,
    Closures,
    Reviews,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("loading configuration from {:?}", path))?,
        None => AnalysisConfig::default(),
    };
    if let Some(backing) = cli.backing {
        config.backing = backing;
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading interactions from {:?}", cli.input))?;
    let interactions: Vec<Interaction> =
        serde_json::from_str(&raw).context("parsing interactions")?;
    info!("Loaded {} interactions", interactions.len());

    let builder: InteractionGraphBuilder = interactions.iter().collect();
    let graph = match cli.graph {
        GraphKind::Integrated => builder.integrated_graph(config.backing),
        GraphKind::Comments => builder.comments_graph(config.backing),
        GraphKind::Closures => builder.closures_graph(config.backing),
        GraphKind::Reviews => builder.reviews_graph(config.backing),
    }?;

    if let Some(prefix) = &cli.export {
        let (nodes, edges) = export_tables(&*graph, prefix)?;
        println!("Exported: {}, {}", nodes.display(), edges.display());
    }

    let analyzer = Analyzer::with_config(&*graph, config);
    let report = GraphReport::generate(&analyzer);

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &GraphReport) {
    let mut summary = Table::new();
    summary.set_content_arrangement(ContentArrangement::Dynamic);
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Vertices".to_string(), report.vertex_count.to_string()]);
    summary.add_row(vec!["Edges".to_string(), report.edge_count.to_string()]);
    summary.add_row(vec!["Density".to_string(), format!("{:.5}", report.density)]);
    summary.add_row(vec![
        "Clustering coefficient".to_string(),
        format!("{:.5}", report.clustering_coefficient),
    ]);
    summary.add_row(vec!["Assortativity".to_string(), format!("{:.5}", report.assortativity)]);
    summary.add_row(vec!["Average degree".to_string(), format!("{:.3}", report.average_degree)]);
    summary.add_row(vec![
        "Largest component".to_string(),
        report.largest_component_size.to_string(),
    ]);
    summary.add_row(vec!["Communities".to_string(), report.community_count.to_string()]);
    println!("{summary}");

    print_ranking("PageRank", &report.top_page_rank, 4);
    print_ranking("Betweenness", &report.top_betweenness, 4);
    print_ranking("Closeness", &report.top_closeness, 4);
    print_ranking("Out-degree", &report.top_out_degree, 0);

    let mut bridges = Table::new();
    bridges.set_header(vec!["Bridging tie", "Edges outside community"]);
    for tie in &report.bridging_ties {
        bridges.add_row(vec![tie.label.clone(), tie.cross_community_edges.to_string()]);
    }
    println!("{bridges}");
}

fn print_ranking(title: &str, entries: &[RankedVertex], precision: usize) {
    let mut table = Table::new();
    table.set_header(vec![title, "Score"]);
    for entry in entries {
        table.add_row(vec![entry.label.clone(), format!("{:.*}", precision, entry.score)]);
    }
    println!("{table}");
}
