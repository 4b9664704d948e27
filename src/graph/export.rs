//! Tabular export for visualization tools
//!
//! Two CSV tables: nodes (`Id, Label, Weight`, one row per vertex) and edges
//! (`Source, Target, Weight, Type`, one row per stored edge, `Type` always
//! `Directed`). This is the node/edge spreadsheet layout Gephi imports.

use super::store::{GraphError, GraphStore};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// One row of the nodes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    #[serde(rename = "Id")]
    pub id: usize,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Weight")]
    pub weight: f64,
}

/// One row of the edges table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    #[serde(rename = "Source")]
    pub source: usize,
    #[serde(rename = "Target")]
    pub target: usize,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Type")]
    pub edge_type: String,
}

pub const EDGE_TYPE_DIRECTED: &str = "Directed";

/// Rows of the nodes table, by vertex index
pub fn node_rows<G: GraphStore + ?Sized>(graph: &G) -> ExportResult<Vec<NodeRow>> {
    (0..graph.vertex_count())
        .map(|id| {
            Ok(NodeRow {
                id,
                label: graph.vertex_label(id)?.to_string(),
                weight: graph.vertex_weight(id)?,
            })
        })
        .collect()
}

/// Rows of the edges table, by source then successor order
pub fn edge_rows<G: GraphStore + ?Sized>(graph: &G) -> Vec<EdgeRow> {
    graph
        .edges()
        .into_iter()
        .map(|(source, target, weight)| EdgeRow {
            source,
            target,
            weight,
            edge_type: EDGE_TYPE_DIRECTED.to_string(),
        })
        .collect()
}

/// Write the nodes table, header included
pub fn write_nodes<G: GraphStore + ?Sized, W: io::Write>(graph: &G, writer: W) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in node_rows(graph)? {
        csv_writer.serialize(row)?;
    }
    if graph.vertex_count() == 0 {
        csv_writer.write_record(["Id", "Label", "Weight"])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the edges table, header included
pub fn write_edges<G: GraphStore + ?Sized, W: io::Write>(graph: &G, writer: W) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let rows = edge_rows(graph);
    if rows.is_empty() {
        csv_writer.write_record(["Source", "Target", "Weight", "Type"])?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// File pair for a path prefix: `graph.csv` becomes `graph_nodes.csv` /
/// `graph_edges.csv`, anything else gets the suffixes appended.
pub fn table_paths(prefix: &Path) -> (PathBuf, PathBuf) {
    let raw = prefix.to_string_lossy();
    if raw.contains(".csv") {
        (
            PathBuf::from(raw.replace(".csv", "_nodes.csv")),
            PathBuf::from(raw.replace(".csv", "_edges.csv")),
        )
    } else {
        (
            PathBuf::from(format!("{}_nodes.csv", raw)),
            PathBuf::from(format!("{}_edges.csv", raw)),
        )
    }
}

/// Write both tables next to `prefix`, returning the nodes and edges paths
pub fn export_tables<G: GraphStore + ?Sized>(
    graph: &G,
    prefix: impl AsRef<Path>,
) -> ExportResult<(PathBuf, PathBuf)> {
    let (nodes_path, edges_path) = table_paths(prefix.as_ref());

    write_nodes(graph, File::create(&nodes_path)?)?;
    write_edges(graph, File::create(&edges_path)?)?;

    info!(
        "Exported {} vertices to {:?} and {} edges to {:?}",
        graph.vertex_count(),
        nodes_path,
        graph.edge_count(),
        edges_path
    );

    Ok((nodes_path, edges_path))
}
