//! Graph loaders keyed by file extension.
//!
//! - `.json`: `{ "nodes": [..], "edges": [[u, v], ..] }` (`nodes` optional, for isolated nodes).
//! - `.csv` / `.parquet`: columns `u` and `v`, read with polars.
//! - anything else: whitespace edge list, one `u v` per line; a lone id is an
//!   isolated node; `#` starts a comment.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use mintri::api::{Graph, Node};
use polars::prelude::*;
use serde::Deserialize;

#[derive(Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<Node>,
    edges: Vec<(Node, Node)>,
}

pub fn load_graph(path: &Path) -> Result<Graph> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text)
        }
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            from_frame(lf)
        }
        Some("parquet") => from_frame(LazyFrame::scan_parquet(path, Default::default())?),
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_edge_list(&text)
        }
    }
}

pub fn parse_json(text: &str) -> Result<Graph> {
    let file: GraphFile = serde_json::from_str(text).context("parsing graph JSON")?;
    let mut g = Graph::from_edges(file.edges);
    for v in file.nodes {
        g.add_node(v);
    }
    Ok(g)
}

pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut g = Graph::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        let ids = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<Node>()
                    .with_context(|| format!("line {}: bad node id {tok:?}", lineno + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        match ids[..] {
            [] => {}
            [v] => g.add_node(v),
            [u, v] => {
                g.add_edge(u, v);
            }
            _ => bail!("line {}: expected `u v`, got {} ids", lineno + 1, ids.len()),
        }
    }
    Ok(g)
}

fn from_frame(lf: LazyFrame) -> Result<Graph> {
    let df = lf
        .select([
            col("u").cast(DataType::UInt32),
            col("v").cast(DataType::UInt32),
        ])
        .collect()
        .context("reading `u`/`v` columns")?;
    let us = df.column("u")?.u32()?;
    let vs = df.column("v")?.u32()?;
    let mut g = Graph::new();
    for (row, (u, v)) in us.into_iter().zip(vs.into_iter()).enumerate() {
        match (u, v) {
            (Some(u), Some(v)) => {
                g.add_edge(u, v);
            }
            (Some(x), None) | (None, Some(x)) => g.add_node(x),
            (None, None) => bail!("row {row}: both endpoints missing"),
        }
    }
    tracing::debug!(rows = df.height(), "edge frame loaded");
    Ok(g)
}
