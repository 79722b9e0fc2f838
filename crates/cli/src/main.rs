use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isohedral::FillCfg;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Isohedral tiling catalog, tile geometry and region fills as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List every tiling type with its metadata
    Types {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Vertices, edges, parts, aspects and lattice basis of one tiling
    Tile {
        #[arg(long = "type")]
        tiling_type: usize,
        /// Comma-separated parameter vector; defaults when omitted
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        params: Option<Vec<f64>>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Coloured placements covering an axis-aligned box
    Fill {
        #[arg(long = "type")]
        tiling_type: usize,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        params: Option<Vec<f64>>,
        /// xmin,ymin,xmax,ymax
        #[arg(long = "box", value_delimiter = ',', allow_hyphen_values = true, required = true)]
        region: Vec<f64>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Log the slab decomposition
        #[arg(long)]
        debug: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.action {
        Action::Fill { debug: true, .. } => Level::DEBUG,
        _ => Level::INFO,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Types { out } => types(out),
        Action::Tile {
            tiling_type,
            params,
            out,
        } => tile(tiling_type, params, out),
        Action::Fill {
            tiling_type,
            params,
            region,
            out,
            debug,
        } => fill(tiling_type, params, region, out, debug),
    }
}

fn types(out: Option<PathBuf>) -> Result<()> {
    let all = report::type_summaries();
    tracing::info!(count = all.len(), "types");
    emit(&all, out.as_deref(), Payload::new("types", json!({})))
}

fn tile(tiling_type: usize, params: Option<Vec<f64>>, out: Option<PathBuf>) -> Result<()> {
    let tiling = report::build_tiling(tiling_type, params.as_deref())?;
    let tile = report::tile_report(&tiling);
    tracing::info!(
        tiling_type,
        group = tile.symmetry_group,
        edges = tile.edges.len(),
        parts = tile.parts.len(),
        "tile"
    );
    let args = json!({ "type": tiling_type, "params": tiling.parameters() });
    emit(&tile, out.as_deref(), Payload::new("tile", args))
}

fn fill(
    tiling_type: usize,
    params: Option<Vec<f64>>,
    region: Vec<f64>,
    out: Option<PathBuf>,
    debug: bool,
) -> Result<()> {
    let tiling = report::build_tiling(tiling_type, params.as_deref())?;
    let cfg = FillCfg {
        debug,
        ..FillCfg::default()
    };
    let filled = report::fill_report(&tiling, &region, cfg)?;
    tracing::info!(
        tiling_type,
        slabs = filled.slabs,
        placements = filled.placements.len(),
        "fill"
    );
    let args = json!({
        "type": tiling_type,
        "params": tiling.parameters(),
        "box": region,
    });
    emit(&filled, out.as_deref(), Payload::new("fill", args))
}

/// Pretty JSON to stdout, or to `out` with a provenance sidecar next to it.
fn emit<T: Serialize>(value: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let sidecar = provenance::write_sidecar(path, payload)?;
    tracing::info!(out = %path.display(), provenance = %sidecar.display(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn command_line_is_well_formed() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn fill_arguments_parse_negative_lists() {
        let cmd = Cmd::try_parse_from([
            "cli", "fill", "--type", "7", "--box", "-2,-1.5,3,4", "--params", "-0.1,0.2",
        ])
        .unwrap();
        match cmd.action {
            Action::Fill {
                tiling_type,
                params,
                region,
                debug,
                ..
            } => {
                assert_eq!(tiling_type, 7);
                assert_eq!(region, vec![-2.0, -1.5, 3.0, 4.0]);
                assert_eq!(params, Some(vec![-0.1, 0.2]));
                assert!(!debug);
            }
            _ => panic!("expected fill"),
        }
    }

    #[test]
    fn fill_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("fill.json");
        fill(5, None, vec![0.0, 0.0, 2.0, 2.0], Some(out.clone()), false).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["tiling_type"], 5);
        assert!(!parsed["placements"].as_array().unwrap().is_empty());
        let sidecar = dir.path().join("nested").join("fill.provenance.json");
        let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["command"], "fill");
        assert_eq!(prov["args"]["box"][2], 2.0);
    }
}
