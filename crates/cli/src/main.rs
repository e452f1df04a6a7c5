use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cornerquad::quad::{select_extremal, CornerQuad, SelectCfg, Selection, DEFAULT_K};
use cornerquad::rand::{draw_clusters, ClusterCfg};
use cornerquad::Vec2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use provenance::{ensure_parent, write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "cornerquad")]
#[command(about = "Select quadrilateral corners from detector candidate points")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Select corners from a candidate point file (.json or .csv) and write JSON
    Select {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Number of points to select (anchor included)
        #[arg(long, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// Write a synthetic candidate cloud (four noisy clusters) as CSV
    Synth {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 200.0)]
        side: f64,
        #[arg(long, default_value_t = 2.0)]
        jitter: f64,
        #[arg(long, default_value_t = 3)]
        per_cluster: usize,
        #[arg(long, default_value_t = 0)]
        noise: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON written by `select`.
#[derive(Serialize)]
struct SelectionOut {
    corners: Vec<[f64; 2]>,
    indices: Vec<usize>,
    exclusion_radius: f64,
    /// Only for k = 4: corners sorted around their centroid, anchor first.
    #[serde(skip_serializing_if = "Option::is_none")]
    convex_order: Option<Vec<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    degenerate: Option<bool>,
}

const DEGENERATE_EPS: f64 = 1e-3;

fn pair(p: &Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

impl From<&Selection> for SelectionOut {
    fn from(sel: &Selection) -> Self {
        let quad = match sel.points.as_slice() {
            &[a, b, c, d] => Some(CornerQuad::new([a, b, c, d])),
            _ => None,
        };
        Self {
            corners: sel.points.iter().map(pair).collect(),
            indices: sel.indices.clone(),
            exclusion_radius: sel.exclusion_radius,
            convex_order: quad.map(|q| q.convex_order().iter().map(pair).collect()),
            degenerate: quad.map(|q| q.is_degenerate(DEGENERATE_EPS)),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Select { input, out, k } => select(&input, &out, k, cmd.tag),
        Action::Synth {
            out,
            seed,
            side,
            jitter,
            per_cluster,
            noise,
        } => {
            let cfg = ClusterCfg {
                side,
                jitter,
                per_cluster,
                noise_points: noise,
                ..ClusterCfg::default()
            };
            synth(&out, cfg, seed, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn select(input: &Path, out: &Path, k: usize, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), k, tag = ?tag, "select");
    let pts = points_io::read_points(input)?;
    tracing::info!(candidates = pts.len(), "candidates_loaded");

    let res = select_extremal(&pts, SelectCfg { k });
    let sidecar = Sidecar::new("select", tag, serde_json::json!({ "k": k }))
        .with_input(input, pts.len())
        .with_outcome(&res);
    write_sidecar(out, &sidecar)?;
    let sel = res.with_context(|| format!("selecting corners from {}", input.display()))?;

    let doc = SelectionOut::from(&sel);
    tracing::info!(
        indices = ?doc.indices,
        exclusion_radius = doc.exclusion_radius,
        "selected"
    );
    if doc.degenerate == Some(true) {
        tracing::warn!("selected corners are collinear or coincident");
    }
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn synth(out: &Path, cfg: ClusterCfg, seed: u64, tag: Option<String>) -> Result<()> {
    tracing::info!(out = %out.display(), seed, side = cfg.side, jitter = cfg.jitter, tag = ?tag, "synth");
    let pts = draw_clusters(cfg, seed).context("drawing synthetic clusters")?;
    ensure_parent(out)?;
    points_io::write_points_csv(out, &pts)?;
    tracing::info!(points = pts.len(), "synth_written");
    let params = serde_json::json!({
        "seed": seed,
        "origin": pair(&cfg.origin),
        "side": cfg.side,
        "jitter": cfg.jitter,
        "per_cluster": cfg.per_cluster,
        "noise_points": cfg.noise_points
    });
    write_sidecar(out, &Sidecar::new("synth", tag, params))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let sidecar = Sidecar::new("report", tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&sidecar)?);
    Ok(())
}
