use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polysect::api::{split_polygon, try_intersect_polygons, ClipCfg};
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "polysect")]
#[command(about = "Intersect simple or self-intersecting polygons")]
#[command(version)]
struct Cmd {
    /// Log phase summaries at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct Tolerances {
    /// Per-axis tolerance for point identity (0 = exact)
    #[arg(long, default_value_t = 0.0)]
    eps_point: f64,
    /// Drop output polygons with area below this value
    #[arg(long, default_value_t = 1e-4)]
    area_threshold: f64,
}

impl Tolerances {
    fn cfg(self) -> ClipCfg {
        ClipCfg {
            eps_point: self.eps_point,
            area_threshold: self.area_threshold,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two polygons; writes a JSON list of polygons
    Intersect {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        /// Output file (stdout if omitted). A provenance sidecar is written next to it.
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Split one polygon into simple pieces
    Split {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Intersect { a, b, out, tol } => intersect(a, b, out, tol),
        Action::Split { input, out, tol } => split(input, out, tol),
        Action::Report => report(),
    }
}

fn intersect(a: PathBuf, b: PathBuf, out: Option<PathBuf>, tol: Tolerances) -> Result<()> {
    let cfg = tol.cfg();
    let pa = io::read_polygon(&a)?;
    let pb = io::read_polygon(&b)?;
    tracing::info!(a = %a.display(), b = %b.display(), len_a = pa.len(), len_b = pb.len(), "intersect");
    let rings = try_intersect_polygons(&pa, &pb, cfg).context("intersecting polygons")?;
    tracing::info!(rings = rings.len(), "done");
    io::write_polygons(out.as_deref(), &rings)?;
    if let Some(path) = out {
        let payload = provenance::Payload::new(
            "intersect",
            json!({
                "eps_point": cfg.eps_point,
                "area_threshold": cfg.area_threshold,
                "rings": rings.len()
            }),
        )
        .with_input(&a)
        .with_input(&b);
        provenance::write_sidecar(&path, payload)?;
    }
    Ok(())
}

fn split(input: PathBuf, out: Option<PathBuf>, tol: Tolerances) -> Result<()> {
    let cfg = tol.cfg();
    cfg.validate()
        .map_err(anyhow::Error::msg)
        .context("invalid tolerances")?;
    let poly = io::read_polygon(&input)?;
    let pieces = split_polygon(&poly, cfg);
    tracing::info!(input = %input.display(), vertices = poly.len(), pieces = pieces.len(), "split");
    io::write_polygons(out.as_deref(), &pieces)?;
    if let Some(path) = out {
        let payload = provenance::Payload::new(
            "split",
            json!({ "eps_point": cfg.eps_point, "pieces": pieces.len() }),
        )
        .with_input(&input);
        provenance::write_sidecar(&path, payload)?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let cfg = ClipCfg::default();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "polysect_version": polysect::VERSION,
        "defaults": {
            "eps_point": cfg.eps_point,
            "area_threshold": cfg.area_threshold
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
