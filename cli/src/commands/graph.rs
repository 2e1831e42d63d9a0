use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use homenet_common::config::Config;
use homenet_core::output::OutputPlan;
use homenet_core::pipeline;
use homenet_core::policy::AddressPolicy;
use homenet_core::render::{self, LayoutEngine};
use tracing::{error, info, warn};

use crate::terminal::{print, spinner};

/// How a run ended, short of an I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    NoFormat,
    RenderFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Rendered => ExitCode::SUCCESS,
            Outcome::NoFormat => ExitCode::from(1),
            Outcome::RenderFailed => ExitCode::from(5),
        }
    }
}

pub async fn graph(cfg: &Config, engine: Arc<dyn LayoutEngine>) -> anyhow::Result<Outcome> {
    if cfg.layouts.is_empty() {
        warn!("You didn't specify a format for the output graph (--dot, --circo and/or --neato)");
        return Ok(Outcome::NoFormat);
    }

    let plan = OutputPlan::now(&cfg.output_dir);
    plan.ensure_dir()?;

    print::header("loading home ranges", cfg.quiet);
    let policy = AddressPolicy::from_path(&cfg.config_path)?;
    if policy.home_ranges().is_empty() {
        warn!("No home ranges in {}, the graph will be empty", cfg.config_path.display());
    }

    print::header("reading connection log", cfg.quiet);
    let (edges, stats) = pipeline::build_graph(&policy, &cfg.log_path)?;
    print::summary(&stats, cfg.quiet);

    print::header("rendering", cfg.quiet);
    let dot_file = pipeline::write_dot(&edges, &plan)?;

    let start = Instant::now();
    let pb = spinner::start("Making output images, these may take a minute to render", cfg.quiet);
    let rendered = render::render_all(engine, &plan, &cfg.layouts).await;
    pb.finish_and_clear();

    if let Err(e) = rendered {
        error!("{e}");
        return Ok(Outcome::RenderFailed);
    }

    if cfg.remove_dot {
        fs::remove_file(&dot_file)
            .with_context(|| format!("failed to remove {}", dot_file.display()))?;
    }

    let elapsed = format!("{:.2}s", start.elapsed().as_secs_f64()).bold().yellow();
    info!(
        "{} rendered into {} in {elapsed}",
        format!("{} edges", stats.edges).bold().green(),
        plan.dir().display()
    );
    Ok(Outcome::Rendered)
}
