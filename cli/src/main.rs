mod commands;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use commands::{CommandLine, graph};
use homenet_core::render::Graphviz;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.into_config();

    logging::init_logging(cfg.quiet);
    print::header(concat!("homenet v", env!("CARGO_PKG_VERSION")), cfg.quiet);

    let outcome = graph::graph(&cfg, Arc::new(Graphviz)).await?;
    Ok(outcome.into())
}
