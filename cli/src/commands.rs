pub mod graph;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use homenet_common::config::{Config, Layout};

#[derive(Parser)]
#[command(name = "homenet")]
#[command(about = "Graphs the traffic between internal hosts found in a Zeek conn.log.")]
#[command(after_help = "Example:\n  homenet -g /etc/opt/homenet/homenets.cfg -l /opt/zeek/logs/current/conn.log -o /var/log --dot --circo --neato")]
pub struct CommandLine {
    /// Home ranges file, one CIDR per line, `EXCLUDE <ip>` to ignore a host
    #[arg(short = 'g', long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Zeek (Bro) conn.log to visualize
    #[arg(short, long, value_name = "PATH")]
    pub log: PathBuf,

    /// Directory (not file name) receiving the dot file and images
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Render with the `dot` layout
    #[arg(short, long)]
    pub dot: bool,

    /// Render with the `circo` layout
    #[arg(short, long)]
    pub circo: bool,

    /// Render with the `neato` layout
    #[arg(short, long)]
    pub neato: bool,

    /// Delete the dot file once the images are rendered
    #[arg(long)]
    pub remove_dot: bool,

    /// Print less. Repeat to only show warnings and errors
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn layouts(&self) -> Vec<Layout> {
        Layout::ALL
            .into_iter()
            .zip([self.dot, self.circo, self.neato])
            .filter_map(|(layout, requested)| requested.then_some(layout))
            .collect()
    }

    pub fn into_config(self) -> Config {
        Config {
            layouts: self.layouts(),
            config_path: self.config,
            log_path: self.log,
            output_dir: self.output,
            remove_dot: self.remove_dot,
            quiet: self.quiet,
        }
    }
}
