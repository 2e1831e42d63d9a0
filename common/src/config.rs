use std::fmt;
use std::path::PathBuf;

/// Runtime options collected from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// File holding the home ranges and `EXCLUDE` entries.
    pub config_path: PathBuf,
    /// Zeek (Bro) `conn.log` to visualize.
    pub log_path: PathBuf,
    /// Directory receiving the dot file and rendered images.
    pub output_dir: PathBuf,
    /// Layout engines to render with, in the order they were requested.
    pub layouts: Vec<Layout>,
    /// Deletes the dot file once every image has been rendered.
    pub remove_dot: bool,
    /// Quiet level. 1 hides headers, 2 hides everything below warnings.
    pub quiet: u8,
}

/// A GraphViz layout engine that can turn the dot file into a PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Dot,
    Circo,
    Neato,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Dot, Layout::Circo, Layout::Neato];

    /// Name of the executable looked up on the `PATH`.
    pub fn binary(&self) -> &'static str {
        match self {
            Layout::Dot => "dot",
            Layout::Circo => "circo",
            Layout::Neato => "neato",
        }
    }

    /// Graph attributes passed before the output options.
    ///
    /// `neato` piles nodes on top of each other unless told to scale.
    pub fn extra_args(&self) -> &'static [&'static str] {
        match self {
            Layout::Neato => &["-Goverlap=scale"],
            Layout::Dot | Layout::Circo => &[],
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}
