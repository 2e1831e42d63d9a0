//! Artifact locations.
//!
//! Every run writes `homenet-graph-{stamp}-DOTFILE.dot` plus one
//! `homenet-graph-{stamp}-{layout}.png` per requested layout, all into the same
//! output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use homenet_common::config::Layout;

const PREFIX: &str = "homenet-graph";
const STAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    dir: PathBuf,
    stamp: String,
}

impl OutputPlan {
    pub fn new(dir: &Path, stamp: impl Into<String>) -> Self {
        Self {
            dir: strip_trailing_separator(dir),
            stamp: stamp.into(),
        }
    }

    /// A plan stamped with the local time, e.g. `2019-05-20_16:00:00`.
    pub fn now(dir: &Path) -> Self {
        Self::new(dir, Local::now().format(STAMP_FORMAT).to_string())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn dot_file(&self) -> PathBuf {
        self.dir.join(format!("{PREFIX}-{}-DOTFILE.dot", self.stamp))
    }

    pub fn image(&self, layout: Layout) -> PathBuf {
        self.dir.join(format!("{PREFIX}-{}-{layout}.png", self.stamp))
    }

    /// Fails early when the output directory is missing.
    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        let meta = fs::metadata(&self.dir)
            .with_context(|| format!("output directory {} is not accessible", self.dir.display()))?;
        anyhow::ensure!(meta.is_dir(), "{} is not a directory", self.dir.display());
        Ok(())
    }
}

fn strip_trailing_separator(dir: &Path) -> PathBuf {
    let raw = dir.to_string_lossy();
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        dir.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names() {
        let plan = OutputPlan::new(Path::new("/var/log/"), "1558364400");
        assert_eq!(plan.dir(), Path::new("/var/log"));
        assert_eq!(
            plan.dot_file(),
            PathBuf::from("/var/log/homenet-graph-1558364400-DOTFILE.dot")
        );
        assert_eq!(
            plan.image(Layout::Neato),
            PathBuf::from("/var/log/homenet-graph-1558364400-neato.png")
        );
    }

    #[test]
    fn root_dir_is_kept() {
        assert_eq!(OutputPlan::new(Path::new("/"), "1").dir(), Path::new("/"));
    }

    #[test]
    fn ensure_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(OutputPlan::new(tmp.path(), "1").ensure_dir().is_ok());

        let file = tmp.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(OutputPlan::new(&file, "1").ensure_dir().is_err());
        assert!(OutputPlan::new(&tmp.path().join("missing"), "1").ensure_dir().is_err());
    }

    #[test]
    fn now_stamps_with_local_date_and_time() {
        let plan = OutputPlan::now(Path::new("out"));
        let name = plan.dot_file().file_name().unwrap().to_string_lossy().into_owned();
        let stamp = name
            .trim_start_matches("homenet-graph-")
            .trim_end_matches("-DOTFILE.dot");
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).is_ok(),
            "{name}"
        );
    }
}
