//! Layout engine invocation.
//!
//! Rendering is the last step of a run. The dot file already exists on disk
//! when an engine is launched, so a failure here never invalidates it.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use homenet_common::config::Layout;
use homenet_common::error::HomenetError;
use tokio::process::Command;
use tracing::{debug, info};

use crate::output::OutputPlan;

/// Something that can turn a dot file into an image.
#[async_trait]
pub trait LayoutEngine: Send + Sync {
    async fn render(&self, layout: Layout, dot_file: &Path, image: &Path) -> Result<(), HomenetError>;
}

/// Runs the GraphViz binaries found on the `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Graphviz;

impl Graphviz {
    /// Arguments for `{binary} [-Goverlap=scale] -Tpng {dot} -o {png}`.
    pub fn args(layout: Layout, dot_file: &Path, image: &Path) -> Vec<String> {
        let mut args: Vec<String> = layout.extra_args().iter().map(|a| a.to_string()).collect();
        args.push("-Tpng".to_string());
        args.push(dot_file.display().to_string());
        args.push("-o".to_string());
        args.push(image.display().to_string());
        args
    }
}

#[async_trait]
impl LayoutEngine for Graphviz {
    async fn render(&self, layout: Layout, dot_file: &Path, image: &Path) -> Result<(), HomenetError> {
        let args = Self::args(layout, dot_file, image);
        debug!("Running {} {}", layout.binary(), args.join(" "));

        let output = Command::new(layout.binary())
            .args(&args)
            .output()
            .await
            .map_err(|e| HomenetError::RenderInvocation {
                layout,
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HomenetError::RenderInvocation {
                layout,
                reason: format!("{} {}", output.status, stderr.trim()),
            });
        }
        Ok(())
    }
}

/// Renders every layout concurrently and reports the first failure, in
/// request order.
///
/// Every engine is allowed to finish before returning.
pub async fn render_all(
    engine: Arc<dyn LayoutEngine>,
    plan: &OutputPlan,
    layouts: &[Layout],
) -> Result<(), HomenetError> {
    let mut jobs = Vec::with_capacity(layouts.len());

    for &layout in layouts {
        let engine = Arc::clone(&engine);
        let dot_file = plan.dot_file();
        let image = plan.image(layout);
        info!("Making {}", image.display());
        jobs.push((
            layout,
            tokio::spawn(async move { engine.render(layout, &dot_file, &image).await }),
        ));
    }

    // Every engine is already running; awaiting in order only decides which
    // failure is reported.
    let mut first_error = None;
    for (layout, job) in jobs {
        let result = job.await.unwrap_or_else(|e| {
            Err(HomenetError::RenderInvocation {
                layout,
                reason: format!("render task failed: {e}"),
            })
        });
        match result {
            Ok(()) => debug!("{layout} finished"),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
