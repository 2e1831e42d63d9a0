#![cfg(test)]
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use homenet_common::config::Layout;
use homenet_common::error::HomenetError;
use homenet_core::output::OutputPlan;
use homenet_core::pipeline;
use homenet_core::render::{self, LayoutEngine};

/// Copies the dot file to the image path instead of laying it out.
struct CopyEngine;

#[async_trait]
impl LayoutEngine for CopyEngine {
    async fn render(&self, layout: Layout, dot_file: &Path, image: &Path) -> Result<(), HomenetError> {
        tokio::fs::copy(dot_file, image)
            .await
            .map(|_| ())
            .map_err(|e| HomenetError::RenderInvocation {
                layout,
                reason: e.to_string(),
            })
    }
}

#[tokio::test]
async fn every_layout_gets_an_image() {
    let tmp = tempfile::tempdir().unwrap();
    let plan = OutputPlan::new(tmp.path(), "9");
    let edges = [r#""10.0.0.1" -> "10.0.0.2" [label="dpt:80/tcp/http SF", color="blue"]"#.to_string()]
        .into_iter()
        .collect();
    let dot_file = pipeline::write_dot(&edges, &plan).unwrap();

    render::render_all(Arc::new(CopyEngine), &plan, &Layout::ALL).await.unwrap();

    let document = fs::read_to_string(&dot_file).unwrap();
    for layout in Layout::ALL {
        assert_eq!(fs::read_to_string(plan.image(layout)).unwrap(), document);
    }
}

#[tokio::test]
async fn missing_dot_file_fails_the_render() {
    let tmp = tempfile::tempdir().unwrap();
    let plan = OutputPlan::new(tmp.path(), "9");

    let err = render::render_all(Arc::new(CopyEngine), &plan, &[Layout::Circo])
        .await
        .unwrap_err();
    assert!(matches!(err, HomenetError::RenderInvocation { layout: Layout::Circo, .. }));
}
