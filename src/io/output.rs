//! Slideshow rendering and submission output
//!
//! The submission format puts the slide count on the first line, then one
//! line per slide listing its photo indices in route order.

use crate::algorithm::graph::CostGraph;
use crate::algorithm::scoring::transition_score;
use crate::io::error::{Result, SlideshowError};
use crate::model::slide::Slide;
use std::path::Path;

/// Render a slideshow in submission format
pub fn render_slideshow(graph: &CostGraph, route: &[usize]) -> String {
    let mut out = route.len().to_string();
    out.push('\n');
    for &index in route {
        if let Some(slide) = graph.slides().get(index) {
            push_slide_line(&mut out, slide);
        }
    }
    out
}

/// Sum of adjacent transition scores along the final ordering
///
/// The slideshow metric is linear: the last slide has no successor.
pub fn slideshow_score(graph: &CostGraph, route: &[usize]) -> usize {
    route
        .windows(2)
        .map(|pair| {
            let slides = pair
                .first()
                .and_then(|&from| graph.slides().get(from))
                .zip(pair.get(1).and_then(|&to| graph.slides().get(to)));
            slides.map_or(0, |(from, to)| transition_score(from.tags(), to.tags()))
        })
        .sum()
}

/// Write a rendered slideshow to disk
///
/// # Errors
///
/// Returns `OutputWrite` when the file cannot be created or written.
pub fn write_slideshow(path: &Path, graph: &CostGraph, route: &[usize]) -> Result<()> {
    std::fs::write(path, render_slideshow(graph, route)).map_err(|source| {
        SlideshowError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn push_slide_line(out: &mut String, slide: &Slide) {
    let mut first = true;
    for index in slide.photo_indices() {
        if !first {
            out.push(' ');
        }
        out.push_str(&index.to_string());
        first = false;
    }
    out.push('\n');
}
