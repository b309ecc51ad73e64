//! SVG plot of a finished tour.
//!
//! The renderer only reads positions and connections. Data coordinates span
//! `[0, COORDINATE_RANGE]` on both axes and are mapped into a fixed plot area
//! with the y axis pointing up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use collector_common::geometry::{BASE_INDEX, COORDINATE_RANGE};
use collector_common::Result;
use glam::DVec2;

use crate::tour::Connection;

const FIGURE_SIZE: f64 = 500.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const GRID_STEP: f64 = 10.0;
const MARKER_RADIUS: f64 = 3.5;

const TITLE: &str = "Optimal Path";
const TARGET_COLOR: &str = "green";
const BASE_COLOR: &str = "black";
const PATH_COLOR: &str = "blue";

fn plot_width() -> f64 {
    FIGURE_SIZE - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    FIGURE_SIZE - MARGIN_TOP - MARGIN_BOTTOM
}

/// Maps a data-space point to SVG pixel coordinates.
fn to_screen(p: DVec2) -> DVec2 {
    DVec2::new(
        MARGIN_LEFT + p.x / COORDINATE_RANGE * plot_width(),
        MARGIN_TOP + (1.0 - p.y / COORDINATE_RANGE) * plot_height(),
    )
}

/// Writes the full SVG document for a tour.
///
/// Draw order is grid, tour segments in visitation order, target markers,
/// and finally the base marker so it stays visible.
pub fn write_plot<W: Write>(
    out: &mut W,
    positions: &[DVec2],
    connections: &[Connection],
) -> std::io::Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
        s = FIGURE_SIZE
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
        MARGIN_LEFT + plot_width() / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        TITLE
    )?;

    write_grid(out)?;

    writeln!(out, r#"<g stroke="{}" stroke-width="1.5">"#, PATH_COLOR)?;
    for &(from, to) in connections {
        let (Some(&a), Some(&b)) = (positions.get(from), positions.get(to)) else {
            tracing::warn!(from, to, "Skipping connection to unknown position");
            continue;
        };
        let (a, b) = (to_screen(a), to_screen(b));
        writeln!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
            a.x, a.y, b.x, b.y
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g fill="{}">"#, TARGET_COLOR)?;
    for (i, &p) in positions.iter().enumerate() {
        if i != BASE_INDEX {
            write_marker(out, p)?;
        }
    }
    writeln!(out, "</g>")?;

    if let Some(&base) = positions.get(BASE_INDEX) {
        writeln!(out, r#"<g fill="{}">"#, BASE_COLOR)?;
        write_marker(out, base)?;
        writeln!(out, "</g>")?;
    }

    writeln!(out, "</svg>")
}

fn write_marker<W: Write>(out: &mut W, p: DVec2) -> std::io::Result<()> {
    let p = to_screen(p);
    writeln!(
        out,
        r#"<circle cx="{:.2}" cy="{:.2}" r="{}"/>"#,
        p.x, p.y, MARKER_RADIUS
    )
}

/// Grid lines, tick labels and axis labels.
fn write_grid<W: Write>(out: &mut W) -> std::io::Result<()> {
    let (left, top) = (MARGIN_LEFT, MARGIN_TOP);
    let (right, bottom) = (left + plot_width(), top + plot_height());

    writeln!(out, r##"<g stroke="#b0b0b0" stroke-width="0.8">"##)?;
    let steps = (COORDINATE_RANGE / GRID_STEP).round() as u32;
    for k in 0..=steps {
        let value = f64::from(k) * GRID_STEP;
        let x = to_screen(DVec2::new(value, 0.0)).x;
        let y = to_screen(DVec2::new(0.0, value)).y;
        writeln!(out, r#"<line x1="{x:.2}" y1="{top:.2}" x2="{x:.2}" y2="{bottom:.2}"/>"#)?;
        writeln!(out, r#"<line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}"/>"#)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g font-size="10" fill="black">"#)?;
    for k in (0..=steps).step_by(2) {
        let value = f64::from(k) * GRID_STEP;
        let x = to_screen(DVec2::new(value, 0.0)).x;
        let y = to_screen(DVec2::new(0.0, value)).y;
        writeln!(
            out,
            r#"<text x="{x:.2}" y="{:.2}" text-anchor="middle">{value}</text>"#,
            bottom + 14.0
        )?;
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{value}</text>"#,
            left - 6.0,
            y + 3.5
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(
        out,
        r#"<rect x="{left:.2}" y="{top:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        plot_width(),
        plot_height()
    )?;
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">X Position</text>"#,
        left + plot_width() / 2.0,
        FIGURE_SIZE - 12.0
    )?;
    writeln!(
        out,
        r#"<text x="16" y="{cy:.2}" text-anchor="middle" font-size="12" transform="rotate(-90 16 {cy:.2})">Y Position</text>"#,
        cy = top + plot_height() / 2.0
    )
}

/// Renders the tour to an SVG file at `path`.
pub fn save_plot(
    path: impl AsRef<Path>,
    positions: &[DVec2],
    connections: &[Connection],
) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_plot(&mut out, positions, connections)?;
    out.flush()?;

    tracing::info!("🖼️ Plot written to {}", path.display());
    Ok(())
}
