//! SVG export of recorded canvas commands.

use std::fmt::Write;

use super::{DrawCommand, Glow, LineCap, Paint, Path, PathOp, RecordingCanvas};
use crate::Result;

/// Renders what `canvas` currently shows as a standalone SVG document.
pub fn to_svg(canvas: &RecordingCanvas) -> Result<String> {
    let width = super::Canvas::width(canvas);
    let height = super::Canvas::height(canvas);

    let mut defs = String::new();
    let mut body = String::new();

    for (index, command) in canvas.commands().iter().enumerate() {
        match command {
            DrawCommand::Fill { path, paint, glow } => {
                let fill = paint_ref(&mut defs, "fill", index, paint)?;
                let filter = glow_ref(&mut defs, index, glow.as_ref())?;
                writeln!(
                    body,
                    r#"  <path d="{}" fill="{}"{} />"#,
                    path_data(path)?,
                    fill,
                    filter
                )?;
            }
            DrawCommand::Stroke { path, stroke } => {
                let paint = paint_ref(&mut defs, "stroke", index, &stroke.paint)?;
                let filter = glow_ref(&mut defs, index, stroke.glow.as_ref())?;
                let cap = match stroke.cap {
                    LineCap::Butt => "butt",
                    LineCap::Round => "round",
                };
                writeln!(
                    body,
                    r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-linecap="{}"{} />"#,
                    path_data(path)?,
                    paint,
                    stroke.width,
                    cap,
                    filter
                )?;
            }
        }
    }

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )?;
    if !defs.is_empty() {
        out.push_str("  <defs>\n");
        out.push_str(&defs);
        out.push_str("  </defs>\n");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    Ok(out)
}

/// SVG `d` attribute for a path.
pub fn path_data(path: &Path) -> Result<String> {
    let mut d = String::new();
    for op in path.ops() {
        if !d.is_empty() {
            d.push(' ');
        }
        match op {
            PathOp::MoveTo(p) => write!(d, "M{:.2},{:.2}", p.x, p.y)?,
            PathOp::LineTo(p) => write!(d, "L{:.2},{:.2}", p.x, p.y)?,
            PathOp::QuadTo { control, to } => write!(
                d,
                "Q{:.2},{:.2} {:.2},{:.2}",
                control.x, control.y, to.x, to.y
            )?,
            PathOp::Close => d.push('Z'),
        }
    }
    Ok(d)
}

fn paint_ref(defs: &mut String, role: &str, index: usize, paint: &Paint) -> Result<String> {
    Ok(match paint {
        Paint::Solid(color) => color.css(),
        Paint::LinearGradient { from, to, stops } => {
            let id = format!("{role}-gradient-{index}");
            writeln!(
                defs,
                r#"    <linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
                from.x, from.y, to.x, to.y
            )?;
            for stop in stops {
                writeln!(
                    defs,
                    r#"      <stop offset="{:.3}" stop-color="{}" stop-opacity="{:.3}" />"#,
                    stop.offset,
                    stop.color.hex(),
                    stop.color.a
                )?;
            }
            defs.push_str("    </linearGradient>\n");
            format!("url(#{id})")
        }
    })
}

fn glow_ref(defs: &mut String, index: usize, glow: Option<&Glow>) -> Result<String> {
    let Some(glow) = glow else {
        return Ok(String::new());
    };
    let id = format!("glow-{index}");
    writeln!(
        defs,
        r#"    <filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="0" dy="0" stdDeviation="{:.2}" flood-color="{}" flood-opacity="{:.3}" /></filter>"#,
        glow.blur * 0.5,
        glow.color.hex(),
        glow.color.a
    )?;
    Ok(format!(r#" filter="url(#{id})""#))
}
