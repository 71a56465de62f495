//! Model-file serialization.
//!
//! A model file is a plain-text, line-oriented snapshot of a shape
//! collection. The header line `amt <N>` declares the record count; each
//! record is a block of the form
//!
//! ```text
//! c <r> <g> <b> <a>
//! f <true|false>
//! s <true|false>
//! p <x> <y>
//! p <x> <y> ;
//! ```
//!
//! with one blank line after every block and the final point line suffixed
//! with `" ;"`. Numeric fields print without a fractional part when the
//! value is integral. Reading is strict: a missing line, a malformed field
//! or a count disagreeing with the header is a hard format error.

use std::fmt::Write as _;

use vexel_core::Pointf;

use crate::error::{GraphicsError, Result};
use crate::geometry::Color;
use crate::polygon::Polygon;

/// Writes `shapes` to a model file at `path`.
pub fn write_model(path: impl AsRef<std::path::Path>, shapes: &[Polygon]) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), shapes = shapes.len(), "writing model file");
    std::fs::write(path, render_model(shapes))?;
    Ok(())
}

/// Reads a shape collection back from a model file.
pub fn read_model(path: impl AsRef<std::path::Path>) -> Result<Vec<Polygon>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let shapes = parse_model(&contents)?;
    tracing::debug!(path = %path.display(), shapes = shapes.len(), "read model file");
    Ok(shapes)
}

fn render_model(shapes: &[Polygon]) -> String {
    let mut out = String::new();
    // Infallible: fmt::Write to a String cannot error.
    let _ = writeln!(out, "amt {}", shapes.len());

    for shape in shapes {
        let color = shape.color();
        let _ = writeln!(out, "c {} {} {} {}", color.r, color.g, color.b, color.a);
        let _ = writeln!(out, "f {}", shape.is_filled());
        let _ = writeln!(out, "s {}", shape.should_render());

        let points = shape.points();
        for (i, p) in points.iter().enumerate() {
            if i == points.len() - 1 {
                let _ = writeln!(out, "p {} {} ;", p.x, p.y);
            } else {
                let _ = writeln!(out, "p {} {}", p.x, p.y);
            }
        }
        let _ = writeln!(out);
    }

    out
}

fn parse_model(contents: &str) -> Result<Vec<Polygon>> {
    let lines: Vec<&str> = contents.lines().collect();
    let mut index = 0;

    skip_blank_lines(&lines, &mut index);
    let header = next_line(&lines, &mut index, "amt")?;
    let declared = header
        .strip_prefix("amt ")
        .ok_or_else(|| malformed(index, "expected 'amt <count>' header"))?
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed(index, "malformed record count"))?;

    let mut shapes = Vec::with_capacity(declared);
    for _ in 0..declared {
        skip_blank_lines(&lines, &mut index);
        if index >= lines.len() {
            return Err(GraphicsError::ModelCountMismatch {
                declared,
                found: shapes.len(),
            });
        }
        shapes.push(parse_record(&lines, &mut index)?);
    }

    skip_blank_lines(&lines, &mut index);
    if index < lines.len() {
        return Err(malformed(index + 1, "unexpected content after final shape"));
    }

    Ok(shapes)
}

fn parse_record(lines: &[&str], index: &mut usize) -> Result<Polygon> {
    let color_line = next_line(lines, index, "c")?;
    let color = parse_color(color_line, *index)?;

    let fill_line = next_line(lines, index, "f")?;
    let filled = parse_flag(fill_line, "f", *index)?;

    let show_line = next_line(lines, index, "s")?;
    let should_render = parse_flag(show_line, "s", *index)?;

    let mut points = Vec::new();
    loop {
        let point_line = next_line(lines, index, "p")?;
        let (point, terminal) = parse_point(point_line, *index)?;
        points.push(point);
        if terminal {
            break;
        }
    }

    if points.len() < 3 {
        return Err(malformed(*index, "a shape needs at least 3 points"));
    }

    Ok(Polygon::with_style(points, color, filled, should_render))
}

fn parse_color(line: &str, line_number: usize) -> Result<Color> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(malformed(line_number, "expected 'c <r> <g> <b> <a>'"));
    }

    let mut channels = [0u8; 4];
    for (channel, field) in channels.iter_mut().zip(&fields[1..]) {
        *channel = field
            .parse()
            .map_err(|_| malformed(line_number, "malformed color channel"))?;
    }

    Ok(Color::rgba(channels[0], channels[1], channels[2], channels[3]))
}

fn parse_flag(line: &str, prefix: &str, line_number: usize) -> Result<bool> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [tag, "true"] if *tag == prefix => Ok(true),
        [tag, "false"] if *tag == prefix => Ok(false),
        _ => Err(malformed(
            line_number,
            "expected 'true' or 'false' flag value",
        )),
    }
}

fn parse_point(line: &str, line_number: usize) -> Result<(Pointf, bool)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let terminal = fields.last() == Some(&";");
    let expected_fields = if terminal { 4 } else { 3 };
    if fields.len() != expected_fields {
        return Err(malformed(line_number, "expected 'p <x> <y>' point line"));
    }

    let x = fields[1]
        .parse()
        .map_err(|_| malformed(line_number, "malformed point coordinate"))?;
    let y = fields[2]
        .parse()
        .map_err(|_| malformed(line_number, "malformed point coordinate"))?;

    Ok((Pointf::new(x, y), terminal))
}

/// Returns the next line, requiring its first whitespace-split token to be
/// exactly `tag`. `index` is left pointing past the consumed line, so error
/// line numbers are 1-based.
fn next_line<'a>(lines: &[&'a str], index: &mut usize, tag: &str) -> Result<&'a str> {
    let line = *lines
        .get(*index)
        .ok_or_else(|| malformed(*index + 1, format!("missing '{tag}' line")))?;
    *index += 1;

    if line.split_whitespace().next() == Some(tag) {
        Ok(line)
    } else {
        Err(malformed(*index, format!("expected '{tag}' line")))
    }
}

fn skip_blank_lines(lines: &[&str], index: &mut usize) {
    while lines.get(*index).is_some_and(|line| line.trim().is_empty()) {
        *index += 1;
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> GraphicsError {
    GraphicsError::ModelFormat {
        line,
        reason: reason.into(),
    }
}
