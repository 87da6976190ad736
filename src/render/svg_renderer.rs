use std::fmt::Write as _;
use std::path::Path;

use crate::error::ChartResult;
use crate::render::{
    LayerKind, LayerPrimitives, LayeredRenderFrame, LinePrimitive, RectPrimitive, Renderer,
    TextHAlign, TextPrimitive,
};

/// Serializes sampled frames into standalone SVG documents.
///
/// Bars, axes and titles keep the group structure and class names of the
/// drawing surface, so the output can be styled with the same stylesheet a
/// browser page would use.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent `render` call.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    /// Writes the most recent document to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        std::fs::write(path, self.last_document.as_deref().unwrap_or_default())?;
        Ok(())
    }

    /// Builds the SVG text for `frame` without touching renderer state.
    #[must_use]
    pub fn document(frame: &LayeredRenderFrame) -> String {
        let mut svg = String::with_capacity(4096);
        svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        write_number_attr(&mut svg, "width", frame.viewport.width);
        write_number_attr(&mut svg, "height", frame.viewport.height);
        svg.push_str(">\n");
        for layer in &frame.layers {
            match layer.kind {
                LayerKind::XTitle | LayerKind::YTitle => write_texts(&mut svg, layer, "  "),
                _ => write_group(&mut svg, layer),
            }
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &LayeredRenderFrame) -> ChartResult<()> {
        self.last_document = Some(Self::document(frame));
        Ok(())
    }
}

fn write_group(svg: &mut String, layer: &LayerPrimitives) {
    let (dx, dy) = layer.translate;
    let _ = write!(svg, r#"  <g class="{}""#, layer.kind.class());
    if dx.is_finite() && dy.is_finite() {
        let _ = write!(svg, r#" transform="translate({},{})""#, number(dx), number(dy));
    }
    svg.push_str(">\n");
    for rect in &layer.rects {
        write_rect(svg, rect);
    }
    for line in &layer.lines {
        write_line(svg, line);
    }
    write_texts(svg, layer, "    ");
    svg.push_str("  </g>\n");
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) {
    let _ = write!(svg, "    <rect");
    if !rect.class.is_empty() {
        let _ = write!(svg, r#" class="{}""#, rect.class);
    }
    // Unresolvable geometry is left off so the element still exists.
    for (name, value) in [
        ("x", rect.x),
        ("y", rect.y),
        ("width", rect.width),
        ("height", rect.height),
    ] {
        write_number_attr(svg, name, value);
    }
    let _ = writeln!(svg, r#" style="fill: {};"/>"#, escape(&rect.fill.to_css()));
}

fn write_line(svg: &mut String, line: &LinePrimitive) {
    svg.push_str("    <line");
    for (name, value) in [
        ("x1", line.x1),
        ("y1", line.y1),
        ("x2", line.x2),
        ("y2", line.y2),
    ] {
        write_number_attr(svg, name, value);
    }
    let _ = write!(svg, r#" stroke="{}""#, line.color.to_hex());
    write_number_attr(svg, "stroke-width", line.stroke_width);
    if line.color.alpha < 1.0 {
        let _ = write!(svg, r#" stroke-opacity="{}""#, number(line.color.alpha));
    }
    svg.push_str("/>\n");
}

fn write_texts(svg: &mut String, layer: &LayerPrimitives, indent: &str) {
    for text in &layer.texts {
        write_text(svg, text, indent);
    }
}

fn write_text(svg: &mut String, text: &TextPrimitive, indent: &str) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = write!(svg, "{indent}<text");
    if !text.class.is_empty() {
        let _ = write!(svg, r#" class="{}""#, text.class);
    }
    write_number_attr(svg, "x", text.x);
    write_number_attr(svg, "y", text.y);
    write_number_attr(svg, "font-size", text.font_size_px);
    let _ = write!(svg, r#" fill="{}" text-anchor="{anchor}""#, text.color.to_hex());
    if text.color.alpha < 1.0 {
        let _ = write!(svg, r#" fill-opacity="{}""#, number(text.color.alpha));
    }
    let pivot_resolved = [text.rotation_deg, text.x, text.y]
        .iter()
        .all(|value| value.is_finite());
    if text.rotation_deg != 0.0 && pivot_resolved {
        let _ = write!(
            svg,
            r#" transform="rotate({} {} {})""#,
            number(text.rotation_deg),
            number(text.x),
            number(text.y)
        );
    }
    let _ = writeln!(svg, ">{}</text>", escape(&text.text));
}

/// Writes ` name="value"`, leaving the attribute off when `value` is not finite.
fn write_number_attr(svg: &mut String, name: &str, value: f64) {
    if value.is_finite() {
        let _ = write!(svg, r#" {name}="{}""#, number(value));
    }
}

/// Shortest decimal form with at most three fractional digits.
fn number(value: f64) -> String {
    // Past 2^53 there are no fractional digits left to round.
    if value.abs() >= 9.007_199_254_740_992e15 {
        return format!("{value}");
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
