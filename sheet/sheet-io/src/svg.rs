//! SVG rendering.

use std::fmt::Write;

use sheet_layout::{Annotation, Segment, Sheet};

/// Line height of multi-line annotations, in font sizes.
pub const LINE_SPACING: f64 = 1.2;

/// Render a sheet as an SVG document.
///
/// The SVG user unit is the sheet unit, and the page size carries that unit
/// so the document prints at physical size. Page y is flipped into SVG's
/// downward y axis.
///
/// # Example
///
/// ```
/// use sheet_io::render_svg;
/// use sheet_layout::{layout_sheet, SheetParams};
///
/// let config = SheetParams::default().resolve().unwrap();
/// let svg = render_svg(&layout_sheet(&config).unwrap());
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("width=\"210mm\""));
/// ```
#[must_use]
pub fn render_svg(sheet: &Sheet) -> String {
    let unit = sheet.unit.symbol();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}{unit}\" height=\"{h}{unit}\" \
         viewBox=\"0 0 {w} {h}\">\n  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n",
        w = sheet.width,
        h = sheet.height,
    );

    for segment in &sheet.segments {
        write_segment(&mut svg, segment, sheet.height);
    }

    if let Some(annotation) = &sheet.annotation {
        write_annotation(&mut svg, annotation, sheet.height);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_segment(svg: &mut String, segment: &Segment, page_height: f64) {
    let stroke = &segment.stroke;
    let _ = write!(
        svg,
        r#"  <line x1="{:.4}" y1="{:.4}" x2="{:.4}" y2="{:.4}" stroke="{}" stroke-width="{:.4}""#,
        segment.start.x,
        page_height - segment.start.y,
        segment.end.x,
        page_height - segment.end.y,
        stroke.color.to_hex(),
        stroke.width,
    );
    if !stroke.is_solid() {
        let dashes: Vec<String> = stroke.dashes.iter().map(|d| format!("{d:.4}")).collect();
        let _ = write!(svg, r#" stroke-dasharray="{}""#, dashes.join(" "));
    }
    svg.push_str("/>\n");
}

#[allow(clippy::cast_precision_loss)]
fn write_annotation(svg: &mut String, annotation: &Annotation, page_height: f64) {
    let count = annotation.lines.len();
    let _ = writeln!(
        svg,
        r#"  <text font-family="Helvetica, Arial, sans-serif" font-size="{:.4}" fill="{}" text-anchor="end">"#,
        annotation.font_size,
        annotation.color.to_hex(),
    );
    for (i, line) in annotation.lines.iter().enumerate() {
        let lines_below = (count - 1 - i) as f64;
        let y = page_height - annotation.anchor.y - lines_below * LINE_SPACING * annotation.font_size;
        let _ = writeln!(
            svg,
            r#"    <tspan x="{:.4}" y="{:.4}">{}</tspan>"#,
            annotation.anchor.x,
            y,
            escape_xml(line),
        );
    }
    svg.push_str("  </text>\n");
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
