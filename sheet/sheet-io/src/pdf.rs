//! PDF rendering via `lopdf`.
//!
//! The page content is drawn in sheet units: one `cm` operator scales user
//! space to points, after which segment coordinates, stroke widths and the
//! annotation font size are used as they come out of the layout.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use sheet_layout::{Annotation, LineColor, Sheet, Stroke, VERSION};

use crate::error::RenderResult;
use crate::svg::LINE_SPACING;

/// Resource name of the annotation font.
const FONT_NAME: &str = "F1";

/// Render a sheet into PDF bytes.
///
/// # Errors
///
/// Returns an error if the content stream cannot be encoded.
///
/// # Example
///
/// ```
/// use sheet_io::render_pdf;
/// use sheet_layout::{layout_sheet, SheetParams};
///
/// let config = SheetParams::default().resolve().unwrap();
/// let bytes = render_pdf(&layout_sheet(&config).unwrap()).unwrap();
/// assert!(bytes.starts_with(b"%PDF-"));
/// ```
pub fn render_pdf(sheet: &Sheet) -> RenderResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_pdf(sheet, &mut bytes)?;
    Ok(bytes)
}

/// Render a sheet as a single-page PDF into `writer`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_pdf<W: Write>(sheet: &Sheet, writer: &mut W) -> RenderResult<()> {
    let mut doc = build_document(sheet)?;
    doc.save_to(writer)?;
    Ok(())
}

fn build_document(sheet: &Sheet) -> RenderResult<Document> {
    let scale = sheet.unit.points_per_unit();
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_NAME => font_id },
    });

    let content = Content {
        operations: page_operations(sheet, scale),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            real(sheet.width * scale),
            real(sheet.height * scale),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Copperplate practice sheet"),
        "Producer" => Object::string_literal(format!("practice-sheet {VERSION}")),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    Ok(doc)
}

fn page_operations(sheet: &Sheet, scale: f64) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![real(scale), 0.into(), 0.into(), real(scale), 0.into(), 0.into()],
        ),
        // Butt caps, miter joins.
        Operation::new("J", vec![0.into()]),
        Operation::new("j", vec![0.into()]),
    ];

    let mut current: Option<&Stroke> = None;
    for segment in &sheet.segments {
        if current != Some(&segment.stroke) {
            push_stroke_state(&mut ops, &segment.stroke);
            current = Some(&segment.stroke);
        }
        ops.push(Operation::new(
            "m",
            vec![real(segment.start.x), real(segment.start.y)],
        ));
        ops.push(Operation::new(
            "l",
            vec![real(segment.end.x), real(segment.end.y)],
        ));
        ops.push(Operation::new("S", vec![]));
    }

    if let Some(annotation) = &sheet.annotation {
        push_annotation(&mut ops, annotation);
    }

    ops.push(Operation::new("Q", vec![]));
    ops
}

fn push_stroke_state(ops: &mut Vec<Operation>, stroke: &Stroke) {
    ops.push(Operation::new("w", vec![real(stroke.width)]));
    ops.push(Operation::new("RG", color_operands(stroke.color)));
    let dashes = stroke.dashes.iter().map(|d| real(*d)).collect();
    ops.push(Operation::new("d", vec![Object::Array(dashes), 0.into()]));
}

#[allow(clippy::cast_precision_loss)]
fn push_annotation(ops: &mut Vec<Operation>, annotation: &Annotation) {
    let size = annotation.font_size;
    let count = annotation.lines.len();
    ops.push(Operation::new("rg", color_operands(annotation.color)));
    for (i, line) in annotation.lines.iter().enumerate() {
        let lines_below = (count - 1 - i) as f64;
        let x = annotation.anchor.x - text_width(line, size);
        let y = annotation.anchor.y + lines_below * LINE_SPACING * size;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![FONT_NAME.into(), real(size)]));
        ops.push(Operation::new("Td", vec![real(x), real(y)]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
        ops.push(Operation::new("ET", vec![]));
    }
}

fn color_operands(color: LineColor) -> Vec<Object> {
    vec![real(color.r), real(color.g), real(color.b)]
}

fn real(value: f64) -> Object {
    Object::from(value)
}

/// Width of `text` set in Helvetica at `size`, in the units of `size`.
#[must_use]
pub fn text_width(text: &str, size: f64) -> f64 {
    let thousandths: u32 = text.chars().map(helvetica_width).sum();
    f64::from(thousandths) / 1000.0 * size
}

/// Advance width of a character in Helvetica, in thousandths of an em.
///
/// Characters outside printable ASCII get the width of `n`.
fn helvetica_width(c: char) -> u32 {
    #[rustfmt::skip]
    const WIDTHS: [u16; 95] = [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ];
    let code = c as usize;
    if (32..=126).contains(&code) {
        u32::from(WIDTHS[code - 32])
    } else {
        556
    }
}
