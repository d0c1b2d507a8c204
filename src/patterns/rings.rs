use crate::hash::{Fingerprint, remap};
use crate::svg::{ShapeStyle, Svg};

/// Stroke-only concentric-spaced rings, no fill. Cells sit one ring plus one
/// stroke width apart, so the grid tiles with no duplication.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let ring_size = remap(f64::from(digest.window(1, 1)), 0.0, 15.0, 5.0, 80.0);
    let stroke_width = ring_size / 4.0;

    doc.width = (ring_size + stroke_width) * 6.0;
    doc.height = (ring_size + stroke_width) * 6.0;

    let mut cursor = digest.cursor(0);
    for y in 0..5 {
        for x in 0..5 {
            let val = cursor.next_digit();

            doc.circle(
                x as f64 * ring_size + x as f64 * stroke_width + (ring_size + stroke_width) / 2.0,
                y as f64 * ring_size + y as f64 * stroke_width + (ring_size + stroke_width) / 2.0,
                ring_size / 2.0,
                ShapeStyle {
                    fill: Some("none".to_string()),
                    stroke: Some("#000".to_string()),
                    stroke_width: Some(stroke_width),
                    opacity: Some(remap(f64::from(val), 0.0, 15.0, 0.02, 0.16)),
                    ..ShapeStyle::default()
                },
            );
        }
    }
}
