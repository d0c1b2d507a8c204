use crate::hash::{Fingerprint, remap};
use crate::svg::{ShapeStyle, Svg};
use super::fill_for;

/// Staggered hexagon grid. Columns alternate a half-height vertical offset;
/// the x=0 column, the y=0 row, and the shared corner are re-emitted shifted
/// six cells over so the pattern tiles without seams.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let side_length = remap(f64::from(digest.window(1, 1)), 0.0, 15.0, 5.0, 120.0);
    let hex_height = side_length * 3.0_f64.sqrt();
    let hex_width = side_length * 2.0;
    let points = hexagon_points(side_length);

    doc.width = hex_width * 3.0 + side_length * 3.0;
    doc.height = hex_height * 6.0;

    let mut cursor = digest.cursor(0);
    for y in 0..5 {
        for x in 0..5 {
            let val = cursor.next_digit();
            let opacity = remap(f64::from(val), 0.0, 15.0, 0.02, 0.18);
            let fill = fill_for(val);
            let dy = if x % 2 == 1 {
                y as f64 * hex_height
            } else {
                y as f64 * hex_height + hex_height / 2.0
            };

            let mut place = |tx: f64, ty: f64| {
                doc.polyline(
                    points.clone(),
                    ShapeStyle {
                        fill: Some(fill.to_string()),
                        stroke: Some("#000000".to_string()),
                        opacity: Some(opacity),
                        transform: Some(format!("translate({tx}, {ty})")),
                        ..ShapeStyle::default()
                    },
                );
            };

            place(
                x as f64 * side_length * 1.5 - hex_width / 2.0,
                dy - hex_height / 2.0,
            );
            if x == 0 {
                place(
                    6.0 * side_length * 1.5 - hex_width / 2.0,
                    dy - hex_height / 2.0,
                );
            }
            if y == 0 {
                // The duplicated row anchors with the opposite column parity.
                let dy = if x % 2 == 0 {
                    6.0 * hex_height
                } else {
                    6.0 * hex_height + hex_height / 2.0
                };
                place(
                    x as f64 * side_length * 1.5 - hex_width / 2.0,
                    dy - hex_height / 2.0,
                );
            }
            if x == 0 && y == 0 {
                place(
                    6.0 * side_length * 1.5 - hex_width / 2.0,
                    5.0 * hex_height + hex_height / 2.0,
                );
            }
        }
    }
}

/// Closed hexagon outline as polyline points, left vertex at x=0.
fn hexagon_points(side_length: f64) -> String {
    let c = side_length;
    let a = c / 2.0;
    let b = c * 3.0_f64.sqrt() / 2.0;
    format!(
        "0, {b}, {a}, 0, {ac}, 0, {cc}, {b}, {ac}, {bb}, {a}, {bb}, 0, {b}",
        ac = a + c,
        cc = 2.0 * c,
        bb = 2.0 * b
    )
}
