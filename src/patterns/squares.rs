use crate::hash::{Fingerprint, remap};
use crate::svg::{ShapeStyle, Svg};
use super::fill_for;

/// Plain 5x5 grid of squares. The grid tiles against itself, so no edge
/// duplication is needed.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let square_size = remap(f64::from(digest.window(0, 1)), 0.0, 15.0, 10.0, 70.0);

    doc.width = square_size * 6.0;
    doc.height = square_size * 6.0;

    let mut cursor = digest.cursor(0);
    for y in 0..5 {
        for x in 0..5 {
            let val = cursor.next_digit();

            doc.rect(
                x as f64 * square_size,
                y as f64 * square_size,
                square_size,
                square_size,
                ShapeStyle {
                    fill: Some(fill_for(val).to_string()),
                    opacity: Some(remap(f64::from(val), 0.0, 15.0, 0.02, 0.2)),
                    ..ShapeStyle::default()
                },
            );
        }
    }
}
