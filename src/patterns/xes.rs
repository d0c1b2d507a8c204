use crate::hash::{Fingerprint, remap};
use crate::svg::{Element, ShapeStyle, Svg};
use super::fill_for;

/// Grid of X shapes, each two overlapping bars rotated 45 degrees about
/// their own center, with columns staggered by a quarter height. The x=0
/// column, the y=0 row, and the corner duplicate for tiling; the duplicated
/// row re-anchors its stagger below the grid.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let square_size = remap(f64::from(digest.window(0, 1)), 0.0, 15.0, 10.0, 25.0);
    let x_size = square_size * 3.0 * 0.943;
    let shape = x_shape(square_size);

    doc.width = x_size * 3.0;
    doc.height = x_size * 3.0;

    let mut cursor = digest.cursor(0);
    for y in 0..5 {
        for x in 0..5 {
            let val = cursor.next_digit();
            let opacity = remap(f64::from(val), 0.0, 15.0, 0.02, 0.15);
            let fill = fill_for(val);
            let mut dy = if x % 2 == 0 {
                y as f64 * x_size - x_size * 0.5
            } else {
                y as f64 * x_size - x_size * 0.5 + x_size / 4.0
            };

            let mut place = |tx: f64, ty: f64| {
                doc.group(
                    shape.clone(),
                    ShapeStyle {
                        fill: Some(fill.to_string()),
                        opacity: Some(opacity),
                        transform: Some(format!(
                            "translate({tx}, {ty}) rotate(45, {cx}, {cy})",
                            cx = x_size / 2.0,
                            cy = x_size / 2.0
                        )),
                        ..ShapeStyle::default()
                    },
                );
            };

            place(
                x as f64 * x_size / 2.0 - x_size / 2.0,
                dy - y as f64 * x_size / 2.0,
            );
            if x == 0 {
                place(
                    6.0 * x_size / 2.0 - x_size / 2.0,
                    dy - y as f64 * x_size / 2.0,
                );
            }
            if y == 0 {
                dy = if x % 2 == 0 {
                    6.0 * x_size - x_size / 2.0
                } else {
                    6.0 * x_size - x_size / 2.0 + x_size / 4.0
                };
                place(
                    x as f64 * x_size / 2.0 - x_size / 2.0,
                    dy - 6.0 * x_size / 2.0,
                );
            }
            // The corner duplicate reuses the re-anchored row offset.
            if x == 0 && y == 0 {
                place(
                    6.0 * x_size / 2.0 - x_size / 2.0,
                    dy - 6.0 * x_size / 2.0,
                );
            }
        }
    }
}

/// The X itself: two bars crossing at the center, unstyled so fill and
/// rotation come from the enclosing group.
fn x_shape(square_size: f64) -> Vec<Element> {
    vec![
        Element::rect(square_size, 0.0, square_size, square_size * 3.0),
        Element::rect(0.0, square_size, square_size * 3.0, square_size),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_grid_plus_tiling_duplicates() {
        let digest = Fingerprint::of("GitHub");
        let mut doc = Svg::new();
        draw(&mut doc, &digest);
        assert_eq!(doc.elements().len(), 36);
    }
}
