use crate::hash::{Fingerprint, remap};
use crate::svg::{ShapeStyle, Svg};
use super::fill_for;

/// Circles on a half-diameter lattice so neighbors overlap. The x=0 column,
/// y=0 row, and corner repeat six radii over for tiling.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let diameter = remap(f64::from(digest.window(1, 1)), 0.0, 15.0, 20.0, 200.0);
    let radius = diameter / 2.0;

    doc.width = radius * 6.0;
    doc.height = radius * 6.0;

    let mut cursor = digest.cursor(0);
    for y in 0..5 {
        for x in 0..5 {
            let val = cursor.next_digit();
            let style = ShapeStyle {
                fill: Some(fill_for(val).to_string()),
                opacity: Some(remap(f64::from(val), 0.0, 15.0, 0.02, 0.1)),
                ..ShapeStyle::default()
            };

            doc.circle(x as f64 * radius, y as f64 * radius, radius, style.clone());
            if x == 0 {
                doc.circle(6.0 * radius, y as f64 * radius, radius, style.clone());
            }
            if y == 0 {
                doc.circle(x as f64 * radius, 6.0 * radius, radius, style.clone());
            }
            if x == 0 && y == 0 {
                doc.circle(6.0 * radius, 6.0 * radius, radius, style.clone());
            }
        }
    }
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
