use crate::hash::{Fingerprint, remap};
use crate::svg::{ShapeStyle, Svg};
use super::fill_for;

/// Horizontal bands of one repeating S-curve spanning 1.5 periods. Unlike
/// the grid generators this draws 35 bands, one hash digit per band starting
/// at offset 1.
pub(super) fn draw(doc: &mut Svg, digest: &Fingerprint) {
    let period = remap(f64::from(digest.window(1, 1)), 0.0, 15.0, 100.0, 400.0).floor();
    let amplitude = remap(f64::from(digest.window(2, 1)), 0.0, 15.0, 30.0, 100.0).floor();
    let wave_width = remap(f64::from(digest.window(3, 1)), 0.0, 15.0, 3.0, 30.0).floor();
    let x_offset = period / 4.0 * 0.7;

    doc.width = period;
    doc.height = wave_width * 36.0;

    let d = format!(
        "M0 {amplitude} C {x_offset} 0, {c1} 0, {c2} {amplitude} S {s1} {peak}, {period} {amplitude} S {s2} 0, {s3} {amplitude}",
        c1 = period / 2.0 - x_offset,
        c2 = period / 2.0,
        s1 = period - x_offset,
        peak = amplitude * 2.0,
        s2 = period * 1.5 - x_offset,
        s3 = period * 1.5
    );

    let mut cursor = digest.cursor(1);
    for band in 0..35 {
        let val = cursor.next_digit();
        let stroke = fill_for(val);
        let opacity = remap(f64::from(val), 0.0, 15.0, 0.02, 0.15);

        // Each band is drawn twice, the second copy one full canvas height
        // down, so the pattern tiles vertically.
        for shift in [0.0, wave_width * 36.0] {
            doc.path(
                d.clone(),
                ShapeStyle {
                    fill: Some("none".to_string()),
                    stroke: Some(stroke.to_string()),
                    stroke_width: Some(wave_width),
                    opacity: Some(opacity),
                    transform: Some(format!(
                        "translate({}, {})",
                        period / 4.0,
                        wave_width * band as f64 - amplitude * 1.5 + shift
                    )),
                    ..ShapeStyle::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_band_is_doubled_for_tiling() {
        let digest = Fingerprint::of("GitHub");
        let mut doc = Svg::new();
        draw(&mut doc, &digest);
        assert_eq!(doc.elements().len(), 70);
    }
}
