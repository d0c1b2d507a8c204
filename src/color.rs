//! Background color derivation.
//!
//! Every pattern sits on a solid full-canvas rectangle whose color comes from
//! rotating a fixed base hue/saturation by hash-derived offsets.

use crate::hash::{Fingerprint, remap};
use crate::svg::{Length, ShapeStyle, Svg};

/// HSL color with hue in degrees and saturation/lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

const BASE_COLOR: Hsl = Hsl {
    hue: 0.0,
    saturation: 0.42,
    lightness: 0.41,
};

impl Hsl {
    /// Convert to 8-bit RGB channels using the CSS HSL algorithm. Hue wraps
    /// into `[0, 360)`; saturation and lightness clamp to `[0, 1]`.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);
        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return (v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - s * l };
        let p = 2.0 * l - q;
        (
            channel(p, q, h + 1.0 / 3.0),
            channel(p, q, h),
            channel(p, q, h - 1.0 / 3.0),
        )
    }
}

/// One channel of the piecewise hue ramp, rounded onto `0..=255`.
fn channel(p: f64, q: f64, t: f64) -> u8 {
    let t = t.rem_euclid(1.0);
    let value = if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    (value * 255.0).round() as u8
}

/// Paint the full-canvas background rect for `digest`.
///
/// Hue rotates down by a 3-digit window at offset 14 mapped onto 0..359
/// degrees; a 1-digit window at offset 17 nudges saturation up when odd,
/// down when even. Runs before any pattern generator so shapes draw on top.
pub fn draw_background(doc: &mut Svg, digest: &Fingerprint) {
    let hue_offset = remap(f64::from(digest.window(14, 3)), 0.0, 4095.0, 0.0, 359.0);
    let sat_offset = digest.window(17, 1);

    let mut color = BASE_COLOR;
    color.hue -= hue_offset;
    if sat_offset % 2 == 1 {
        color.saturation += f64::from(sat_offset) / 100.0;
    } else {
        color.saturation -= f64::from(sat_offset) / 100.0;
    }

    let (r, g, b) = color.to_rgb8();
    doc.rect(
        0.0,
        0.0,
        Length::Percent(100.0),
        Length::Percent(100.0),
        ShapeStyle {
            fill: Some(format!("rgb({r}, {g}, {b})")),
            ..ShapeStyle::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_color_converts_to_rgb() {
        assert_eq!(BASE_COLOR.to_rgb8(), (148, 61, 61));
    }

    #[test]
    fn hue_wraps_across_zero() {
        let rotated = Hsl {
            hue: -90.0,
            saturation: 0.42,
            lightness: 0.41,
        };
        let wrapped = Hsl {
            hue: 270.0,
            ..rotated
        };
        assert_eq!(rotated.to_rgb8(), wrapped.to_rgb8());
    }

    #[test]
    fn achromatic_when_saturation_is_zero() {
        let gray = Hsl {
            hue: 123.0,
            saturation: 0.0,
            lightness: 0.5,
        };
        assert_eq!(gray.to_rgb8(), (128, 128, 128));
    }

    #[test]
    fn github_background_color() {
        let digest = Fingerprint::of("GitHub");
        let mut doc = Svg::new();
        draw_background(&mut doc, &digest);
        let markup = doc.to_string();
        assert!(
            markup.contains(
                "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"rgb(51, 89, 158)\"/>"
            ),
            "unexpected background: {markup}"
        );
    }

    #[test]
    fn empty_seed_background_color() {
        let digest = Fingerprint::of("");
        let mut doc = Svg::new();
        draw_background(&mut doc, &digest);
        assert!(doc.to_string().contains("fill=\"rgb(146, 63, 89)\""));
    }
}
