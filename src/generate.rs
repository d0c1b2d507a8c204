//! The generation facade: one call produces one finished document.

use crate::color::draw_background;
use crate::hash::Fingerprint;
use crate::patterns::{PatternError, PatternKind};
use crate::svg::Svg;
use base64::Engine;

/// A generated pattern: the seed fingerprint plus the finished document.
///
/// Construction does all the work; the accessors are read views. Every call
/// is independent, so two generations never share state and equal inputs
/// yield byte-identical markup.
#[derive(Debug, Clone)]
pub struct GeoPattern {
    kind: PatternKind,
    digest: Fingerprint,
    document: Svg,
}

impl GeoPattern {
    /// Generate the pattern for `seed` with the given generator.
    pub fn new(seed: &str, kind: PatternKind) -> Self {
        let digest = Fingerprint::of(seed);
        let mut document = Svg::new();
        draw_background(&mut document, &digest);
        kind.draw(&mut document, &digest);
        Self {
            kind,
            digest,
            document,
        }
    }

    /// Like [`GeoPattern::new`], but validates a generator name first. The
    /// name is checked against the closed set before any hashing happens.
    pub fn from_name(seed: &str, generator: &str) -> Result<Self, PatternError> {
        let kind = PatternKind::from_name(generator)?;
        Ok(Self::new(seed, kind))
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Hex fingerprint the generation was driven by.
    pub fn fingerprint(&self) -> &str {
        self.digest.as_hex()
    }

    pub fn document(&self) -> &Svg {
        &self.document
    }

    /// Serialized SVG markup.
    pub fn svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Base64 form of the markup, as a single unbroken string.
    pub fn base64_string(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.svg_string())
    }
}
