//! The six pattern generators and their closed dispatch.
//!
//! Each generator reads hash windows for its size parameters, sets the
//! document dimensions, then walks a fixed grid emitting one shape per cell
//! (plus edge duplicates where the family needs them to tile seamlessly).

mod hexagons;
mod overlapping_circles;
mod rings;
mod sine_waves;
mod squares;
mod xes;

use crate::hash::Fingerprint;
use crate::svg::Svg;
use thiserror::Error;

/// The closed set of supported pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Hexagons,
    OverlappingCircles,
    Rings,
    SineWaves,
    Squares,
    Xes,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Hexagons,
        PatternKind::OverlappingCircles,
        PatternKind::Rings,
        PatternKind::SineWaves,
        PatternKind::Squares,
        PatternKind::Xes,
    ];

    /// Generator name as accepted by [`PatternKind::from_name`] and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Hexagons => "hexagons",
            PatternKind::OverlappingCircles => "overlappingcircles",
            PatternKind::Rings => "rings",
            PatternKind::SineWaves => "sinewaves",
            PatternKind::Squares => "squares",
            PatternKind::Xes => "xes",
        }
    }

    /// Resolve a generator name, rejecting anything outside the fixed set.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        PatternKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| PatternError::UnknownGenerator {
                name: name.to_string(),
            })
    }

    pub(crate) fn draw(self, doc: &mut Svg, digest: &Fingerprint) {
        match self {
            PatternKind::Hexagons => hexagons::draw(doc, digest),
            PatternKind::OverlappingCircles => overlapping_circles::draw(doc, digest),
            PatternKind::Rings => rings::draw(doc, digest),
            PatternKind::SineWaves => sine_waves::draw(doc, digest),
            PatternKind::Squares => squares::draw(doc, digest),
            PatternKind::Xes => xes::draw(doc, digest),
        }
    }
}

/// Errors surfaced before any shape is emitted.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Requested generator name is outside the supported set.
    #[error("\"{name}\" is not a valid generator. Valid choices are {}.", valid_names())]
    UnknownGenerator { name: String },
}

fn valid_names() -> String {
    PatternKind::ALL
        .iter()
        .map(|kind| format!("\"{}\"", kind.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Light fill for even hash digits, dark for odd.
fn fill_for(val: u32) -> &'static str {
    if val % 2 == 0 { "#ddd" } else { "#222" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = PatternKind::from_name("not-a-real-generator").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"not-a-real-generator\" is not a valid generator"));
        for kind in PatternKind::ALL {
            assert!(
                message.contains(kind.name()),
                "error should list {}: {message}",
                kind.name()
            );
        }
    }

    #[test]
    fn fill_alternates_by_parity() {
        assert_eq!(fill_for(0), "#ddd");
        assert_eq!(fill_for(7), "#222");
        assert_eq!(fill_for(0xe), "#ddd");
    }
}
