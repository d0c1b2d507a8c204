pub mod color;
pub mod generate;
pub mod hash;
pub mod patterns;
pub mod svg;

#[cfg(feature = "cli")]
pub mod cli;

pub use generate::GeoPattern;
pub use patterns::{PatternError, PatternKind};

#[cfg(feature = "cli")]
pub use cli::run;
