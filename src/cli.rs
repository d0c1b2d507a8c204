use crate::generate::GeoPattern;
#[cfg(feature = "png")]
use crate::svg::write_output_png;
use crate::svg::write_output_text;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "geopat",
    version,
    about = "Deterministic tileable SVG background patterns from a seed string"
)]
pub struct Args {
    /// Seed string. Reads stdin when omitted.
    pub seed: Option<String>,

    /// Pattern generator
    #[arg(short = 'g', long = "generator", default_value = "hexagons")]
    pub generator: String,

    /// Output file. Defaults to stdout for svg/base64.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Base64,
    #[cfg(feature = "png")]
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let seed = resolve_seed(args.seed)?;
    let pattern = GeoPattern::from_name(&seed, &args.generator)?;

    match args.output_format {
        OutputFormat::Svg => {
            write_output_text(&pattern.svg_string(), args.output.as_deref())?;
        }
        OutputFormat::Base64 => {
            write_output_text(&pattern.base64_string(), args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = args
                .output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_output_png(&pattern.svg_string(), output)?;
        }
    }
    Ok(())
}

fn resolve_seed(arg: Option<String>) -> Result<String> {
    if let Some(seed) = arg {
        return Ok(seed);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_and_generator() {
        let args = Args::try_parse_from(["geopat", "GitHub", "-g", "rings"]).unwrap();
        assert_eq!(args.seed.as_deref(), Some("GitHub"));
        assert_eq!(args.generator, "rings");
        assert!(matches!(args.output_format, OutputFormat::Svg));
    }

    #[test]
    fn defaults_to_hexagons() {
        let args = Args::try_parse_from(["geopat", "anything"]).unwrap();
        assert_eq!(args.generator, "hexagons");
    }

    #[test]
    fn explicit_seed_skips_stdin() {
        assert_eq!(resolve_seed(Some("seed".to_string())).unwrap(), "seed");
    }
}
