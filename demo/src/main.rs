//! Reads `base u v` records and prints the outline of every base,
//! either as SVG polygons or as JSON.

use anyhow::{ anyhow, Context, Result };
use clap::{ Parser, ValueEnum };
use log::{ error, info };
use serde::Serialize;

use hexoutline::{ svg, BaseId, Outline, OutlineConfig, Outliner, Precision, Tile };

use std::collections::BTreeMap;
use std::fs;
use std::io::{ self, Read };
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hexoutline-demo")]
#[command(about = "Outlines the bases of a hexagonal map")]
#[command(long_about = "Reads whitespace-separated `base u v` records, one tile per line,
and prints the outline of every base. Blank lines and lines starting
with `#` are ignored.")]
struct Cli {
    /// File with the tile records, or stdin if omitted
    input: Option<PathBuf>,

    /// Radius of a hexagon in output units
    #[arg(short, long, default_value_t = 1.0)]
    radius: f64,

    /// Precision of the output coordinates, e.g. 0.01
    #[arg(short, long, default_value_t = 1e-2)]
    precision: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Serialize, Default)]
struct Report<'a> {
    outlines: BTreeMap<BaseId, &'a Outline>,
    errors: BTreeMap<BaseId, String>,
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    let records = parse_records(&text)?;
    info!("Read {} tile records", records.len());

    let config = OutlineConfig {
        radius: cli.radius,
        precision: Precision::from_step(cli.precision)?,
    };
    let outlines = Outliner::new(&config)?.outlines(records);

    match cli.format {
        Format::Svg => {
            for (base, outline) in &outlines {
                match outline {
                    Ok(o) => println!("<!-- base {} -->\n{}", base, svg::polygon(o)),
                    Err(e) => eprintln!("base {}: {}", base, e),
                }
            }
        }
        Format::Json => {
            let mut report = Report::default();
            for (base, outline) in &outlines {
                match outline {
                    Ok(o) => { report.outlines.insert(*base, o); }
                    Err(e) => { report.errors.insert(*base, e.to_string()); }
                }
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Parse `base u v` records, one per line.
fn parse_records(text: &str) -> Result<Vec<(BaseId, Tile)>> {
    let mut records = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue
        }
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if let [base, u, v] = fields[..] {
            let base = base.parse().with_context(|| format!("line {}: invalid base id", n + 1))?;
            let u = u.parse().with_context(|| format!("line {}: invalid u coordinate", n + 1))?;
            let v = v.parse().with_context(|| format!("line {}: invalid v coordinate", n + 1))?;
            records.push((base, Tile::new(u, v)));
        } else {
            return Err(anyhow!("line {}: expected `base u v`, got {:?}", n + 1, line))
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let text = "# base u v\n1 0 0\n\n  1 1 0\n2 -3 4\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records, vec![
            (1, Tile::new(0, 0)),
            (1, Tile::new(1, 0)),
            (2, Tile::new(-3, 4)),
        ]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_records("1 0").is_err());
        assert!(parse_records("1 0 0 0").is_err());
        assert!(parse_records("x 0 0").is_err());
        assert!(parse_records("-1 0 0").is_err());
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
