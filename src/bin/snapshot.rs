//! Print the dashboard views for one selection without opening a window.
//!
//! ```text
//! snapshot <ambuja|ultratech|both> <group> <from> <to> [--format json|csv]
//! ```

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use ratio_dash::data::constants::builtin_dataset;
use ratio_dash::data::filter::YearRange;
use ratio_dash::{project, Catalogs, Company, CompanySelection, Selection};

enum Format {
    Json,
    Csv,
}

struct Args {
    selection: Selection,
    format: Format,
}

fn parse_company(s: &str) -> Result<CompanySelection> {
    match s.to_ascii_lowercase().as_str() {
        "ambuja" => Ok(CompanySelection::Single(Company::Ambuja)),
        "ultratech" => Ok(CompanySelection::Single(Company::UltraTech)),
        "both" => Ok(CompanySelection::Both),
        other => bail!("unknown company '{other}' (expected ambuja, ultratech or both)"),
    }
}

fn parse_args(raw: &[String], bounds: (i32, i32)) -> Result<Args> {
    let mut positional = Vec::new();
    let mut format = Format::Json;
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--format" {
            format = match iter.next().map(String::as_str) {
                Some("json") => Format::Json,
                Some("csv") => Format::Csv,
                other => bail!("--format expects json or csv, got {other:?}"),
            };
        } else {
            positional.push(arg.as_str());
        }
    }

    let [company, group, from, to] = positional[..] else {
        bail!("usage: snapshot <ambuja|ultratech|both> <group> <from> <to> [--format json|csv]");
    };
    let from: i32 = from.parse().with_context(|| format!("'{from}' is not a year"))?;
    let to: i32 = to.parse().with_context(|| format!("'{to}' is not a year"))?;

    Ok(Args {
        selection: Selection {
            company: parse_company(company)?,
            group: group.to_string(),
            year_range: YearRange::clamped(from, to, bounds),
        },
        format,
    })
}

fn run() -> Result<()> {
    let dataset = builtin_dataset().context("building the ratio dataset")?;
    let catalogs = Catalogs::builtin().context("building the metric catalogs")?;

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw, dataset.year_bounds())?;

    let views = project(&dataset, &catalogs, &args.selection)
        .with_context(|| format!("projecting {:?}", args.selection))?;

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&views).context("serialising views")?;
            println!("{json}");
        }
        Format::Csv => print!("{}", views.table.text),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
