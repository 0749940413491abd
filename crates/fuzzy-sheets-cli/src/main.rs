//! Fuzzy Sheets CLI - spreadsheet corruption tool

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use fuzzy_sheets::prelude::*;
use fuzzy_sheets::{classify, CsvWriteOptions};
use log::info;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fuzzy")]
#[command(
    author,
    version,
    about = "Corrupt spreadsheets in controlled, reproducible ways"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a mutation config to a spreadsheet
    Mutate {
        /// Input spreadsheet file (csv, xlsx)
        input: PathBuf,

        /// Mutation config (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write this many variants as <stem>_<n>.csv (or .xlsx), seeded seed+n
        #[arg(long)]
        copies: Option<u64>,
    },

    /// Show information about a spreadsheet
    Info {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// Print a config template with every axis disabled
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Mutate {
            input,
            config,
            output,
            seed,
            copies,
        } => mutate(&input, &config, output.as_deref(), seed, copies),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Config => print_config_template(),
    }
}

fn open(input: &Path) -> Result<Workbook> {
    Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn mutate(
    input: &Path,
    config_path: &Path,
    output: Option<&Path>,
    seed: Option<u64>,
    copies: Option<u64>,
) -> Result<()> {
    let config = MutationConfig::load(config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;

    let workbook = open(input)?;

    let Some(copies) = copies else {
        let mut workbook = workbook;
        let stats = run(&mut workbook, &config, seed)?;
        report(&stats);

        match output {
            Some(path) => {
                workbook
                    .save(path)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
                eprintln!("Wrote '{}'", path.display());
            }
            None => write_stdout(&workbook)?,
        }
        return Ok(());
    };

    if copies == 0 {
        bail!("--copies must be at least 1");
    }

    let base = output.unwrap_or(input);
    for n in 0..copies {
        let mut variant = workbook.clone();
        let stats = run(&mut variant, &config, seed.map(|s| s.wrapping_add(n)))?;

        let path = variant_path(base, n);
        variant
            .save(&path)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprint!("{}: ", path.display());
        report(&stats);
    }

    Ok(())
}

fn run(workbook: &mut Workbook, config: &MutationConfig, seed: Option<u64>) -> Result<MutationStats> {
    let stats = match seed {
        Some(seed) => {
            info!("Mutating with seed {seed}");
            workbook.apply_mutations_seeded(config, seed)
        }
        None => workbook.apply_mutations(config),
    };
    stats.context("Failed to apply mutations")
}

fn report(stats: &MutationStats) {
    let per_axis = stats
        .per_axis
        .iter()
        .map(|(axis, count)| format!("{axis}={count}"))
        .collect::<Vec<_>>()
        .join(", ");

    eprintln!(
        "Applied {} mutations in {} worksheets ({})",
        stats.mutations_applied, stats.worksheets_visited, per_axis
    );
}

/// `<dir>/<stem>_<n>.csv` next to `base`; an XLSX base keeps its extension
fn variant_path(base: &Path, n: u64) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mutated");
    let extension = match base.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("xlsx") => "xlsx",
        _ => "csv",
    };
    base.with_file_name(format!("{stem}_{n}.{extension}"))
}

fn write_stdout(workbook: &Workbook) -> Result<()> {
    let sheet = workbook
        .worksheet(0)
        .context("Workbook has no worksheets")?;
    CsvWriter::write(sheet, io::stdout().lock(), &CsvWriteOptions::default())
        .context("Failed to write to stdout")
}

fn show_info(input: &Path) -> Result<()> {
    let workbook = open(input)?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.worksheets().enumerate() {
        let mut counts = [0usize; 4];
        for (_, _, cell) in sheet.cells() {
            let slot = match classify(cell) {
                ValueKind::Numeric => 0,
                ValueKind::Date => 1,
                ValueKind::Text => 2,
                ValueKind::Other => 3,
            };
            counts[slot] += 1;
        }

        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());
        println!(
            "    Rows: {} (widest {} columns)",
            sheet.row_count(),
            sheet.max_column_count()
        );
        println!(
            "    Cells: {} numeric, {} date, {} text, {} other",
            counts[0], counts[1], counts[2], counts[3]
        );
        println!("    Formulas: {}", sheet.formula_count());

        let formats = number_formats(sheet);
        if !formats.is_empty() {
            println!("    Number formats: {}", formats.join(", "));
        }
    }

    Ok(())
}

/// Distinct number format codes used in a sheet, sorted
fn number_formats(sheet: &Worksheet) -> Vec<&str> {
    sheet
        .cells()
        .map(|(_, _, cell)| cell.format.number_format.format_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook = open(input)?;

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!("{}\t{}", i, sheet.name());
    }

    Ok(())
}

fn print_config_template() -> Result<()> {
    let json = MutationConfig::new()
        .to_json_pretty()
        .context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SALES: &str = "region,revenue\nNorth,1234.5\nSouth,99.25\nEast,7\nWest,12.5\n";

    /// Write the sample CSV and a config into `dir`
    fn fixture(dir: &Path) -> (PathBuf, PathBuf, MutationConfig) {
        let input = dir.join("sales.csv");
        std::fs::write(&input, SALES).unwrap();

        let config = MutationConfig::new().with_axis(
            Axis::NumberFormat,
            MutationDetail::enabled_for(0.5)
                .with_strength(0.5)
                .targeting(ValueKind::Numeric),
        );
        let config_path = dir.join("config.json");
        std::fs::write(&config_path, config.to_json_pretty().unwrap()).unwrap();

        (input, config_path, config)
    }

    /// CSV text of `input` mutated directly with `seed`
    fn expected_csv(input: &Path, config: &MutationConfig, seed: u64) -> String {
        let mut workbook = Workbook::open(input).unwrap();
        workbook.apply_mutations_seeded(config, seed).unwrap();

        let mut buffer = Vec::new();
        CsvWriter::write(
            workbook.worksheet(0).unwrap(),
            &mut buffer,
            &CsvWriteOptions::default(),
        )
        .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_variant_path() {
        assert_eq!(
            variant_path(Path::new("/data/sales.csv"), 3),
            PathBuf::from("/data/sales_3.csv")
        );
        assert_eq!(variant_path(Path::new("out"), 0), PathBuf::from("out_0.csv"));
        assert_eq!(
            variant_path(Path::new("book.XLSX"), 1),
            PathBuf::from("book_1.xlsx")
        );
    }

    #[test]
    fn test_mutate_copies_writes_seeded_variants() {
        let dir = tempfile::tempdir().unwrap();
        let (input, config_path, config) = fixture(dir.path());
        let output = dir.path().join("out.csv");

        mutate(&input, &config_path, Some(&output), Some(5), Some(2)).unwrap();

        // Only the numbered variants are written
        assert!(!output.exists());
        assert!(!dir.path().join("out_2.csv").exists());
        for n in 0..2u64 {
            let written = std::fs::read_to_string(dir.path().join(format!("out_{n}.csv"))).unwrap();
            assert_eq!(written, expected_csv(&input, &config, 5 + n), "variant {n}");
        }
    }

    #[test]
    fn test_mutate_copies_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let (input, config_path, config) = fixture(dir.path());

        mutate(&input, &config_path, None, Some(9), Some(1)).unwrap();

        let written = std::fs::read_to_string(dir.path().join("sales_0.csv")).unwrap();
        assert_eq!(written, expected_csv(&input, &config, 9));
        // The input itself is left alone
        assert_eq!(std::fs::read_to_string(&input).unwrap(), SALES);
    }

    #[test]
    fn test_mutate_single_output() {
        let dir = tempfile::tempdir().unwrap();
        let (input, config_path, config) = fixture(dir.path());
        let output = dir.path().join("mutated.csv");

        mutate(&input, &config_path, Some(&output), Some(3), None).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, expected_csv(&input, &config, 3));
    }

    #[test]
    fn test_mutate_rejects_zero_copies() {
        let dir = tempfile::tempdir().unwrap();
        let (input, config_path, _) = fixture(dir.path());

        let err = mutate(&input, &config_path, None, Some(1), Some(0)).unwrap_err();
        assert!(err.to_string().contains("--copies"));
    }

    #[test]
    fn test_mutate_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (input, config_path, _) = fixture(dir.path());
        std::fs::write(
            &config_path,
            r#"{"numberFormat": {"enabled": true, "percentMutated": 2.0, "numeric": true}}"#,
        )
        .unwrap();
        let output = dir.path().join("out.csv");

        let err = mutate(&input, &config_path, Some(&output), Some(1), None).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
        assert!(!output.exists());
    }

    #[test]
    fn test_number_formats() {
        let sheet = Worksheet::from_rows(
            "S",
            vec![
                vec![
                    Cell::new(1.0),
                    Cell::new(0.25).with_format(
                        CellFormat::default().with_number_format(NumberFormat::BuiltIn(9)),
                    ),
                ],
                vec![
                    Cell::new(2.0).with_format(
                        CellFormat::default().with_number_format(NumberFormat::date_short()),
                    ),
                    Cell::new(3.0),
                ],
            ],
        );
        assert_eq!(number_formats(&sheet), vec!["0%", "General", "mm-dd-yy"]);
        assert!(number_formats(&Worksheet::new("Empty")).is_empty());
    }

    #[test]
    fn test_cli_parses_mutate() {
        let cli = Cli::try_parse_from([
            "fuzzy", "-vv", "mutate", "in.csv", "-c", "cfg.json", "--seed", "7", "--copies", "2",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Mutate { seed, copies, .. } => {
                assert_eq!(seed, Some(7));
                assert_eq!(copies, Some(2));
            }
            _ => panic!("expected mutate"),
        }
    }
}
