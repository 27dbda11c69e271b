use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use swift_driver_core::{FileType, HelpConfig, driver_options, validate_table, write_help};

/// Output format for listings.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "driver-options")]
#[command(about = "Inspect the Swift driver's option table and file types")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print help text for the driver's option table.
    Options(OptionsArgs),
    /// List every file type with its names and classification.
    FileTypes(FileTypesArgs),
    /// Look up a file type by its stable name.
    Lookup(LookupArgs),
    /// Check the driver's option table for structural problems.
    Validate,
}

#[derive(Debug, Args)]
struct OptionsArgs {
    /// Include hidden options.
    #[arg(long)]
    hidden: bool,
    /// YAML file overriding the OVERVIEW/USAGE banner.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FileTypesArgs {
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// File type name (e.g. `object`, `llvm-bc`).
    name: String,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

#[derive(Debug, Serialize)]
struct FileTypeRow {
    name: &'static str,
    raw: &'static str,
    description: &'static str,
    part_of_swift_compilation: bool,
    textual: bool,
    after_llvm: bool,
}

impl From<FileType> for FileTypeRow {
    fn from(ty: FileType) -> Self {
        Self {
            name: ty.name(),
            raw: ty.raw(),
            description: ty.description(),
            part_of_swift_compilation: ty.is_part_of_swift_compilation(),
            textual: ty.is_textual(),
            after_llvm: ty.is_after_llvm(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Options(args) => run_options(args),
        Command::FileTypes(args) => run_file_types(args),
        Command::Lookup(args) => run_lookup(args),
        Command::Validate => run_validate(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_options(args: OptionsArgs) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => HelpConfig::load(path)
            .map_err(|e| format!("Failed to load help config '{}': {e}", path.display()))?,
        None => HelpConfig::default(),
    };
    let include_hidden = args.hidden || config.include_hidden;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_help(driver_options(), &config, include_hidden, &mut handle)
        .map_err(|e| format!("Failed to write help: {e}"))
}

fn run_file_types(args: FileTypesArgs) -> Result<(), String> {
    let rows: Vec<FileTypeRow> = FileType::ALL.into_iter().map(FileTypeRow::from).collect();
    print!("{}", format_rows(&rows, args.format)?);
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<(), String> {
    let ty = FileType::from_name(&args.name)
        .ok_or_else(|| format!("No file type named '{}'", args.name))?;
    print!("{}", format_rows(&[FileTypeRow::from(ty)], args.format)?);
    Ok(())
}

fn run_validate() -> Result<(), String> {
    let table = driver_options();
    let errors = validate_table(table);
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  {err}");
        }
        return Err(format!("{} problem(s) in driver option table", errors.len()));
    }

    println!(
        "Validated {} option(s) ({} alias(es)).",
        table.canonical().count(),
        table.aliases().count()
    );
    Ok(())
}

fn format_rows(rows: &[FileTypeRow], format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(rows)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(rows).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        CliOutputFormat::Table => Ok(rows_to_table(rows)),
    }
}

fn rows_to_table(rows: &[FileTypeRow]) -> String {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let raw_width = rows.iter().map(|r| r.raw.len()).max().unwrap_or(3).max(3);
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<raw_width$}  {:<6}  {:<7}  {:<10}  DESCRIPTION\n",
        "NAME", "RAW", "SWIFT", "TEXTUAL", "AFTER-LLVM"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<name_width$}  {:<raw_width$}  {:<6}  {:<7}  {:<10}  {}\n",
            row.name,
            row.raw,
            yes_no(row.part_of_swift_compilation),
            yes_no(row.textual),
            yes_no(row.after_llvm),
            row.description,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_table_has_header_and_row_per_type() {
        let rows: Vec<FileTypeRow> = FileType::ALL.into_iter().map(FileTypeRow::from).collect();
        let table = rows_to_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), FileType::ALL.len() + 1);
        assert!(lines[0].starts_with("NAME"));
        assert!(table.contains("LLVM bitcode"));
    }

    #[test]
    fn test_format_rows_json() {
        let rows = [FileTypeRow::from(FileType::Object)];
        let json = format_rows(&rows, CliOutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"object\""));
        assert!(json.contains("\"after_llvm\": true"));
    }

    #[test]
    fn test_format_rows_yaml() {
        let rows = [FileTypeRow::from(FileType::Swift)];
        let yaml = format_rows(&rows, CliOutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: swift"));
        assert!(yaml.contains("part_of_swift_compilation: true"));
    }
}
