// src/cli.rs
//! `pickem-cli`: analyze a saved paste from a file or stdin.
//!
//! ```text
//! pickem-cli --input week3.txt --sort ceiling
//! pbpaste | pickem-cli --format csv --out out/week3.csv
//! ```

use std::{
    fs,
    io::{ self, Read },
    path::PathBuf,
};

use clap::{ Parser, ValueEnum };
use color_eyre::eyre::{ bail, eyre, Result, WrapErr };

use crate::{
    analyze::{ self, Analysis },
    config::{
        consts::CLI_MAX_CONFIDENCE_LIMIT,
        options::{ AppOptions, ExportFormat, FocusOptions, Layout, SortOrder },
        settings::Settings,
    },
    file, log,
    table::TableData,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    fn export(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Tsv => Some(ExportFormat::Tsv),
            OutputFormat::Json => Some(ExportFormat::Json),
        }
    }
}

/// Remaining and possible points from a pasted pick'em standings page
#[derive(Parser, Debug)]
#[command(name = "pickem-cli", version, about)]
pub struct Args {
    /// Text file with the paste; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of games this week (highest confidence); auto-detected when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=CLI_MAX_CONFIDENCE_LIMIT as i64))]
    pub max: Option<u32>,

    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Output format; inferred from --out's extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Header row in csv/tsv output
    #[arg(long)]
    pub include_headers: bool,

    /// Count values no token mentions as still open
    #[arg(long)]
    pub count_unmarked: bool,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Entry whose remaining points come from games not yet started
    #[arg(long)]
    pub focus: Option<String>,

    /// Team still to play (repeatable); default is the detected pre-game teams
    #[arg(long = "remaining-team", value_name = "TEAM", requires = "focus")]
    pub remaining_teams: Vec<String>,

    /// Settings file; `pickem.toml` in the working directory when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = log::init_stderr(args.verbose) {
        eprintln!("Logging disabled: {}", e);
    }
    run_with(args)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).wrap_err_with(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).wrap_err("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Settings file first, then flags on top.
pub fn build_options(args: &Args) -> Result<(AppOptions, OutputFormat)> {
    let mut opts = AppOptions::default();
    let settings = match &args.config {
        Some(path) => Some(Settings::load(path)?),
        None => Settings::load_default()?,
    };
    if let Some(s) = &settings {
        s.apply(&mut opts);
    }

    let analyze = &mut opts.analyze;
    if let Some(max) = args.max {
        analyze.max_confidence = Some(max);
    }
    if let Some(layout) = args.layout {
        analyze.layout = layout;
    }
    if let Some(sort) = args.sort {
        analyze.sort = sort;
    }
    analyze.count_unmarked |= args.count_unmarked;
    analyze.focus = args.focus.as_ref().map(|name| FocusOptions {
        name: name.clone(),
        remaining_teams: args.remaining_teams.iter().cloned().collect(),
    });

    let format = match (args.format, &args.out) {
        (Some(OutputFormat::Table), Some(_)) => bail!("--format table only prints to stdout; pick csv, tsv or json with --out"),
        (Some(f), _) => f,
        (None, Some(out)) => file::format_for_path(out)
            .map(|f| match f {
                ExportFormat::Csv => OutputFormat::Csv,
                ExportFormat::Tsv => OutputFormat::Tsv,
                ExportFormat::Json => OutputFormat::Json,
            })
            .ok_or_else(|| eyre!("cannot tell the format of {}; pass --format", out.display()))?,
        (None, None) => OutputFormat::Table,
    };

    if let Some(fmt) = format.export() {
        opts.export.set_format(fmt);
    }
    if args.include_headers {
        opts.export.include_headers = true;
    } else if args.format.is_some() || args.out.is_some() {
        opts.export.include_headers = settings
            .as_ref()
            .and_then(|s| s.export.include_headers)
            .unwrap_or(false);
    }
    if let Some(out) = &args.out {
        opts.export.set_path(&out.to_string_lossy());
    }

    Ok((opts, format))
}

/// Columns padded to their widest cell; numbers right-aligned.
pub fn render_table(table: &TableData) -> String {
    let headers = table.headers.clone().unwrap_or_else(TableData::default_headers);
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        let parts: Vec<String> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(ci, (cell, &w))| {
                if table.is_numeric_col(ci) { format!("{cell:>w$}") } else { format!("{cell:<w$}") }
            })
            .collect();
        parts.join("  ").trim_end().to_string()
    };

    let mut out = line(&headers);
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

fn report(analysis: &Analysis) {
    for sk in &analysis.skipped {
        eprintln!("skipped line {}: {} ({})", sk.line_no, sk.text, sk.reason.describe());
    }
    for w in &analysis.warnings {
        eprintln!("warning: {}", w);
    }
    if let Some(f) = &analysis.focus {
        eprintln!("focus: {} has {} point(s) remaining ({:?})", f.name, f.remaining_points, f.method);
    }
}

pub fn run_with(args: Args) -> Result<()> {
    let (opts, format) = build_options(&args)?;
    let text = read_input(args.input.as_ref())?;

    let analysis = analyze::analyze(&text, &opts.analyze)?;
    report(&analysis);

    match format.export() {
        None => print!("{}", render_table(&TableData::from_analysis(&analysis))),
        Some(_) if args.out.is_some() => {
            let path = file::write_export(&opts.export, &analysis)?;
            eprintln!("wrote {} row(s) to {}", analysis.rows.len(), path.display());
        }
        Some(_) => print!("{}", file::to_export_string(&opts.export, &analysis)?),
    }
    Ok(())
}
