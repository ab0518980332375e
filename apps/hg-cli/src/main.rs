use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use hg_flowsheet::Flowsheet;
use hg_results::csv::{
    equipment_table_csv, parameter_table_csv, results_table_csv, stream_table_csv,
};
use hg_results::{RunManifest, RunStore, build_tables, compute_run_id};

const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Project(#[from] hg_project::ProjectError),

    #[error(transparent)]
    Flowsheet(#[from] hg_flowsheet::FlowsheetError),

    #[error(transparent)]
    Results(#[from] hg_results::ResultsError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

type AppResult<T> = Result<T, AppError>;

#[derive(Parser)]
#[command(name = "hg-cli")]
#[command(about = "Mercury recovery line - steady-state process simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate config file syntax and parameter ranges
    Validate {
        /// Path to the process config YAML file
        config_path: PathBuf,
    },
    /// Run the steady-state balance and store the result tables
    Run {
        /// Path to the process config YAML file
        config_path: PathBuf,
        /// Store root directory (defaults to .hgflow/runs next to the config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the run store and only print the summary
        #[arg(long)]
        no_store: bool,
    },
    /// List stored runs for a config
    Runs {
        /// Path to the process config YAML file
        config_path: PathBuf,
    },
    /// Export one result table as CSV
    Export {
        /// Path to the process config YAML file
        config_path: PathBuf,
        /// Which table to export
        #[arg(long, value_enum)]
        table: TableKind,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableKind {
    Streams,
    Equipment,
    Parameters,
    Results,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run {
            config_path,
            out,
            no_store,
        } => cmd_run(&config_path, out, !no_store),
        Commands::Runs { config_path } => cmd_runs(&config_path),
        Commands::Export {
            config_path,
            table,
            output,
        } => cmd_export(&config_path, table, output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = hg_project::load_config(config_path)?;
    println!("✓ Config is valid: {}", config.name);
    Ok(())
}

fn cmd_run(config_path: &Path, out: Option<PathBuf>, store: bool) -> AppResult<()> {
    let config = hg_project::load_config(config_path)?;
    println!("Running steady-state balance: {}", config.name);

    let flowsheet = Flowsheet::new(config);
    let report = flowsheet.run()?;
    let tables = build_tables(flowsheet.config(), &report);

    println!("✓ Balance closed");
    println!("  Hg feed:      {:.6} g", report.hg_feed.value * 1000.0);
    println!(
        "  Hg condensed: {:.6} g",
        report.hg_condensed.value * 1000.0
    );
    println!("  Hg captured:  {:.6} g", report.hg_captured.value * 1000.0);
    println!(
        "  Hg in residue: {:.6} g",
        report.hg_in_residue.value * 1000.0
    );
    println!("  Recovery:     {:.4} %", report.recovery_fraction * 100.0);
    println!("  Heat input:   {:.1} J/cycle", report.heat_input.value);
    for eq in &report.equipment {
        println!(
            "  {}: duty = {:.1} J, power = {:.1} W",
            eq.name, eq.duty.value, eq.power.value
        );
    }

    if store {
        let run_id = compute_run_id(flowsheet.config(), SOLVER_VERSION);
        let run_store = match out {
            Some(dir) => RunStore::new(dir)?,
            None => RunStore::for_config(config_path)?,
        };
        if run_store.has_run(&run_id) {
            println!("✓ Run already stored: {}", run_id);
        } else {
            let manifest = RunManifest {
                run_id: run_id.clone(),
                config_name: flowsheet.config().name.clone(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                solver_version: SOLVER_VERSION.to_string(),
            };
            run_store.save_run(&manifest, &tables)?;
            println!("✓ Run stored: {}", run_id);
        }
    }

    Ok(())
}

fn cmd_runs(config_path: &Path) -> AppResult<()> {
    let run_store = RunStore::for_config(config_path)?;
    let runs = run_store.list_runs()?;

    if runs.is_empty() {
        println!("No stored runs");
    } else {
        println!("Stored runs:");
        for run_id in runs {
            match run_store.load_manifest(&run_id) {
                Ok(manifest) => println!(
                    "  {} - {} ({}, solver {})",
                    run_id, manifest.config_name, manifest.timestamp, manifest.solver_version
                ),
                Err(_) => println!("  {} - <manifest unreadable>", run_id),
            }
        }
    }
    Ok(())
}

fn cmd_export(config_path: &Path, table: TableKind, output: Option<&Path>) -> AppResult<()> {
    let config = hg_project::load_config(config_path)?;
    let flowsheet = Flowsheet::new(config);
    let report = flowsheet.run()?;
    let tables = build_tables(flowsheet.config(), &report);

    let csv = match table {
        TableKind::Streams => stream_table_csv(&tables),
        TableKind::Equipment => equipment_table_csv(&tables),
        TableKind::Parameters => parameter_table_csv(&tables),
        TableKind::Results => results_table_csv(&tables),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &csv).map_err(|source| AppError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            println!("✓ Exported to {}", path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
