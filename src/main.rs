use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use sparse_arith::{load_matrix, write_matrix, MatrixConfig, MultiplyStrategy, Operation, Result};

#[derive(Parser)]
#[command(name = "sparse-arith")]
#[command(about = "Add, subtract or multiply two sparse integer matrices")]
#[command(version)]
struct Cli {
    /// Operation to perform: add, subtract or multiply
    operation: String,

    /// Left operand file
    lhs: PathBuf,

    /// Right operand file
    rhs: PathBuf,

    /// Matching strategy for multiplication
    #[arg(long, value_enum, default_value_t = MultiplyStrategy::Indexed)]
    strategy: MultiplyStrategy,

    /// Print the result as a dense array instead of triples
    #[arg(long)]
    dense: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Resolve names before touching the filesystem
    let operation: Operation = cli.operation.parse()?;
    let config = MatrixConfig::with_strategy(cli.strategy);

    let lhs = load_matrix(&cli.lhs)?;
    let rhs = load_matrix(&cli.rhs)?;

    info!(
        "{}: {}x{} ({} nnz) with {}x{} ({} nnz), strategy {}",
        operation,
        lhs.n_rows(),
        lhs.n_cols(),
        lhs.nnz(),
        rhs.n_rows(),
        rhs.n_cols(),
        rhs.nnz(),
        config.multiply_strategy
    );

    let result = operation.apply(&lhs, &rhs, &config)?;
    info!("result has {} non-zeros", result.nnz());

    // Build the dense view up front so a failure prints nothing to stdout
    let dense = if cli.dense { Some(result.to_dense()?) } else { None };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Operation successful, result matrix:")?;
    match dense {
        Some(dense) => writeln!(out, "{}", dense)?,
        None => write_matrix(&result, &mut out)?,
    }

    Ok(())
}
