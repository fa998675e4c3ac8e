use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use equiprove::program::{Interpreter, Settings, parse_program};
use equiprove::report::{
    CsvFormatter, JsonFormatter, OutcomeFormatter, PrettyFormatter, TableFormatter,
};
use equiprove::utils::json::load_json;

/// Proves equalities between boolean formulas by rewriting with axioms.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Program file with `axiom`, `prove` and `param` commands
    program: PathBuf,

    /// Initial settings as JSON; `param` commands still override them
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    max_search_depth: Option<usize>,

    #[arg(long)]
    max_tree_size: Option<usize>,

    /// Add every proved equality to the axioms available to later goals
    #[arg(long)]
    use_proofs_as_axioms: bool,

    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show the equation of the axiom used at each step
    #[arg(long)]
    explain: bool,

    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Pretty,
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.no_color || cli.output.is_some() {
        colored::control::set_override(false);
    }

    let text = fs::read_to_string(&cli.program)
        .with_context(|| format!("failed to read {}", cli.program.display()))?;
    let program = match parse_program(&text) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", error.render());
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(
        commands = program.commands.len(),
        goals = program.goals().count(),
        "program loaded"
    );

    let mut interpreter = Interpreter::new(initial_settings(&cli)?);

    // Pretty output to the terminal is printed goal by goal.
    if cli.format == Format::Pretty && cli.output.is_none() {
        let mut first = true;
        for command in &program.commands {
            let Some(outcome) = interpreter.execute(command) else {
                continue;
            };
            let formatter = if cli.explain {
                PrettyFormatter::explaining(interpreter.store())
            } else {
                PrettyFormatter::default()
            };
            if !first {
                println!();
            }
            print!("{}", formatter.format_outcome(&outcome));
            first = false;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let outcomes = interpreter.run(&program);
    let report = match cli.format {
        Format::Pretty if cli.explain => {
            PrettyFormatter::explaining(interpreter.store()).format_outcomes(&outcomes)
        }
        Format::Pretty => PrettyFormatter::default().format_outcomes(&outcomes),
        Format::Table => TableFormatter.format_outcomes(&outcomes),
        Format::Csv => CsvFormatter.format_outcomes(&outcomes),
        Format::Json => JsonFormatter.format_outcomes(&outcomes),
    }
    .map_err(|error| anyhow::anyhow!("failed to format report: {error}"))?;

    match &cli.output {
        Some(path) => fs::write(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", report.trim_end()),
    }

    Ok(ExitCode::SUCCESS)
}

fn initial_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => load_json(path)?,
        None => Settings::default(),
    };
    if let Some(depth) = cli.max_search_depth {
        settings.search.max_search_depth = depth;
    }
    if let Some(size) = cli.max_tree_size {
        settings.search.max_tree_size = size;
    }
    settings.use_proofs_as_axioms |= cli.use_proofs_as_axioms;
    Ok(settings)
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
