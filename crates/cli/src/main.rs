mod report;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use getarg::ArgumentStore;
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::{inspect, render};

#[derive(Parser)]
#[command(name = "getarg")]
#[command(version, about = "Inspect how an argument list resolves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every resolved flag with its first and all values
    Inspect(InspectArgs),

    /// Read one flag through a typed accessor
    Get(GetArgs),
}

#[derive(Parser)]
struct InspectArgs {
    /// Print the resolved store as JSON
    #[arg(long)]
    json: bool,

    /// Arguments to parse, given after `--`
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Parser)]
struct GetArgs {
    /// Flag name, with or without leading dashes
    #[arg(value_name = "NAME")]
    name: String,

    /// Accessor to read the flag with
    #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
    kind: ValueKind,

    /// Value returned when the flag is absent
    #[arg(short, long, value_name = "VALUE")]
    default: Option<String>,

    /// Arguments to parse, given after `--`
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueKind {
    String,
    Int,
    Bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => inspect_command(args),
        Commands::Get(args) => get_command(args),
    }
}

fn parse_store(args: &[String]) -> Result<ArgumentStore> {
    ArgumentStore::parse(args).context("failed to parse arguments")
}

fn inspect_command(args: InspectArgs) -> Result<()> {
    tracing::debug!("executing inspect command");

    let store = parse_store(&args.args)?;
    let report = inspect(&store);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }

    Ok(())
}

fn get_command(args: GetArgs) -> Result<()> {
    tracing::debug!(name = %args.name, "executing get command");

    let store = parse_store(&args.args)?;
    let default = args.default.as_deref();

    let value = match args.kind {
        ValueKind::String => store.get_string(&args.name, default.unwrap_or("")).to_string(),
        ValueKind::Int => {
            let default = match default {
                Some(s) => s
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("invalid integer default: {s}"))?,
                None => 0,
            };
            store.get_int(&args.name, default).to_string()
        }
        ValueKind::Bool => {
            let default = match default {
                Some(s) => parse_bool_default(s)?,
                None => false,
            };
            store.get_bool(&args.name, default).to_string()
        }
    };

    println!("{value}");
    Ok(())
}

fn parse_bool_default(s: &str) -> Result<bool> {
    match s.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => bail!("invalid boolean default: {other} (expected 0, 1, true or false)"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
