use chartspec::*;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error as StdError;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Chart spec compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect used for quoting and placeholders
    #[arg(long, value_enum, default_value_t = DialectArg::Mysql, global = true)]
    dialect: DialectArg,
    /// Match result columns to aliases ignoring case and punctuation
    #[arg(long, global = true)]
    flexible_identifiers: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a chart spec to the SQL that fetches its data
    Sql(SqlArgs),
    /// Lay out query result rows as a render configuration
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct SqlArgs {
    /// The table to query
    #[arg(short, long)]
    table: String,
    /// Emit the statement with bind parameters, as JSON `{"sql": ..., "params": [...]}`
    #[arg(long)]
    params: bool,
    /// Path to the chart spec JSON file. If empty, stdin will be used.
    spec: Option<String>,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Path to a JSON array of result rows
    #[arg(short, long)]
    rows: String,
    /// Pretty-print the render configuration
    #[arg(long)]
    pretty: bool,
    /// Path to the chart spec JSON file. If empty, stdin will be used.
    spec: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    Mysql,
    Postgres,
}

impl From<DialectArg> for Box<dyn Dialect> {
    fn from(dialect: DialectArg) -> Self {
        match dialect {
            DialectArg::Mysql => Box::new(MySql()),
            DialectArg::Postgres => Box::new(Postgres()),
        }
    }
}

type CliResult = Result<(), Box<dyn StdError>>;

fn read_spec(path: Option<String>) -> Result<ChartSpec, Box<dyn StdError>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(ChartSpec::from_json(&json)?)
}

fn sql(compiler: &Compiler, args: SqlArgs) -> CliResult {
    let spec = read_spec(args.spec)?;
    if args.params {
        let query = compiler.compile_query(&spec, &args.table);
        println!("{}", serde_json::to_string(&query)?);
    } else {
        println!("{}", compiler.generate_sql(&spec, &args.table));
    }
    Ok(())
}

fn render(compiler: &Compiler, args: RenderArgs) -> CliResult {
    let spec = read_spec(args.spec)?;
    let rows_json = std::fs::read_to_string(&args.rows)?;
    let rows: Vec<ResultRow> = serde_json::from_str(&rows_json).map_err(Error::InvalidRows)?;
    debug!(rows = rows.len(), path = args.rows.as_str(), "loaded result rows");
    let config = compiler.render_config(&spec, &rows);
    let output = if args.pretty {
        serde_json::to_string_pretty(&config)
    } else {
        serde_json::to_string(&config)
    };
    println!("{}", output.map_err(Error::Serialization)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let compiler = Compiler::new(Options {
        dialect: args.dialect.into(),
        identifier_resolution: if args.flexible_identifiers {
            IdentifierResolution::Flexible
        } else {
            IdentifierResolution::Strict
        },
    });
    let result = match args.command {
        Command::Sql(args) => sql(&compiler, args),
        Command::Render(args) => render(&compiler, args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
