use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use jstok_cli::input::Source;
use jstok_cli::report::Analysis;
use jstok_lex::{is_output_expression, namespaces, scan, trim, Token};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "jstok")]
#[command(about = "Inspect how template expression fragments tokenize and classify")]
struct Cli {
    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Input {
    /// Source file; `-` or omitted reads stdin
    file: Option<String>,

    /// Inline fragment instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,
}

impl Input {
    fn source(&self) -> Source {
        Source::from_args(self.file.as_deref(), self.expr.as_deref())
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the token sequence
    Tokens {
        #[command(flatten)]
        input: Input,

        /// Drop boundary whitespace first
        #[arg(long)]
        trim: bool,

        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// List free identifiers the fragment references
    Namespaces {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Say whether the fragment is an output expression
    Classify {
        #[command(flatten)]
        input: Input,
    },

    /// Full report: hash, counts, namespaces, bracket balance, verdict
    Analyze {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tokens {
            input,
            trim,
            format,
        } => cmd_tokens(&input, trim, format),
        Commands::Namespaces { input, format } => cmd_namespaces(&input, format),
        Commands::Classify { input } => cmd_classify(&input),
        Commands::Analyze { input, format } => cmd_analyze(&input, format),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &Input) -> Result<(String, Vec<Token>)> {
    let source = input.source();
    let src = source.read()?;
    debug!(source = %source.describe(), bytes = src.len(), "loaded fragment");
    let tokens = scan(&src);
    Ok((src, tokens))
}

fn cmd_tokens(input: &Input, trim_edges: bool, format: Format) -> Result<()> {
    let (_, tokens) = load(input)?;
    let tokens = if trim_edges { trim(&tokens) } else { &tokens[..] };

    match format {
        Format::Pretty => {
            for tok in tokens {
                println!("{:>5}..{:<5} {}", tok.span.start, tok.span.end, tok);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(tokens)?),
    }
    Ok(())
}

fn cmd_namespaces(input: &Input, format: Format) -> Result<()> {
    let (_, tokens) = load(input)?;
    let roots = namespaces(&tokens);

    match format {
        Format::Pretty => {
            for name in &roots {
                println!("{}", name);
            }
        }
        Format::Json => println!("{}", serde_json::to_string(&roots)?),
    }
    Ok(())
}

fn cmd_classify(input: &Input) -> Result<()> {
    let (_, tokens) = load(input)?;
    if is_output_expression(&tokens) {
        println!("expression");
    } else {
        println!("statement");
    }
    Ok(())
}

fn cmd_analyze(input: &Input, format: Format) -> Result<()> {
    let (src, tokens) = load(input)?;
    let analysis = Analysis::new(&src, &tokens);
    if analysis.is_malformed() {
        debug!(
            invalid = analysis.invalid,
            unclosed_strings = analysis.unclosed_strings,
            unclosed_comments = analysis.unclosed_comments,
            "fragment is malformed"
        );
    }

    match format {
        Format::Pretty => println!("{}", analysis),
        Format::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }
    Ok(())
}
