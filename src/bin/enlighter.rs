use clap::{Parser, Subcommand};
use enlighter::{
    config::EngineConfig, language::LanguageRegistry, tokenizer::engine::coalesce, Error,
    RuleLibrary, Tokenizer,
};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a source file, `-` reads stdin
    Tokenize {
        file: PathBuf,

        /// Language name or alias, defaults to the configured language
        #[arg(short, long)]
        language: Option<String>,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,

        /// Merge neighbouring tokens of the same type
        #[arg(long)]
        coalesce: bool,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the built-in languages
    Languages,
}

fn read_source(file: &Path) -> Result<String, Error> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn tokenize(
    file: &Path,
    language: Option<&str>,
    json: bool,
    merge: bool,
    config: Option<&Path>,
) -> Result<(), Error> {
    let config = match config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    info!("config loaded.");
    debug!("config: {:?}", config);

    let language = language.unwrap_or(&config.default_language);
    let lib = RuleLibrary::new()?;
    let table = LanguageRegistry::builtin().build(language, &lib)?;
    let tokenizer = Tokenizer::new(table, config.tokenizer.clone());

    let source = read_source(file)?;
    debug!("tokenizing {:?} as {}", file, language);
    let mut tokens = tokenizer.tokenize(&source)?;
    if merge {
        tokens = coalesce(tokens);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        if config.pretty_json {
            serde_json::to_writer_pretty(&mut out, &tokens)?;
        } else {
            serde_json::to_writer(&mut out, &tokens)?;
        }
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}\t{:?}", token.kind(), token.text())?;
        }
    }
    Ok(())
}

fn languages() -> Result<(), Error> {
    let registry = LanguageRegistry::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for language in registry.languages() {
        if language.aliases.is_empty() {
            writeln!(out, "{}", language.name)?;
        } else {
            writeln!(out, "{} ({})", language.name, language.aliases.join(", "))?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Command::Tokenize {
            file,
            language,
            json,
            coalesce,
            config,
        } => tokenize(file, language.as_deref(), *json, *coalesce, config.as_deref()),
        Command::Languages => languages(),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
