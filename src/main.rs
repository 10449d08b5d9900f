//! # hslight - Haskell Syntax Highlighter
//!
//! Highlights Haskell source in the terminal using the `hslight-syntax`
//! classifier and the configured color scheme.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight a file
//! cargo run -- src/Main.hs
//!
//! # Highlight stdin as JSON spans
//! cat Main.hs | cargo run -- --format json
//!
//! # Inspect the raw token stream
//! cargo run -- --list-tokens Main.hs
//! ```

mod render;

use anyhow::{Context, bail};
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hslight_core::{Config, Session};
use hslight_syntax::{HASKELL, HaskellSyntaxHighlighter, SyntaxHighlighter};
use render::Format;

/// hslight - Haskell syntax highlighting in the terminal
#[derive(Parser, Debug)]
#[command(name = "hslight")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Haskell file to highlight (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print every token with its kind instead of highlighting
    #[arg(long)]
    list_tokens: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting hslight v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };
    let session = Session::from_config(config).context("Invalid configuration")?;

    let source = read_source(&args, &session)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &session, &source, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Reads the input, refusing files the registry does not route to Haskell.
fn read_source(args: &Args, session: &Session) -> anyhow::Result<String> {
    match &args.file {
        Some(path) => {
            match session.registry.language_for(path) {
                Some(language) if *language == HASKELL => {}
                _ => bail!(
                    "{} is not a Haskell file (known extensions: {})",
                    path.display(),
                    session.registry.extensions().join(", ")
                ),
            }
            tracing::debug!("Reading {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn run(args: &Args, session: &Session, source: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let highlighter = HaskellSyntaxHighlighter::new();
    let tokens = highlighter.highlighting_lexer().tokenize(source);

    if args.list_tokens {
        render::write_tokens(out, source, tokens)?;
        return Ok(());
    }

    let settings = &session.config.highlight;
    let spans = if settings.enabled {
        highlighter.highlight_tokens(tokens, settings.merge_adjacent)
    } else {
        Vec::new()
    };
    tracing::debug!("{} highlighted spans", spans.len());

    match args.format {
        Format::Ansi => render::write_ansi(out, source, &spans, &session.scheme)?,
        Format::Plain => render::write_plain(out, source, &spans)?,
        Format::Json => render::write_json(out, source, &spans, &session.scheme)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn session() -> Session {
        Session::from_config(Config::default()).unwrap()
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["hslight"]);
        assert!(args.file.is_none());
        assert_eq!(args.format, Format::Ansi);
        assert!(!args.list_tokens);
    }

    #[test]
    fn test_args_with_file_and_format() {
        let args = Args::parse_from(["hslight", "-f", "json", "Main.hs"]);
        assert_eq!(args.file, Some(PathBuf::from("Main.hs")));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_rejects_non_haskell_file() {
        let args = Args::parse_from(["hslight", "main.rs"]);
        let err = read_source(&args, &session()).unwrap_err();
        assert!(err.to_string().contains("not a Haskell file"));
    }

    #[test]
    fn test_reads_haskell_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.hs");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "main = pure ()").unwrap();

        let args = Args::parse_from([OsStr::new("hslight"), path.as_os_str()]);
        let source = read_source(&args, &session()).unwrap();
        assert_eq!(source, "main = pure ()\n");
    }

    #[test]
    fn test_run_plain() {
        let args = Args::parse_from(["hslight", "--format", "plain"]);
        let mut out = Vec::new();
        run(&args, &session(), "data T", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0..4 HS_KEYWORD \"data\"\n5..6 HS_CONSTRUCTOR \"T\"\n"
        );
    }

    #[test]
    fn test_run_with_highlighting_disabled() {
        let mut config = Config::default();
        config.highlight.enabled = false;
        let session = Session::from_config(config).unwrap();
        let args = Args::parse_from(["hslight", "--format", "plain"]);
        let mut out = Vec::new();
        run(&args, &session, "data T", &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_list_tokens() {
        let args = Args::parse_from(["hslight", "--list-tokens"]);
        let mut out = Vec::new();
        run(&args, &session(), "x\n", &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("Newline"));
    }
}
