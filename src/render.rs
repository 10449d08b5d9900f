//! Output formats for highlighted source.

use std::io::Write;

use clap::ValueEnum;
use hslight_core::ColorScheme;
use hslight_syntax::{HighlightKey, HighlightSpan, Token, TokenKind};
use serde::Serialize;

/// How highlighted source is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Source text with 24-bit ANSI colors
    #[default]
    Ansi,
    /// One `start..end KEY text` line per span
    Plain,
    /// Spans as a JSON array
    Json,
}

/// Writes `source` with every span painted in its scheme color.
pub fn write_ansi(
    out: &mut impl Write,
    source: &str,
    spans: &[HighlightSpan],
    scheme: &ColorScheme,
) -> std::io::Result<()> {
    let mut pos = 0;
    for span in spans {
        out.write_all(source[pos..span.start].as_bytes())?;
        let color = scheme.color_for(span.key);
        write!(
            out,
            "\x1b[38;2;{};{};{}m{}\x1b[0m",
            color.r,
            color.g,
            color.b,
            &source[span.start..span.end]
        )?;
        pos = span.end;
    }
    out.write_all(source[pos..].as_bytes())?;
    Ok(())
}

pub fn write_plain(
    out: &mut impl Write,
    source: &str,
    spans: &[HighlightSpan],
) -> std::io::Result<()> {
    for span in spans {
        writeln!(
            out,
            "{}..{} {} {:?}",
            span.start,
            span.end,
            span.key,
            &source[span.start..span.end]
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSpan<'a> {
    start: usize,
    end: usize,
    key: HighlightKey,
    color: String,
    text: &'a str,
}

pub fn write_json(
    out: &mut impl Write,
    source: &str,
    spans: &[HighlightSpan],
    scheme: &ColorScheme,
) -> anyhow::Result<()> {
    let spans: Vec<_> = spans
        .iter()
        .map(|span| JsonSpan {
            start: span.start,
            end: span.end,
            key: span.key,
            color: scheme.color_for(span.key).to_string(),
            text: &source[span.start..span.end],
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &spans)?;
    writeln!(out)?;
    Ok(())
}

/// Writes every token with its kind, trivia included.
pub fn write_tokens(
    out: &mut impl Write,
    source: &str,
    tokens: impl IntoIterator<Item = Token>,
) -> std::io::Result<()> {
    for token in tokens {
        let text = token.span.slice(source);
        match token.kind {
            TokenKind::Whitespace | TokenKind::Newline => {
                writeln!(out, "{:>6}..{:<6} {}", token.span.start, token.span.end, token.kind)?
            }
            kind => writeln!(
                out,
                "{:>6}..{:<6} {} {:?}",
                token.span.start, token.span.end, kind, text
            )?,
        }
    }
    Ok(())
}
