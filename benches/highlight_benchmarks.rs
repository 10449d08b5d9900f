//! Benchmarks for lexing and highlighting Haskell source.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hslight_syntax::{HaskellLexer, HaskellSyntaxHighlighter, SyntaxHighlighter, TokenKind};

const MODULE_HEADER: &str = r#"{-# LANGUAGE ScopedTypeVariables #-}
module Bench.Sample (run) where

import qualified Data.Map as M
import Data.List (foldl')
"#;

/// Generates a Haskell module with the given number of definitions.
fn generate_module(definitions: usize) -> String {
    let mut source = String::from(MODULE_HEADER);
    for i in 0..definitions {
        source.push_str(&format!(
            "\n-- | Definition {i}\nf{i} :: Int -> M.Map String Int -> Maybe Int\nf{i} x m = case M.lookup \"k{i}\" m of\n  Just v -> Just (v + x * 0x{i:x} + {i}.5e3)\n  Nothing -> if x > {i} then Just '\\n' `seq` Nothing else Nothing\n",
        ));
    }
    source
}

/// Benchmarks raw tokenization.
fn bench_lexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexing");

    for size in [10, 100, 1000].iter() {
        let source = generate_module(*size);

        group.bench_with_input(BenchmarkId::new("tokenize", size), &source, |b, source| {
            b.iter(|| {
                let count = HaskellLexer::new()
                    .tokenize(black_box(source.as_str()))
                    .filter(|t| t.kind != TokenKind::Whitespace)
                    .count();
                black_box(count)
            })
        });
    }

    group.finish();
}

/// Benchmarks token classification alone.
fn bench_classification(c: &mut Criterion) {
    let highlighter = HaskellSyntaxHighlighter::new();

    c.bench_function("classify_all_kinds", |b| {
        b.iter(|| {
            for &kind in TokenKind::ALL {
                black_box(highlighter.token_highlights(black_box(kind)));
            }
        })
    });
}

/// Benchmarks lexing plus classification.
fn bench_highlighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlighting");
    let highlighter = HaskellSyntaxHighlighter::new();

    for size in [10, 100, 1000].iter() {
        let source = generate_module(*size);

        group.bench_with_input(BenchmarkId::new("highlight", size), &source, |b, source| {
            b.iter(|| black_box(highlighter.highlight(black_box(source.as_str()))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexing,
    bench_classification,
    bench_highlighting,
);
criterion_main!(benches);
