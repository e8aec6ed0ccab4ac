//! Benchmarks for line assembly and heading classification.
//!
//! Run with: cargo bench
//!
//! Uses synthetic glyph pages so results are stable across machines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfoutline::layout::LineAssembler;
use pdfoutline::{ExtractConfig, Glyph, OutlineExtractor, PageRecord, TextBlock};

/// Build a page worth of glyphs: `line_count` lines of mixed headings
/// and body text, deliberately unordered.
fn synthetic_glyphs(line_count: usize) -> Vec<Glyph> {
    let mut glyphs = Vec::new();

    for line in 0..line_count {
        let y = 780.0 - line as f32 * 15.0;
        let (text, size, bold) = if line % 10 == 0 {
            (format!("{}. Section Heading Number {}", line / 10 + 1, line), 18.0, true)
        } else {
            (format!("body line {} with ordinary prose content", line), 11.0, false)
        };

        for (i, ch) in text.chars().enumerate() {
            glyphs.push(Glyph::new(ch, 40.0 + i as f32 * 5.5, y, Some(size), bold));
        }
    }

    // Reverse so the assembler has to re-sort everything.
    glyphs.reverse();
    glyphs
}

fn synthetic_pages(page_count: usize) -> Vec<PageRecord> {
    (1..=page_count as u32)
        .map(|n| {
            let mut blocks = vec![
                TextBlock::new(format!("{}. Chapter Opening Remarks", n), 18.0, true, 780.0).at(n, 0),
            ];
            for i in 1..40 {
                let text = format!("paragraph {} of narrative text on page {}", i, n);
                blocks.push(TextBlock::new(text, 11.0, false, 780.0 - i as f32 * 15.0).at(n, i));
            }
            let raw: String = blocks
                .iter()
                .map(|b| b.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            PageRecord::new(n, blocks, raw)
        })
        .collect()
}

fn bench_line_assembly(c: &mut Criterion) {
    let assembler = LineAssembler::new(&ExtractConfig::default());
    let glyphs = synthetic_glyphs(50);

    c.bench_function("assemble_50_lines", |b| {
        b.iter(|| assembler.assemble(black_box(glyphs.clone())));
    });
}

fn bench_outline_extraction(c: &mut Criterion) {
    let extractor = OutlineExtractor::new();
    let pages = synthetic_pages(20);

    c.bench_function("extract_20_pages", |b| {
        b.iter(|| extractor.extract_from_pages(black_box(pages.clone())));
    });
}

criterion_group!(benches, bench_line_assembly, bench_outline_extraction);
criterion_main!(benches);
