//! Grouping glyphs into lines.

use std::cmp::Ordering;

use crate::config::ExtractConfig;
use crate::model::Glyph;

/// Groups a page's glyphs into visual lines.
///
/// Glyphs are sorted by descending vertical position, then ascending
/// horizontal position. A walk over the sorted sequence collects glyphs
/// into a vertical band as long as they stay within `y_tolerance` of the
/// band's reference position. Within a band, a horizontal gap wider than
/// `column_band_width` separates side-by-side columns into distinct
/// lines, ordered left to right.
#[derive(Debug, Clone)]
pub struct LineAssembler {
    y_tolerance: f32,
    column_band_width: f32,
}

impl LineAssembler {
    /// Create an assembler from the pipeline configuration.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            y_tolerance: config.y_tolerance,
            column_band_width: config.column_band_width,
        }
    }

    /// Group glyphs into lines, top-to-bottom, left-to-right.
    pub fn assemble(&self, mut glyphs: Vec<Glyph>) -> Vec<Vec<Glyph>> {
        if glyphs.is_empty() {
            return Vec::new();
        }

        glyphs.sort_by(|a, b| {
            let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal);
            if y_cmp == Ordering::Equal {
                a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
            } else {
                y_cmp
            }
        });

        let mut lines: Vec<Vec<Glyph>> = Vec::new();
        let mut band: Vec<Glyph> = Vec::new();
        let mut band_y: Option<f32> = None;

        for glyph in glyphs {
            match band_y {
                Some(y) if (glyph.y - y).abs() <= self.y_tolerance => {
                    band.push(glyph);
                }
                _ => {
                    self.flush_band(&mut band, &mut lines);
                    band_y = Some(glyph.y);
                    band.push(glyph);
                }
            }
        }
        self.flush_band(&mut band, &mut lines);

        lines
    }

    /// Close a vertical band, splitting it into column lines on wide
    /// horizontal gaps.
    fn flush_band(&self, band: &mut Vec<Glyph>, lines: &mut Vec<Vec<Glyph>>) {
        if band.is_empty() {
            return;
        }

        let mut glyphs = std::mem::take(band);
        glyphs.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let mut line: Vec<Glyph> = Vec::new();
        for glyph in glyphs {
            if let Some(last) = line.last() {
                if glyph.x - last.x > self.column_band_width {
                    lines.push(std::mem::take(&mut line));
                }
            }
            line.push(glyph);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
}
