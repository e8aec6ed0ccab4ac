//! Full-fidelity page source backed by lopdf.
//!
//! Recovers a per-character glyph stream by walking each page's decoded
//! content stream with a text-matrix tracker, then rebuilds lines and
//! blocks with the layout module.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use crate::layout::{build_block, LineAssembler};
use crate::model::{is_bold_font_name, Glyph, PageRecord};

use super::PageSource;

/// TJ kerning adjustment (in 1/1000 em) treated as a word space.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Estimated character advance as a fraction of font size, used because
/// glyph widths are not read from the font metrics.
const CHAR_ADVANCE_RATIO: f32 = 0.5;

/// Primary page source: glyphs with position and font signals.
pub struct GlyphSource {
    doc: Document,
    config: ExtractConfig,
}

impl GlyphSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P, config: &ExtractConfig) -> Result<Self> {
        let doc = Document::load(path)?;
        Ok(Self {
            doc,
            config: config.clone(),
        })
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8], config: &ExtractConfig) -> Result<Self> {
        let doc = Document::load_mem(data)?;
        Ok(Self {
            doc,
            config: config.clone(),
        })
    }

    /// Extract the glyph stream for one page.
    fn page_glyphs(&self, page_id: ObjectId) -> Result<Vec<Glyph>> {
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let content = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;
        let content = lopdf::content::Content::decode(&content)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut glyphs = Vec::new();
        let mut matrix = TextMatrix::default();
        let mut in_text = false;
        let mut font_name: Vec<u8> = Vec::new();
        let mut font_size: f32 = self.config.default_font_size;
        let mut bold = false;

        for op in &content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            font_name = name.clone();
                            let base_font = fonts
                                .get(name.as_slice())
                                .and_then(|dict| dict.get(b"BaseFont").ok())
                                .and_then(|obj| obj.as_name().ok())
                                .map(|n| String::from_utf8_lossy(n).to_string())
                                .unwrap_or_default();
                            bold = is_bold_font_name(&base_font);
                        }
                        font_size =
                            get_number(&op.operands[1]).unwrap_or(self.config.default_font_size);
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let n: Vec<f32> = op
                            .operands
                            .iter()
                            .take(6)
                            .map(|o| get_number(o).unwrap_or(0.0))
                            .collect();
                        matrix.set(n[0], n[1], n[2], n[3], n[4], n[5]);
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" => {
                    if in_text {
                        if let Some(Object::String(bytes, _)) = op.operands.first() {
                            let text = self.decode_run(&fonts, &font_name, bytes);
                            self.emit_run(&mut glyphs, &text, &matrix, font_size, bold, 0.0);
                        }
                    }
                }
                "TJ" => {
                    if in_text {
                        if let Some(Object::Array(items)) = op.operands.first() {
                            self.emit_array(
                                &mut glyphs,
                                items,
                                &fonts,
                                &font_name,
                                &matrix,
                                font_size,
                                bold,
                            );
                        }
                    }
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if in_text {
                        let text_idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                            let text = self.decode_run(&fonts, &font_name, bytes);
                            self.emit_run(&mut glyphs, &text, &matrix, font_size, bold, 0.0);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(glyphs)
    }

    /// Decode a shown-text byte run with the current font's encoding.
    fn decode_run(
        &self,
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
        bytes: &[u8],
    ) -> String {
        if let Some(dict) = fonts.get(font_name) {
            if let Ok(encoding) = dict.get_font_encoding(&self.doc) {
                if let Ok(text) = Document::decode_text(&encoding, bytes) {
                    return text;
                }
            }
        }
        decode_text_simple(bytes)
    }

    /// Emit per-character glyphs for a decoded run, advancing a pen from
    /// the current matrix position.
    fn emit_run(
        &self,
        glyphs: &mut Vec<Glyph>,
        text: &str,
        matrix: &TextMatrix,
        font_size: f32,
        bold: bool,
        pen_offset: f32,
    ) -> f32 {
        let (x, y) = matrix.position();
        let size = font_size * matrix.scale();
        let advance = size * CHAR_ADVANCE_RATIO;
        let mut pen = x + pen_offset;

        for ch in text.chars() {
            glyphs.push(Glyph::new(ch, pen, y, Some(size), bold));
            pen += advance;
        }

        pen - x
    }

    /// Emit glyphs for a TJ array, turning large negative kerning
    /// adjustments into word spaces.
    #[allow(clippy::too_many_arguments)]
    fn emit_array(
        &self,
        glyphs: &mut Vec<Glyph>,
        items: &[Object],
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
        matrix: &TextMatrix,
        font_size: f32,
        bold: bool,
    ) {
        let mut pen_offset = 0.0;

        for item in items {
            match item {
                Object::String(bytes, _) => {
                    let text = self.decode_run(fonts, font_name, bytes);
                    pen_offset = self.emit_run(glyphs, &text, matrix, font_size, bold, pen_offset);
                }
                Object::Integer(n) => {
                    pen_offset += self.kerning_advance(glyphs, -(*n as f32), matrix, font_size, bold, pen_offset);
                }
                Object::Real(n) => {
                    pen_offset += self.kerning_advance(glyphs, -n, matrix, font_size, bold, pen_offset);
                }
                _ => {}
            }
        }
    }

    /// Turn one kerning adjustment into pen movement, emitting a space
    /// glyph when it is wide enough to be a word break.
    fn kerning_advance(
        &self,
        glyphs: &mut Vec<Glyph>,
        adjustment: f32,
        matrix: &TextMatrix,
        font_size: f32,
        bold: bool,
        pen_offset: f32,
    ) -> f32 {
        let size = font_size * matrix.scale();
        let shift = adjustment / 1000.0 * size;

        if adjustment > TJ_SPACE_THRESHOLD {
            let last_is_space = glyphs.last().map(|g| g.ch == ' ').unwrap_or(true);
            if !last_is_space {
                let (x, y) = matrix.position();
                glyphs.push(Glyph::new(' ', x + pen_offset, y, Some(size), bold));
            }
        }

        shift.max(0.0)
    }
}

impl PageSource for GlyphSource {
    fn pages(&self) -> Result<Vec<PageRecord>> {
        let assembler = LineAssembler::new(&self.config);
        let mut records = Vec::new();

        for (&page_num, &page_id) in &self.doc.get_pages() {
            let raw_text = self.doc.extract_text(&[page_num]).unwrap_or_default();
            if raw_text.split_whitespace().count() < self.config.min_page_words {
                log::debug!("skipping page {}: insufficient text", page_num);
                continue;
            }

            let glyphs = self.page_glyphs(page_id)?;
            if glyphs.is_empty() {
                continue;
            }

            let mut blocks = Vec::new();
            for line in assembler.assemble(glyphs) {
                if let Some(block) = build_block(&line, self.config.default_font_size) {
                    let index = blocks.len();
                    blocks.push(block.at(page_num, index));
                }
            }
            if blocks.is_empty() {
                continue;
            }

            records.push(PageRecord::new(page_num, blocks, raw_text.trim()));
        }

        Ok(records)
    }
}

/// Position-tracking subset of the PDF text matrix.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        *self = Self { a, b, c, d, e, f };
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; the TL operator is not tracked.
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Extract a number from a content-stream operand.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Decode a text run without font encoding information.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter(|c| c.len() == 2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
