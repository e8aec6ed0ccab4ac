//! Extraction configuration.

/// Tunables for the outline extraction pipeline.
///
/// All thresholds are heuristics calibrated against mixed corpora of
/// reports, papers, and forms; the defaults work well for single-column
/// office documents. Pass a customized value to
/// [`OutlineExtractor::with_config`](crate::OutlineExtractor::with_config).
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Vertical distance (in position units) within which glyphs are
    /// considered part of the same line.
    pub y_tolerance: f32,

    /// Width of a horizontal band used to keep side-by-side columns in
    /// separate lines.
    pub column_band_width: f32,

    /// Pages with fewer words than this are treated as non-content
    /// (blank or image-only) and dropped before heading search.
    pub min_page_words: usize,

    /// Minimum heading candidate length in characters.
    pub min_heading_chars: usize,

    /// Maximum heading candidate length in characters.
    pub max_heading_chars: usize,

    /// Font size must reach this multiple of the page mean for the
    /// font/format detector to fire.
    pub heading_size_ratio: f32,

    /// Font size must exceed this multiple of the page mean for the
    /// keyword detector to fire.
    pub keyword_size_ratio: f32,

    /// Blocks at or above this fraction of the page's maximum font size
    /// are classified H1 by the font/format detector, H2 otherwise.
    pub h1_max_size_ratio: f32,

    /// How many leading blocks of the first page are title candidates.
    pub title_block_count: usize,

    /// Percentile (1-100) of candidate font sizes a title candidate must
    /// reach.
    pub title_size_percentile: u8,

    /// Font size assumed for glyphs that report none.
    pub default_font_size: f32,

    /// More leader-dot rows than this mark a page as a table of contents.
    pub toc_row_threshold: usize,

    /// Number of junk vocabulary hits that mark a page as non-content.
    pub junk_indicator_threshold: usize,
}

impl ExtractConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line-grouping vertical tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Set the column band width.
    pub fn with_column_band_width(mut self, width: f32) -> Self {
        self.column_band_width = width;
        self
    }

    /// Set the minimum word count for a content page.
    pub fn with_min_page_words(mut self, words: usize) -> Self {
        self.min_page_words = words;
        self
    }

    /// Set the heading candidate length bounds.
    pub fn with_heading_chars(mut self, min: usize, max: usize) -> Self {
        self.min_heading_chars = min;
        self.max_heading_chars = max;
        self
    }

    /// Set the font/format detector size ratio.
    pub fn with_heading_size_ratio(mut self, ratio: f32) -> Self {
        self.heading_size_ratio = ratio;
        self
    }

    /// Set the keyword detector size ratio.
    pub fn with_keyword_size_ratio(mut self, ratio: f32) -> Self {
        self.keyword_size_ratio = ratio;
        self
    }

    /// Set the number of leading first-page blocks considered for the title.
    pub fn with_title_block_count(mut self, count: usize) -> Self {
        self.title_block_count = count;
        self
    }

    /// Set the title candidate font-size percentile (1-100).
    pub fn with_title_size_percentile(mut self, percentile: u8) -> Self {
        self.title_size_percentile = percentile.clamp(1, 100);
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 3.0,
            column_band_width: 100.0,
            min_page_words: 20,
            min_heading_chars: 4,
            max_heading_chars: 120,
            heading_size_ratio: 1.5,
            keyword_size_ratio: 1.2,
            h1_max_size_ratio: 0.9,
            title_block_count: 8,
            title_size_percentile: 75,
            default_font_size: 12.0,
            toc_row_threshold: 3,
            junk_indicator_threshold: 2,
        }
    }
}
