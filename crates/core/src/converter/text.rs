//! Text Converter - outputs plain text.

use std::io::Write;

use crate::error::Result;
use crate::layout::{Block, Span};

/// Gap between adjacent unmerged spans on a line, relative to the
/// successor span's size, above which the renderer inserts a single
/// space. Roughly a quarter em; tuned empirically.
pub const SEPARATOR_GAP_RATIO: f64 = 0.25;

/// Starts a lazy, restartable stream of text chunks over a block
/// sequence.
///
/// Spans on a line are concatenated (merging already decided word
/// boundaries; remaining adjacency implies intended contiguity), with a
/// single space when the gap between unmerged neighbors is wide enough to
/// read as one; each line ends with a newline; blocks are separated by a
/// blank line. Nothing is materialized, so arbitrarily large pages render
/// incrementally; call again for a fresh pass.
pub fn text_chunks(blocks: &[Block]) -> TextChunks<'_> {
    TextChunks {
        blocks,
        block: 0,
        line: 0,
        span: 0,
        pending: None,
    }
}

/// Materializes the chunk stream into a single string.
pub fn render_text(blocks: &[Block]) -> String {
    text_chunks(blocks).collect()
}

/// Iterator state for [`text_chunks`]. Pure: rendering never mutates the
/// blocks it walks.
#[derive(Debug, Clone)]
pub struct TextChunks<'a> {
    blocks: &'a [Block],
    block: usize,
    line: usize,
    span: usize,
    /// Separator queued before the next span.
    pending: Option<&'a str>,
}

fn needs_separator(prev: &Span, next: &Span) -> bool {
    next.x() - prev.x1() > SEPARATOR_GAP_RATIO * next.size()
}

impl<'a> Iterator for TextChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(sep) = self.pending.take() {
            return Some(sep);
        }

        loop {
            let block = self.blocks.get(self.block)?;

            let Some(line) = block.lines().get(self.line) else {
                self.block += 1;
                self.line = 0;
                self.span = 0;
                if self.block < self.blocks.len() {
                    return Some("\n");
                }
                continue;
            };

            let spans = line.spans();
            let Some(span) = spans.get(self.span) else {
                self.line += 1;
                self.span = 0;
                return Some("\n");
            };

            self.span += 1;
            if let Some(next) = spans.get(self.span) {
                if needs_separator(span, next) {
                    self.pending = Some(" ");
                }
            }
            return Some(span.text());
        }
    }
}

/// Plain text converter - drains the chunk stream into a writer, one page
/// at a time.
pub struct TextConverter<'a, W: Write> {
    outfp: &'a mut W,
    pageno: i32,
    showpageno: bool,
}

impl<'a, W: Write> TextConverter<'a, W> {
    pub fn new(outfp: &'a mut W, showpageno: bool) -> Self {
        Self {
            outfp,
            pageno: 1,
            showpageno,
        }
    }

    /// Writes one page of blocks, terminated by a form feed.
    pub fn receive_page(&mut self, blocks: &[Block]) -> Result<()> {
        if self.showpageno {
            writeln!(self.outfp, "Page {}", self.pageno)?;
        }
        for chunk in text_chunks(blocks) {
            self.outfp.write_all(chunk.as_bytes())?;
        }
        self.outfp.write_all(b"\x0c")?;
        self.pageno += 1;
        Ok(())
    }
}
