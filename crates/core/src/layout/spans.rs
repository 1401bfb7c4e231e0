//! Span builder: folds one page's ordered runs into spans.

use tracing::debug;

use crate::error::Result;
use crate::font::FontRegistry;

use super::elements::{Span, TextRun};
use super::merge::can_be_merged;
use super::params::MergeOptions;

/// Folds the page's ordered run sequence into spans in a single pass.
///
/// Each run either extends the open span, judged by [`can_be_merged`]
/// against the last run absorbed into it, or closes the span and opens a
/// new one. Output order preserves input order; there is no lookahead
/// beyond the immediate neighbor. Runs with empty text are dropped.
///
/// The only failure is a run referencing a font identifier with no
/// registered metrics.
pub fn build_spans(
    runs: &[TextRun],
    fonts: &FontRegistry,
    options: &MergeOptions,
) -> Result<Vec<Span>> {
    let mut spans = Vec::new();
    let mut open: Option<(Span, &TextRun)> = None;

    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        let font = fonts.resolve(&run.font)?;

        open = Some(match open.take() {
            Some((mut span, last))
                if can_be_merged(
                    last,
                    run,
                    font.as_ref(),
                    run.char_spacing,
                    run.word_spacing,
                    options,
                ) =>
            {
                span.absorb(run);
                (span, run)
            }
            Some((span, _)) => {
                spans.push(span);
                (Span::from_run(run), run)
            }
            None => (Span::from_run(run), run),
        });
    }

    if let Some((span, _)) = open {
        spans.push(span);
    }

    debug!(runs = runs.len(), spans = spans.len(), "folded runs into spans");
    Ok(spans)
}
