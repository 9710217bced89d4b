//! Plain-text paragraphs from API-supplied HTML bodies.

use html2text::render::text_renderer::TrivialDecorator;

/// Wide enough that html2text never wraps a paragraph.
const UNWRAPPED_WIDTH: usize = 10_000;

/// Split an HTML body into text paragraphs.
///
/// Markup is parsed by html2text without link footnotes or emphasis markers.
/// Block breaks (`<p>`, `<br>`) start a new paragraph and blank paragraphs
/// are omitted.
pub fn paragraphs(html: &str) -> Vec<String> {
    let text = html2text::from_read_with_decorator(
        html.as_bytes(),
        UNWRAPPED_WIDTH,
        TrivialDecorator::new(),
    );

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
