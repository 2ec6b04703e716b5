//! Content block extraction from HTML pages

use scraper::{ElementRef, Html, Selector};

/// Elements whose text is treated as page content
const BLOCK_SELECTOR: &str = "article, main, p, h1, h2, h3";

/// Presentation elements dropped together with everything inside them
const EXCLUDED_TAGS: &[&str] = &[
    "style", "script", "noscript", "nav", "footer", "aside", "audio", "video", "button",
];

/// Classes marking advertising and overlays
const EXCLUDED_CLASSES: &[&str] = &["ads", "popup"];

fn is_excluded(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    EXCLUDED_TAGS.contains(&value.name())
        || value.classes().any(|class| EXCLUDED_CLASSES.contains(&class))
}

/// Text of every content block in `html`, in document order
///
/// A block's text is the concatenation of its text nodes, leaving out any
/// inside excluded elements, trimmed. Blocks that are themselves excluded or
/// sit inside an excluded element are skipped. Empty blocks are kept; the
/// caller decides what is long enough.
#[must_use]
pub fn text_blocks(html: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(BLOCK_SELECTOR) else {
        return Vec::new();
    };
    let document = Html::parse_document(html);

    document
        .select(&selector)
        .filter(|block| {
            !is_excluded(block) && !block.ancestors().filter_map(ElementRef::wrap).any(|a| is_excluded(&a))
        })
        .map(|block| block_text(&block))
        .collect()
}

fn block_text(block: &ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in block.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .take_while(|ancestor| ancestor.id() != block.id())
            .any(|ancestor| is_excluded(&ancestor));
        if !hidden {
            text.push_str(fragment);
        }
    }

    text.trim().to_string()
}
