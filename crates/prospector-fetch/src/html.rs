//! HTML to [`Page`] conversion
//!
//! Markup never leaves this module: page text, hyperlink targets and organic
//! search results are pulled out here and handed on as plain strings.

use prospector_domain::{Page, SearchHit};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements whose text is never visible
const IGNORE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static RESULT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.g").unwrap());
static RESULT_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static RESULT_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static RESULT_SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.VwiC3b, div.yXK7lf").unwrap());

/// Parse a document into text, links and search hits
pub fn parse_page(html: &str) -> Page {
    let document = Html::parse_document(html);
    Page {
        text: visible_text(&document),
        links: links(&document),
        hits: search_hits(&document),
    }
}

/// Visible text, one trimmed text node per line
pub fn visible_text(document: &Html) -> String {
    let mut lines = Vec::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| IGNORE_TAGS.contains(&element.name()))
        });
        if hidden {
            continue;
        }
        let line = text.trim();
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Every `href` in document order
pub fn links(document: &Html) -> Vec<String> {
    document
        .select(&LINK)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Organic results: each `div.g` with a heading and a link
pub fn search_hits(document: &Html) -> Vec<SearchHit> {
    document
        .select(&RESULT)
        .filter_map(|result| {
            let title = result.select(&RESULT_TITLE).next()?;
            let link = result.select(&RESULT_LINK).next()?;
            let snippet = result
                .select(&RESULT_SNIPPET)
                .next()
                .map(element_text)
                .unwrap_or_default();
            Some(SearchHit {
                title: element_text(title),
                url: link.value().attr("href").unwrap_or_default().to_string(),
                snippet,
            })
        })
        .collect()
}
