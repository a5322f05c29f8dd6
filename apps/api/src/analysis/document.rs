//! Page Document — the markup-parsing collaborator behind the content checks.
//!
//! Wraps a browser-grade tolerant parse of the body markup. Checks never
//! touch the DOM crate directly; everything they need is exposed here as
//! plain strings.

use scraper::{Html, Selector};

/// One hyperlink target extracted from the body markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub href: String,
}

/// One image element; `alt` is `None` when the attribute is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub alt: Option<String>,
}

/// Parsed body markup with the query surface the content checks need.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Best-effort parse; malformed markup never fails, matching what a
    /// browser parser would do with the same input.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Plain text content with markup stripped. Text nodes are joined with
    /// single spaces so words in adjacent blocks do not run together.
    pub fn text(&self) -> String {
        self.html
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text of the first paragraph block, if any.
    pub fn first_paragraph(&self) -> Option<String> {
        let p = selector("p");
        self.html
            .select(&p)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" "))
    }

    /// Text of all H2–H4 headings in document order.
    pub fn headings(&self) -> Vec<String> {
        let hs = selector("h2, h3, h4");
        self.html
            .select(&hs)
            .map(|el| el.text().collect::<Vec<_>>().join(" "))
            .collect()
    }

    /// All anchors that carry an href attribute, in document order.
    pub fn links(&self) -> Vec<Link> {
        let a = selector("a");
        self.html
            .select(&a)
            .filter_map(|el| el.value().attr("href"))
            .map(|href| Link {
                href: href.to_string(),
            })
            .collect()
    }

    /// All images, in document order, with their alt attribute if present.
    pub fn images(&self) -> Vec<Image> {
        let img = selector("img");
        self.html
            .select(&img)
            .map(|el| Image {
                alt: el.value().attr("alt").map(str::to_string),
            })
            .collect()
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}
