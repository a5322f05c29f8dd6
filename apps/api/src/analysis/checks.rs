//! Content checks — the fixed-order rule engine behind POST /api/v1/analyze.
//!
//! Eight independent checks run in a fixed order, each appending zero or
//! more recommendations. The output order is part of the contract: the UI
//! renders recommendations in execution order, with no dedup or sorting.

use serde::Deserialize;

use crate::analysis::document::PageDocument;
use crate::analysis::keyword::{
    contains_keyword, keyword_count, keyword_density, normalize_keyword, word_count,
};
use crate::report::Recommendation;

const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 60;
const META_MIN: usize = 50;
const META_MAX: usize = 160;
const MIN_WORDS: usize = 300;
const DENSITY_STUFFING: f64 = 2.5;
const DENSITY_SPARSE: f64 = 0.5;

/// Raw page fields submitted for analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    pub title: String,
    #[serde(default)]
    pub focus_keyword: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub body_markup: String,
}

/// Runs every content check against the input fields and the parsed body
/// markup. Pure: no I/O, input is not mutated.
pub fn analyze(input: &AnalysisInput, doc: &PageDocument) -> Vec<Recommendation> {
    // Normalized once; every check sees the same keyword (or none).
    let keyword = normalize_keyword(&input.focus_keyword);
    let keyword = keyword.as_deref();

    let text = doc.text();
    let words = word_count(&text);

    let mut out = Vec::new();
    check_title(&mut out, &input.title, keyword);
    check_meta_description(&mut out, &input.meta_description, keyword);
    check_word_count(&mut out, words);
    check_keyword_density(&mut out, &text, words, keyword);
    check_first_paragraph(&mut out, doc, keyword);
    check_headings(&mut out, doc, keyword);
    check_links(&mut out, doc);
    check_images(&mut out, doc);
    out
}

fn check_title(out: &mut Vec<Recommendation>, title: &str, keyword: Option<&str>) {
    if title.is_empty() {
        out.push(Recommendation::bad("Title is empty. Add a title for this page."));
        return;
    }

    let len = title.chars().count();
    if (TITLE_MIN..=TITLE_MAX).contains(&len) {
        out.push(Recommendation::good(format!(
            "Title length ({len} characters) is within the recommended {TITLE_MIN}-{TITLE_MAX} range."
        )));
    } else {
        out.push(Recommendation::bad(format!(
            "Title is {len} characters. Aim for {TITLE_MIN}-{TITLE_MAX} characters."
        )));
    }

    if let Some(kw) = keyword {
        if contains_keyword(title, kw) {
            out.push(Recommendation::good("Title contains the focus keyword."));
        } else {
            out.push(Recommendation::bad("Title does not contain the focus keyword."));
        }
    }
}

fn check_meta_description(out: &mut Vec<Recommendation>, meta: &str, keyword: Option<&str>) {
    if meta.is_empty() {
        out.push(Recommendation::bad(
            "Meta description is empty. Write one so search results show your own summary.",
        ));
        return;
    }

    let len = meta.chars().count();
    if (META_MIN..=META_MAX).contains(&len) {
        out.push(Recommendation::good(format!(
            "Meta description length ({len} characters) is within the recommended {META_MIN}-{META_MAX} range."
        )));
    } else {
        out.push(Recommendation::bad(format!(
            "Meta description is {len} characters. Aim for {META_MIN}-{META_MAX} characters."
        )));
    }

    if let Some(kw) = keyword {
        if contains_keyword(meta, kw) {
            out.push(Recommendation::good("Meta description contains the focus keyword."));
        } else {
            out.push(Recommendation::bad(
                "Meta description does not contain the focus keyword.",
            ));
        }
    }
}

fn check_word_count(out: &mut Vec<Recommendation>, words: usize) {
    if words < MIN_WORDS {
        out.push(Recommendation::bad(format!(
            "Content has {words} words. Aim for at least {MIN_WORDS}."
        )));
    } else {
        out.push(Recommendation::good(format!("Content length is good ({words} words).")));
    }
}

fn check_keyword_density(
    out: &mut Vec<Recommendation>,
    text: &str,
    words: usize,
    keyword: Option<&str>,
) {
    let Some(kw) = keyword else {
        out.push(Recommendation::info(
            "No focus keyword set. Set one to get keyword recommendations.",
        ));
        return;
    };

    let count = keyword_count(text, kw);
    match keyword_density(count, words) {
        None => out.push(Recommendation::info(
            "Content is empty, so keyword density cannot be measured.",
        )),
        Some(d) if d > DENSITY_STUFFING => out.push(Recommendation::bad(format!(
            "Keyword density is {d:.2}%. That looks like keyword stuffing."
        ))),
        Some(d) if d < DENSITY_SPARSE => out.push(Recommendation::info(format!(
            "Keyword density is {d:.2}%. Consider using the keyword a little more often."
        ))),
        Some(d) => out.push(Recommendation::good(format!("Keyword density is {d:.2}%."))),
    }
}

fn check_first_paragraph(out: &mut Vec<Recommendation>, doc: &PageDocument, keyword: Option<&str>) {
    let Some(kw) = keyword else {
        return;
    };

    match doc.first_paragraph() {
        Some(p) if contains_keyword(&p, kw) => out.push(Recommendation::good(
            "The focus keyword appears in the first paragraph.",
        )),
        _ => out.push(Recommendation::bad(
            "The focus keyword does not appear in the first paragraph.",
        )),
    }
}

fn check_headings(out: &mut Vec<Recommendation>, doc: &PageDocument, keyword: Option<&str>) {
    let headings = doc.headings();
    if headings.is_empty() {
        out.push(Recommendation::bad(
            "No subheadings (H2-H4) found. Break the content up with subheadings.",
        ));
        return;
    }

    out.push(Recommendation::good(format!("Found {} subheadings.", headings.len())));

    if let Some(kw) = keyword {
        if headings.iter().any(|h| contains_keyword(h, kw)) {
            out.push(Recommendation::good("A subheading contains the focus keyword."));
        } else {
            // Advisory only: subheadings without the keyword are fine.
            out.push(Recommendation::info(
                "No subheading contains the focus keyword. Consider adding it to one.",
            ));
        }
    }
}

fn check_links(out: &mut Vec<Recommendation>, doc: &PageDocument) {
    let links = doc.links();
    let external = links
        .iter()
        .filter(|l| l.href.starts_with("http://") || l.href.starts_with("https://"))
        .count();
    let internal = links
        .iter()
        .filter(|l| l.href.starts_with('/') || l.href.starts_with('#'))
        .count();

    if external == 0 {
        out.push(Recommendation::info(
            "No outbound links found. Linking to reputable sources can help.",
        ));
    } else {
        out.push(Recommendation::good(format!("Found {external} outbound links.")));
    }

    if internal == 0 {
        out.push(Recommendation::bad(
            "No internal links found. Add links to related pages on your site.",
        ));
    } else {
        out.push(Recommendation::good(format!("Found {internal} internal links.")));
    }
}

fn check_images(out: &mut Vec<Recommendation>, doc: &PageDocument) {
    let images = doc.images();
    if images.is_empty() {
        out.push(Recommendation::info("No images found. Consider adding supporting visuals."));
        return;
    }

    let missing = images
        .iter()
        .filter(|i| i.alt.as_deref().map(str::trim).unwrap_or("").is_empty())
        .count();

    if missing > 0 {
        out.push(Recommendation::bad(format!("{missing} images are missing alt text.")));
    } else {
        out.push(Recommendation::good(format!(
            "All {} images have alt text.",
            images.len()
        )));
    }
}
