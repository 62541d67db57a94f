//! Pure field extraction from captured page HTML.
//!
//! The browser side only takes snapshots; everything here runs against a
//! parsed document, so the lookups can be exercised with fixture HTML.

use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::models::{BusinessRecord, NOT_AVAILABLE};
use crate::scrapers::selectors;

/// First match's text content, trimmed; `None` when absent or empty.
fn select_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    let text = doc
        .select(&sel)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    (!text.is_empty()).then_some(text)
}

/// First match's attribute value; `None` when absent or empty.
fn select_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let value = doc
        .select(&Selector::parse(selector).unwrap())
        .next()?
        .value()
        .attr(attr)?
        .trim()
        .to_string();
    (!value.is_empty()).then_some(value)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Review counts render as "(1,234)"; keep the text between the parentheses.
fn strip_parens(text: &str) -> String {
    text.trim_start_matches('(').trim_end_matches(')').to_string()
}

/// Scrape the seven scalar fields out of a detail-panel snapshot.
///
/// Each lookup is independent; a missing element degrades that field to
/// "N/A" without touching the others. `about` starts empty and is filled in
/// separately once the About tab has been opened.
pub fn parse_detail_panel(html: &str) -> BusinessRecord {
    let doc = Html::parse_document(html);
    BusinessRecord {
        name: or_na(select_text(&doc, selectors::NAME)),
        rating: or_na(select_text(&doc, selectors::RATING)),
        total_reviews: or_na(
            select_text(&doc, selectors::REVIEW_COUNT).map(|text| strip_parens(&text)),
        ),
        category: or_na(select_text(&doc, selectors::CATEGORY)),
        address: or_na(select_text(&doc, selectors::ADDRESS)),
        website: or_na(select_attr(&doc, selectors::WEBSITE, "href")),
        phone: or_na(select_text(&doc, selectors::PHONE)),
        about: BTreeMap::new(),
    }
}

/// Walk the About panel's headed sections into a heading -> labels map.
///
/// Labels keep document order within each section. A missing panel yields
/// an empty map, and so does a malformed panel: every section carries an
/// `h2` in the live UI, so a heading miss means the markup has drifted and
/// the whole panel is discarded rather than kept half-read. The result is
/// always a map, possibly empty.
pub fn parse_about_panel(html: &str) -> BTreeMap<String, Vec<String>> {
    let doc = Html::parse_document(html);
    let panel_sel = Selector::parse(selectors::ABOUT_PANEL).unwrap();
    let section_sel = Selector::parse(selectors::ABOUT_SECTION).unwrap();
    let heading_sel = Selector::parse(selectors::ABOUT_HEADING).unwrap();
    let item_sel = Selector::parse(selectors::ABOUT_ITEM).unwrap();

    let mut about = BTreeMap::new();
    let Some(panel) = doc.select(&panel_sel).next() else {
        return about;
    };

    for section in panel.select(&section_sel) {
        let heading = section
            .select(&heading_sel)
            .next()
            .map(|h2| h2.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        if heading.is_empty() {
            return BTreeMap::new();
        }
        let labels = section
            .select(&item_sel)
            .filter_map(|item| item.value().attr("aria-label"))
            .map(str::to_string)
            .collect();
        about.insert(heading, labels);
    }
    about
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_HTML: &str = r#"
        <html><body>
          <h1 class="DUwDvf">Blue Bottle Coffee</h1>
          <div class="F7nice">
            <span><span>4.6</span><span> stars</span></span>
            <span><span><span>(1,234)</span></span></span>
          </div>
          <button class="DkEaL">Coffee shop</button>
          <button data-item-id="address"><div>300 Webster St, Oakland, CA</div></button>
          <a data-item-id="authority" href="https://bluebottlecoffee.com/">bluebottlecoffee.com</a>
          <button data-item-id="phone:tel:15105551234"><div>(510) 555-1234</div></button>
        </body></html>
    "#;

    const ABOUT_HTML: &str = r#"
        <html><body>
          <div aria-label="About Blue Bottle Coffee">
            <div class="iP2t7d fontBodyMedium">
              <h2>Accessibility</h2>
              <ul class="ZQ6we">
                <li><span aria-label="Has wheelchair-accessible entrance"></span></li>
                <li><span aria-label="Has wheelchair-accessible seating"></span></li>
              </ul>
            </div>
            <div class="iP2t7d fontBodyMedium">
              <h2>Amenities</h2>
              <ul class="ZQ6we">
                <li><span aria-label="Wi-Fi"></span></li>
              </ul>
            </div>
          </div>
        </body></html>
    "#;

    const MALFORMED_ABOUT_HTML: &str = r#"
        <html><body>
          <div aria-label="About Blue Bottle Coffee">
            <div class="iP2t7d fontBodyMedium">
              <h2>Accessibility</h2>
              <ul class="ZQ6we">
                <li><span aria-label="Has wheelchair-accessible entrance"></span></li>
              </ul>
            </div>
            <div class="iP2t7d fontBodyMedium">
              <ul class="ZQ6we">
                <li><span aria-label="Orphan label under a headingless section"></span></li>
              </ul>
            </div>
          </div>
        </body></html>
    "#;

    #[test]
    fn detail_panel_extracts_every_scalar_field() {
        let record = parse_detail_panel(DETAIL_HTML);
        assert_eq!(record.name, "Blue Bottle Coffee");
        assert_eq!(record.rating, "4.6");
        assert_eq!(record.total_reviews, "1,234");
        assert_eq!(record.category, "Coffee shop");
        assert_eq!(record.address, "300 Webster St, Oakland, CA");
        assert_eq!(record.website, "https://bluebottlecoffee.com/");
        assert_eq!(record.phone, "(510) 555-1234");
        assert!(record.about.is_empty());
    }

    #[test]
    fn review_count_parentheses_are_stripped() {
        assert_eq!(strip_parens("(1,234)"), "1,234");
        assert_eq!(strip_parens("98"), "98");
    }

    #[test]
    fn missing_fields_degrade_to_na_one_by_one() {
        let html = r#"<html><body><h1 class="DUwDvf">Lone Name</h1></body></html>"#;
        let record = parse_detail_panel(html);
        assert_eq!(record.name, "Lone Name");
        assert_eq!(record.rating, NOT_AVAILABLE);
        assert_eq!(record.total_reviews, NOT_AVAILABLE);
        assert_eq!(record.category, NOT_AVAILABLE);
        assert_eq!(record.address, NOT_AVAILABLE);
        assert_eq!(record.website, NOT_AVAILABLE);
        assert_eq!(record.phone, NOT_AVAILABLE);
    }

    #[test]
    fn empty_document_yields_all_sentinels() {
        let record = parse_detail_panel("<html><body></body></html>");
        assert_eq!(record, BusinessRecord::default());
    }

    #[test]
    fn whitespace_only_text_is_not_a_value() {
        let html = r#"<html><body><h1 class="DUwDvf">   </h1></body></html>"#;
        assert_eq!(parse_detail_panel(html).name, NOT_AVAILABLE);
    }

    #[test]
    fn about_sections_are_keyed_by_heading() {
        let about = parse_about_panel(ABOUT_HTML);
        assert_eq!(about.len(), 2);
        assert_eq!(
            about["Accessibility"],
            vec![
                "Has wheelchair-accessible entrance",
                "Has wheelchair-accessible seating",
            ]
        );
        assert_eq!(about["Amenities"], vec!["Wi-Fi"]);
    }

    #[test]
    fn missing_about_panel_yields_empty_map() {
        assert!(parse_about_panel("<html><body></body></html>").is_empty());
    }

    #[test]
    fn headingless_section_discards_the_whole_panel() {
        let about = parse_about_panel(MALFORMED_ABOUT_HTML);
        assert!(about.is_empty(), "got {about:?}");
    }
}
