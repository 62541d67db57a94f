use std::ffi::OsStr;
use std::thread;

use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use tracing::{debug, error, info, warn};

use crate::models::BusinessRecord;
use crate::scrapers::extract;
use crate::scrapers::selectors;
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::{SearchRequest, Waits};

/// Maps-search collector driving a real Chrome instance.
///
/// The Chrome process is owned by the `Browser` handle and torn down when
/// the collector is dropped, on every exit path.
pub struct MapsBrowserCollector {
    browser: Browser,
    waits: Waits,
}

impl MapsBrowserCollector {
    /// Launch Chrome with the default wait bounds.
    pub fn new() -> Result<Self> {
        Self::with_waits(Waits::default())
    }

    /// Launch Chrome with custom wait bounds.
    pub fn with_waits(waits: Waits) -> Result<Self> {
        info!("Launching Chrome...");

        // Headed, maximized, with the automation-detection flag disabled;
        // the maps UI serves a degraded page to obvious bots.
        let options = LaunchOptions::default_builder()
            .headless(false)
            .args(vec![
                OsStr::new("--start-maximized"),
                OsStr::new("--disable-blink-features=AutomationControlled"),
            ])
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser, waits })
    }

    /// The fatal path: search, scroll, enumerate, extract. Records land in
    /// `out` as they complete, so an error partway through keeps the early
    /// ones.
    fn run(&self, request: &SearchRequest, out: &mut Vec<BusinessRecord>) -> Result<()> {
        let tab = self.browser.new_tab()?;

        tab.navigate_to(selectors::MAPS_URL)?;
        tab.wait_until_navigated()?;

        let search_box = tab
            .wait_for_element_with_custom_timeout(selectors::SEARCH_BOX, self.waits.search_box)
            .context("Search box never appeared")?;
        search_box.click()?;
        tab.evaluate(
            &format!(
                "(() => {{ const box = document.querySelector(`{}`); if (box) box.value = ''; }})()",
                selectors::SEARCH_BOX
            ),
            false,
        )?;
        tab.type_str(&request.niche)?;
        tab.press_key("Enter")?;

        thread::sleep(self.waits.results_settle);
        tab.wait_for_element_with_custom_timeout(
            selectors::RESULTS_PANEL,
            self.waits.results_panel,
        )
        .context("Results panel never appeared")?;

        // Scroll the results panel to its bottom to trigger lazy loading.
        // Always the full requested count; there is no end-of-results
        // detection.
        let scroll_js = format!(
            "(() => {{ const panel = document.querySelector(`{}`); if (panel) panel.scrollTop = panel.scrollHeight; }})()",
            selectors::RESULTS_PANEL
        );
        for _ in 0..request.scroll_count {
            tab.evaluate(&scroll_js, false)?;
            thread::sleep(self.waits.scroll_pause);
        }

        // One snapshot of the listing cards, taken before any detail panel
        // opens; indices stay fixed for the rest of the run.
        let listings = tab.find_elements(selectors::LISTING_CARD)?;
        info!(
            "Found {} businesses for '{}'",
            listings.len(),
            request.niche
        );

        for (i, listing) in listings.iter().enumerate() {
            let index = i + 1;
            match self.extract_listing(&tab, listing, index) {
                Ok(record) => {
                    println!("{}. {}", index, record.name);
                    out.push(record);
                }
                Err(e) => {
                    warn!("Error extracting business {}: {:#}", index, e);
                }
            }
        }

        Ok(())
    }

    /// Open one listing's detail panel and scrape it. Errors here are
    /// caught by the caller, which skips the listing and moves on.
    fn extract_listing(
        &self,
        tab: &Tab,
        listing: &Element<'_>,
        index: usize,
    ) -> Result<BusinessRecord> {
        listing.scroll_into_view()?;
        thread::sleep(self.waits.listing_focus);
        listing.click()?;
        thread::sleep(self.waits.detail_panel);

        // The name is the slowest piece of the panel to render; wait on it
        // so the snapshot below sees a populated panel. Fields that still
        // are not there degrade to "N/A" one by one during parsing.
        let _ = tab.wait_for_element_with_custom_timeout(selectors::NAME, self.waits.name);

        let mut record = extract::parse_detail_panel(&self.page_html(tab)?);

        // Presence is the bar here, not clickability; headless_chrome has
        // no enabled/interactable wait, so a rendered-but-disabled tab gets
        // clicked anyway and the click error is logged below.
        let about_opened = tab
            .wait_for_element_with_custom_timeout(selectors::ABOUT_TAB, self.waits.about_tab)
            .and_then(|about_tab| about_tab.click().map(|_| ()));
        match about_opened {
            Ok(()) => {
                thread::sleep(self.waits.about_settle);
                record.about = extract::parse_about_panel(&self.page_html(tab)?);
            }
            Err(e) => {
                warn!("Could not click About tab for business {}: {:#}", index, e);
            }
        }

        debug!("Extracted business {}: {}", index, record.name);

        Ok(record)
    }

    /// Full page snapshot for the parser side.
    fn page_html(&self, tab: &Tab) -> Result<String> {
        let result = tab.evaluate("document.documentElement.outerHTML", false)?;
        let html = result
            .value
            .as_ref()
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();
        Ok(html)
    }
}

#[async_trait]
impl ListingSource for MapsBrowserCollector {
    async fn collect(&self, request: &SearchRequest) -> Vec<BusinessRecord> {
        let mut records = Vec::new();
        if let Err(e) = self.run(request, &mut records) {
            error!("Error: {:#}", e);
        }
        records
    }

    fn source_name(&self) -> &'static str {
        "Google Maps"
    }
}
