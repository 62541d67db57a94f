use std::time::Duration;

/// Scrolls performed when the prompt gives nothing usable.
pub const DEFAULT_SCROLL_COUNT: u32 = 5;

/// A single collection run's inputs. Built once from the interactive
/// prompts and immutable afterward.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text search term, e.g. "restaurants in California".
    pub niche: String,
    /// How many times to scroll the results panel for more listings.
    pub scroll_count: u32,
}

impl SearchRequest {
    /// Build a request from raw prompt text. The niche is trimmed but not
    /// otherwise validated; the scroll count falls back to
    /// `DEFAULT_SCROLL_COUNT` when the text is empty or not a plain
    /// unsigned integer ("abc", "5.5"). A literal "0" is accepted and
    /// simply skips scrolling.
    pub fn new(niche: &str, scroll_text: &str) -> Self {
        Self {
            niche: niche.trim().to_string(),
            scroll_count: scroll_text.trim().parse().unwrap_or(DEFAULT_SCROLL_COUNT),
        }
    }
}

/// Upper bounds for the bounded element waits and the fixed pauses between
/// interaction steps. Defaults match the live site's observed load times;
/// tests shorten them.
#[derive(Debug, Clone)]
pub struct Waits {
    /// Bound on the search box appearing after navigation.
    pub search_box: Duration,
    /// Bound on the results scroll container appearing after a search.
    pub results_panel: Duration,
    /// Unconditional settle after submitting the search.
    pub results_settle: Duration,
    /// Pause after each programmatic scroll of the results panel.
    pub scroll_pause: Duration,
    /// Pause after scrolling a listing card into view.
    pub listing_focus: Duration,
    /// Pause after clicking a listing, for the detail panel to populate.
    pub detail_panel: Duration,
    /// Bound on the business name rendering in the detail panel.
    pub name: Duration,
    /// Bound on the About tab becoming available.
    pub about_tab: Duration,
    /// Pause after clicking the About tab, for its content to load.
    pub about_settle: Duration,
}

impl Default for Waits {
    fn default() -> Self {
        Self {
            search_box: Duration::from_secs(10),
            results_panel: Duration::from_secs(10),
            results_settle: Duration::from_secs(5),
            scroll_pause: Duration::from_secs(2),
            listing_focus: Duration::from_secs(1),
            detail_panel: Duration::from_secs(3),
            name: Duration::from_secs(5),
            about_tab: Duration::from_secs(5),
            about_settle: Duration::from_secs(3),
        }
    }
}
