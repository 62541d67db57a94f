//! Selector strings and the fixed search URL, kept together as data.
//!
//! These track the live maps markup and are the first thing to revisit when
//! extraction starts coming back all "N/A".

pub const MAPS_URL: &str = "https://www.google.com/maps";

/// Main search input on the maps landing page.
pub const SEARCH_BOX: &str = "#searchboxinput";

/// Scrollable container holding the search results.
pub const RESULTS_PANEL: &str = r#"div[aria-label*="Results for"]"#;

/// One business card in the results panel.
pub const LISTING_CARD: &str = "div.Nv2PK";

// Detail-panel fields.
pub const NAME: &str = "h1.DUwDvf";
pub const RATING: &str = "div.F7nice > span:nth-child(1) > span:nth-child(1)";
pub const REVIEW_COUNT: &str = "div.F7nice span:nth-child(2) > span > span";
pub const CATEGORY: &str = "button.DkEaL";
pub const ADDRESS: &str = "button[data-item-id='address']";
pub const WEBSITE: &str = "a[data-item-id='authority']";
pub const PHONE: &str = "button[data-item-id^='phone']";

// About tab and its headed attribute sections.
pub const ABOUT_TAB: &str = "button[aria-label^='About ']";
pub const ABOUT_PANEL: &str = "div[aria-label^='About']";
pub const ABOUT_SECTION: &str = "div.iP2t7d.fontBodyMedium";
pub const ABOUT_HEADING: &str = "h2";
pub const ABOUT_ITEM: &str = "ul.ZQ6we li span[aria-label]";
