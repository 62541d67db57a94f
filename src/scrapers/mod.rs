pub mod browser;
pub mod extract;
pub mod selectors;
pub mod traits;
pub mod types;

pub use browser::MapsBrowserCollector;
pub use traits::ListingSource;
pub use types::SearchRequest;
