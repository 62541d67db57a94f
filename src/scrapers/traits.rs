use async_trait::async_trait;

use crate::models::BusinessRecord;
use crate::scrapers::types::SearchRequest;

/// Common trait for listing collectors
/// This allows other map/search backends to slot in behind the same run loop
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Run one search and return every record that survived extraction.
    /// Collection never fails as a whole: fatal browser errors end the run
    /// early and whatever was gathered so far is still returned.
    async fn collect(&self, request: &SearchRequest) -> Vec<BusinessRecord>;

    /// Get the name of the backing service
    fn source_name(&self) -> &'static str;
}
