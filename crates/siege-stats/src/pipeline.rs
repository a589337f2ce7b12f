//! Fetch → extract → route → map → assemble.

use crate::assemble::assemble;
use crate::extract::PayloadExtractor;
use crate::fetch::PageSource;
use crate::mappers::map_entry;
use crate::router::{route, KeyRule, DEFAULT_RULES};
use crate::types::{MappedCategory, StatsResponse, StatsResult};

/// Immutable pipeline configuration, shared across requests.
#[derive(Debug, Clone)]
pub struct StatsPipeline {
    extractor: PayloadExtractor,
    rules: &'static [KeyRule],
}

impl StatsPipeline {
    /// Pipeline for the stats portal with the default rules.
    pub fn new() -> StatsResult<Self> {
        Ok(Self::with_parts(PayloadExtractor::new()?, DEFAULT_RULES))
    }

    pub fn with_parts(extractor: PayloadExtractor, rules: &'static [KeyRule]) -> Self {
        Self { extractor, rules }
    }

    pub fn rules(&self) -> &'static [KeyRule] {
        self.rules
    }

    /// Reshape an already fetched page.
    pub fn process_page(&self, html: &str) -> StatsResult<StatsResponse> {
        let payload = self.extractor.extract(html)?;
        let entries = route(&payload, self.rules)?;

        let mapped = entries
            .iter()
            .map(|entry| {
                tracing::debug!("Mapping {} from {}", entry.category, entry.source_key);
                map_entry(entry)
            })
            .collect::<StatsResult<Vec<MappedCategory>>>()?;

        assemble(mapped)
    }

    /// Fetch the page from `source` and reshape it.
    pub async fn collect(&self, source: &dyn PageSource) -> StatsResult<StatsResponse> {
        let html = source.fetch_page().await?;
        self.process_page(&html)
    }
}
