//! siege-stats — extract and reshape the Rainbow Six Siege stats portal's preloaded state.

pub mod assemble;
pub mod extract;
pub mod fetch;
pub mod mappers;
pub mod pipeline;
pub mod router;
pub mod types;

pub use assemble::assemble;
pub use extract::{PayloadExtractor, CONTENT_FIELD, PRELOADED_STATE_VAR};
pub use fetch::{PageFetcher, PageSource, DEFAULT_STATS_URL, DEFAULT_USER_AGENT};
pub use mappers::map_entry;
pub use pipeline::StatsPipeline;
pub use router::{route, KeyRule, RuleTarget, DEFAULT_RULES};
pub use types::*;
