//! Stats request handler — runs the pipeline and shapes the reply.

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use siege_stats::{PageSource, StatsPipeline, StatsResponse, StatsResult};

use crate::types::FailureResponse;

/// Runs one pipeline pass per request. Holds no mutable state.
pub struct StatsHandler {
    pipeline: StatsPipeline,
    source: Arc<dyn PageSource>,
}

impl StatsHandler {
    pub fn new(pipeline: StatsPipeline, source: Arc<dyn PageSource>) -> Self {
        Self { pipeline, source }
    }

    /// Fetch and reshape, surfacing the typed error.
    pub async fn try_stats(&self) -> StatsResult<StatsResponse> {
        self.pipeline.collect(self.source.as_ref()).await
    }

    /// Reply body for `GET /`: the stats on success, the uniform failure
    /// body on any error.
    pub async fn handle_stats(&self) -> Value {
        let span = tracing::info_span!("stats_request", request_id = %uuid::Uuid::new_v4());

        async {
            match self.try_stats().await {
                Ok(response) => match serde_json::to_value(&response) {
                    Ok(body) => {
                        tracing::info!(
                            seasons = response.seasons.len(),
                            ranks = response.ranks.len(),
                            operators = response.operators.len(),
                            maps = response.maps.len(),
                            "Served stats"
                        );
                        body
                    }
                    Err(e) => failure(&e),
                },
                Err(e) => failure(&e),
            }
        }
        .instrument(span)
        .await
    }
}

fn failure(err: &dyn std::error::Error) -> Value {
    tracing::error!("There was an error while trying to load the page: {err}");
    serde_json::to_value(FailureResponse::default()).unwrap_or_default()
}
