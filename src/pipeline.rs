//! Submit orchestration: validate input, consult the cache, call the service.
//!
//! Every submit produces displayable text. Service failures are folded into
//! the report rather than raised, and a failed call is never cached, so the
//! next submit retries the service.

use std::time::{Duration, Instant};

use crate::cache::SummaryCache;
use crate::models::{Density, PromptVariant, SummaryRequest, SummaryResult};
use crate::session::{resolve_input, SessionState};
use crate::summarize::{Summarizer, BLANK_INPUT_ADVISORY};

/// How a submit was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Input was blank; nothing was called.
    Rejected,
    /// Served from the cache without a service call.
    CacheHit,
    /// Produced by a fresh service call.
    Summarized,
    /// The service call failed; the result text carries the error.
    Failed,
}

/// Outcome of one submission.
#[derive(Debug)]
pub struct SubmitReport {
    pub result: String,
    pub elapsed: Duration,
    pub disposition: Disposition,
}

/// Owns the summarizer and the cache for a run.
pub struct SummaryPipeline {
    client: Box<dyn Summarizer>,
    cache: SummaryCache,
    variant: PromptVariant,
}

impl SummaryPipeline {
    pub fn new(client: Box<dyn Summarizer>, variant: PromptVariant, ttl_secs: i64) -> Self {
        Self {
            client,
            cache: SummaryCache::new(ttl_secs),
            variant,
        }
    }

    /// Handle one submission end to end.
    ///
    /// Resolves the effective input (extracted file text wins over pasted
    /// text), rejects blank input locally, then serves from cache or calls
    /// the service. Successful results update `session.last_summary`;
    /// failures leave it untouched.
    pub async fn handle_submit(
        &mut self,
        session: &mut SessionState,
        pasted: &str,
        density: Density,
    ) -> SubmitReport {
        let start = Instant::now();

        let input = resolve_input(pasted, session.extracted.as_ref());
        if input.trim().is_empty() {
            return SubmitReport {
                result: BLANK_INPUT_ADVISORY.to_string(),
                elapsed: start.elapsed(),
                disposition: Disposition::Rejected,
            };
        }
        let request = SummaryRequest::new(input.to_string(), density);
        let digest = request.digest();

        if let Some(hit) = self.cache.get(&digest) {
            let text = hit.text.clone();
            session.last_summary = Some(hit);
            return SubmitReport {
                result: text,
                elapsed: start.elapsed(),
                disposition: Disposition::CacheHit,
            };
        }

        match self
            .client
            .summarize(request.content(), self.variant, density.length_params())
            .await
        {
            Ok(text) => {
                let result = SummaryResult::new(text.clone(), &request);
                self.cache.put(digest, result.clone());
                session.last_summary = Some(result);
                SubmitReport {
                    result: text,
                    elapsed: start.elapsed(),
                    disposition: Disposition::Summarized,
                }
            }
            Err(e) => {
                tracing::warn!("summarization failed: {}", e);
                SubmitReport {
                    result: format!("Error: {}", e),
                    elapsed: start.elapsed(),
                    disposition: Disposition::Failed,
                }
            }
        }
    }
}
