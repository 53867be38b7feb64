//! Cursor-following page aggregator

use super::types::{PaginationConfig, PaginationState, Phase};
use crate::decode::{decode_envelope, Envelope, Page};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::query::CursorRequest;
use tracing::{debug, warn};

/// Drains one paginated endpoint per call.
///
/// Holds no state between calls, so one aggregator (or several sharing a
/// transport) can serve concurrent aggregations.
pub struct Aggregator<'a, T: ?Sized> {
    transport: &'a T,
    config: PaginationConfig,
}

impl<'a, T: Transport + ?Sized> Aggregator<'a, T> {
    /// Create an unbounded aggregator over a transport
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            config: PaginationConfig::default(),
        }
    }

    /// Set pagination configuration
    #[must_use]
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    /// Pagination configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch every page of `path` starting from `request`.
    ///
    /// Pages are fetched strictly one after another; each request differs
    /// from the previous one only in its cursor. The returned envelope has
    /// `retCode = 0`, `retMsg = "OK"`, all records in arrival order and an
    /// empty cursor, whatever the last page reported. The first fetch or
    /// decode failure aborts the call and discards the records gathered so
    /// far.
    pub async fn aggregate<R, P>(&self, path: &str, mut request: R) -> Result<Envelope<P>>
    where
        R: CursorRequest + Send,
        P: Page,
    {
        let mut state = PaginationState::new();
        let mut all_records: Vec<P::Record> = Vec::new();

        loop {
            if let Some(max_pages) = self.config.max_pages {
                if state.pages >= max_pages {
                    state.advance(Phase::Failed);
                    warn!(path, max_pages, "page limit reached before last page");
                    return Err(Error::PageLimitExceeded {
                        path: path.to_string(),
                        max_pages,
                    });
                }
            }

            let params = request.to_query();
            state.add_page();
            debug!(path, page = state.pages, "fetching page");

            let value = match self.transport.get(path, &params).await {
                Ok(value) => value,
                Err(e) => {
                    state.advance(Phase::Failed);
                    return Err(Error::fetch(path, e));
                }
            };

            state.advance(Phase::Decoding);
            let mut page = match decode_envelope::<P>(&value) {
                Ok(envelope) => envelope.result,
                Err(e) => {
                    state.advance(Phase::Failed);
                    return Err(Error::decode(path, e));
                }
            };

            state.advance(Phase::Accumulating);
            let records = page.take_records();
            state.add_records(records.len());
            all_records.extend(records);

            if page.next_cursor().is_empty() {
                state.advance(Phase::Done);
                debug!(
                    path,
                    pages = state.pages,
                    records = state.records,
                    "pagination complete"
                );
                page.finish(all_records);
                return Ok(Envelope::ok(page));
            }

            request.set_cursor(page.next_cursor().to_string());
            state.advance(Phase::Fetching);
        }
    }
}
