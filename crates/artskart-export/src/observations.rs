//! Paged observation fetching
//!
//! Drains the observations list endpoint page by page and exposes the
//! records as a lazy, finite, forward-only stream. Only the current page is
//! held in memory.

use crate::api::{types::Observation, ApiClient, ObservationQuery};
use crate::error::{ExportError, Result};
use crate::progress;
use futures::stream::{self, Stream, TryStreamExt};
use indicatif::ProgressBar;
use tracing::debug;

enum PageCursor {
    /// No request issued yet
    First,
    /// Pages `index..total` remain
    Next {
        index: u32,
        total: u32,
        bar: ProgressBar,
    },
    Exhausted,
}

/// Stream every observation matching `query`, in page order.
///
/// The first response's `TotalPages` fixes how many follow-up requests are
/// issued; a count of 0 or 1 means the first page is all there is, and no
/// further requests go out. Record order within a page is preserved as
/// returned by the server. Any request or decode failure ends the stream
/// with the error; the stream is single-pass and cannot be restarted.
pub fn fetch_observations<'a>(
    client: &'a ApiClient,
    query: ObservationQuery,
) -> impl Stream<Item = Result<Observation>> + 'a {
    stream::try_unfold(PageCursor::First, move |cursor| {
        let query = query.clone();
        async move {
            match cursor {
                PageCursor::First => {
                    let page = client.list_observations(&query, None).await?;
                    debug!(
                        total_pages = page.total_pages,
                        records = page.observations.len(),
                        "Fetched first observation page"
                    );

                    let next = if page.total_pages > 1 {
                        PageCursor::Next {
                            index: 1,
                            total: page.total_pages,
                            bar: progress::page_progress(page.total_pages - 1),
                        }
                    } else {
                        PageCursor::Exhausted
                    };

                    Ok(Some((page.observations, next)))
                },
                PageCursor::Next { index, total, bar } => {
                    let page = client.list_observations(&query, Some(index)).await?;
                    bar.inc(1);

                    let next = if index + 1 < total {
                        PageCursor::Next {
                            index: index + 1,
                            total,
                            bar,
                        }
                    } else {
                        bar.finish_and_clear();
                        PageCursor::Exhausted
                    };

                    Ok(Some((page.observations, next)))
                },
                PageCursor::Exhausted => Ok::<_, ExportError>(None),
            }
        }
    })
    .map_ok(|records| stream::iter(records.into_iter().map(Ok::<_, ExportError>)))
    .try_flatten()
}
