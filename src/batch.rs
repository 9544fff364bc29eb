use std::future::Future;

use futures::future::try_join_all;
use tracing::error;

use crate::errors::Result;

/// Number of detail pages fetched concurrently before the next group starts.
pub(crate) const BATCH_SIZE: usize = 50;

/// Fetches the items of `urls` whose 1-based position lies in `[min, max]`
/// in consecutive groups of [`BATCH_SIZE`], awaiting each group in full
/// before the next one starts. Within a group the fetches run concurrently,
/// but the output keeps input order regardless of completion order.
///
/// `progress` fires with `(min, max, position)` as each fetch is initiated,
/// not when it completes, so it runs ahead of actual completion. A failure
/// inside a group drops the whole group from the output (logged, never
/// propagated), so the result may be shorter than the window.
pub(crate) async fn run<F, Fut, P>(
    urls: &[String],
    min: u32,
    max: u32,
    mut fetch: F,
    progress: &mut P,
) -> Vec<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<String>>,
    P: FnMut(u32, u32, u32),
{
    let mut resolved = Vec::new();

    let mut current = min.saturating_sub(1) as usize;
    let last = max as usize;

    while current < last {
        let group_end = (current + BATCH_SIZE).min(last);

        let group: Vec<_> = (current..group_end)
            .map(|i| {
                progress(min, max, i as u32 + 1);
                fetch(urls[i].clone())
            })
            .collect();

        match try_join_all(group).await {
            Ok(values) => resolved.extend(values),
            Err(err) => error!("Error during batch resolution: {err}"),
        }

        current = group_end;
    }

    resolved
}
