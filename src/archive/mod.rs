pub mod animeitaly;
pub mod animesaturn;
pub mod animeworld;

pub use animeitaly::AnimeItaly;
pub use animesaturn::AnimeSaturn;
pub use animeworld::AnimeWorld;

use crate::anime::{Episode, SearchResult};
use crate::errors::Result;
use crate::player;
use crate::scraper::ScraperClient;

/// Per-site scraping backend.
///
/// Every site implements the same four operations: keyword search, windowed
/// episode listing with a synchronous progress callback, video-link
/// construction and playback through the OS default handler. Adapters hold
/// no state; each call is independent and reentrant.
#[allow(async_fn_in_trait)]
pub trait Archive {
    /// Site origin, without a trailing slash.
    const BASE_URL: &'static str;

    /// Searches the site for `keywords` and returns the matches in page
    /// order. Keywords are percent-encoded before transmission.
    async fn search(client: &ScraperClient, keywords: &str) -> Result<Vec<SearchResult>>;

    /// Lists the episodes of `main_page_link` whose 1-based position falls
    /// in the `[start, end]` window. Both bounds given must satisfy
    /// `1 <= start <= end`; neither given selects every episode; any other
    /// combination fails with [`Error::InvalidWindow`](crate::Error::InvalidWindow)
    /// before any request is issued.
    ///
    /// `progress` receives `(min, max, current)` once per episode, where
    /// `max` is already clamped to the true episode count; see each adapter
    /// for the exact value of `current`.
    async fn episodes<F>(
        client: &ScraperClient,
        main_page_link: &str,
        progress: F,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Vec<Episode>>
    where
        F: FnMut(u32, u32, u32);

    /// Direct video url for `video_id`. Pure string formatting, no I/O:
    /// repeated calls return identical output and the id is embedded
    /// verbatim, unvalidated.
    fn video_link(video_id: &str) -> String;

    /// Opens `video_link` with the OS default handler. Fire-and-forget:
    /// spawn failures are logged and swallowed, the call always returns.
    fn play_video(video_link: &str) {
        player::play(video_link)
    }
}

pub(crate) mod selector {
    use reqwest::Client;
    use scraper::{Html, Selector};

    use crate::errors::Result;

    pub fn from(s: &str) -> Selector {
        match Selector::parse(s) {
            Ok(s) => s,
            Err(_) => panic!("unable to parse selector {s}"),
        }
    }

    pub async fn get_page(client: &Client, url: &str) -> Result<Html> {
        tracing::debug!("GET {url}");

        let response = client.get(url).send().await?.error_for_status()?;
        let page = Html::parse_document(&response.text().await?);

        Ok(page)
    }
}
