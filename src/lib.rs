//! Scraping backends for anime streaming sites.
//!
//! Every supported site is a unit struct implementing [`Archive`]: keyword
//! search, windowed episode listing with a progress callback, video-link
//! construction and playback through the OS default handler.
//!
//! ```no_run
//! use anime_stream::{AnimeWorld, Archive, ScraperClient};
//!
//! # async fn run() -> anime_stream::Result<()> {
//! let client = ScraperClient::new()?;
//!
//! let found = AnimeWorld::search(&client, "naruto").await?;
//! let anime = found.first().unwrap();
//!
//! let episodes = AnimeWorld::episodes(
//!     &client,
//!     &anime.main_page_link,
//!     |min, max, current| println!("{min} - {current} -> {max}"),
//!     None,
//!     None,
//! )
//! .await?;
//!
//! let url = AnimeWorld::video_link(&episodes.first().unwrap().video_id);
//! AnimeWorld::play_video(&url);
//! # Ok(())
//! # }
//! ```

pub use anime::{AnimeInfo, Episode, SearchResult};
pub use archive::{AnimeItaly, AnimeSaturn, AnimeWorld, Archive};
pub use errors::{Error, Result};
pub use player::Launcher;
pub use range::Window;
pub use scraper::ScraperClient;

mod anime;
mod archive;
mod batch;
mod errors;
mod player;
mod range;
mod scraper;
