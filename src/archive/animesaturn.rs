use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::error;

use super::{Archive, selector};
use crate::anime::{AnimeInfo, Episode, SearchResult};
use crate::batch;
use crate::errors::{Error, Result};
use crate::range::Window;
use crate::scraper::ScraperClient;

pub struct AnimeSaturn;

impl Archive for AnimeSaturn {
    const BASE_URL: &'static str = "https://animesaturn.tv";

    async fn search(client: &ScraperClient, keywords: &str) -> Result<Vec<SearchResult>> {
        let search_url = format!(
            "{}/animelist?search={}",
            Self::BASE_URL,
            urlencoding::encode(keywords)
        );

        let page = selector::get_page(client, &search_url)
            .await
            .inspect_err(|err| error!("Error fetching the webpage: {err}"))?;

        parse_search(&page)
    }

    /// Two-stage listing: the main page only yields per-episode detail-page
    /// urls, so a second fetch per episode extracts the streaming link. The
    /// detail fetches run in concurrent groups of 50; a failed group is
    /// dropped from the output without error, so the returned sequence may
    /// be shorter than the requested window. `progress` fires as each fetch
    /// is initiated, with the absolute 1-based position.
    ///
    /// Episode `number` is `1 + index` in the returned sequence, regardless
    /// of where the window starts.
    async fn episodes<F>(
        client: &ScraperClient,
        main_page_link: &str,
        mut progress: F,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Vec<Episode>>
    where
        F: FnMut(u32, u32, u32),
    {
        let window = Window::from_bounds(start, end)?;

        let url = format!("{}{main_page_link}", Self::BASE_URL);
        let pages = {
            let page = selector::get_page(client, &url)
                .await
                .inspect_err(|err| error!("Error fetching the webpage: {err}"))?;

            episode_pages(&page)
        };
        let (min, max) = window.clamp(pages.len() as u32);

        let links = batch::run(
            &pages,
            min,
            max,
            |url| stream_link(client, url),
            &mut progress,
        )
        .await;

        episodes_from_links(&links)
    }

    fn video_link(video_id: &str) -> String {
        format!("https://www.animesaturn.tv/watch?file={video_id}")
    }
}

impl AnimeSaturn {
    /// Scrapes the anime's display title and true episode count from its
    /// main page.
    pub async fn info(client: &ScraperClient, main_page_link: &str) -> Result<AnimeInfo> {
        let url = format!("{}{main_page_link}", Self::BASE_URL);
        let page = selector::get_page(client, &url)
            .await
            .inspect_err(|err| error!("Error fetching the webpage: {err}"))?;

        parse_info(&page)
    }
}

fn parse_search(page: &Html) -> Result<Vec<SearchResult>> {
    let entry = selector::from(".info-archivio h3 a");
    let domain = Regex::new(r"animesaturn\.tv(.*)").unwrap();

    page.select(&entry)
        .map(|a| {
            let name = a.text().collect::<String>();
            let href = a
                .value()
                .attr("href")
                .ok_or_else(|| Error::parsing("search result link"))?;

            let link = domain
                .captures(href)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .ok_or_else(|| Error::Parsing(href.to_string()))?;

            Ok(SearchResult::new(&name, link))
        })
        .collect()
}

/// Per-episode detail-page urls, in page order.
fn episode_pages(page: &Html) -> Vec<String> {
    let a = selector::from(".episodes-button a");

    page.select(&a)
        .filter_map(|e| e.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

async fn stream_link(client: &ScraperClient, url: String) -> Result<String> {
    let page = selector::get_page(client, &url).await?;

    parse_stream_link(&page)
}

/// The streaming anchor wraps a button whose `<b>` label reads
/// "Guarda lo Streaming": walk two levels up from the label to reach it.
fn parse_stream_link(page: &Html) -> Result<String> {
    let b = selector::from("b");

    page.select(&b)
        .find(|e| e.text().any(|t| t.contains("Guarda lo Streaming")))
        .and_then(|e| e.parent())
        .and_then(|node| node.parent())
        .and_then(ElementRef::wrap)
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.to_string())
        .ok_or_else(|| Error::parsing("streaming link"))
}

fn episodes_from_links(links: &[String]) -> Result<Vec<Episode>> {
    let id = Regex::new(r"watch\?file=(.*)").unwrap();

    links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let video_id = id
                .captures(link)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .ok_or_else(|| Error::Parsing(link.to_string()))?;

            Ok(Episode::new(index as u32 + 1, video_id))
        })
        .collect()
}

fn parse_info(page: &Html) -> Result<AnimeInfo> {
    let title = selector::from(".anime-title-as");
    let a = selector::from(".episodes-button a");

    let name = page
        .select(&title)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or_else(|| Error::parsing("anime title"))?;
    let episodes = page.select(&a).count() as u32;

    Ok(AnimeInfo {
        name: name.trim().to_string(),
        episodes,
    })
}
