use regex::Regex;
use scraper::Html;
use tracing::error;

use super::{Archive, selector};
use crate::anime::{Episode, SearchResult};
use crate::errors::{Error, Result};
use crate::range::Window;
use crate::scraper::ScraperClient;

pub struct AnimeItaly;

impl Archive for AnimeItaly {
    const BASE_URL: &'static str = "https://animeitaly.tv";

    async fn search(client: &ScraperClient, keywords: &str) -> Result<Vec<SearchResult>> {
        let search_url = format!("{}/?s={}", Self::BASE_URL, urlencoding::encode(keywords));

        let page = selector::get_page(client, &search_url)
            .await
            .inspect_err(|err| error!("Error fetching the webpage: {err}"))?;

        parse_search(&page)
    }

    async fn episodes<F>(
        client: &ScraperClient,
        main_page_link: &str,
        progress: F,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Vec<Episode>>
    where
        F: FnMut(u32, u32, u32),
    {
        let window = Window::from_bounds(start, end)?;

        let url = format!("{}{main_page_link}", Self::BASE_URL);
        let page = selector::get_page(client, &url)
            .await
            .inspect_err(|err| error!("Error fetching the webpage: {err}"))?;

        scrape_episodes(&page, window, progress)
    }

    fn video_link(video_id: &str) -> String {
        format!("https://streamtape.com/e/{video_id}")
    }
}

fn parse_search(page: &Html) -> Result<Vec<SearchResult>> {
    let entry = selector::from(".entry-header a");
    let domain = Regex::new(r"animeitaly\.tv(.*)").unwrap();

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

/// Episode `number` is the absolute 1-based position of the element on the
/// page; `progress` receives the one-based offset inside the window.
fn scrape_episodes<F>(page: &Html, window: Window, mut progress: F) -> Result<Vec<Episode>>
where
    F: FnMut(u32, u32, u32),
{
    let a = selector::from(".row-hover .column-2 a");
    let id = Regex::new(r"/v/(.*?)/").unwrap();

    let entries: Vec<_> = page.select(&a).collect();
    let (min, max) = window.clamp(entries.len() as u32);

    let mut found = Vec::new();
    for (index, e) in entries.iter().enumerate() {
        let number = index as u32 + 1;
        if number < min || number > max {
            continue;
        }

        let href = e
            .value()
            .attr("href")
            .ok_or_else(|| Error::parsing("episode link"))?;
        let video_id = id
            .captures(href)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| Error::Parsing(href.to_string()))?;

        found.push(Episode::new(number, video_id));
        progress(min, max, number - min + 1);
    }

    Ok(found)
}
