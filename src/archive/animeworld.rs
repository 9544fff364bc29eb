use scraper::Html;
use tracing::error;

use super::{Archive, selector};
use crate::anime::{Episode, SearchResult};
use crate::errors::{Error, Result};
use crate::range::Window;
use crate::scraper::ScraperClient;

pub struct AnimeWorld;

impl Archive for AnimeWorld {
    const BASE_URL: &'static str = "https://animeworld.so";

    async fn search(client: &ScraperClient, keywords: &str) -> Result<Vec<SearchResult>> {
        let search_url = format!(
            "{}/search?keyword={}",
            Self::BASE_URL,
            urlencoding::encode(keywords)
        );

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
        format!(
            "{}/api/episode/serverPlayerAnimeWorld?id={video_id}",
            Self::BASE_URL
        )
    }
}

fn parse_search(page: &Html) -> Result<Vec<SearchResult>> {
    let entry = selector::from(".film-list .name");

    page.select(&entry)
        .map(|a| {
            let name = a.text().collect::<String>();
            let link = a
                .value()
                .attr("href")
                .ok_or_else(|| Error::parsing("search result link"))?;

            Ok(SearchResult::new(&name, link))
        })
        .collect()
}

/// Episode `number` is the absolute 1-based position of the element on the
/// page; `progress` receives the zero-based offset inside the window.
fn scrape_episodes<F>(page: &Html, window: Window, mut progress: F) -> Result<Vec<Episode>>
where
    F: FnMut(u32, u32, u32),
{
    let a = selector::from(".server.active a");

    let entries: Vec<_> = page.select(&a).collect();
    let (min, max) = window.clamp(entries.len() as u32);

    let mut found = Vec::new();
    for (index, e) in entries.iter().enumerate() {
        let number = index as u32 + 1;
        if number < min || number > max {
            continue;
        }

        let video_id = e
            .value()
            .attr("data-id")
            .ok_or_else(|| Error::parsing("episode data-id"))?;

        found.push(Episode::new(number, video_id));
        progress(min, max, number - min);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
    <div class="film-list">
        <div class="item">
            <a class="name" href="/play/boruto-naruto-next-generations.lYBFQ">Boruto: Naruto Next Generations</a>
        </div>
        <div class="item">
            <a class="name" href="/play/naruto-shippuden.v3U8a">Naruto Shippuden</a>
        </div>
    </div>"#;

    const EPISODE_PAGE: &str = r#"
    <div class="widget servers">
        <div class="server active" data-name="9">
            <ul class="episodes">
                <li class="episode"><a data-id="mMTd5" href="/play/naruto-shippuden.v3U8a/mMTd5">1</a></li>
                <li class="episode"><a data-id="I1EWI" href="/play/naruto-shippuden.v3U8a/I1EWI">2</a></li>
                <li class="episode"><a data-id="xYcpW" href="/play/naruto-shippuden.v3U8a/xYcpW">3</a></li>
                <li class="episode"><a data-id="o93AD" href="/play/naruto-shippuden.v3U8a/o93AD">4</a></li>
                <li class="episode"><a data-id="bTx2z" href="/play/naruto-shippuden.v3U8a/bTx2z">5</a></li>
            </ul>
        </div>
    </div>"#;

    #[test]
    fn test_parse_search() {
        let page = Html::parse_document(SEARCH_PAGE);
        let found = parse_search(&page).unwrap();

        assert_eq!(
            found,
            vec![
                SearchResult::new(
                    "Boruto: Naruto Next Generations",
                    "/play/boruto-naruto-next-generations.lYBFQ"
                ),
                SearchResult::new("Naruto Shippuden", "/play/naruto-shippuden.v3U8a"),
            ]
        );
    }

    #[test]
    fn test_scrape_all_episodes() {
        let page = Html::parse_document(EPISODE_PAGE);
        let mut reports = Vec::new();

        let episodes = scrape_episodes(&page, Window::default(), |min, max, current| {
            reports.push((min, max, current))
        })
        .unwrap();

        assert_eq!(
            episodes,
            vec![
                Episode::new(1, "mMTd5"),
                Episode::new(2, "I1EWI"),
                Episode::new(3, "xYcpW"),
                Episode::new(4, "o93AD"),
                Episode::new(5, "bTx2z"),
            ]
        );
        // max clamped to the true count, current is the zero-based offset
        assert_eq!(
            reports,
            vec![(1, 5, 0), (1, 5, 1), (1, 5, 2), (1, 5, 3), (1, 5, 4)]
        );
    }

    #[test]
    fn test_scrape_episode_window() {
        let page = Html::parse_document(EPISODE_PAGE);
        let mut reports = Vec::new();

        let window = Window::new(2, 4).unwrap();
        let episodes = scrape_episodes(&page, window, |min, max, current| {
            reports.push((min, max, current))
        })
        .unwrap();

        // numbering stays the absolute page position
        assert_eq!(
            episodes,
            vec![
                Episode::new(2, "I1EWI"),
                Episode::new(3, "xYcpW"),
                Episode::new(4, "o93AD"),
            ]
        );
        assert_eq!(reports, vec![(2, 4, 0), (2, 4, 1), (2, 4, 2)]);
    }

    #[test]
    fn test_scrape_episodes_clamped() {
        let page = Html::parse_document(EPISODE_PAGE);

        let window = Window::new(3, 100).unwrap();
        let episodes = scrape_episodes(&page, window, |_, _, _| {}).unwrap();

        assert_eq!(episodes.len(), 3);
        assert_eq!(episodes.first().unwrap().number, 3);
        assert_eq!(episodes.last().unwrap().number, 5);
    }

    #[test]
    fn test_missing_data_id() {
        let html = r#"
        <div class="server active">
            <ul><li><a href="/play/anime.xxxxx/yyyyy">1</a></li></ul>
        </div>"#;
        let page = Html::parse_document(html);

        let res = scrape_episodes(&page, Window::default(), |_, _, _| {});
        assert!(matches!(res, Err(Error::Parsing(_))));
    }

    #[tokio::test]
    async fn test_invalid_window() {
        let client = ScraperClient::new().unwrap();

        let res = AnimeWorld::episodes(&client, "/play/x.yyyyy", |_, _, _| {}, Some(5), None).await;
        assert!(matches!(res, Err(Error::InvalidWindow)));

        let res =
            AnimeWorld::episodes(&client, "/play/x.yyyyy", |_, _, _| {}, None, Some(10)).await;
        assert!(matches!(res, Err(Error::InvalidWindow)));

        let res =
            AnimeWorld::episodes(&client, "/play/x.yyyyy", |_, _, _| {}, Some(3), Some(2)).await;
        assert!(matches!(res, Err(Error::InvalidWindow)));
    }

    #[test]
    fn test_video_link() {
        let link = AnimeWorld::video_link("abc123");

        assert_eq!(
            link,
            "https://animeworld.so/api/episode/serverPlayerAnimeWorld?id=abc123"
        );
        assert_eq!(link, AnimeWorld::video_link("abc123"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_remote() {
        let client = ScraperClient::new().unwrap();

        let found = AnimeWorld::search(&client, "one piece").await.unwrap();
        assert!(!found.is_empty());

        let episodes = AnimeWorld::episodes(
            &client,
            &found.first().unwrap().main_page_link,
            |_, _, _| {},
            None,
            None,
        )
        .await
        .unwrap();
        assert!(!episodes.is_empty());
    }
}
