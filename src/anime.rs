/// An anime returned by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Display title as shown on the site.
    pub name: String,
    /// Site-relative path of the anime's main page, starting with `/`.
    pub main_page_link: String,
}

impl SearchResult {
    pub(crate) fn new(name: &str, main_page_link: &str) -> Self {
        Self {
            name: name.to_string(),
            main_page_link: main_page_link.to_string(),
        }
    }
}

/// An episode entry inside a requested window.
///
/// `number` is relative to the returned sequence or the window, not the
/// episode number the site displays: each adapter documents its exact
/// numbering rule, and they differ when the window does not start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub number: u32,
    pub video_id: String,
}

impl Episode {
    pub(crate) fn new(number: u32, video_id: &str) -> Self {
        Self {
            number,
            video_id: video_id.to_string(),
        }
    }
}

/// Summary scraped from an anime's main page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeInfo {
    pub name: String,
    pub episodes: u32,
}
