use std::ops::Deref;

use reqwest::{Client, header, header::HeaderValue};

use crate::errors::Result;

/// Http client preconfigured with the browser-like headers the sites expect.
///
/// Constructed once by the caller and shared by reference across every
/// adapter call; it carries no per-site state.
pub struct ScraperClient(Client);

impl ScraperClient {
    #[rustfmt::skip]
    const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml; q=0.9,image/webp,*/*; q=0.8";
    const USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:126.0) Gecko/20100101 Firefox/126.0";

    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .default_headers(Self::headers())
            .build()?;

        Ok(Self(client))
    }

    fn headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();

        headers.insert(header::ACCEPT, HeaderValue::from_static(Self::ACCEPT));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("it"));

        headers
    }
}

impl Deref for ScraperClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
