use crate::{
    error::LookupError,
    http::create_http_client,
    types::{ContactRecord, DomainRecord, HistoryEntry, LookupConfig, LookupMode},
};
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

const MAX_HISTORY: u32 = 100;

/// A decoded success body, shaped by the requested mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRecord {
    Domain(DomainRecord),
    Contact(ContactRecord),
}

#[derive(Debug, Default, Deserialize)]
struct HistoryPage {
    #[serde(default)]
    items: Vec<HistoryEntry>,
}

/// Client for the remote lookup API.
#[derive(Debug, Clone)]
pub struct WhoisApi {
    client: Client,
    base: Url,
}

impl WhoisApi {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = create_http_client(config.timeout)?;
        Self::with_client(client, &config.api_base)
    }

    pub fn with_client(client: Client, api_base: &str) -> Result<Self, LookupError> {
        let base = Url::parse(api_base.trim())
            .map_err(|e| LookupError::InvalidBaseUrl(format!("{}: {}", api_base, e)))?;
        if base.cannot_be_a_base() {
            return Err(LookupError::InvalidBaseUrl(api_base.to_string()));
        }
        Ok(Self { client, base })
    }

    /// `{base}/whois/{domain}?type={mode}`. The domain is sent as given.
    pub fn lookup_url(&self, domain: &str, mode: LookupMode) -> Url {
        let mut url = self.endpoint(&["whois", domain]);
        url.query_pairs_mut().append_pair("type", mode.as_str());
        url
    }

    pub fn history_url(&self, limit: u32) -> Url {
        let mut url = self.endpoint(&["history"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.clamp(1, MAX_HISTORY).to_string());
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn fetch(&self, domain: &str, mode: LookupMode) -> Result<LookupRecord, LookupError> {
        let url = self.lookup_url(domain, mode);
        let record = match mode {
            LookupMode::Domain => LookupRecord::Domain(self.get_json(url).await?),
            LookupMode::Contact => LookupRecord::Contact(self.get_json(url).await?),
        };
        Ok(record)
    }

    pub async fn history(&self, limit: u32) -> Result<Vec<HistoryEntry>, LookupError> {
        let page: HistoryPage = self.get_json(self.history_url(limit)).await?;
        Ok(page.items)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, LookupError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(LookupError::from_response(status, &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> WhoisApi {
        WhoisApi::with_client(Client::new(), base).unwrap()
    }

    #[test]
    fn lookup_url_appends_to_base_path() {
        let url = api("http://localhost:5000/api").lookup_url("example.com", LookupMode::Domain);
        assert_eq!(url.as_str(), "http://localhost:5000/api/whois/example.com?type=domain");

        let url = api("http://localhost:5000/api/").lookup_url("example.com", LookupMode::Contact);
        assert_eq!(url.as_str(), "http://localhost:5000/api/whois/example.com?type=contact");
    }

    #[test]
    fn lookup_url_keeps_domain_in_one_segment() {
        let url = api("http://h/api").lookup_url("a/b?c", LookupMode::Domain);
        assert_eq!(url.path(), "/api/whois/a%2Fb%3Fc");
        assert_eq!(url.query(), Some("type=domain"));
    }

    #[test]
    fn history_limit_is_clamped() {
        let base = api("http://h/api");
        assert_eq!(base.history_url(0).query(), Some("limit=1"));
        assert_eq!(base.history_url(20).query(), Some("limit=20"));
        assert_eq!(base.history_url(5000).query(), Some("limit=100"));
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            WhoisApi::with_client(Client::new(), "not a url"),
            Err(LookupError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            WhoisApi::with_client(Client::new(), "mailto:someone@example.com"),
            Err(LookupError::InvalidBaseUrl(_))
        ));
    }
}
