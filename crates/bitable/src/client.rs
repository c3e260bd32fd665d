//! Bitable search client with cursor pagination.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::BitableConfig;
use crate::error::BitableError;
use crate::filter::SearchFilter;
use crate::record::RawRecord;
use crate::token::tenant_access_token;

/// Fixed page size for record search requests.
const PAGE_SIZE: u32 = 500;

/// Search request body.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a SearchFilter>,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

/// Top-level search response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Option<SearchPageData>,
}

/// One page of search results.
///
/// `items` is `None` when the server explicitly reports no match;
/// that is "no data", not an error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchPageData {
    pub(crate) items: Option<Vec<RawRecord>>,
    #[serde(default)]
    pub(crate) has_more: bool,
    pub(crate) page_token: Option<String>,
}

/// What to do after folding one page into the accumulator.
#[derive(Debug, PartialEq)]
pub(crate) enum PageOutcome {
    /// More pages exist; continue from this cursor.
    Continue(String),
    /// Last page consumed.
    Done,
    /// Server reported a null item set; the whole search is empty.
    NoItems,
}

/// Fold one page into the accumulator, preserving server order.
///
/// A page claiming `has_more` without a cursor cannot be followed and
/// ends the search with what has been accumulated so far.
pub(crate) fn apply_page(acc: &mut Vec<RawRecord>, page: SearchPageData) -> PageOutcome {
    let items = match page.items {
        Some(items) => items,
        None => return PageOutcome::NoItems,
    };

    acc.extend(items);

    match (page.has_more, page.page_token) {
        (true, Some(token)) => PageOutcome::Continue(token),
        _ => PageOutcome::Done,
    }
}

/// Client for the Bitable record search API.
///
/// Each [`search`](BitableClient::search) call exchanges the configured
/// credentials for a fresh tenant access token, then follows the
/// pagination cursor sequentially until the server reports no more
/// pages. There is no retry and no partial-result recovery: a failure
/// mid-pagination discards every page accumulated for that call.
#[derive(Clone)]
pub struct BitableClient {
    http: Client,
    config: BitableConfig,
}

impl BitableClient {
    /// Create a new client from the given configuration.
    pub fn new(config: BitableConfig) -> Result<Self, BitableError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(BitableError::Http)?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BitableConfig {
        &self.config
    }

    /// Search a table, returning all matching records in server order.
    ///
    /// An explicit `null` item set from the server yields an empty
    /// vector ("no match"), never an error.
    pub async fn search(
        &self,
        table_id: &str,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<RawRecord>, BitableError> {
        let token = tenant_access_token(&self.http, &self.config).await?;

        let url = format!(
            "{}/open-apis/bitable/v1/apps/{}/tables/{}/records/search",
            self.config.api_url, self.config.base_id, table_id
        );

        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_number = 1u32;

        loop {
            let request = SearchRequest {
                filter,
                page_size: PAGE_SIZE,
                page_token: page_token.as_deref(),
            };

            debug!(table_id, page = page_number, "Sending search request");

            let response = self
                .http
                .post(&url)
                .bearer_auth(&token)
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(table_id, status = status.as_u16(), %body, "Search request failed");
                return Err(BitableError::Fetch {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.text().await?;
            let envelope: SearchResponse = serde_json::from_str(&body)?;

            if envelope.code != 0 {
                error!(table_id, code = envelope.code, msg = %envelope.msg, "Search returned API error");
                return Err(BitableError::Api {
                    code: envelope.code,
                    msg: envelope.msg,
                });
            }

            match apply_page(&mut all_items, envelope.data.unwrap_or_default()) {
                PageOutcome::NoItems => {
                    info!(table_id, "No matching records");
                    return Ok(Vec::new());
                }
                PageOutcome::Continue(token) => {
                    page_token = Some(token);
                    page_number += 1;
                }
                PageOutcome::Done => break,
            }
        }

        if self.config.dump_responses {
            dump_items(table_id, &all_items);
        }

        info!(table_id, total = all_items.len(), "Search complete");
        Ok(all_items)
    }
}

/// Best-effort dump of the accumulated items to
/// `{table_id}_output.json`, overwritten on each call.
fn dump_items(table_id: &str, items: &[RawRecord]) {
    let path = format!("{}_output.json", table_id);
    let payload = serde_json::json!({ "items": items });

    match serde_json::to_string_pretty(&payload) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!(%path, "Failed to dump search results: {}", e);
            } else {
                debug!(%path, "Dumped search results");
            }
        }
        Err(e) => warn!(%path, "Failed to serialize search results: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize) -> RawRecord {
        RawRecord {
            record_id: format!("rec{}", id),
            fields: Default::default(),
        }
    }

    fn page(ids: std::ops::Range<usize>, has_more: bool, token: Option<&str>) -> SearchPageData {
        SearchPageData {
            items: Some(ids.map(record).collect()),
            has_more,
            page_token: token.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_three_pages_accumulate_in_order() {
        let pages = vec![
            page(0..500, true, Some("p2")),
            page(500..1000, true, Some("p3")),
            page(1000..1120, false, None),
        ];

        let mut acc = Vec::new();
        let mut outcomes = Vec::new();
        for p in pages {
            outcomes.push(apply_page(&mut acc, p));
        }

        assert_eq!(
            outcomes,
            vec![
                PageOutcome::Continue("p2".to_string()),
                PageOutcome::Continue("p3".to_string()),
                PageOutcome::Done,
            ]
        );
        assert_eq!(acc.len(), 1120);
        assert_eq!(acc[0].record_id, "rec0");
        assert_eq!(acc[499].record_id, "rec499");
        assert_eq!(acc[500].record_id, "rec500");
        assert_eq!(acc[1119].record_id, "rec1119");
    }

    #[test]
    fn test_null_items_means_no_match() {
        let mut acc = vec![record(0)];
        let outcome = apply_page(
            &mut acc,
            SearchPageData {
                items: None,
                has_more: false,
                page_token: None,
            },
        );
        assert_eq!(outcome, PageOutcome::NoItems);
    }

    #[test]
    fn test_has_more_without_cursor_stops() {
        let mut acc = Vec::new();
        let outcome = apply_page(&mut acc, page(0..10, true, None));
        assert_eq!(outcome, PageOutcome::Done);
        assert_eq!(acc.len(), 10);
    }

    #[test]
    fn test_search_request_omits_absent_fields() {
        let request = SearchRequest {
            filter: None,
            page_size: PAGE_SIZE,
            page_token: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "page_size": 500 }));
    }

    #[test]
    fn test_search_request_carries_cursor() {
        let filter = SearchFilter::field_is("Debtor", "NT01");
        let request = SearchRequest {
            filter: Some(&filter),
            page_size: PAGE_SIZE,
            page_token: Some("cursor-1"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["page_token"], "cursor-1");
        assert_eq!(json["filter"]["conjunction"], "and");
    }

    #[test]
    fn test_envelope_without_data_decodes() {
        let envelope: SearchResponse =
            serde_json::from_str(r#"{"code":0,"msg":"success"}"#).unwrap();
        assert_eq!(envelope.code, 0);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_with_null_items_decodes() {
        let envelope: SearchResponse = serde_json::from_str(
            r#"{"code":0,"msg":"success","data":{"items":null,"has_more":false}}"#,
        )
        .unwrap();
        let data = envelope.data.unwrap();
        assert!(data.items.is_none());
        assert!(!data.has_more);
    }
}
