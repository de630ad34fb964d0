//! 検索API・Ensembl REST APIクライアント

use crate::config::Config;
use crate::error::Result;
use std::time::Duration;
use tracing::{debug, warn};
use variant_browser_common::{
    parse_annotation, variation_url, AnnotationInfo, Error, ErrorPayload, FilterCriteria,
    PageResult,
};

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    ensembl_url: String,
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.effective_base_url(),
            ensembl_url: config.ensembl_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 1ページ分の検索結果を取得
    pub async fn fetch_page(&self, criteria: &FilterCriteria, page: u32) -> Result<PageResult> {
        let url = criteria.search_url(&self.base_url, page);
        debug!(%url, "fetching page");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        let result = decode_page(status, &body);
        if let Err(e) = &result {
            warn!(status, error = %e, "search request failed");
        }
        Ok(result?)
    }

    /// dbSNP IDのアノテーションを取得
    pub async fn fetch_annotation(&self, dbsnp_id: &str) -> Result<AnnotationInfo> {
        let url = variation_url(&self.ensembl_url, dbsnp_id);
        debug!(%url, "fetching annotation");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()).into());
        }

        let body = resp.text().await?;
        Ok(parse_annotation(&body)?)
    }
}

/// 検索APIのレスポンスを解釈
///
/// 失敗ステータスでは本文の `error` を返す（無ければステータスのみ）
pub fn decode_page(status: u16, body: &str) -> std::result::Result<PageResult, Error> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }

    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => Err(Error::Api {
            status,
            message: payload.error,
        }),
        Err(_) => Err(Error::Http(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_success() {
        let body = r#"{"items": [], "total": 0, "page": 1, "per_page": 10, "total_pages": 0}"#;
        let page = decode_page(200, body).expect("パース失敗");
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_decode_page_error_payload() {
        let body = r#"{"error": "API request failed: connection refused"}"#;
        match decode_page(500, body) {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "API request failed: connection refused");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_decode_page_error_without_payload() {
        assert!(matches!(decode_page(502, "Bad Gateway"), Err(Error::Http(502))));
    }

    #[test]
    fn test_decode_page_invalid_json() {
        assert!(matches!(decode_page(200, "<html>"), Err(Error::Json(_))));
    }
}
