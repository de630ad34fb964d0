//! 検索API (`/api/data`) 連携

use super::{get, read_json};
use variant_browser_common::{Error, ErrorPayload, FilterCriteria, PageResult};
use web_sys::RequestMode;

/// 検索条件とページ番号から1ページ分の結果を取得
///
/// 失敗時のステータスでは本文の `error` を `Error::Api` として返す
pub async fn fetch_page(criteria: &FilterCriteria, page: u32) -> Result<PageResult, Error> {
    // ページと同一オリジン
    let url = criteria.search_url("", page);
    let resp = get(&url, RequestMode::SameOrigin).await?;
    let json = read_json(&resp).await;

    if resp.ok() {
        serde_wasm_bindgen::from_value(json?).map_err(|e| Error::Network(e.to_string()))
    } else {
        // 本文がJSONでなければステータスのみ
        match json
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value::<ErrorPayload>(value).ok())
        {
            Some(payload) => Err(Error::Api {
                status: resp.status(),
                message: payload.error,
            }),
            None => Err(Error::Http(resp.status())),
        }
    }
}
