//! HTTP API連携
//!
//! - search: ローカル検索API (`/api/data`)
//! - ensembl: Ensembl REST API（アノテーション）

pub mod ensembl;
pub mod search;

use variant_browser_common::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GETリクエストを発行してレスポンスを返す（ステータスは呼び出し側で判定）
pub(crate) async fn get(url: &str, mode: RequestMode) -> Result<Response, Error> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(mode);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    resp_value.dyn_into().map_err(js_error)
}

/// レスポンス本文をJSONとして読み込む
pub(crate) async fn read_json(resp: &Response) -> Result<JsValue, Error> {
    JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

/// レスポンス本文を文字列として読み込む
pub(crate) async fn read_text(resp: &Response) -> Result<String, Error> {
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Network("response body is not text".into()))
}

pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
