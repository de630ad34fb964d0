//! Ensembl REST API連携

use super::{get, read_text};
use variant_browser_common::{parse_annotation, variation_url, AnnotationInfo, Error, ENSEMBL_REST_URL};
use web_sys::RequestMode;

/// dbSNP IDのアノテーションを取得
pub async fn fetch_annotation(dbsnp_id: &str) -> Result<AnnotationInfo, Error> {
    let url = variation_url(ENSEMBL_REST_URL, dbsnp_id);
    let resp = get(&url, RequestMode::Cors).await?;

    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let body = read_text(&resp).await?;
    parse_annotation(&body)
}
