//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// バックエンドが `{ "error": ... }` を返した場合
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error! Status: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 検索API失敗時にユーザーへ表示するメッセージ
    ///
    /// エラーペイロードがあればその内容、それ以外は汎用メッセージ
    pub fn alert_message(&self) -> String {
        match self {
            Error::Api { message, .. } => format!("Error: {}", message),
            _ => "An error occurred while fetching data".to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
