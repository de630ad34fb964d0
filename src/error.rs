use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Config error: {0}")]
    Config(String),

    /// 検索API・Ensemblの応答エラー
    #[error(transparent)]
    Api(#[from] variant_browser_common::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Page {page} is out of range (1-{total})")]
    PageOutOfRange { page: u32, total: u32 },
}

impl BrowserError {
    /// 検索失敗時に表示するメッセージ（ブラウザ版のアラートと同じ文言）
    pub fn alert_message(&self) -> String {
        match self {
            BrowserError::Api(e) => e.alert_message(),
            _ => "An error occurred while fetching data".to_string(),
        }
    }

    /// コマンド失敗時に標準エラーへ出すメッセージ
    ///
    /// 通信・応答のエラーはアラートと同じ文言、それ以外はエラー内容
    pub fn exit_message(&self) -> String {
        match self {
            BrowserError::Api(_) | BrowserError::Http(_) => self.alert_message(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
