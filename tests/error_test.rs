//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use variant_browser::error::BrowserError;

/// BrowserErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BrowserError::Config("bad url".to_string()),
        BrowserError::Api(variant_browser_common::Error::Http(503)),
        BrowserError::PageOutOfRange { page: 9, total: 4 },
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_page_out_of_range_message() {
    let err = BrowserError::PageOutOfRange { page: 9, total: 4 };
    assert_eq!(err.to_string(), "Page 9 is out of range (1-4)");
}

/// 検索APIのエラーペイロードはそのまま表示
#[test]
fn test_alert_message_from_payload() {
    let err = BrowserError::Api(variant_browser_common::Error::Api {
        status: 500,
        message: "Data validation error".to_string(),
    });
    assert_eq!(err.alert_message(), "Error: Data validation error");
}

/// それ以外の失敗は汎用メッセージ
#[test]
fn test_alert_message_generic() {
    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err: BrowserError = io_err.into();
    assert_eq!(err.alert_message(), "An error occurred while fetching data");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BrowserError = io_err.into();

    assert!(matches!(err, BrowserError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BrowserError = json_err.into();

    assert!(matches!(err, BrowserError::JsonParse(_)));
}

/// 共通エラーはメッセージをそのまま使う
#[test]
fn test_common_error_is_transparent() {
    let err: BrowserError = variant_browser_common::Error::Http(404).into();
    assert_eq!(err.to_string(), "HTTP error! Status: 404");
}

/// 終了メッセージ: 応答エラーはアラート文言、設定エラーはそのまま
#[test]
fn test_exit_message() {
    let err = BrowserError::Api(variant_browser_common::Error::Api {
        status: 400,
        message: "Invalid chromosome".to_string(),
    });
    assert_eq!(err.exit_message(), "Error: Invalid chromosome");

    let err = BrowserError::Config("base_url must start with http:// or https://".to_string());
    assert_eq!(
        err.exit_message(),
        "Config error: base_url must start with http:// or https://"
    );

    let err = BrowserError::PageOutOfRange { page: 9, total: 4 };
    assert_eq!(err.exit_message(), "Page 9 is out of range (1-4)");
}
