//! インラインSVGアイコン

/// 折りたたみ中（右向き三角）
pub const COLLAPSED: &str = r#"<svg width="12" height="12" viewBox="0 0 16 12" xmlns="http://www.w3.org/2000/svg"><path d="M2 2l12 4-12 4z" fill="currentColor" stroke="currentColor" stroke-width="2" stroke-linejoin="round"/></svg>"#;

/// 展開中（下向き三角）
pub const EXPANDED: &str = r#"<svg width="12" height="12" viewBox="0 0 12 16" xmlns="http://www.w3.org/2000/svg"><path d="M2 2l4 12 4-12z" fill="currentColor" stroke="currentColor" stroke-width="2" stroke-linejoin="round"/></svg>"#;

/// 読み込み中スピナー
pub const SPINNER: &str = r#"<svg class="animate-spin h-5 w-5 text-gray-500" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"><circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle><path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path></svg>"#;
