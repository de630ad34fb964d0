//! 閲覧セッションの状態
//!
//! - PageController: 現在ページ・総ページ数と、最新リクエストの判定
//! - AnnotationCache: 行ごとのアノテーション取得状態（1行につき成功まで1回）

use crate::annotation::AnnotationInfo;
use crate::pagination::{nav_state, NavState};
use crate::types::{PageResult, RowId};
use std::collections::HashMap;

/// ページ取得リクエストの番号札
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    pub page: u32,
}

/// 現在ページと総ページ数を保持する
///
/// レスポンスは発行順に関係なく届くため、最後に発行したチケット以外の結果は破棄する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController {
    current_page: u32,
    total_pages: u32,
    latest_seq: u64,
}

impl Default for PageController {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            latest_seq: 0,
        }
    }
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// 新しいリクエストを発行（以前のチケットは無効になる）
    pub fn begin(&mut self, page: u32) -> RequestTicket {
        self.latest_seq += 1;
        RequestTicket {
            seq: self.latest_seq,
            page: page.max(1),
        }
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// 最新チケットの結果ならページ情報を更新して true
    pub fn accept(&mut self, ticket: RequestTicket, result: &PageResult) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.current_page = result.page;
        self.total_pages = result.total_pages;
        true
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    pub fn nav_state(&self) -> NavState {
        nav_state(self.current_page, self.total_pages)
    }
}

/// 行ごとのアノテーション取得状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnnotationState {
    #[default]
    NotRequested,
    Loading,
    Loaded(AnnotationInfo),
    Failed(String),
}

/// 行IDをキーにしたアノテーション状態のマップ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationCache {
    states: HashMap<RowId, AnnotationState>,
}

impl AnnotationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: RowId) -> AnnotationState {
        self.states.get(&id).cloned().unwrap_or_default()
    }

    /// 取得を開始できれば Loading にして取得対象のIDを返す
    ///
    /// dbSNP IDが無い行、取得中・取得済みの行は None
    pub fn begin(&mut self, id: RowId, dbsnp: Option<&str>) -> Option<String> {
        let dbsnp = dbsnp?;
        match self.states.get(&id) {
            Some(AnnotationState::Loading) | Some(AnnotationState::Loaded(_)) => None,
            _ => {
                self.states.insert(id, AnnotationState::Loading);
                Some(dbsnp.to_string())
            }
        }
    }

    /// 取得結果を反映（取得中でない行は無視）
    pub fn finish(&mut self, id: RowId, result: Result<AnnotationInfo, String>) {
        if let Some(state) = self.states.get_mut(&id) {
            if *state == AnnotationState::Loading {
                *state = match result {
                    Ok(info) => AnnotationState::Loaded(info),
                    Err(message) => AnnotationState::Failed(message),
                };
            }
        }
    }

    /// ページ切り替え時に全行の状態を破棄
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_result(page: u32, total_pages: u32) -> PageResult {
        PageResult {
            page,
            total_pages,
            per_page: 10,
            total: u64::from(total_pages) * 10,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_controller_initial_state() {
        let controller = PageController::new();
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.total_pages(), 1);
        assert_eq!(controller.prev_page(), None);
        assert_eq!(controller.next_page(), None);
    }

    #[test]
    fn test_controller_accepts_latest() {
        let mut controller = PageController::new();
        let ticket = controller.begin(3);
        assert_eq!(ticket.page, 3);
        assert!(controller.accept(ticket, &page_result(3, 7)));
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.prev_page(), Some(2));
        assert_eq!(controller.next_page(), Some(4));
    }

    #[test]
    fn test_controller_discards_stale_response() {
        let mut controller = PageController::new();
        let first = controller.begin(2);
        let second = controller.begin(5);

        // 後から発行したリクエストが先に届く
        assert!(controller.accept(second, &page_result(5, 9)));
        assert!(!controller.accept(first, &page_result(2, 9)));
        assert_eq!(controller.current_page(), 5);
    }

    #[test]
    fn test_controller_last_page() {
        let mut controller = PageController::new();
        let ticket = controller.begin(4);
        controller.accept(ticket, &page_result(4, 4));
        assert_eq!(controller.next_page(), None);
        assert!(controller.nav_state().next_disabled);
        assert!(!controller.nav_state().prev_disabled);
    }

    #[test]
    fn test_annotation_fetched_once_after_success() {
        let mut cache = AnnotationCache::new();
        assert_eq!(cache.begin(1, Some("rs7412")), Some("rs7412".to_string()));
        cache.finish(1, Ok(AnnotationInfo::default()));

        // 閉じて再度開いても再取得しない
        assert_eq!(cache.begin(1, Some("rs7412")), None);
        assert!(matches!(cache.state(1), AnnotationState::Loaded(_)));
    }

    #[test]
    fn test_annotation_not_refetched_while_loading() {
        let mut cache = AnnotationCache::new();
        assert!(cache.begin(1, Some("rs1")).is_some());
        assert_eq!(cache.begin(1, Some("rs1")), None);
        assert_eq!(cache.state(1), AnnotationState::Loading);
    }

    #[test]
    fn test_annotation_retry_after_failure() {
        let mut cache = AnnotationCache::new();
        cache.begin(2, Some("rs2"));
        cache.finish(2, Err("HTTP error! Status: 503".to_string()));
        assert!(matches!(cache.state(2), AnnotationState::Failed(_)));
        assert_eq!(cache.begin(2, Some("rs2")), Some("rs2".to_string()));
    }

    #[test]
    fn test_annotation_without_dbsnp_never_fetches() {
        let mut cache = AnnotationCache::new();
        assert_eq!(cache.begin(3, None), None);
        assert_eq!(cache.state(3), AnnotationState::NotRequested);
    }

    #[test]
    fn test_annotation_null_dbsnp_row_never_fetches() {
        let json = r#"{"id": 4, "locus_repr": "chr2: 9", "allele_repr": "G→A", "dbsnp": "null", "dp": 8}"#;
        let row: crate::types::VariantRow = serde_json::from_str(json).unwrap();
        let mut cache = AnnotationCache::new();
        assert_eq!(cache.begin(row.id, row.dbsnp.as_deref()), None);
    }

    #[test]
    fn test_annotation_finish_after_clear_is_ignored() {
        let mut cache = AnnotationCache::new();
        cache.begin(5, Some("rs5"));
        cache.clear();
        cache.finish(5, Ok(AnnotationInfo::default()));
        assert_eq!(cache.state(5), AnnotationState::NotRequested);
    }
}
