//! ページネーション表示の計算
//!
//! 現在ページを中心とした固定幅のページ番号ウィンドウ、
//! 前後ボタンの有効/無効、「Showing A to B of N results」ラベルを
//! DOMに依存しない純粋関数として提供する。

use serde::Serialize;

/// ページ番号ボタンの表示数
pub const PAGE_WINDOW_WIDTH: u32 = 3;

/// ページ番号欄の要素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageButton {
    /// 指定ページへ移動するボタン（`current` は現在ページ）
    Page { number: u32, current: bool },
    Ellipsis,
}

/// ウィンドウの範囲 `[start, end]`（ページが無ければ None）
pub fn window_bounds(current: u32, total: u32, width: u32) -> Option<(u32, u32)> {
    if total == 0 {
        return None;
    }
    // u32::MAX 付近でも溢れないよう u64 で計算
    let (current, total, width) = (u64::from(current), u64::from(total), u64::from(width.max(1)));
    let mut start = current.saturating_sub(width / 2).max(1);
    let end = total.min(start + width - 1);

    // 末尾で切り詰められた分だけ左へずらす
    if end + 1 < start + width {
        start = (end + 1).saturating_sub(width).max(1);
    }
    // どちらも total 以下
    Some((start as u32, end as u32))
}

/// ページ番号欄のボタン列
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<PageButton> {
    let Some((start, end)) = window_bounds(current, total, width) else {
        return Vec::new();
    };

    let mut buttons = Vec::new();
    if start > 1 {
        buttons.push(PageButton::Page { number: 1, current: current == 1 });
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }

    buttons.extend((start..=end).map(|number| PageButton::Page {
        number,
        current: number == current,
    }));

    if end < total {
        if end + 1 < total {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page { number: total, current: current == total });
    }
    buttons
}

/// 前へ/次へボタンの状態（デスクトップ・モバイル共通）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

pub fn nav_state(current: u32, total: u32) -> NavState {
    NavState {
        prev_disabled: current <= 1,
        next_disabled: current >= total,
    }
}

/// 表示中の件数範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLabel {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl std::fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} to {} of {} results", self.start, self.end, self.total)
    }
}

pub fn range_label(total: u64, page: u32, per_page: u32) -> RangeLabel {
    let page = u64::from(page.max(1));
    let per_page = u64::from(per_page);
    RangeLabel {
        start: (page - 1) * per_page + 1,
        end: (page * per_page).min(total),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, current: bool) -> PageButton {
        PageButton::Page { number, current }
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(window_bounds(5, 10, 3), Some((4, 6)));
        assert_eq!(
            page_window(5, 10, 3),
            vec![
                page(1, false),
                PageButton::Ellipsis,
                page(4, false),
                page(5, true),
                page(6, false),
                PageButton::Ellipsis,
                page(10, false),
            ]
        );
    }

    #[test]
    fn test_window_fits_all_pages() {
        assert_eq!(window_bounds(1, 3, 3), Some((1, 3)));
        assert_eq!(
            page_window(1, 3, 3),
            vec![page(1, true), page(2, false), page(3, false)]
        );
    }

    #[test]
    fn test_window_clamped_at_end() {
        assert_eq!(window_bounds(5, 5, 3), Some((3, 5)));
        assert_eq!(
            page_window(5, 5, 3),
            vec![
                page(1, false),
                PageButton::Ellipsis,
                page(3, false),
                page(4, false),
                page(5, true),
            ]
        );
    }

    #[test]
    fn test_window_adjacent_shortcuts_have_no_ellipsis() {
        // start == 2, end == total - 1
        assert_eq!(
            page_window(3, 4, 3),
            vec![page(1, false), page(2, false), page(3, true), page(4, false)]
        );
        assert_eq!(
            page_window(3, 5, 3),
            vec![page(1, false), page(2, false), page(3, true), page(4, false), page(5, false)]
        );
    }

    #[test]
    fn test_window_single_page_and_empty() {
        assert_eq!(page_window(1, 1, 3), vec![page(1, true)]);
        assert!(page_window(1, 0, 3).is_empty());
    }

    #[test]
    fn test_window_current_beyond_total() {
        assert_eq!(window_bounds(10, 3, 3), Some((1, 3)));
    }

    #[test]
    fn test_window_near_u32_max() {
        let last = u32::MAX;
        assert_eq!(window_bounds(last, last, 3), Some((last - 2, last)));
        assert_eq!(
            page_window(last, last, 3),
            vec![
                page(1, false),
                PageButton::Ellipsis,
                page(last - 2, false),
                page(last - 1, false),
                page(last, true),
            ]
        );
        assert_eq!(window_bounds(last - 1, last, u32::MAX), Some((1, last)));
    }

    #[test]
    fn test_nav_state() {
        assert_eq!(nav_state(1, 5), NavState { prev_disabled: true, next_disabled: false });
        assert_eq!(nav_state(5, 5), NavState { prev_disabled: false, next_disabled: true });
        assert_eq!(nav_state(1, 1), NavState { prev_disabled: true, next_disabled: true });
        assert_eq!(nav_state(3, 5), NavState { prev_disabled: false, next_disabled: false });
    }

    #[test]
    fn test_range_label() {
        let label = range_label(95, 10, 10);
        assert_eq!((label.start, label.end), (91, 95));
        assert_eq!(label.to_string(), "Showing 91 to 95 of 95 results");

        let label = range_label(95, 1, 10);
        assert_eq!((label.start, label.end), (1, 10));
    }

    #[test]
    fn test_range_label_start_not_after_end() {
        for total in 1..=40u64 {
            for per_page in 1..=7u32 {
                let pages = ((total + u64::from(per_page) - 1) / u64::from(per_page)) as u32;
                for page in 1..=pages {
                    let label = range_label(total, page, per_page);
                    assert!(label.start <= label.end, "{:?}", label);
                    assert_eq!(label.start, u64::from(page - 1) * u64::from(per_page) + 1);
                }
            }
        }
    }
}
