//! ページネーションコンポーネント

use leptos::prelude::*;
use variant_browser_common::{page_window, range_label, PageButton, PageController, PageResult, PAGE_WINDOW_WIDTH};

const BUTTON_CLASS: &str = "relative inline-flex items-center justify-center w-10 px-7 py-2 text-sm font-semibold";
const NAV_CLASS: &str = "relative inline-flex items-center rounded-md bg-white px-4 py-2 text-sm font-medium text-gray-700 ring-1 ring-inset ring-gray-300 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed";

fn page_button_class(current: bool) -> String {
    if current {
        format!("{} bg-indigo-100 text-indigo-700 ring-1 ring-inset ring-indigo-200 z-[2]", BUTTON_CLASS)
    } else {
        format!("{} ring-1 ring-inset ring-gray-300 hover:bg-gray-50", BUTTON_CLASS)
    }
}

#[component]
pub fn Pagination<F>(
    controller: RwSignal<PageController>,
    page: RwSignal<Option<PageResult>>,
    on_page: F,
) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send + Sync,
{
    let prev_disabled = move || controller.with(|c| c.nav_state().prev_disabled);
    let next_disabled = move || controller.with(|c| c.nav_state().next_disabled);

    // 前へ/次へは現在ページが範囲内のときだけ取得する
    let go_prev = {
        let on_page = on_page.clone();
        move |_| {
            if let Some(p) = controller.with_untracked(|c| c.prev_page()) {
                on_page(p);
            }
        }
    };
    let go_next = {
        let on_page = on_page.clone();
        move |_| {
            if let Some(p) = controller.with_untracked(|c| c.next_page()) {
                on_page(p);
            }
        }
    };

    let info = move || {
        page.with(|p| {
            p.as_ref().map(|p| {
                let label = range_label(p.total, p.page, p.per_page);
                view! {
                    "Showing "
                    <span class="font-semibold">{label.start}</span>
                    " to "
                    <span class="font-semibold">{label.end}</span>
                    " of "
                    <span class="font-semibold">{label.total}</span>
                    " results"
                }
            })
        })
    };

    let page_numbers = {
        let on_page = on_page.clone();
        move || {
            let (current, total) = controller.with(|c| (c.current_page(), c.total_pages()));
            page_window(current, total, PAGE_WINDOW_WIDTH)
                .into_iter()
                .map(|button| match button {
                    PageButton::Page { number, current } => {
                        let on_page = on_page.clone();
                        view! {
                            <button class=page_button_class(current) on:click=move |_| on_page(number)>
                                {number}
                            </button>
                        }
                        .into_any()
                    }
                    PageButton::Ellipsis => view! {
                        <span class=format!("{} text-gray-500 bg-gray-50 ring-1 ring-inset ring-gray-300", BUTTON_CLASS)>
                            "..."
                        </span>
                    }
                    .into_any(),
                })
                .collect_view()
        }
    };

    view! {
        <div class="flex items-center justify-between border-t border-gray-200 bg-white px-4 py-3 sm:px-6 mt-4 rounded-lg">
            <div class="flex flex-1 justify-between sm:hidden">
                <button id="prevButtonMobile" class=NAV_CLASS disabled=prev_disabled on:click=go_prev.clone()>
                    "Previous"
                </button>
                <button id="nextButtonMobile" class=format!("{} ml-3", NAV_CLASS) disabled=next_disabled on:click=go_next.clone()>
                    "Next"
                </button>
            </div>
            <div class="hidden sm:flex sm:flex-1 sm:items-center sm:justify-between">
                <p id="paginationInfo" class="text-sm text-gray-700">{info}</p>
                <nav class="isolate inline-flex -space-x-px rounded-md shadow-sm" aria-label="Pagination">
                    <button id="prevButton" class=NAV_CLASS disabled=prev_disabled on:click=go_prev>
                        "Previous"
                    </button>
                    <div id="pageNumbers" class="inline-flex">{page_numbers}</div>
                    <button id="nextButton" class=NAV_CLASS disabled=next_disabled on:click=go_next>
                        "Next"
                    </button>
                </nav>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_button_class_highlights_current() {
        assert!(page_button_class(true).contains("bg-indigo-100"));
        assert!(!page_button_class(false).contains("bg-indigo-100"));
    }
}
