//! メインアプリケーションコンポーネント
//!
//! フォーム送信・ページ移動 → 検索API取得 → テーブル再描画、
//! 詳細行の展開 → Ensembl取得 → アノテーション欄更新、の配線を行う。

use crate::api::{ensembl::fetch_annotation, search::fetch_page};
use crate::components::{
    filter_form::FilterPanel,
    header::Header,
    pagination::Pagination,
    variant_table::VariantTable,
};
use gloo::console;
use leptos::prelude::*;
use variant_browser_common::{
    AnnotationCache, Error, FilterForm, PageController, PageResult, RequestTicket, RowId,
};
use wasm_bindgen_futures::spawn_local;

/// 検索APIの応答をページ状態に反映した結果
#[derive(Debug)]
pub(crate) enum PageOutcome {
    /// 最新のリクエストの結果（テーブルを差し替える）
    Show(PageResult),
    /// 最新のリクエストの失敗（アラートを出す）
    Failed(Error),
    /// 後続のリクエストがあるため破棄
    Stale,
}

/// 応答をページ状態に反映する
///
/// 成功・失敗とも最後に発行したチケットの分だけを扱う
pub(crate) fn settle_page(
    controller: &mut PageController,
    ticket: RequestTicket,
    response: Result<PageResult, Error>,
) -> PageOutcome {
    match response {
        Ok(result) if controller.accept(ticket, &result) => PageOutcome::Show(result),
        Err(e) if controller.is_latest(ticket) => PageOutcome::Failed(e),
        _ => PageOutcome::Stale,
    }
}

/// 行を展開したときのアノテーション取得開始（取得不要なら None）
pub(crate) fn begin_annotation(
    annotations: RwSignal<AnnotationCache>,
    id: RowId,
    dbsnp: Option<&str>,
) -> Option<String> {
    annotations.try_update(|a| a.begin(id, dbsnp)).flatten()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let form = RwSignal::new(FilterForm::default());
    let controller = RwSignal::new(PageController::new());
    let page = RwSignal::new(None::<PageResult>);
    let annotations = RwSignal::new(AnnotationCache::new());

    // ページ取得ハンドラ（最後に発行したリクエストの結果だけを反映）
    let load_page = move |number: u32| {
        let criteria = form.get_untracked().criteria();
        let Some(ticket) = controller.try_update(|c| c.begin(number)) else {
            return;
        };

        spawn_local(async move {
            let response = fetch_page(&criteria, ticket.page).await;
            let outcome = controller
                .try_update(|c| settle_page(c, ticket, response))
                .unwrap_or(PageOutcome::Stale);

            match outcome {
                PageOutcome::Show(result) => {
                    annotations.update(|a| a.clear());
                    page.set(Some(result));
                }
                PageOutcome::Failed(e) => {
                    console::error!(format!("Error: {}", e));
                    gloo::dialogs::alert(&e.alert_message());
                }
                PageOutcome::Stale => {
                    console::debug!(format!("stale response for page {} discarded", ticket.page));
                }
            }
        });
    };

    // フォーム送信ハンドラ
    let on_submit = move |_: ()| load_page(1);

    // 詳細行展開ハンドラ
    let on_expand = move |id: RowId, dbsnp: Option<String>| {
        let Some(dbsnp_id) = begin_annotation(annotations, id, dbsnp.as_deref()) else {
            return;
        };

        spawn_local(async move {
            let result = fetch_annotation(&dbsnp_id).await.map_err(|e| {
                console::error!(format!("Error fetching data: {}", e));
                e.to_string()
            });
            annotations.update(|a| a.finish(id, result));
        });
    };

    load_page(1);

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Header />

            <FilterPanel form=form on_submit=on_submit />

            <VariantTable page=page annotations=annotations on_expand=on_expand />

            <Pagination controller=controller page=page on_page=load_page />
        </div>
    }
}
