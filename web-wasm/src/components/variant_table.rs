//! バリアント一覧テーブル
//!
//! 1件につき一覧行と詳細行（初期状態は非表示）の2行を描画する。
//! 詳細行を開いたときにEnsemblのアノテーションを取得する（取得済みなら再取得しない）。

use crate::components::icons;
use leptos::prelude::*;
use variant_browser_common::types::{dbsnp_url, genecards_url};
use variant_browser_common::{
    AnnotationCache, AnnotationState, PageResult, Population, RowId, VariantRow, NOT_AVAILABLE,
};

const LINK_CLASS: &str = "text-blue-600 hover:text-blue-800 hover:underline";
const PILL_CLASS: &str = "inline-block text-sm py-1 px-3 mr-2 bg-indigo-100 text-indigo-700 no-underline rounded-full hover:bg-indigo-200 transition-colors duration-200";
const TERM_CLASS: &str = "text-sm py-1 font-semibold text-gray-500";

/// 一覧行の背景色（偶数行/奇数行）
fn row_background(index: usize) -> &'static str {
    if index % 2 == 0 {
        "bg-white"
    } else {
        "bg-gray-50"
    }
}

fn muted(text: &'static str) -> AnyView {
    view! { <span class="text-gray-400">{text}</span> }.into_any()
}

fn or_not_available(value: Option<&str>) -> AnyView {
    match value {
        Some(v) => v.to_string().into_any(),
        None => muted(NOT_AVAILABLE),
    }
}

/// 一覧行の遺伝子リンク（カンマ区切り）
fn gene_links(genes: &[String]) -> AnyView {
    if genes.is_empty() {
        return muted(NOT_AVAILABLE);
    }
    genes
        .iter()
        .enumerate()
        .map(|(i, gene)| {
            view! {
                {(i > 0).then_some(", ")}
                <a href=genecards_url(gene) target="_blank" class=LINK_CLASS>{gene.clone()}</a>
            }
        })
        .collect_view()
        .into_any()
}

/// 詳細パネルの遺伝子リンク（ピル表示）
fn gene_pills(genes: &[String]) -> AnyView {
    if genes.is_empty() {
        return muted("No genes in this locus.");
    }
    genes
        .iter()
        .map(|gene| {
            view! { <a href=genecards_url(gene) target="_blank" class=PILL_CLASS>{gene.clone()}</a> }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn VariantTable<F>(
    page: RwSignal<Option<PageResult>>,
    annotations: RwSignal<AnnotationCache>,
    on_expand: F,
) -> impl IntoView
where
    F: Fn(RowId, Option<String>) + 'static + Clone + Send,
{
    // 取得のたびにtbodyを丸ごと作り直す
    let rows = move || {
        let items = page.with(|p| p.as_ref().map(|p| p.items.clone()).unwrap_or_default());
        items
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let on_expand = on_expand.clone();
                view! { <VariantRows index=index row=row annotations=annotations on_expand=on_expand /> }
            })
            .collect_view()
    };

    view! {
        <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
            <table class="min-w-full table-fixed divide-y divide-gray-300">
                <thead class="bg-gray-50">
                    <tr class="text-left text-sm font-semibold text-gray-900">
                        <th class="w-10 pl-6 pr-3 py-3.5"></th>
                        <th class="px-3 py-3.5">"Locus"</th>
                        <th class="px-3 py-3.5">"Allele"</th>
                        <th class="px-3 py-3.5">"dbSNP"</th>
                        <th class="px-3 py-3.5">"Genes"</th>
                        <th class="px-3 py-3.5 text-right">"Depth"</th>
                        <th class="px-3 py-3.5 text-right">"Global"</th>
                        <th class="px-3 py-3.5 text-right">"Latin America"</th>
                        <th class="pl-3 pr-6 py-3.5 text-right">"East Asia"</th>
                    </tr>
                </thead>
                <tbody id="dataTable" class="divide-y divide-gray-200">
                    {rows}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn VariantRows<F>(
    index: usize,
    row: VariantRow,
    annotations: RwSignal<AnnotationCache>,
    on_expand: F,
) -> impl IntoView
where
    F: Fn(RowId, Option<String>) + 'static + Clone + Send,
{
    let expanded = RwSignal::new(false);
    let id = row.id;
    let genes: Vec<String> = row.gene_symbols().into_iter().map(str::to_string).collect();

    let toggle = {
        let dbsnp = row.dbsnp.clone();
        move |_| {
            let open = !expanded.get_untracked();
            expanded.set(open);
            if open {
                on_expand(id, dbsnp.clone());
            }
        }
    };

    let summary_dbsnp = match row.dbsnp.as_deref() {
        Some(dbsnp) => view! {
            <a href=dbsnp_url(dbsnp) target="_blank" class=LINK_CLASS>{dbsnp.to_string()}</a>
        }
        .into_any(),
        None => muted(NOT_AVAILABLE),
    };

    let detail_dbsnp = match row.dbsnp.as_deref() {
        Some(dbsnp) => view! {
            <a href=dbsnp_url(dbsnp) target="_blank" class=PILL_CLASS>{dbsnp.to_string()}</a>
        }
        .into_any(),
        None => muted("No entry for this variant."),
    };

    let summary_frequencies = Population::SUMMARY
        .iter()
        .enumerate()
        .map(|(i, population)| {
            let class = if i + 1 == Population::SUMMARY.len() {
                "pl-3 pr-6 py-4 whitespace-nowrap text-sm text-right"
            } else {
                "px-3 py-4 whitespace-nowrap text-sm text-right"
            };
            view! { <td class=class>{or_not_available(row.frequency(*population))}</td> }
        })
        .collect_view();

    let detail_frequencies = Population::ALL
        .iter()
        .map(|population| {
            view! {
                <div class="w-full mb-1.5 flex items-center">
                    <dt class=format!("{} w-3/5", TERM_CLASS)>{population.label()}</dt>
                    <dd class="text-sm py-1 w-2/5">{or_not_available(row.frequency(*population))}</dd>
                </div>
            }
        })
        .collect_view();

    view! {
        <tr class=row_background(index)>
            <td class="pl-6 pr-3 py-4 whitespace-nowrap">
                <button class="text-gray-400 hover:text-gray-600" on:click=toggle>
                    <Show
                        when=move || expanded.get()
                        fallback=move || view! { <span id=format!("expand-icon-{}", id) inner_html=icons::COLLAPSED></span> }
                    >
                        <span id=format!("expand-icon-{}", id) inner_html=icons::EXPANDED></span>
                    </Show>
                </button>
            </td>
            <td class="px-3 py-4 truncate overflow-hidden text-sm">{row.locus_repr.clone()}</td>
            <td
                class="px-3 py-4 truncate overflow-hidden text-sm tracking-widest"
                title=row.allele_repr.clone()
            >
                {row.allele_repr.clone()}
            </td>
            <td class="px-3 py-4 whitespace-nowrap text-sm">{summary_dbsnp}</td>
            <td class="px-3 py-4 truncate overflow-hidden text-sm">{gene_links(&genes)}</td>
            <td class="px-3 py-4 whitespace-nowrap text-sm text-right">{row.dp}</td>
            {summary_frequencies}
        </tr>

        <tr id=format!("details-{}", id) class:hidden=move || !expanded.get()>
            <td colspan="6" class="align-top px-6 py-4 bg-gray-50">
                <div class="p-4 bg-white rounded-lg shadow-sm border-solid border break-words whitespace-normal">
                    <h3 class="text-lg font-bold mb-4">{row.locus_repr.clone()}</h3>
                    <dl class="flex">
                        <div class="w-full sm:w-[22%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Allele:"</dt>
                            <dd class="text-sm py-1 tracking-widest">{row.allele_repr.clone()}</dd>
                        </div>
                        <div class="w-full sm:w-[20%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Read depth:"</dt>
                            <dd class="text-sm py-1">{row.dp}</dd>
                        </div>
                        <div class="w-full sm:w-[20%] min-w-[120px]">
                            <dt class=TERM_CLASS>"dbSNP ID:"</dt>
                            <dd class="text-sm text-gray-600">{detail_dbsnp}</dd>
                        </div>
                        <div class="w-full sm:w-[38%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Genes:"</dt>
                            <dd class="text-sm">{gene_pills(&genes)}</dd>
                        </div>
                    </dl>
                    <dl class="flex mt-4">
                        <div class="w-full sm:w-[22%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Allele depth:"</dt>
                            <dd class="text-sm py-1">{row.ad.clone()}</dd>
                        </div>
                        <div class="w-full sm:w-[20%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Genotype:"</dt>
                            <dd class="text-sm py-1">{row.gt.clone()}</dd>
                        </div>
                        <div class="w-full sm:w-[58%] min-w-[120px]">
                            <dt class=TERM_CLASS>"GATK filter:"</dt>
                            <dd class="text-sm py-1">{row.filter_label().to_string()}</dd>
                        </div>
                    </dl>
                    <AnnotationPanel id=id annotations=annotations />
                </div>
            </td>
            <td colspan="3" class="align-top px-6 py-4 bg-gray-50">
                <div class="p-4 bg-white rounded-lg shadow-sm border-solid border break-words whitespace-normal">
                    <h3 class="text-lg font-bold mb-4">"Allele frequency"</h3>
                    <dl class="mt-4">{detail_frequencies}</dl>
                </div>
            </td>
        </tr>
    }
}

/// アノテーション表示欄
#[component]
fn AnnotationPanel(id: RowId, annotations: RwSignal<AnnotationCache>) -> impl IntoView {
    let state = Memo::new(move |_| annotations.with(|a| a.state(id)));

    view! {
        <div id=format!("variant-info-{}", id)>
            {move || match state.get() {
                AnnotationState::NotRequested => ().into_any(),
                AnnotationState::Loading => view! {
                    <div class="mt-4" inner_html=icons::SPINNER></div>
                }
                .into_any(),
                AnnotationState::Loaded(info) => view! {
                    <dl class="flex mt-4">
                        <div class="w-full sm:w-[42%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Most severe consequence:"</dt>
                            <dd class="text-sm py-1">{info.consequence_label().to_string()}</dd>
                        </div>
                        <div class="w-full sm:w-[58%] min-w-[120px]">
                            <dt class=TERM_CLASS>"Clinical significance:"</dt>
                            <dd class="text-sm py-1">{info.significance_label().to_string()}</dd>
                        </div>
                    </dl>
                }
                .into_any(),
                AnnotationState::Failed(_) => view! {
                    <div class="text-red-500 mt-4">"Failed to fetch variant data"</div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_background_alternates() {
        assert_eq!(row_background(0), "bg-white");
        assert_eq!(row_background(1), "bg-gray-50");
        assert_eq!(row_background(2), "bg-white");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::app::begin_annotation;
    use leptos::task::Executor;
    use variant_browser_common::AnnotationInfo;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_page() -> PageResult {
        let row = VariantRow {
            id: 7,
            locus_repr: "chr19: 44908684".to_string(),
            allele_repr: "T→C".to_string(),
            dbsnp: Some("rs429358".to_string()),
            genes: vec!["APOE".to_string()],
            dp: 38,
            filter: "PASS".to_string(),
            ..Default::default()
        };
        PageResult {
            items: vec![row],
            total: 1,
            page: 1,
            per_page: 10,
            total_pages: 1,
        }
    }

    /// 描画の更新を待つ
    async fn settle() {
        Executor::tick().await;
        Executor::tick().await;
    }

    fn details_hidden() -> bool {
        document()
            .get_element_by_id("details-7")
            .and_then(|el| el.get_attribute("class"))
            .is_some_and(|class| class.split_whitespace().any(|c| c == "hidden"))
    }

    #[wasm_bindgen_test]
    async fn wasm_expand_collapse_expand_fetches_once() {
        let _ = Executor::init_wasm_bindgen();

        let page = RwSignal::new(Some(sample_page()));
        let annotations = RwSignal::new(AnnotationCache::new());
        let expands = RwSignal::new(0u32);
        let fetches = RwSignal::new(0u32);

        // 取得は即座に成功したものとして扱う
        let on_expand = move |id: RowId, dbsnp: Option<String>| {
            expands.update(|n| *n += 1);
            if begin_annotation(annotations, id, dbsnp.as_deref()).is_some() {
                fetches.update(|n| *n += 1);
                annotations.update(|a| a.finish(id, Ok(AnnotationInfo::default())));
            }
        };

        let container: HtmlElement = document()
            .create_element("div")
            .expect("要素作成失敗")
            .unchecked_into();
        document()
            .body()
            .expect("bodyがない")
            .append_child(&container)
            .expect("追加失敗");
        let _handle = leptos::mount::mount_to(container.clone(), move || {
            view! { <VariantTable page=page annotations=annotations on_expand=on_expand /> }
        });
        settle().await;

        let toggle: HtmlElement = container
            .query_selector("#dataTable button")
            .expect("セレクタ不正")
            .expect("展開ボタンがない")
            .unchecked_into();

        assert!(details_hidden());

        toggle.click();
        settle().await;
        assert!(!details_hidden());
        assert_eq!(
            annotations.with_untracked(|a| a.state(7)),
            AnnotationState::Loaded(AnnotationInfo::default())
        );

        toggle.click();
        settle().await;
        assert!(details_hidden());

        toggle.click();
        settle().await;
        assert!(!details_hidden());

        assert_eq!(expands.get_untracked(), 2);
        assert_eq!(fetches.get_untracked(), 1);
    }
}
