//! 検索条件フォームコンポーネント

use leptos::prelude::*;
use variant_browser_common::{FilterForm, CHROMOSOMES};

const INPUT_CLASS: &str = "block w-full rounded-md border-0 py-1.5 px-2 text-sm text-gray-900 ring-1 ring-inset ring-gray-300 focus:ring-2 focus:ring-indigo-600";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

/// フォームの文字列入力欄
#[derive(Clone, Copy)]
enum TextField {
    MinDepth,
    MinPos,
    MaxPos,
    MinGlobalFreq,
    MaxGlobalFreq,
    MinLatinAmericanFreq,
    MaxLatinAmericanFreq,
    MinEastAsianFreq,
    MaxEastAsianFreq,
    Gene,
}

impl TextField {
    fn slot(self, form: &mut FilterForm) -> &mut String {
        match self {
            TextField::MinDepth => &mut form.min_depth,
            TextField::MinPos => &mut form.min_pos,
            TextField::MaxPos => &mut form.max_pos,
            TextField::MinGlobalFreq => &mut form.min_global_freq,
            TextField::MaxGlobalFreq => &mut form.max_global_freq,
            TextField::MinLatinAmericanFreq => &mut form.min_latin_american_freq,
            TextField::MaxLatinAmericanFreq => &mut form.max_latin_american_freq,
            TextField::MinEastAsianFreq => &mut form.min_east_asian_freq,
            TextField::MaxEastAsianFreq => &mut form.max_east_asian_freq,
            TextField::Gene => &mut form.gene,
        }
    }

    fn value(self, form: &FilterForm) -> &str {
        match self {
            TextField::MinDepth => &form.min_depth,
            TextField::MinPos => &form.min_pos,
            TextField::MaxPos => &form.max_pos,
            TextField::MinGlobalFreq => &form.min_global_freq,
            TextField::MaxGlobalFreq => &form.max_global_freq,
            TextField::MinLatinAmericanFreq => &form.min_latin_american_freq,
            TextField::MaxLatinAmericanFreq => &form.max_latin_american_freq,
            TextField::MinEastAsianFreq => &form.min_east_asian_freq,
            TextField::MaxEastAsianFreq => &form.max_east_asian_freq,
            TextField::Gene => &form.gene,
        }
    }
}

fn text_input(
    form: RwSignal<FilterForm>,
    field: TextField,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=id
            placeholder=placeholder
            class=INPUT_CLASS
            prop:value=move || form.with(|f| field.value(f).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| *field.slot(f) = value);
            }
        />
    }
}

/// 頻度範囲（%）の最小・最大入力
fn percent_range(
    form: RwSignal<FilterForm>,
    label: &'static str,
    min: (TextField, &'static str),
    max: (TextField, &'static str),
) -> impl IntoView {
    view! {
        <div>
            <span class=LABEL_CLASS>{label}</span>
            <div class="flex items-center gap-2">
                {text_input(form, min.0, min.1, "number", "Min %")}
                <span class="text-gray-400">"–"</span>
                {text_input(form, max.0, max.1, "number", "Max %")}
            </div>
        </div>
    }
}

#[component]
pub fn FilterPanel<F>(form: RwSignal<FilterForm>, on_submit: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <form
            id="filterForm"
            class="mb-6 p-4 bg-white rounded-lg shadow-sm"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit(());
            }
        >
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <div>
                    <label for="minDepth" class=LABEL_CLASS>"Min read depth"</label>
                    {text_input(form, TextField::MinDepth, "minDepth", "number", "0")}
                </div>

                <div>
                    <label for="chromosome" class=LABEL_CLASS>"Chromosome"</label>
                    <select
                        id="chromosome"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.chromosome.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.chromosome = value);
                        }
                    >
                        <option value="">"All"</option>
                        {CHROMOSOMES
                            .iter()
                            .map(|chrom| view! { <option value=*chrom>{*chrom}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div>
                    <label for="minPos" class=LABEL_CLASS>"Position"</label>
                    <div class="flex items-center gap-2">
                        {text_input(form, TextField::MinPos, "minPos", "number", "Min")}
                        <span class="text-gray-400">"–"</span>
                        {text_input(form, TextField::MaxPos, "maxPos", "number", "Max")}
                    </div>
                </div>

                <div>
                    <label for="geneName" class=LABEL_CLASS>"Gene"</label>
                    {text_input(form, TextField::Gene, "geneName", "text", "e.g. BRCA1")}
                </div>

                {percent_range(
                    form,
                    "Global frequency",
                    (TextField::MinGlobalFreq, "minGlobalFreq"),
                    (TextField::MaxGlobalFreq, "maxGlobalFreq"),
                )}
                {percent_range(
                    form,
                    "Latin America frequency",
                    (TextField::MinLatinAmericanFreq, "minLatinAmericanFreq"),
                    (TextField::MaxLatinAmericanFreq, "maxLatinAmericanFreq"),
                )}
                {percent_range(
                    form,
                    "East Asia frequency",
                    (TextField::MinEastAsianFreq, "minEastAsianFreq"),
                    (TextField::MaxEastAsianFreq, "maxEastAsianFreq"),
                )}

                <div class="flex flex-col justify-end gap-2">
                    <label class="inline-flex items-center gap-2 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            id="gatkPass"
                            prop:checked=move || form.with(|f| f.gatk_pass)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.gatk_pass = checked);
                            }
                        />
                        "GATK PASS only"
                    </label>
                    <label class="inline-flex items-center gap-2 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            id="isDbSnp"
                            prop:checked=move || form.with(|f| f.is_dbsnp)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.is_dbsnp = checked);
                            }
                        />
                        "In dbSNP only"
                    </label>
                </div>
            </div>

            <div class="mt-4 flex justify-end">
                <button
                    type="submit"
                    class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_slot_roundtrip() {
        let mut form = FilterForm::default();
        *TextField::MinEastAsianFreq.slot(&mut form) = "12.5".to_string();
        *TextField::Gene.slot(&mut form) = "TP53".to_string();

        assert_eq!(form.min_east_asian_freq, "12.5");
        assert_eq!(TextField::Gene.value(&form), "TP53");
        assert_eq!(TextField::MaxPos.value(&form), "");
    }
}
