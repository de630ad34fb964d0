//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="mb-8">
            <h1 class="text-2xl font-bold text-gray-900">"Variant Browser"</h1>
            <p class="mt-1 text-sm text-gray-500">
                "Filter called variants by locus, depth, gene and population allele frequency."
            </p>
        </header>
    }
}
