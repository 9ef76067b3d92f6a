//! Result viewer

use leptos::prelude::*;
use crate::result::{
    description_html, ResultView, CODE_PLACEHOLDER, DESCRIPTION_PLACEHOLDER, PREVIEW_PLACEHOLDER,
};
use crate::types::GenerationResult;

/// Preview, description and source of a generated circuit
#[component]
pub fn ResultViewer(result: GenerationResult) -> impl IntoView {
    let shown = ResultView::from_result(&result);

    view! {
        <div class="flex flex-col gap-4 p-4">
            // Preview
            {match shown.preview_url {
                Some(url) => view! {
                    <iframe
                        src=url
                        title="Circuit preview"
                        class="w-full h-[480px] rounded-lg border border-slate-700 bg-white"
                    ></iframe>
                }.into_any(),
                None => view! {
                    <Placeholder text=PREVIEW_PLACEHOLDER />
                }.into_any(),
            }}

            // Description
            {match shown.description {
                Some(text) => view! {
                    <div class="prose prose-invert max-w-none" inner_html=description_html(&text)></div>
                }.into_any(),
                None => view! {
                    <Placeholder text=DESCRIPTION_PLACEHOLDER />
                }.into_any(),
            }}

            // Source code, read-only
            {shown.code_panel.map(|code| view! {
                <div>
                    <div class="text-xs text-slate-500 bg-slate-900 px-3 py-1 rounded-t-lg font-mono">"python"</div>
                    <pre class="bg-slate-900 p-3 rounded-b-lg overflow-x-auto font-mono text-sm">
                        <code class="text-green-400">
                            {code.unwrap_or_else(|| CODE_PLACEHOLDER.to_string())}
                        </code>
                    </pre>
                </div>
            })}
        </div>
    }
}

#[component]
fn Placeholder(text: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg border border-dashed border-slate-700 text-center text-slate-500 italic">
            {text}
        </div>
    }
}
