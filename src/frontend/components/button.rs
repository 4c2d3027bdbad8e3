use leptos::prelude::*;

/// Submit button that locks itself while its form is busy.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let classes = "w-full inline-flex items-center justify-center px-8 py-4 text-lg font-semibold rounded-xl transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-indigo-950 bg-gradient-to-r from-indigo-700 to-violet-600 text-white hover:from-indigo-800 hover:to-violet-700 hover:shadow-lg hover:shadow-violet-500/25 focus:ring-violet-500 disabled:opacity-50 disabled:cursor-not-allowed";

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback={
                    let label = label.clone();
                    move || label.clone()
                }
            >
                <span class="flex items-center justify-center gap-2">
                    <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text_display.clone()}
                </span>
            </Show>
        </button>
    }
}
