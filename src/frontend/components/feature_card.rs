use leptos::prelude::*;

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="group flex items-center gap-4 p-5 rounded-xl bg-indigo-950/40 border border-indigo-300/10
                    hover:border-violet-400/50 hover:bg-indigo-900/40
                    transition-all duration-300 hover:-translate-y-1">
            <span class="text-4xl group-hover:scale-110 transition-transform duration-300">
                {icon}
            </span>
            <h3 class="text-lg font-semibold text-white">{title}</h3>
        </div>
    }
}
