use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-indigo-300/10 bg-indigo-950/50">
            <div class="max-w-6xl mx-auto px-6 py-8 flex flex-wrap items-center justify-between gap-4 text-sm">
                <p class="text-indigo-200/70">"© 2025 Signavox. All rights reserved."</p>
                <div class="flex gap-6 text-indigo-200/70">
                    <a href="#" class="hover:text-white transition-colors">"Privacy Policy"</a>
                    <a href="#" class="hover:text-white transition-colors">"Terms of Use"</a>
                    <a href="#" class="hover:text-white transition-colors">"Cookies Policy"</a>
                </div>
            </div>
        </footer>
    }
}
