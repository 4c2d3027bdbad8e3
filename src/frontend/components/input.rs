use leptos::prelude::*;

use crate::forms::FormState;
use crate::models::FieldSpec;

const INPUT_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-indigo-950/40 border border-indigo-300/20
                             text-white placeholder-indigo-200/60
                             focus:outline-none focus:ring-2 focus:ring-violet-400 focus:border-transparent
                             transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: Signal<String>,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-indigo-100 mb-2">
                {label}
            </label>
            <input
                type=move || input_type.get()
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASSES
            />
        </div>
    }
}

#[component]
pub fn EmailInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email".to_string()
            required=true
            value=value
        />
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    let visible = RwSignal::new(false);
    let input_type = Signal::derive(move || {
        if visible.get() { "text" } else { "password" }.to_string()
    });

    view! {
        <div class="relative">
            <TextInput
                label=label
                name="password"
                placeholder="••••••••"
                input_type=input_type
                required=true
                value=value
            />
            <button
                type="button"
                class="absolute right-3 bottom-3 text-xs text-indigo-200 hover:text-white"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

/// Input bound to one registry field of a registration form.
#[component]
pub fn FieldInput(spec: &'static FieldSpec, form: RwSignal<FormState>) -> impl IntoView {
    let id = spec.id;
    let current = move || form.with(|f| f.values().text(id));

    if spec.is_select() {
        view! {
            <select
                id=id.key()
                name=id.key()
                required=spec.required
                prop:value=current
                on:change=move |ev| form.update(|f| f.set_field(id, event_target_value(&ev)))
                class=INPUT_CLASSES
            >
                <option value="" disabled=true>{spec.label()}</option>
                {spec
                    .options
                    .iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    } else {
        view! {
            <input
                type=spec.kind.input_type()
                id=id.key()
                name=id.key()
                placeholder=spec.label()
                required=spec.required
                prop:value=current
                on:input=move |ev| form.update(|f| f.set_field(id, event_target_value(&ev)))
                class=INPUT_CLASSES
            />
        }
        .into_any()
    }
}
