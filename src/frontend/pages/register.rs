use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpAuthApi;
use crate::config::ApiConfig;
use crate::forms::FormState;
use crate::frontend::components::{Button, FieldInput, ToastStack, Toasts};
use crate::models::registry::{COLLEGE_FIELDS, EXPERIENCE_FIELDS, PERSONAL_FIELDS, RESUME_FIELD};
use crate::models::{ExperienceToggle, FieldSpec};
use crate::services::{MountScope, RegisterFlow, SubmitGate, SubmitOutcome};

fn field_list(specs: &'static [FieldSpec], form: RwSignal<FormState>) -> impl IntoView {
    specs
        .iter()
        .map(|spec| view! { <FieldInput spec=spec form=form /> })
        .collect_view()
}

#[component]
fn ExperienceChoice(form: RwSignal<FormState>, toggle: ExperienceToggle, label: &'static str) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-indigo-100 cursor-pointer">
            <input
                type="radio"
                name="hasExperience"
                value=toggle.as_str()
                prop:checked=move || form.with(|f| f.experience() == toggle)
                on:change=move |_| form.update(|f| f.set_experience_toggle(toggle))
                class="accent-violet-500"
            />
            {label}
        </label>
    }
}

/// Intern registration form. Submits to `/auth/register` and reports the
/// result as a toast; the form stays on screen afterwards.
#[component]
pub fn RegistrationForm() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();

    let form = RwSignal::new(FormState::new());
    let busy = RwSignal::new(false);
    let toasts = Toasts::new();

    let scope = MountScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let gate = SubmitGate::observed(move |phase| {
        busy.try_set(phase.is_submitting());
    });
    let flow = Rc::new(
        RegisterFlow::new(HttpAuthApi::new(config), toasts.clone())
            .with_gate(gate)
            .with_scope(scope),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let flow = flow.clone();
        let snapshot = form.get_untracked();
        spawn_local(async move {
            match flow.submit(&snapshot).await {
                SubmitOutcome::Invalid(missing) => {
                    log::debug!("registration blocked, missing {:?}", missing);
                }
                outcome => log::debug!("registration finished: {:?}", outcome),
            }
        });
    };

    let has_experience = move || form.with(|f| f.experience().is_yes());

    view! {
        <div class="relative w-full max-w-xl">
            <ToastStack toasts=toasts />
            <form
                on:submit=on_submit
                class="bg-indigo-950/60 backdrop-blur-sm border border-indigo-300/10 rounded-2xl p-8 shadow-xl space-y-6"
            >
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-white">"Register for the Internship"</h2>
                    <p class="text-indigo-200/80 mt-2">"Tell us about yourself and your studies."</p>
                </div>

                <section class="space-y-4">
                    <h3 class="text-sm uppercase tracking-wider text-violet-300">"Personal Information"</h3>
                    {field_list(&PERSONAL_FIELDS, form)}
                </section>

                <section class="space-y-4">
                    <h3 class="text-sm uppercase tracking-wider text-violet-300">"Education"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {field_list(&COLLEGE_FIELDS, form)}
                    </div>
                    <FieldInput spec=&RESUME_FIELD form=form />
                </section>

                <section class="space-y-4">
                    <p class="text-indigo-100 font-medium">"Do you have professional experience?"</p>
                    <div class="flex gap-6">
                        <ExperienceChoice form=form toggle=ExperienceToggle::Yes label="Yes" />
                        <ExperienceChoice form=form toggle=ExperienceToggle::No label="No" />
                    </div>
                    <Show when=has_experience>
                        <div class="space-y-4 pt-2">
                            <h3 class="text-sm uppercase tracking-wider text-violet-300">"Professional Experience"</h3>
                            {field_list(&EXPERIENCE_FIELDS, form)}
                        </div>
                    </Show>
                </section>

                <Button
                    label="Register Now"
                    loading=busy
                    loading_text="Registering..."
                />
            </form>
        </div>
    }
}
