//! Wizard footer: progress, final submit, and cancel.

use leptos::prelude::*;
use marketplace::SectionKey;

#[component]
pub fn SubmitSection(
    #[prop(into)] completed: Signal<usize>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let total = SectionKey::ALL.len();

    view! {
        <footer class="wizard-submit">
            <p class="wizard-submit__progress">
                {move || format!("{} of {total} sections saved", completed.get())}
            </p>
            <Show when=move || error.get().is_some()>
                <p class="wizard-submit__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="wizard-submit__actions">
                <button
                    type="button"
                    class="btn btn--secondary"
                    disabled=move || is_submitting.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn btn--primary"
                    disabled=move || is_submitting.get()
                    on:click=move |_| on_submit.run(())
                >
                    {move || if is_submitting.get() { "Creating listing..." } else { "Create listing" }}
                </button>
            </div>
        </footer>
    }
}
