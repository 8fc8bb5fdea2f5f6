use crate::detector::SensorError;
use leptos::*;

/// Persistent sensor error line, hidden while there is no error.
#[component]
pub fn SensorErrorNotice(error: Signal<Option<SensorError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="sensor-error">
                {move || error.get().map(|e| e.message()).unwrap_or_default()}
            </p>
        </Show>
    }
}
