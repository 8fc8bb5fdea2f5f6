use crate::config::{parse_cooldown, COOLDOWN_MAX_MS, COOLDOWN_MIN_MS, COOLDOWN_STEP_MS};
use crate::detector::ShakeState;
use leptos::*;

#[component]
pub fn ShakeControls(state: RwSignal<ShakeState>) -> impl IntoView {
    let cooldown_ms = Signal::derive(move || state.with(ShakeState::cooldown_ms));

    view! {
        <button
            class="reset-button"
            on:click=move |_| state.update(ShakeState::reset)
        >
            "Reset Counter"
        </button>

        <div class="control-group">
            <label for="cooldown">
                {move || format!("Adjust Refresh Rate (ms): {}", cooldown_ms.get())}
            </label>
            <input
                type="range"
                id="cooldown"
                min=COOLDOWN_MIN_MS.to_string()
                max=COOLDOWN_MAX_MS.to_string()
                step=COOLDOWN_STEP_MS.to_string()
                prop:value=move || cooldown_ms.get().to_string()
                on:input=move |ev| {
                    if let Some(ms) = parse_cooldown(&event_target_value(&ev)) {
                        state.update(|s| {
                            s.set_cooldown(ms);
                        });
                    }
                }
            />
        </div>
    }
}
