use crate::components::{SensorErrorNotice, ShakeControls, ShakeDisplay};
use crate::config::ShakeConfig;
use crate::detector::{ShakeGate, ShakeState, SubscriptionSlot, Ticket};
use crate::sensor::{log_info, log_warning, now_ms, request_access, MotionListener};
use leptos::*;
use std::time::Duration;

/// Run one permission + subscription attempt for `ticket`.
///
/// The gate (and with it the last-shake time) is created here, so every
/// subscription starts with a clean cooldown window.
fn subscribe(
    state: RwSignal<ShakeState>,
    slot: StoredValue<SubscriptionSlot<MotionListener>>,
    ticket: Ticket,
    cooldown_ms: u32,
) {
    let config = ShakeConfig::default();

    spawn_local(async move {
        let access = request_access()
            .await
            .and_then(|permission| permission.into_access());

        // Superseded by a newer cooldown, or the widget is gone
        if !slot.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
            return;
        }

        let mut gate = ShakeGate::new(&config, cooldown_ms);
        let pulse = Duration::from_millis(config.pulse_ms.into());
        let attached = access.and_then(|()| {
            MotionListener::attach(move |sample| {
                if !gate.offer(&sample, now_ms()) {
                    return;
                }
                state.update(ShakeState::accept_shake);
                set_timeout(
                    move || {
                        let _ = state.try_update(ShakeState::end_pulse);
                    },
                    pulse,
                );
            })
        });

        match attached {
            Ok(listener) => {
                slot.update_value(|s| {
                    s.install(ticket, listener);
                });
                log_info(&format!(
                    "Shake counter: listening for motion (cooldown {} ms)",
                    cooldown_ms
                ));
            }
            Err(e) => {
                log_warning(&format!("Shake counter: {}", e));
                state.update(|s| s.record_error(e));
            }
        }
    });
}

#[component]
pub fn ShakeCounter() -> impl IntoView {
    let state = create_rw_signal(ShakeState::default());
    let slot = store_value(SubscriptionSlot::<MotionListener>::new());

    let shake_count = Signal::derive(move || state.with(ShakeState::shake_count));
    let is_shaking = Signal::derive(move || state.with(ShakeState::is_shaking));
    let error = Signal::derive(move || state.with(ShakeState::error));

    // Memo so that counter updates don't rebuild the listener
    let cooldown_ms = create_memo(move |_| state.with(ShakeState::cooldown_ms));

    // Resubscribe whenever the cooldown changes; begin() drops the old listener first
    create_effect(move |_| {
        let cooldown = cooldown_ms.get();
        if let Some(ticket) = slot.try_update_value(|s| s.begin()) {
            subscribe(state, slot, ticket, cooldown);
        }
    });

    on_cleanup(move || {
        let _ = slot.try_update_value(|s| s.clear());
    });

    view! {
        <main class="container">
            <h1>"Shake Counter"</h1>
            <ShakeDisplay shake_count=shake_count is_shaking=is_shaking/>
            <ShakeControls state=state/>
            <SensorErrorNotice error=error/>
        </main>
    }
}
