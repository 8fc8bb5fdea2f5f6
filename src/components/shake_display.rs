use leptos::*;

#[component]
pub fn ShakeDisplay(shake_count: Signal<u64>, is_shaking: Signal<bool>) -> impl IntoView {
    view! {
        <div class="pulse" class:shaking=move || is_shaking.get()></div>
        <p class="shake-total">{move || format!("Total Shakes: {}", shake_count.get())}</p>
    }
}
