//! Quantity spinner shared by the detail page and the option popup.

use leptos::prelude::*;

/// Spin callbacks for a menu quantity: grows freely, never drops below one.
pub fn quantity_callbacks(quantity: RwSignal<u32>) -> (Callback<()>, Callback<()>) {
    let on_increase = Callback::new(move |_| quantity.update(|q| *q += 1));
    let on_decrease = Callback::new(move |_| {
        quantity.update(|q| {
            if *q > 1 {
                *q -= 1;
            }
        })
    });
    (on_increase, on_decrease)
}

#[component]
pub fn SpinButton(
    count: Signal<u32>,
    on_increase: Callback<()>,
    on_decrease: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="spin-button">
            <button class="btn-decrease" on:click=move |_| on_decrease.run(())>
                "-"
            </button>
            <span class="count">{move || count.get()}</span>
            <button class="btn-increase" on:click=move |_| on_increase.run(())>
                "+"
            </button>
        </div>
    }
}
