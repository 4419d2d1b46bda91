//! Order-customization popup.
//!
//! Loads the option catalog for the menu named by the final segment of the
//! current navigation path, holds it in an [`OptionStore`], and dispatches
//! the four selection operations from click handlers. Rendering subscribes
//! to state replacement and never mutates the catalog it is given; a
//! rejected operation is logged and leaves the rendered state untouched.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use orderup_menu::cart::{Cart, CartLine};
use orderup_menu::catalog::Menu;
use orderup_menu::error::MenuError;
use orderup_menu::options::OptionCatalog;
use orderup_menu::store::OptionStore;

use crate::api::get_menu_options;
use crate::components::quantity_callbacks;
use crate::components::SpinButton;

/// Final segment of a navigation path:
/// `/detail/fried-chicken` -> `fried-chicken`.
pub fn last_path_segment(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

#[component]
pub fn OptionPopup(menu: Menu, quantity: RwSignal<u32>, popup_open: RwSignal<bool>) -> impl IntoView {
    let location = use_location();
    let menu_id = move || last_path_segment(&location.pathname.get()).to_string();

    let store = StoredValue::new(Arc::new(OptionStore::new()));
    let catalog = RwSignal::new(OptionCatalog::default());

    // Bridge the store to rendering: each replacement updates the signal.
    store.with_value(|store| {
        store.subscribe(move |next| catalog.set(next.clone()));
    });

    let options = Resource::new(menu_id, get_menu_options);
    Effect::new(move |_| {
        if let Some(result) = options.get() {
            match result {
                Ok(loaded) => store.with_value(|store| store.load(loaded)),
                Err(e) => {
                    // Fall back to the empty catalog so the popup stays
                    // interactive; a retry happens on the next navigation.
                    leptos::logging::warn!("option catalog load failed, using defaults: {e}");
                    store.with_value(|store| store.load(OptionCatalog::default()));
                }
            }
        }
    });

    let (on_increase, on_decrease) = quantity_callbacks(quantity);

    let cart = expect_context::<RwSignal<Cart>>();
    let unit_price = menu.price;
    let order_label = move || {
        let count = quantity.get();
        format!("Add {} to cart {}", count, (unit_price * count as i64).display())
    };

    let menu_for_cart = menu.clone();
    let on_order = move |_| {
        let line = CartLine::new(
            menu_for_cart.id.clone(),
            menu_for_cart.name.clone(),
            unit_price,
            quantity.get(),
            catalog.get().selection_summary(),
        );
        match line {
            Ok(line) => {
                cart.update(|cart| cart.add(line));
                popup_open.set(false);
            }
            Err(e) => leptos::logging::warn!("order rejected: {e}"),
        }
    };

    view! {
        <div class=move || {
            if popup_open.get() { "option-popup-area" } else { "option-popup-area hidden" }
        }>
            <div class="dimmed-layer"></div>
            <div class="menu-option-popup">
                <div class="content-top common-inner">
                    <div class="menu-img-area">
                        <img class="menu-img" src=menu.image_url.clone() alt=menu.name.clone()/>
                    </div>
                    <div class="menu-detail-area">
                        <p class="menu-name">
                            <span class="name">{menu.name.clone()}</span>
                            {menu.badge.clone().map(|badge| view! { <span class="badge">{badge}</span> })}
                        </p>
                        <SpinButton
                            count=Signal::from(quantity)
                            on_increase=on_increase
                            on_decrease=on_decrease
                        />
                    </div>
                    <button class="btn-close" on:click=move |_| popup_open.set(false)>
                        "Close"
                    </button>
                </div>

                <div class="content-body">
                    <BaseOptionGroup catalog=catalog store=store/>
                    <ToppingSelectGroup catalog=catalog store=store/>
                    <ToppingAmountGroup catalog=catalog store=store/>
                </div>

                <div class="content-bottom">
                    <button class="btn-order" on:click=on_order>
                        {order_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn warn_if_rejected(result: Result<(), MenuError>) {
    if let Err(e) = result {
        leptos::logging::warn!("option update rejected: {e}");
    }
}

#[component]
fn BaseOptionGroup(
    catalog: RwSignal<OptionCatalog>,
    store: StoredValue<Arc<OptionStore>>,
) -> impl IntoView {
    view! {
        <div class="option-group base-option-group">
            <h4 class="option-title">"Base options"</h4>
            <ul class="option-list">
                {move || {
                    let current = catalog.get();
                    current
                        .base_options
                        .iter()
                        .map(|option| {
                            let name = option.name.clone();
                            let selected = option.is_selected;
                            let on_toggle = move |_| {
                                warn_if_rejected(
                                    store.with_value(|store| store.toggle_base_option(&name)),
                                );
                            };
                            view! {
                                <li class="option-item">
                                    <button
                                        class=if selected {
                                            "option-toggle is-selected"
                                        } else {
                                            "option-toggle"
                                        }
                                        on:click=on_toggle
                                    >
                                        {option.name.clone()}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
fn ToppingSelectGroup(
    catalog: RwSignal<OptionCatalog>,
    store: StoredValue<Arc<OptionStore>>,
) -> impl IntoView {
    view! {
        <div class="option-group topping-select-group">
            <h4 class="option-title">"Toppings"</h4>
            <ul class="option-list">
                {move || {
                    let current = catalog.get();
                    current
                        .topping_select_options
                        .iter()
                        .map(|option| {
                            let name = option.name.clone();
                            let selected = option.is_selected;
                            let on_toggle = move |_| {
                                warn_if_rejected(store.with_value(|store| {
                                    store.toggle_topping_select_option(&name)
                                }));
                            };
                            view! {
                                <li class="option-item">
                                    <button
                                        class=if selected {
                                            "option-toggle is-selected"
                                        } else {
                                            "option-toggle"
                                        }
                                        on:click=on_toggle
                                    >
                                        {option.name.clone()}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
fn ToppingAmountGroup(
    catalog: RwSignal<OptionCatalog>,
    store: StoredValue<Arc<OptionStore>>,
) -> impl IntoView {
    view! {
        <div class="option-group topping-amount-group">
            <h4 class="option-title">"Extra toppings"</h4>
            <ul class="option-list">
                {move || {
                    let current = catalog.get();
                    current
                        .topping_amount_options
                        .iter()
                        .map(|option| {
                            let name_for_increase = option.name.clone();
                            let name_for_decrease = option.name.clone();
                            let on_increase = move |_| {
                                warn_if_rejected(store.with_value(|store| {
                                    store.increase_option_amount(&name_for_increase)
                                }));
                            };
                            let on_decrease = move |_| {
                                warn_if_rejected(store.with_value(|store| {
                                    store.decrease_option_amount(&name_for_decrease)
                                }));
                            };
                            view! {
                                <li class="option-item amount">
                                    <span class="option-name">{option.name.clone()}</span>
                                    <div class="spin-button">
                                        <button class="btn-decrease" on:click=on_decrease>
                                            "-"
                                        </button>
                                        <span class="count">{option.amount}</span>
                                        <button class="btn-increase" on:click=on_increase>
                                            "+"
                                        </button>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
