//! Menu detail page: quantity selection, customer reviews, option popup.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use orderup_menu::catalog::{Menu, Review};

use crate::api::get_menu;
use crate::components::{quantity_callbacks, OptionPopup, SpinButton};

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let menu_id = move || params.get().get("id").unwrap_or_default();

    let menu = Resource::new(menu_id, get_menu);

    // Page-level state, passed down to the popup.
    let quantity = RwSignal::new(1u32);
    let popup_open = RwSignal::new(false);

    view! {
        <leptos::suspense::Suspense fallback=move || view! { <DetailSkeleton/> }>
            {move || menu.get().map(|result| {
                let menu = match result {
                    Ok(menu) => menu,
                    Err(e) => {
                        // Keep the page interactive against the default menu.
                        leptos::logging::warn!("menu load failed, rendering default: {e}");
                        Menu::default()
                    }
                };
                view! { <MenuDetail menu=menu quantity=quantity popup_open=popup_open/> }
            })}
        </leptos::suspense::Suspense>
    }
}

#[component]
fn MenuDetail(menu: Menu, quantity: RwSignal<u32>, popup_open: RwSignal<bool>) -> impl IntoView {
    let (on_increase, on_decrease) = quantity_callbacks(quantity);
    let price = menu.price.display();
    let picture_count = menu.pictures.len();
    let review_count = menu.reviews.len();

    view! {
        <div class="container">
            <section class="menu-detail-area common-inner">
                <div class="menu-img-area">
                    <img class="menu-img" src=menu.image_url.clone() alt=menu.name.clone()/>
                </div>
                <div class="menu-detail">
                    <p class="menu-name">
                        <span class="name">{menu.name.clone()}</span>
                        {menu.badge.clone().map(|badge| view! { <span class="badge">{badge}</span> })}
                    </p>
                    <p class="menu-desc">{menu.description.clone()}</p>
                    <p class="menu-price">{price}</p>
                    <SpinButton count=Signal::from(quantity) on_increase=on_increase on_decrease=on_decrease/>
                    <button class="btn-order" on:click=move |_| popup_open.set(true)>
                        "Choose options"
                    </button>
                </div>
            </section>

            <section class="menu-review-area">
                <div class="orderer-img-area common-inner">
                    <h3 class="title">"Customer photos" <span class="num">{picture_count}</span></h3>
                    <ul class="picture-list scroll-x">
                        {menu
                            .pictures
                            .iter()
                            .map(|picture| view! {
                                <li><img src=picture.clone() alt="customer photo"/></li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="orderer-review-area common-inner">
                    <h3 class="title">"Customer reviews" <span class="num">{review_count}</span></h3>
                    <ReviewList reviews=menu.reviews.clone()/>
                </div>
            </section>

            <OptionPopup menu=menu quantity=quantity popup_open=popup_open/>
        </div>
    }
}

#[component]
fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <ul class="review-list">
            {reviews
                .into_iter()
                .map(|review| {
                    let stars = "★".repeat(review.rating.min(5) as usize);
                    view! {
                        <li class="review-item">
                            <p class="review-header">
                                <span class="reviewer">{review.reviewer}</span>
                                <span class="rating">{stars}</span>
                            </p>
                            <p class="review-content">{review.content}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="container">
            <div class="skeleton" style="width: 100%; height: 240px; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 30%; height: 1.5rem; margin-bottom: 2rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem;"></div>
        </div>
    }
}
