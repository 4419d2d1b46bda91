//! Application shell, routes, and shared cart context.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use orderup_menu::cart::Cart;

use crate::pages::{DetailPage, MenuPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single cart per session, shared by the header badge and the popup's
    // order button.
    let cart = RwSignal::new(Cart::default());
    provide_context(cart);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/orderup_storefront.css"/>
        <Meta name="description" content="OrderUp - order food for takeout, dine-in, or delivery"/>
        <Title text="OrderUp"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=MenuPage/>
                    <Route path=path!("/detail/:id") view=DetailPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <header class="site-header">
            <a class="logo" href="/">"OrderUp"</a>
            <span class="cart-status">
                "Cart" <span class="num">{move || cart.get().item_count()}</span>
            </span>
        </header>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the menu"</a>
        </div>
    }
}
