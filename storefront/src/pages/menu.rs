//! Order landing page: order-type tabs, recent orders, menu categories.

use leptos::prelude::*;

use orderup_menu::catalog::{MenuGroup, MenuSummary, OrderType};

use crate::api::{get_menu_groups, get_recent_orders};

#[component]
pub fn MenuPage() -> impl IntoView {
    let order_type = RwSignal::new(OrderType::default());
    let selected_category = RwSignal::new("recommends".to_string());

    let recent = Resource::new(|| (), |_| get_recent_orders());
    let groups = Resource::new(|| (), |_| get_menu_groups());

    view! {
        <div class="order-info-area common-inner">
            <h2 class="page-title">"Order"</h2>

            <div class="tab-switch-box" role="tablist">
                {OrderType::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                class=move || {
                                    if order_type.get() == tab {
                                        "tab-switch is-active"
                                    } else {
                                        "tab-switch"
                                    }
                                }
                                on:click=move |_| order_type.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="info-main-notice">{move || order_type.get().notice()}</p>

            <div class="recent-order-area">
                <h3 class="recent-title">"Recent orders"</h3>
                <leptos::suspense::Suspense fallback=move || view! { <MenuStripSkeleton/> }>
                    {move || recent.get().map(|result| match result {
                        Ok(items) => view! { <RecentMenuList items=items/> }.into_any(),
                        Err(e) => view! {
                            <p class="load-error">"Could not load recent orders: " {e.to_string()}</p>
                        }.into_any(),
                    })}
                </leptos::suspense::Suspense>
            </div>

            <leptos::suspense::Suspense fallback=move || view! { <MenuGroupsSkeleton/> }>
                {move || groups.get().map(|result| match result {
                    Ok(groups) => view! {
                        <MenuGroupList groups=groups selected=selected_category/>
                    }.into_any(),
                    Err(e) => view! {
                        <p class="load-error">"Could not load the menu: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </leptos::suspense::Suspense>
        </div>
    }
}

#[component]
fn RecentMenuList(items: Vec<MenuSummary>) -> impl IntoView {
    view! {
        <ul class="recent-menu-list scroll-x">
            {items
                .into_iter()
                .map(|item| {
                    let href = format!("/detail/{}", item.id);
                    let price = item.price.display();
                    view! {
                        <li class="recent-menu-item">
                            <a href=href>
                                <div class="menu-img-area">
                                    {item.is_popular.then(|| view! {
                                        <span class="badge-popular">"Popular"</span>
                                    })}
                                    <img class="menu-img" src=item.image_url alt=item.name.clone()/>
                                </div>
                                <p class="menu-name">{item.name}</p>
                                <p class="menu-price">{price}</p>
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn MenuGroupList(groups: Vec<MenuGroup>, selected: RwSignal<String>) -> impl IntoView {
    let categories: Vec<(String, String)> = groups
        .iter()
        .map(|group| (group.category.clone(), group.category_name.clone()))
        .collect();

    view! {
        <div class="menu-category-area">
            <ul class="category-list scroll-x">
                {categories
                    .into_iter()
                    .map(|(category, category_name)| {
                        let is_active = {
                            let category = category.clone();
                            move || selected.get() == category
                        };
                        view! {
                            <li class="category-item">
                                <button
                                    class=move || {
                                        if is_active() {
                                            "category-tab is-active"
                                        } else {
                                            "category-tab"
                                        }
                                    }
                                    on:click=move |_| selected.set(category.clone())
                                >
                                    {category_name}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
        <div class="menu-list-area">
            {move || {
                let current = selected.get();
                groups
                    .iter()
                    .find(|group| group.category == current)
                    .map(|group| view! { <MenuList group=group.clone()/> })
            }}
        </div>
    }
}

#[component]
fn MenuList(group: MenuGroup) -> impl IntoView {
    view! {
        <div class="menu-category">
            <p class="title">{group.category_name}</p>
        </div>
        <ul class="menu-list">
            {group
                .items
                .into_iter()
                .map(|item| {
                    let href = format!("/detail/{}", item.id);
                    let price = item.price.display();
                    view! {
                        <li class="menu-item">
                            <a href=href class="menu-detail">
                                <div class="menu-img-area">
                                    <img
                                        class="menu-img"
                                        src=item.image_url
                                        alt=item.name.clone()
                                        width="100"
                                        height="110"
                                    />
                                </div>
                                <div class="menu-info-area">
                                    <p class="menu-name-group">
                                        <span class="menu-name">{item.name}</span>
                                        {item.is_popular.then(|| view! {
                                            <span class="badge-popular">"Popular"</span>
                                        })}
                                    </p>
                                    <p class="menu-price">{price}</p>
                                </div>
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

// Loading skeletons, shown while a resource is pending.

#[component]
fn MenuStripSkeleton() -> impl IntoView {
    view! {
        <ul class="recent-menu-list">
            <li class="skeleton" style="width: 100px; height: 140px;"></li>
            <li class="skeleton" style="width: 100px; height: 140px;"></li>
            <li class="skeleton" style="width: 100px; height: 140px;"></li>
        </ul>
    }
}

#[component]
fn MenuGroupsSkeleton() -> impl IntoView {
    view! {
        <div class="menu-list-area">
            <div class="skeleton" style="width: 40%; height: 1.5rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 0.5rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 0.5rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem;"></div>
        </div>
    }
}
