//! Server functions backing the storefront pages.
//!
//! Each page fetches through these under `/api`. On the server they read
//! the embedded fixtures; in the browser the generated client issues the
//! HTTP request. View code treats every failure as a `LoadFailure` and
//! falls back to default values, keeping the page interactive.

use leptos::server_fn::error::ServerFnError;
use orderup_menu::catalog::{Menu, MenuGroup, MenuSummary};
use orderup_menu::options::OptionCatalog;

/// The customer's recent orders for the landing page strip.
#[leptos::server(prefix = "/api")]
pub async fn get_recent_orders() -> Result<Vec<MenuSummary>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        tracing::debug!("serving recent orders");
        crate::fixtures::recent_orders().map_err(|e| ServerFnError::new(e.to_string()))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// All menu groups with their listings.
#[leptos::server(prefix = "/api")]
pub async fn get_menu_groups() -> Result<Vec<MenuGroup>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        tracing::debug!("serving menu groups");
        crate::fixtures::menu_groups().map_err(|e| ServerFnError::new(e.to_string()))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// One menu for the detail page.
#[leptos::server(prefix = "/api")]
pub async fn get_menu(id: String) -> Result<Menu, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        tracing::debug!(menu_id = %id, "serving menu");
        crate::fixtures::menu(&id).map_err(|e| {
            tracing::warn!(menu_id = %id, error = %e, "menu lookup failed");
            ServerFnError::new(e.to_string())
        })
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = id;
        Err(ServerFnError::new("Server-only function"))
    }
}

/// The option catalog for one menu, consumed once per popup.
#[leptos::server(prefix = "/api")]
pub async fn get_menu_options(id: String) -> Result<OptionCatalog, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        tracing::debug!(menu_id = %id, "serving menu options");
        crate::fixtures::menu_options(&id).map_err(|e| {
            tracing::warn!(menu_id = %id, error = %e, "option catalog lookup failed");
            ServerFnError::new(e.to_string())
        })
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = id;
        Err(ServerFnError::new("Server-only function"))
    }
}
