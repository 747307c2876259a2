use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::fetch_storefront_config;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Storage origin for media references, loaded once per session
    spawn_local(async move {
        match fetch_storefront_config().await {
            Ok(config) => ctx.storage_origin.set(Some(config.storage_origin())),
            Err(e) => log::error!("Failed to load storefront config: {}", e),
        }
    });

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
