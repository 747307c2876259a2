use crate::layout::global_context::{use_app_context, NotificationKind};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stack of transient notifications in the bottom-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || ctx.notifications.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status">
                            <div class="notification__text">
                                <div class="notification__title">{n.title}</div>
                                <div class="notification__message">{n.message}</div>
                            </div>
                            <button
                                class="button button--icon notification__close"
                                aria-label="Dismiss"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
