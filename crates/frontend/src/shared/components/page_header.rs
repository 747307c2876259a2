use leptos::prelude::*;

/// Title row of a page with an optional subtitle and action slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{move || title.get()}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_slot_is_optional() {
        Owner::new().with(|| {
            let props = PageHeaderProps::builder().title("Latest products").build();
            assert!(props.children.is_none());
        });
    }
}
