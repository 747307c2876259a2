use crate::dashboards::d400_traffic::ui::TrafficDashboard;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::LatestProducts;
use crate::domain::a001_product::ui::manage::ProductManager;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a002_category::ui::products::CategoryProducts;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the store"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LatestProducts />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/category/:id") view=CategoryProducts />
                    <Route path=path!("/product/:id") view=ProductDetails />
                    <Route path=path!("/dashboard") view=TrafficDashboard />
                    <Route path=path!("/products") view=ProductManager />
                </Routes>
            </Shell>
        </Router>
    }
}
