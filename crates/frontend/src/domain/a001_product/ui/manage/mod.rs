mod add_dialog;
mod state;

use add_dialog::AddProductDialog;
use state::import_summary;

use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::download::{download_text, read_file_text, CSV_MIME};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::placeholder::swap_to_placeholder;
use contracts::domain::a001_product::csv_import::{
    import_products, template_csv, ImportedProduct, TEMPLATE_FILE_NAME,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Card, Table, TableBody, TableCell, TableHeader, TableHeaderCell,
    TableRow,
};
use web_sys::HtmlInputElement;

/// Product management: template download, manual entry and CSV import.
/// Everything lives in this screen's memory only.
#[component]
pub fn ProductManager() -> impl IntoView {
    let ctx = use_app_context();
    let products = RwSignal::new(Vec::<ImportedProduct>::new());
    let add_open = RwSignal::new(false);

    let on_download_template = move |_| match download_text(&template_csv(), TEMPLATE_FILE_NAME, CSV_MIME) {
        Ok(()) => ctx.notify_success(
            "Template downloaded",
            "You can now fill in the template and import it back",
        ),
        Err(e) => ctx.notify_error("Download failed", &e),
    };

    let on_import = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Picking the same file again must fire `change` again
        input.set_value("");

        spawn_local(async move {
            let parsed = read_file_text(&file)
                .await
                .and_then(|text| import_products(&text).map_err(|e| e.to_string()));
            match parsed {
                Ok(import) => {
                    for row_error in &import.row_errors {
                        log::warn!("CSV import: {}", row_error);
                    }
                    ctx.notify_success("File processed successfully", &import_summary(&import));
                    products.set(import.products);
                }
                Err(e) => {
                    log::error!("CSV import failed: {}", e);
                    ctx.notify_error(
                        "Error processing file",
                        "Please make sure the file format is correct",
                    );
                }
            }
        });
    };

    let on_added = Callback::new(move |product: ImportedProduct| {
        products.update(|list| list.push(product));
        ctx.notify_success(
            "Product added successfully",
            "The new product has been added to the list",
        );
    });

    view! {
        <PageFrame page_id="a001_product--manage" category=PAGE_CAT_USECASE>
            <PageHeader title="Product Management">
                <Button appearance=ButtonAppearance::Secondary on_click=on_download_template>
                    {icon("download")}
                    " Download Template"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| add_open.set(true)>
                    {icon("plus")}
                    " Add Product"
                </Button>
                <label class="button button--secondary file-button">
                    {icon("upload")}
                    " Import from CSV"
                    <input type="file" accept=".csv" class="file-button__input" on:change=on_import />
                </label>
            </PageHeader>

            <AddProductDialog open=add_open on_added=on_added />

            <div class="page__content">
                <Card>
                    <Show
                        when=move || products.with(|list| !list.is_empty())
                        fallback=|| view! {
                            <div class="page__empty">
                                "No products imported yet. Download the template and import your products."
                            </div>
                        }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product Name"</TableHeaderCell>
                                    <TableHeaderCell>"Link"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Description"</TableHeaderCell>
                                    <TableHeaderCell>"Preview Image"</TableHeaderCell>
                                    <TableHeaderCell>"Gallery Images"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || products.get().into_iter().map(|p| {
                                    let preview = (!p.preview_image.is_empty()).then(|| view! {
                                        <img class="table-thumb" src=p.preview_image.clone() alt=p.name.clone() on:error=swap_to_placeholder />
                                    });
                                    let gallery = p.gallery_images
                                        .iter()
                                        .filter(|url| !url.is_empty())
                                        .map(|url| view! {
                                            <img class="table-thumb table-thumb--small" src=url.clone() alt="" on:error=swap_to_placeholder />
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            <TableCell>{p.name.clone()}</TableCell>
                                            <TableCell>{p.link.clone()}</TableCell>
                                            <TableCell>{p.category.clone()}</TableCell>
                                            <TableCell>{p.description.clone()}</TableCell>
                                            <TableCell>{preview}</TableCell>
                                            <TableCell><div class="table-thumbs">{gallery}</div></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Show>
                </Card>
            </div>
        </PageFrame>
    }
}
