use super::state::AddProductForm;
use crate::layout::global_context::use_app_context;
use crate::shared::download::object_url_for_file;
use contracts::domain::a001_product::csv_import::ImportedProduct;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface,
    DialogTitle, Flex, Input, Label, Textarea,
};
use web_sys::HtmlInputElement;

/// Object URLs for every file picked in a file input
fn picked_file_urls(input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter_map(|file| match object_url_for_file(&file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        })
        .collect()
}

#[component]
pub fn AddProductDialog(open: RwSignal<bool>, on_added: Callback<ImportedProduct>) -> impl IntoView {
    let ctx = use_app_context();
    let form = AddProductForm::new();

    let on_preview_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(url) = picked_file_urls(&input).into_iter().next() {
            form.preview_image.set(url);
        }
    };

    let on_gallery_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        form.gallery_images.set(picked_file_urls(&input));
    };

    let on_submit = move |_| {
        let product = form.to_product();
        if let Err(message) = product.validate() {
            ctx.notify_error("Error", &message);
            return;
        }
        on_added.run(product.normalized());
        form.reset();
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add New Product"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true>
                            <Label>"Product Name"</Label>
                            <Input value=form.name />

                            <Label>"Product Link"</Label>
                            <Input value=form.link placeholder="example.com/product" />

                            <Label>"Category"</Label>
                            <Input value=form.category />

                            <Label>"Description"</Label>
                            <Textarea value=form.description />

                            <Label>"Preview Image"</Label>
                            <div class="upload-row">
                                <input type="file" accept="image/*" on:change=on_preview_change />
                                <Show when=move || form.preview_image.with(|s| !s.is_empty())>
                                    <img class="table-thumb" src=move || form.preview_image.get() alt="Preview" />
                                </Show>
                            </div>

                            <Label>"Gallery Images"</Label>
                            <input type="file" accept="image/*" multiple=true on:change=on_gallery_change />
                            <div class="table-thumbs">
                                {move || form.gallery_images.get().into_iter().enumerate().map(|(i, url)| view! {
                                    <img class="table-thumb table-thumb--small" src=url alt=format!("Gallery {}", i + 1) />
                                }).collect_view()}
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                            "Add Product"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
