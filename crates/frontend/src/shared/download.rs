//! Browser-side file helpers: text downloads and object URLs
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Build a Blob from `content` and make the browser save it as `filename`
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_text_blob(content, mime)?;
    download_blob(&blob, filename)
}

/// Local URL for a file picked by the user; valid until the page unloads
pub fn object_url_for_file(file: &File) -> Result<String, String> {
    Url::create_object_url_with_blob(file)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))
}

/// Read a picked file as UTF-8 text
pub async fn read_file_text(file: &File) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "File is not readable as text".to_string())
}

fn create_text_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary hidden anchor
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
