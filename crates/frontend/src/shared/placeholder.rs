use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Served by the frontend bundle
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Image source with the placeholder standing in for a missing reference
pub fn image_src(src: Option<&str>) -> String {
    match src {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// `on:error` handler for `<img>`: swap in the placeholder once
pub fn swap_to_placeholder<E: AsRef<web_sys::Event>>(ev: E) {
    let Some(img) = ev
        .as_ref()
        .target()
        .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_src() {
        assert_eq!(image_src(Some("https://a.com/x.png")), "https://a.com/x.png");
        assert_eq!(image_src(Some(" ")), PLACEHOLDER_IMAGE);
        assert_eq!(image_src(None), PLACEHOLDER_IMAGE);
    }
}
