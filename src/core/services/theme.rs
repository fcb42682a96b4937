use crate::core::models::ThemeMode;

/// Sets `data-theme` on the `<html>` element so the stylesheet can switch palettes.
pub fn apply_theme(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(e) = root.set_attribute("data-theme", mode.as_str()) {
                log::warn!("failed to apply theme {}: {:?}", mode.as_str(), e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_callable_off_browser() {
        apply_theme(ThemeMode::Light);
        apply_theme(ThemeMode::Dark);
    }
}
