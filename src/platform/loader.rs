//! Image loading
//!
//! Every image in the manifest must load before the session is created. One
//! failure aborts startup; there is no degraded mode.

use glam::Vec2;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::assets::{AssetManifest, SpriteCatalog};
use crate::error::SetupError;

/// Decoded images, sprites in catalog order
pub struct LoadedAssets {
    pub background: HtmlImageElement,
    pub sprites: Vec<HtmlImageElement>,
}

impl LoadedAssets {
    /// Catalog of natural sprite sizes, in the same order as `sprites`
    pub fn catalog(&self) -> Result<SpriteCatalog, SetupError> {
        let sizes = self
            .sprites
            .iter()
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
            .collect();
        SpriteCatalog::new(sizes)
    }
}

/// Load one image, resolving once the browser has decoded it
pub async fn load_image(path: &str) -> Result<HtmlImageElement, SetupError> {
    let load_error = || SetupError::AssetLoad {
        path: path.to_string(),
    };

    let img = HtmlImageElement::new().map_err(|_| load_error())?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(path);

    let result = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
    result.map_err(|_| load_error())?;

    log::info!(
        "loaded {} ({}x{})",
        path,
        img.natural_width(),
        img.natural_height()
    );
    Ok(img)
}

/// Load the background and every sprite
pub async fn load_assets(manifest: &AssetManifest) -> Result<LoadedAssets, SetupError> {
    if manifest.sprites.is_empty() {
        return Err(SetupError::EmptySpriteCatalog);
    }

    let background = load_image(&manifest.background).await?;
    let mut sprites = Vec::with_capacity(manifest.sprites.len());
    for path in &manifest.sprites {
        sprites.push(load_image(path).await?);
    }

    log::info!("all {} images loaded", manifest.images().count());
    Ok(LoadedAssets {
        background,
        sprites,
    })
}
