//! Thumbnail download and scaling

use crate::utils::error::AppError;
use anyhow::Result;
use image::GenericImageView;
use tracing::debug;

/// Decoded RGBA thumbnail ready for display
#[derive(Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Fetch a thumbnail over HTTP and scale it to fit `bounds`
pub async fn fetch_thumbnail(
    client: &reqwest::Client,
    url: &str,
    bounds: (u32, u32),
) -> Result<Thumbnail> {
    debug!("Fetching thumbnail: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(AppError::from)?
        .error_for_status()
        .map_err(AppError::from)?;
    let bytes = response.bytes().await.map_err(AppError::from)?;

    decode_thumbnail(&bytes, bounds)
}

/// Decode image bytes and shrink them to fit `bounds`, keeping the aspect
/// ratio. Images already inside the bounds are left at their size.
pub fn decode_thumbnail(bytes: &[u8], bounds: (u32, u32)) -> Result<Thumbnail> {
    let (max_width, max_height) = bounds;
    if max_width == 0 || max_height == 0 {
        let msg = format!("invalid bounds {}x{}", max_width, max_height);
        return Err(AppError::ThumbnailError(msg).into());
    }

    let img = image::load_from_memory(bytes).map_err(AppError::from)?;
    let (width, height) = img.dimensions();

    let img = if width > max_width || height > max_height {
        img.thumbnail(max_width, max_height)
    } else {
        img
    };

    let (width, height) = img.dimensions();
    Ok(Thumbnail {
        width,
        height,
        rgba: img.to_rgba8().into_raw(),
    })
}
