//! PNG export of baked results for inspection and pipeline handoff.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use cirrus_cubemap::{Cubemap, RenderTarget};

/// Errors returned when persisting bake output.
#[derive(Debug, Error)]
pub enum BakeError {
    /// Failed to create the output directory.
    #[error("failed to create output directory: {0}")]
    CreateDir(#[source] std::io::Error),

    /// A face buffer did not match its declared dimensions.
    #[error("face {face} buffer size mismatch")]
    FaceBuffer {
        /// Index of the offending face.
        face: usize,
    },

    /// Failed to encode or write an image.
    #[error("image write error: {0}")]
    Image(#[from] image::ImageError),
}

/// Write all six cubemap faces as `face_0.png` .. `face_5.png` into `dir`.
pub fn export_faces_png(cubemap: &Cubemap, dir: &Path) -> Result<(), BakeError> {
    std::fs::create_dir_all(dir).map_err(BakeError::CreateDir)?;
    let size = cubemap.face_size();

    for (face, bytes) in cubemap.to_rgba8().into_iter().enumerate() {
        let img = image::RgbaImage::from_raw(size, size, bytes)
            .ok_or(BakeError::FaceBuffer { face })?;
        img.save(dir.join(format!("face_{face}.png")))?;
    }

    info!(dir = %dir.display(), face_size = size, "exported cubemap faces");
    Ok(())
}

/// Write the auxiliary preview target as a single PNG at `path`.
pub fn export_target_png(target: &RenderTarget, path: &Path) -> Result<(), BakeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(BakeError::CreateDir)?;
    }

    let img = image::RgbaImage::from_raw(target.width(), target.height(), target.to_rgba8())
        .ok_or(BakeError::FaceBuffer { face: 0 })?;
    img.save(path)?;

    info!(path = %path.display(), "exported preview target");
    Ok(())
}
