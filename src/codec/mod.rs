//! File codecs at the boundary between the filesystem and [`crate::ImageStore`].

pub mod compressed;
pub mod ppm;

use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{PhotolabError, PhotolabResult},
    raster::buffer::PixelBuffer,
};

/// Supported on-disk formats, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Plain-text `P3` pixmap.
    Ppm,
    Png,
    Jpeg,
}

impl FileFormat {
    /// Resolve from the path's extension (`.ppm`, `.png`, `.jpg`, `.jpeg`; case-insensitive).
    pub fn from_path(path: &Path) -> PhotolabResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(PhotolabError::unsupported_file_type(
                path.display().to_string(),
            )),
        }
    }
}

pub fn decode(bytes: &[u8], format: FileFormat, name: &str) -> PhotolabResult<PixelBuffer> {
    match format {
        FileFormat::Ppm => ppm::decode_ppm(bytes, name),
        FileFormat::Png => compressed::decode_compressed(bytes, image::ImageFormat::Png, name),
        FileFormat::Jpeg => compressed::decode_compressed(bytes, image::ImageFormat::Jpeg, name),
    }
}

pub fn encode(buffer: &PixelBuffer, format: FileFormat) -> PhotolabResult<Vec<u8>> {
    match format {
        FileFormat::Ppm => Ok(ppm::encode_ppm(buffer)),
        FileFormat::Png => compressed::encode_compressed(buffer, image::ImageFormat::Png),
        FileFormat::Jpeg => compressed::encode_compressed(buffer, image::ImageFormat::Jpeg),
    }
}

/// Read and decode the file at `path`, naming the result `name`.
pub fn load_image(path: &Path, name: &str) -> PhotolabResult<PixelBuffer> {
    let format = FileFormat::from_path(path)?;
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    decode(&bytes, format, name)
}

/// Encode `buffer` by the extension of `path` and write it, creating parent directories.
pub fn save_image(path: &Path, buffer: &PixelBuffer) -> PhotolabResult<()> {
    let format = FileFormat::from_path(path)?;
    let bytes = encode(buffer, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/mod.rs"]
mod tests;
