use std::path::Path;

use scene::Size;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{BlendMode, Texture, TextureCreator, TextureValueError, UpdateTextureError};
use tracing::info;

const RGBA_DEPTH: usize = 4;

// stb hands back bytes in R, G, B, A order; SDL names packed formats by word.
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("loading image {path} error: {reason}")]
    Decode { path: String, reason: String },
    #[error("{0}")]
    UnsupportedFormat(String),
    #[error("texture creation failed: {0}")]
    Create(#[from] TextureValueError),
    #[error("texture upload failed: {0}")]
    Upload(#[from] UpdateTextureError),
}

/// Decoded image, always 8-bit RGBA.
#[derive(Debug)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    pub fn pitch(&self) -> usize {
        self.width as usize * RGBA_DEPTH
    }
}

pub fn decode_rgba(path: &Path) -> Result<RgbaImage, TextureError> {
    let img = match stb_image::image::load_with_depth(path, RGBA_DEPTH, false) {
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(TextureError::UnsupportedFormat(format!(
                "{}: HDR images not supported here",
                path.display()
            )));
        }
        stb_image::image::LoadResult::Error(e) => {
            return Err(TextureError::Decode {
                path: path.display().to_string(),
                reason: e,
            })
        }
    };

    if img.data.len() != img.width * img.height * RGBA_DEPTH {
        return Err(TextureError::UnsupportedFormat(format!(
            "{}: expected {} channels, got {} bytes for {}x{}",
            path.display(),
            RGBA_DEPTH,
            img.data.len(),
            img.width,
            img.height
        )));
    }

    Ok(RgbaImage {
        width: img.width as u32,
        height: img.height as u32,
        data: img.data,
    })
}

/// Decodes `path` and uploads it into a static texture of the image's
/// native size.
pub fn load_texture<'a, T>(
    creator: &'a TextureCreator<T>,
    path: &Path,
) -> Result<Texture<'a>, TextureError> {
    let img = decode_rgba(path)?;

    let mut texture = creator.create_texture_static(RGBA_BYTES, img.width, img.height)?;
    texture.update(None, &img.data, img.pitch())?;
    texture.set_blend_mode(BlendMode::Blend);

    info!(path = %path.display(), w = img.width, h = img.height, "texture loaded");
    Ok(texture)
}

pub fn texture_size(texture: &Texture) -> Size {
    let query = texture.query();
    Size::new(query.width as i32, query.height as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(suffix: &str, bytes: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    fn tiny_ppm() -> Vec<u8> {
        let mut bytes = b"P6\n3 2\n255\n".to_vec();
        for i in 0..6u8 {
            bytes.extend_from_slice(&[i, 0x80, 0xaa]);
        }
        bytes
    }

    #[test]
    fn missing_file_is_decode_error() {
        let err = decode_rgba(Path::new("/nonexistent/sprite.png")).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
        assert!(err.to_string().contains("/nonexistent/sprite.png"));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let file = fixture(".png", b"definitely not an image");
        let err = decode_rgba(file.path()).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
    }

    #[test]
    fn rgb_image_is_expanded_to_rgba_with_native_size() {
        let file = fixture(".ppm", &tiny_ppm());
        let img = decode_rgba(file.path()).unwrap();

        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pitch(), 12);
        assert_eq!(img.data.len(), 24);
        assert_eq!(&img.data[4..8], &[1, 0x80, 0xaa, 0xff]);
    }
}
