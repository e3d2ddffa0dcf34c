// src/imaging.rs

use image::{DynamicImage, RgbImage, imageops};

/// Lado máximo de la foto una vez normalizada.
pub const MAX_SIDE: u32 = 640;

/// Decodifica bytes de una foto a RGB8 y la reduce si es muy grande.
/// Una imagen sin área se trata como fallo de decodificación (`None`).
pub fn decode_photo(bytes: &[u8]) -> Result<Option<RgbImage>, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Ok(None);
    }
    Ok(Some(shrink(img).to_rgb8()))
}

fn shrink(img: DynamicImage) -> DynamicImage {
    if img.width() > MAX_SIDE || img.height() > MAX_SIDE {
        img.resize(MAX_SIDE, MAX_SIDE, imageops::FilterType::Triangle)
    } else {
        img
    }
}

/// Desenfoque gaussiano; con intensidad 0 devuelve la imagen tal cual.
pub fn apply_blur(img: &RgbImage, sigma: f32) -> RgbImage {
    if sigma <= 0.0 {
        return img.clone();
    }
    imageops::blur(img, sigma)
}
