//! Image decoding via the `image` crate
//!
//! Any format the `image` crate was built with (JPEG, PNG, BMP, TIFF) is
//! accepted. Decoded pixels are converted to 8-bit RGB and then swapped into
//! BGR order.

use crate::error::{Error, Result};
use crate::raster::ColorImage;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Read an image file into a BGR `ColorImage`
///
/// Missing files, corrupt data and unsupported formats all surface as
/// [`Error::ImageLoad`] carrying the attempted path.
pub fn read_color_image<P: AsRef<Path>>(path: P) -> Result<ColorImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| Error::ImageLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    from_dynamic(image)
}

/// Decode an in-memory encoded image into a BGR `ColorImage`
///
/// Same as `read_color_image` but operates on a byte slice instead of a file path.
pub fn read_color_image_from_buffer(data: &[u8]) -> Result<ColorImage> {
    let image = image::load_from_memory(data).map_err(|e| Error::ImageLoad {
        path: "<memory>".to_string(),
        reason: e.to_string(),
    })?;
    from_dynamic(image)
}

fn from_dynamic(image: DynamicImage) -> Result<ColorImage> {
    let rgb: RgbImage = image.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width: width as usize,
            height: height as usize,
        });
    }
    ColorImage::from_rgb_slice(rgb.as_raw(), height as usize, width as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Bgr;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    fn encode_png(img: RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_swaps_to_bgr() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([200, 100, 50]));
        let decoded = read_color_image_from_buffer(&encode_png(img)).unwrap();

        assert_eq!(decoded.shape(), (2, 3));
        assert_eq!(decoded.get(1, 2).unwrap(), Bgr::new(50, 100, 200));
        assert_eq!(decoded.get(0, 0).unwrap(), Bgr::BLACK);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_color_image("./does/not/exist/coins.jpg").unwrap_err();
        match err {
            Error::ImageLoad { path, .. } => assert!(path.contains("coins.jpg")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = read_color_image_from_buffer(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn test_read_from_disk() {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        let path = std::env::temp_dir().join(format!("morfo_decode_{}.png", std::process::id()));
        std::fs::write(&path, encode_png(img)).unwrap();

        let decoded = read_color_image(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(decoded.get(0, 0).unwrap(), Bgr::RED);
    }
}
