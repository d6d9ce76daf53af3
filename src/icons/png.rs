use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, ImageReader, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::IconError;

/// Open an image with its format sniffed from the content, not the extension.
/// A renamed `.jpg -> .png` variant still decodes.
fn open_sniffed(path: &Path) -> Result<ImageReader<std::io::BufReader<fs::File>>, IconError> {
    ImageReader::open(path)
        .map_err(|e| IconError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| IconError::io(path, e))
}

/// Read the pixel size from the image header without decoding pixels
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), IconError> {
    open_sniffed(path)?
        .into_dimensions()
        .map_err(|e| IconError::decode(path, e))
}

/// Rewrite the image at `path` as an 8-bit RGBA PNG, in place.
///
/// The decoded pixels are copied onto a fresh transparent RGBA canvas, which
/// drops palette/indexed and grey representations. Encoding uses the best
/// compression level with adaptive filtering. The file is only overwritten
/// once encoding has succeeded.
///
/// Returns the image dimensions.
pub fn normalize_to_rgba_png(path: &Path) -> Result<(u32, u32), IconError> {
    let decoded = open_sniffed(path)?
        .decode()
        .map_err(|e| IconError::decode(path, e))?;

    let (width, height) = (decoded.width(), decoded.height());
    let mut canvas = RgbaImage::new(width, height);
    imageops::replace(&mut canvas, &decoded.to_rgba8(), 0, 0);

    let encoded = encode_png(&canvas).map_err(|source| IconError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, encoded).map_err(|e| IconError::io(path, e))?;

    Ok((width, height))
}

/// Encode an RGBA buffer as PNG with maximum compression
fn encode_png(canvas: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    canvas.write_with_encoder(encoder)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GrayImage, ImageFormat, Luma, Rgb, RgbImage};

    #[test]
    fn test_probe_reads_header_size() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wide.png");
        RgbImage::new(820, 240).save(&path).unwrap();

        assert_eq!(probe_dimensions(&path).unwrap(), (820, 240));
    }

    #[test]
    fn test_probe_ignores_misleading_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("actually_jpeg.png");
        RgbImage::from_pixel(240, 240, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        assert_eq!(probe_dimensions(&path).unwrap(), (240, 240));
    }

    #[test]
    fn test_probe_rejects_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.png");
        fs::write(&path, b"definitely not an image").unwrap();

        assert!(matches!(
            probe_dimensions(&path),
            Err(IconError::Decode { .. })
        ));
    }

    #[test]
    fn test_normalize_converts_grey_to_rgba_png() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("grey.png");
        GrayImage::from_pixel(240, 240, Luma([200])).save(&path).unwrap();
        assert_eq!(image::open(&path).unwrap().color(), ColorType::L8);

        assert_eq!(normalize_to_rgba_png(&path).unwrap(), (240, 240));

        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.color(), ColorType::Rgba8);
        assert_eq!(reopened.to_rgba8().get_pixel(5, 5).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_normalize_writes_png_over_jpeg_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("monochrome.png");
        RgbImage::from_pixel(240, 240, Rgb([0, 0, 0]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        normalize_to_rgba_png(&path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_failed_decode_leaves_file_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("monochrome.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

        assert!(normalize_to_rgba_png(&path).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG\r\n\x1a\ntruncated");
    }
}
