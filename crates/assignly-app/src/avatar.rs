/*
[INPUT]:  Opaque path to a user-picked image file
[OUTPUT]: Base64 string of the avatar re-encoded as max-quality JPEG
[POS]:    Presentation layer - avatar preparation for the signup request
[UPDATE]: When the upload format or failure handling changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;

const AVATAR_JPEG_QUALITY: u8 = 100;

/// Encode a picked avatar for upload.
///
/// Reads the referenced file, decodes it to a raster image, re-encodes it
/// as max-quality JPEG, and returns the bytes as standard base64. An absent
/// reference, an unreadable file, or an undecodable image all yield an
/// empty string; failures are logged and never surfaced to the caller.
pub async fn encode_avatar(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return String::new();
    };

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), "avatar read failed: {err}");
            return String::new();
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(path = %path.display(), "avatar decode failed: {err}");
            return String::new();
        }
    };

    // JPEG carries no alpha channel.
    let rgb = decoded.to_rgb8();
    let mut jpeg = Vec::new();
    if let Err(err) = JpegEncoder::new_with_quality(&mut jpeg, AVATAR_JPEG_QUALITY).encode_image(&rgb)
    {
        tracing::warn!(path = %path.display(), "avatar re-encode failed: {err}");
        return String::new();
    }

    BASE64.encode(&jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("assignly-avatar-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_absent_reference_yields_empty_string() {
        assert_eq!(encode_avatar(None).await, "");
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_string() {
        let path = temp_file("missing.png");
        assert_eq!(encode_avatar(Some(&path)).await, "");
    }

    #[tokio::test]
    async fn test_undecodable_file_yields_empty_string() {
        let path = temp_file("garbage.png");
        std::fs::write(&path, b"definitely not an image").expect("write should succeed");

        assert_eq!(encode_avatar(Some(&path)).await, "");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_valid_image_yields_base64_jpeg() {
        let path = temp_file("valid.png");
        let source = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 40, 40]));
        let mut png = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("png encode should succeed");
        std::fs::write(&path, &png).expect("write should succeed");

        let encoded = encode_avatar(Some(&path)).await;
        assert!(!encoded.is_empty());

        let jpeg = BASE64.decode(&encoded).expect("output should be base64");
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "payload should be JPEG");

        let _ = std::fs::remove_file(&path);
    }
}
