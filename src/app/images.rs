//! Remote image loading (project gallery, skill icons)

use super::App;
use crate::constants::IMAGE_FETCH_CONCURRENCY;
use crate::utils::{cache_file_name, is_svg_url, rasterize_svg};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Width SVG icons are rasterized at before upload
const SVG_RASTER_WIDTH: u32 = 128;

/// Where an image stands in the load pipeline
pub enum ImageSlot {
    Ready(egui::TextureHandle),
    Loading,
    Failed,
}

/// Decode cached bytes into an egui image. SVG goes through resvg, anything
/// else through the `image` crate.
pub fn decode_image(bytes: &[u8], svg: bool) -> Option<egui::ColorImage> {
    if svg {
        let (pixels, w, h) = rasterize_svg(bytes, SVG_RASTER_WIDTH)?;
        return Some(egui::ColorImage::from_rgba_unmultiplied(
            [w as usize, h as usize],
            &pixels,
        ));
    }
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw()))
}

/// Decode a cached file. An unreadable or undecodable file is removed so the
/// next session fetches it again.
pub fn load_cached(path: &Path, svg: bool) -> Option<egui::ColorImage> {
    let image = std::fs::read(path)
        .ok()
        .and_then(|bytes| decode_image(&bytes, svg));
    if image.is_none() {
        warn!(path = %path.display(), "Discarding undecodable cached image");
        std::fs::remove_file(path).ok();
    }
    image
}

/// Fetch one URL into the disk cache. Returns false on any failure.
async fn fetch_to_cache(client: &reqwest::Client, url: &str, dest: &Path) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => match response.bytes().await {
            Ok(bytes) => {
                if let Some(parent) = dest.parent() {
                    tokio::fs::create_dir_all(parent).await.ok();
                }
                // Only complete files ever appear under the final name
                let part = dest.with_extension("part");
                if let Err(e) = tokio::fs::write(&part, &bytes).await {
                    warn!(%url, error = %e, "Failed to write image to cache");
                    tokio::fs::remove_file(&part).await.ok();
                    return false;
                }
                match tokio::fs::rename(&part, dest).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(%url, error = %e, "Failed to move image into cache");
                        tokio::fs::remove_file(&part).await.ok();
                        false
                    }
                }
            }
            Err(e) => {
                warn!(%url, error = %e, "Failed to read image body");
                false
            }
        },
        Ok(response) => {
            warn!(%url, status = %response.status(), "Image request rejected");
            false
        }
        Err(e) => {
            warn!(%url, error = %e, "Image request failed");
            false
        }
    }
}

impl App {
    fn image_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join("images").join(cache_file_name(url))
    }

    /// Warm the disk cache for every image the given theme shows
    pub fn prefetch_images(&mut self, ctx: &egui::Context, urls: Vec<&'static str>) {
        let pending: Vec<(String, PathBuf)> = urls
            .into_iter()
            .filter(|url| !self.image_loading.contains(*url))
            .map(|url| (url.to_string(), self.image_path(url)))
            .filter(|(_, path)| !path.exists())
            .collect();
        if pending.is_empty() {
            return;
        }

        debug!(count = pending.len(), "Starting image prefetch");
        for (url, _) in &pending {
            self.image_loading.insert(url.clone());
        }

        let client = self.http.clone();
        let failed = self.image_failed.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let semaphore = Arc::new(tokio::sync::Semaphore::new(IMAGE_FETCH_CONCURRENCY));
            let tasks = pending.into_iter().map(|(url, dest)| {
                let sem = semaphore.clone();
                let client = client.clone();
                let failed = failed.clone();
                let ctx = ctx.clone();
                async move {
                    let _permit = sem.acquire().await.ok();
                    if !fetch_to_cache(&client, &url, &dest).await {
                        if let Ok(mut f) = failed.lock() {
                            f.insert(url);
                        }
                    }
                    ctx.request_repaint();
                }
            });
            futures::future::join_all(tasks).await;
        });
    }

    /// Texture for a remote image, kicking off a fetch on first use
    pub fn image(&mut self, ctx: &egui::Context, url: &'static str) -> ImageSlot {
        if let Some(cached) = self.image_cache.get(url) {
            return match cached {
                Some(tex) => ImageSlot::Ready(tex.clone()),
                None => ImageSlot::Failed,
            };
        }

        let path = self.image_path(url);
        if path.exists() {
            let texture = load_cached(&path, is_svg_url(url))
                .map(|img| ctx.load_texture(url, img, egui::TextureOptions::LINEAR));
            self.image_loading.remove(url);
            self.image_cache.insert(url.to_string(), texture.clone());
            return match texture {
                Some(tex) => ImageSlot::Ready(tex),
                None => ImageSlot::Failed,
            };
        }

        let failed = self
            .image_failed
            .lock()
            .map(|f| f.contains(url))
            .unwrap_or(false);
        if failed {
            self.image_loading.remove(url);
            self.image_cache.insert(url.to_string(), None);
            return ImageSlot::Failed;
        }

        if !self.image_loading.contains(url) {
            self.prefetch_images(ctx, vec![url]);
        }
        ImageSlot::Loading
    }
}

/// Shared set of URLs whose fetch failed this session
pub type FailedSet = Arc<Mutex<std::collections::HashSet<String>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let decoded = decode_image(&bytes, false).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_decode_svg() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 5"><rect width="10" height="5" fill="red"/></svg>"#;
        let decoded = decode_image(svg, true).unwrap();
        assert_eq!(decoded.size, [SVG_RASTER_WIDTH as usize, SVG_RASTER_WIDTH as usize / 2]);
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 100, 50, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dual-portfolio-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_truncated_cache_file_is_discarded() {
        let dir = temp_dir("truncated");
        let path = dir.join("cut.img");
        let bytes = png_bytes();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(load_cached(&path, false).is_none());
        assert!(!path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_valid_cache_file_is_kept() {
        let dir = temp_dir("valid");
        let path = dir.join("ok.img");
        std::fs::write(&path, png_bytes()).unwrap();

        assert_eq!(load_cached(&path, false).unwrap().size, [8, 8]);
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_files() {
        let dir = temp_dir("fetch");
        let dest = dir.join("images").join("x.img");
        let ok = fetch_to_cache(&reqwest::Client::new(), "http://127.0.0.1:9/x.png", &dest).await;

        assert!(!ok);
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_decode_garbage_is_none() {
        assert!(decode_image(b"garbage", false).is_none());
        assert!(decode_image(b"garbage", true).is_none());
    }
}
