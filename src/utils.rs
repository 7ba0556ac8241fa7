//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Split badge: coffee cup on the left half, chip on the right. Used for the window icon.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="0" y="0" width="32" height="64" rx="8" fill="#5c3c21"/><rect x="32" y="0" width="32" height="64" rx="8" fill="#0a192f"/><path d="M7 24h16v14a6 6 0 0 1-6 6h-4a6 6 0 0 1-6-6z" fill="#fdf6e3"/><path d="M23 27h2a3 3 0 0 1 0 6h-2" stroke="#fdf6e3" stroke-width="2" fill="none"/><rect x="40" y="24" width="16" height="16" rx="2" fill="none" stroke="#64ffda" stroke-width="2"/><rect x="45" y="29" width="6" height="6" fill="#64ffda"/><path d="M44 20v4M48 20v4M52 20v4M44 40v4M48 40v4M52 40v4" stroke="#64ffda" stroke-width="2"/></svg>"##;

/// Rasterize SVG source at the given width, preserving aspect ratio.
/// Returns straight-alpha RGBA pixels.
pub fn rasterize_svg(data: &[u8], width: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_data(data, &resvg::usvg::Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), width, height))
}

/// Rasterize the app icon to a square image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    rasterize_svg(ICON_SVG.as_bytes(), size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("cache")
}

/// 64-bit FNV-1a. Fixed constants, so names survive toolchain upgrades.
fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ b as u64).wrapping_mul(PRIME))
}

/// Stable file name for a cached remote image
pub fn cache_file_name(url: &str) -> String {
    let ext = if is_svg_url(url) { "svg" } else { "img" };
    format!("{:016x}.{}", fnv1a64(url.as_bytes()), ext)
}

/// Whether a URL points at an SVG document (query string ignored)
pub fn is_svg_url(url: &str) -> bool {
    url.split(['?', '#'])
        .next()
        .is_some_and(|path| path.to_ascii_lowercase().ends_with(".svg"))
}

/// Current year for the footer line
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg_url() {
        assert!(is_svg_url(
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg"
        ));
        assert!(is_svg_url("https://x.test/a.SVG?v=2"));
        assert!(!is_svg_url("https://img.icons8.com/color/48/stm32.png"));
        assert!(!is_svg_url(
            "https://images.unsplash.com/photo-1551288049?auto=format&fit=crop"
        ));
    }

    #[test]
    fn test_cache_file_name_is_stable() {
        let a = cache_file_name("https://x.test/a.svg");
        assert_eq!(a, cache_file_name("https://x.test/a.svg"));
        assert!(a.ends_with(".svg"));
        assert_ne!(a, cache_file_name("https://x.test/b.svg"));
    }

    #[test]
    fn test_cache_file_name_is_pinned() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(cache_file_name("a"), "af63dc4c8601ec8c.img");
    }

    #[test]
    fn test_icon_rasterizes_square() {
        let (pixels, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_invalid_svg_is_none() {
        assert!(rasterize_svg(b"not an svg", 16).is_none());
    }
}
