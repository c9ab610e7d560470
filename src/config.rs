use log::Level;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "images" // Served next to index.html by trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/images" // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Builds the URL of a bundled image. File names contain spaces
/// ("3 medium.png") so they are percent-encoded.
pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base(), urlencoding::encode(file))
}

// Navbar switches to the opaque style past this vertical offset (px).
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const FADE_IN_ROOT_MARGIN: &str = "-50px";
pub const REVEAL_ROOT_MARGIN: &str = "-10%";
pub const FADE_IN_DISTANCE_PX: u32 = 40;
pub const FADE_IN_DURATION_SECS: f64 = 0.8;
pub const WORD_STAGGER_SECS: f64 = 0.05;

pub const PARALLAX_DEFAULT_OFFSET_PX: f64 = 50.0;
pub const PARALLAX_SCALE: f64 = 1.15;
pub const FAILED_IMAGE_OPACITY: &str = "0.5";

pub const MARQUEE_CYCLE_MS: f64 = 40_000.0;
pub const MARQUEE_TICK_MS: u32 = 16;

// Hero image drifts down and the copy fades out over the first screen.
pub const HERO_DRIFT_SCROLL: (f64, f64) = (0.0, 500.0);
pub const HERO_DRIFT_PX: (f64, f64) = (0.0, 200.0);
pub const HERO_FADE_SCROLL: (f64, f64) = (0.0, 300.0);

pub const MODEL_VIEWER_TITLE: &str = "Fashion Design Underwear For Men Boxer Briefs";
pub const MODEL_VIEWER_SRC: &str = "https://sketchfab.com/models/c378802e1ac840498f2e119be1f6a9b7/embed?ui_theme=dark&autostart=1&transparent=1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_encodes_spaces() {
        let url = asset_url("3 medium.png");
        assert!(url.ends_with("/3%20medium.png"));
        assert!(url.starts_with(get_asset_base()));
    }
}
