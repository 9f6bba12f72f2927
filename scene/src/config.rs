use std::time::Duration;

use crate::math::{Color, Size};

pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;
pub const STEP: i32 = 10;
pub const TARGET_FPS: u64 = 60;

/// Fixed values the viewer runs with. There is no file or environment layer;
/// `Default` is the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub viewport: Size,
    pub player: Size,
    pub step: i32,
    pub background: Color,
    pub fallback: Color,
    pub frame_delay: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "TEST".to_string(),
            viewport: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            player: Size::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            step: STEP,
            background: Color::from_rgb_hex(0x0080AA),
            fallback: Color::from_rgb_hex(0xAA0080),
            // whole milliseconds, 16ms
            frame_delay: Duration::from_millis(1000 / TARGET_FPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_window() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.title, "TEST");
        assert_eq!(cfg.viewport, Size::new(1280, 720));
        assert_eq!(cfg.player, Size::new(50, 50));
        assert_eq!(cfg.step, 10);
        assert_eq!(cfg.frame_delay, Duration::from_millis(16));
    }

    #[test]
    fn default_colors() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.background, Color::rgba(0x00, 0x80, 0xaa, 0xff));
        assert_eq!(cfg.fallback, Color::rgba(0xaa, 0x00, 0x80, 0xff));
    }
}
