use tracing::debug;

use crate::config::ViewerConfig;
use crate::input::{InputEvent, Key};
use crate::math::{Color, Rect, Size};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// One draw call of a frame, executed in order by the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Clear,
    Fill(Rect, Color),
    // copy the whole loaded texture stretched into the rect
    Blit(Rect),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

/// State of the single-sprite viewer: the player rectangle, whether a texture
/// backs it and whether the loop should keep going.
///
/// The type holds no platform handles. The backend feeds it input events and
/// executes the [`Frame`] it describes.
#[derive(Debug, Clone)]
pub struct Viewer {
    config: ViewerConfig,
    player: Rect,
    background: Rect,
    textured: bool,
    state: RunState,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let view = config.viewport;
        let size = config.player;
        // not the true center: kept as (W + w) / 2
        let player = Rect::new((view.w + size.w) / 2, (view.h + size.h) / 2, size.w, size.h);
        Self {
            background: Rect::at_origin(view),
            player,
            textured: false,
            state: RunState::Running,
            config,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn player(&self) -> Rect {
        self.player
    }

    pub fn background(&self) -> Rect {
        self.background
    }

    pub fn has_texture(&self) -> bool {
        self.textured
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Marks the sprite as textured and takes over the image's native size.
    /// The position stays where [`Viewer::new`] put it.
    pub fn attach_texture_size(&mut self, size: Size) {
        self.player.w = size.w;
        self.player.h = size.h;
        self.textured = true;
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                self.state = RunState::Stopped;
            }
            InputEvent::KeyDown(key) => {
                if let Some((dx, dy)) = key.direction(self.config.step) {
                    self.player.translate(dx, dy);
                }
            }
        }
    }

    /// Applies a whole poll batch. Events after a quit are still applied.
    pub fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn clamp(&mut self) {
        self.player.clamp_to(self.config.viewport);
    }

    /// Input then clamp, the update half of one loop iteration.
    /// Returns whether another iteration should follow; the frame for this
    /// iteration is drawn regardless.
    pub fn update<I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let before = self.player;
        self.handle_events(events);
        self.clamp();
        if before != self.player {
            debug!(x = self.player.x, y = self.player.y, "player moved");
        }
        self.is_running()
    }

    pub fn frame(&self) -> Frame {
        let sprite = if self.textured {
            DrawCmd::Blit(self.player)
        } else {
            DrawCmd::Fill(self.player, self.config.fallback)
        };
        Frame {
            cmds: vec![
                DrawCmd::Clear,
                DrawCmd::Fill(self.background, self.config.background),
                sprite,
            ],
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: Key) -> InputEvent {
        InputEvent::KeyDown(k)
    }

    #[test]
    fn initial_geometry() {
        let v = Viewer::default();
        assert_eq!(v.player(), Rect::new(665, 385, 50, 50));
        assert_eq!(v.background(), Rect::new(0, 0, 1280, 720));
        assert!(v.is_running());
        assert!(!v.has_texture());
    }

    #[test]
    fn arrow_keys_move_by_step() {
        let mut v = Viewer::default();
        assert!(v.update([key(Key::Up)]));
        assert_eq!((v.player().x, v.player().y), (665, 375));
        v.update([key(Key::Down), key(Key::Down)]);
        assert_eq!(v.player().y, 395);
        v.update([key(Key::Left)]);
        assert_eq!(v.player().x, 655);
        v.update([key(Key::Right), key(Key::Right), key(Key::Right)]);
        assert_eq!(v.player().x, 685);
    }

    #[test]
    fn batch_applies_cumulatively_before_clamp() {
        let mut v = Viewer::default();
        // 70 lefts go far past the edge in one batch, clamp happens once
        v.update(std::iter::repeat(key(Key::Left)).take(70));
        assert_eq!(v.player().x, 0);
    }

    #[test]
    fn movement_stays_in_bounds() {
        let mut v = Viewer::default();
        let keys = [Key::Right, Key::Down, Key::Left, Key::Up];
        for (i, k) in keys.iter().cycle().take(400).enumerate() {
            let burst = 1 + i % 13;
            v.update(std::iter::repeat(key(*k)).take(burst));
            let p = v.player();
            assert!(p.x >= 0 && p.x <= 1280 - p.w, "x out of bounds: {p:?}");
            assert!(p.y >= 0 && p.y <= 720 - p.h, "y out of bounds: {p:?}");
        }
    }

    #[test]
    fn escape_stops() {
        let mut v = Viewer::default();
        assert!(!v.update([key(Key::Escape)]));
        assert_eq!(v.state(), RunState::Stopped);
    }

    #[test]
    fn quit_stops_but_rest_of_batch_applies() {
        let mut v = Viewer::default();
        let running = v.update([InputEvent::Quit, key(Key::Right)]);
        assert!(!running);
        assert_eq!(v.player().x, 675);
    }

    #[test]
    fn stopped_is_terminal() {
        let mut v = Viewer::default();
        v.update([key(Key::Escape)]);
        assert!(!v.update([key(Key::Up)]));
        assert!(!v.update(std::iter::empty()));
    }

    #[test]
    fn texture_size_overrides_default_size_only() {
        let mut v = Viewer::default();
        v.attach_texture_size(Size::new(100, 80));
        assert_eq!(v.player(), Rect::new(665, 385, 100, 80));
        assert!(v.has_texture());
    }

    #[test]
    fn fallback_frame_fills_player() {
        let mut v = Viewer::default();
        for _ in 0..3 {
            v.update([key(Key::Up)]);
            let frame = v.frame();
            assert_eq!(
                frame.cmds,
                vec![
                    DrawCmd::Clear,
                    DrawCmd::Fill(Rect::new(0, 0, 1280, 720), Color::rgba(0x00, 0x80, 0xaa, 0xff)),
                    DrawCmd::Fill(v.player(), Color::rgba(0xaa, 0x00, 0x80, 0xff)),
                ]
            );
        }
    }

    #[test]
    fn textured_frame_blits_player() {
        let mut v = Viewer::default();
        v.attach_texture_size(Size::new(100, 80));
        v.update(std::iter::empty());
        let frame = v.frame();
        assert_eq!(frame.cmds.len(), 3);
        assert_eq!(
            frame.cmds[1],
            DrawCmd::Fill(Rect::new(0, 0, 1280, 720), Color::rgba(0x00, 0x80, 0xaa, 0xff))
        );
        assert_eq!(frame.cmds[2], DrawCmd::Blit(Rect::new(665, 385, 100, 80)));
    }

    #[test]
    fn oversized_texture_is_pinned_negative() {
        let mut v = Viewer::default();
        v.attach_texture_size(Size::new(2000, 100));
        v.update(std::iter::empty());
        assert_eq!(v.player().x, 1280 - 2000);
    }

    #[test]
    fn large_texture_clamped_on_first_update() {
        let mut v = Viewer::default();
        v.attach_texture_size(Size::new(800, 600));
        v.update(std::iter::empty());
        assert_eq!((v.player().x, v.player().y), (480, 120));
    }
}
