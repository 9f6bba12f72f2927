use std::time::Duration;

use scene::{DrawCmd, Frame, InputEvent, Key};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("{0}")]
    Init(String),
    #[error("Error while building window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("Error while creating renderer: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),
    #[error("draw call failed: {0}")]
    Draw(String),
}

#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub title: String,
    pub w: u32,
    pub h: u32,
}

impl From<&scene::ViewerConfig> for SystemConfig {
    fn from(cfg: &scene::ViewerConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            w: cfg.viewport.w.max(0) as u32,
            h: cfg.viewport.h.max(0) as u32,
        }
    }
}

// Field order is drop order: renderer and window go before the subsystems.
pub struct System {
    pub canvas: WindowCanvas,
    pub event_pump: sdl2::EventPump,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(cfg: &SystemConfig) -> Result<System, SystemError> {
        let sdl_context = sdl2::init().map_err(SystemError::Init)?;
        let video_subsystem = sdl_context.video().map_err(SystemError::Init)?;

        let window = video_subsystem
            .window(&cfg.title, cfg.w, cfg.h)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().accelerated().build()?;
        info!(title = %cfg.title, w = cfg.w, h = cfg.h, "window created");

        let event_pump = sdl_context.event_pump().map_err(SystemError::Init)?;

        // show the empty window before the image is decoded
        canvas.present();

        Ok(System {
            canvas,
            event_pump,
            video_subsystem,
            sdl_context,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Drains every pending event, keeping only the ones the viewer handles.
    pub fn process_io_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| translate_event(&event))
            .collect()
    }

    pub fn render(&mut self, frame: &Frame, texture: Option<&Texture>) -> Result<(), SystemError> {
        for cmd in &frame.cmds {
            let res = match *cmd {
                DrawCmd::Clear => {
                    self.canvas.clear();
                    Ok(())
                }
                DrawCmd::Fill(rect, color) => {
                    self.canvas.set_draw_color(to_sdl_color(color));
                    self.canvas.fill_rect(to_sdl_rect(rect))
                }
                DrawCmd::Blit(rect) => match texture {
                    Some(texture) => self.canvas.copy(texture, None, to_sdl_rect(rect)),
                    None => Ok(()),
                },
            };
            if let Err(e) = res {
                error!(?cmd, "{e}");
                return Err(SystemError::Draw(e));
            }
        }
        Ok(())
    }

    /// Presents the frame and sleeps a fixed delay. There is no correction
    /// for time spent rendering.
    pub fn draw_to_screen(&mut self, delay: Duration) {
        self.canvas.present();
        ::std::thread::sleep(delay);
    }
}

pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            scancode: Some(scancode),
            ..
        } => translate_scancode(*scancode).map(InputEvent::KeyDown),
        _ => None,
    }
}

// Matched by physical key (scancode), not by keycode.
fn translate_scancode(scancode: Scancode) -> Option<Key> {
    match scancode {
        Scancode::Up => Some(Key::Up),
        Scancode::Down => Some(Key::Down),
        Scancode::Left => Some(Key::Left),
        Scancode::Right => Some(Key::Right),
        Scancode::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn to_sdl_rect(r: scene::Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(r.x, r.y, r.w.max(0) as u32, r.h.max(0) as u32)
}

fn to_sdl_color(c: scene::Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
}
