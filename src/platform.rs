//! SDL2 platform layer
//!
//! Everything the event loop needs from the outside world sits behind the
//! [`Platform`] trait: a window surface to draw on, pictures to lay out,
//! input to poll and a clock to pace frames. [`SdlPlatform`] is the real
//! implementation; tests drive the loop with a scripted one.

use crate::assets::{AssetCatalog, AssetError, AssetId, Picture, TextureCache};
use crate::input_system::{InputSystem, MenuAction};
use crate::render::{Renderer, copy_picture, fill_glyphs};
use crate::text::GlyphImage;
use sdl2::EventPump;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::time::{Duration, Instant};

/// The outside world as seen by the event loop
pub trait Platform: Renderer + AssetCatalog {
    /// Drains pending input
    fn poll_actions(&mut self) -> Vec<MenuAction>;

    /// Blocks until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Frame pacing at a fixed target rate
pub struct FrameClock {
    frame_duration: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        FrameClock {
            frame_duration: Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleeps for whatever is left of the current frame
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        let frame_duration = self.frame_duration();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
        self.last_tick = Instant::now();
    }
}

/// SDL2 subsystems, the window canvas and its event pump
///
/// Dropping this tears the subsystems down.
pub struct SdlWindow {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _image_context: Sdl2ImageContext,
    _sdl_context: sdl2::Sdl,
}

impl SdlWindow {
    /// Initializes SDL2 video and PNG loading and opens a fixed-size window
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let image_context = sdl2::image::init(InitFlag::PNG)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let event_pump = sdl_context.event_pump()?;

        log::info!("Window opened ({}x{})", width, height);

        Ok(SdlWindow {
            canvas,
            event_pump,
            _image_context: image_context,
            _sdl_context: sdl_context,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }
}

/// Platform backed by an SDL2 window
pub struct SdlPlatform<'a> {
    window: SdlWindow,
    textures: TextureCache<'a>,
    input: InputSystem,
    clock: FrameClock,
}

impl<'a> SdlPlatform<'a> {
    pub fn new(window: SdlWindow, textures: TextureCache<'a>, target_fps: u32) -> Self {
        SdlPlatform {
            window,
            textures,
            input: InputSystem::new(),
            clock: FrameClock::new(target_fps),
        }
    }
}

impl Renderer for SdlPlatform<'_> {
    fn output_size(&self) -> (u32, u32) {
        self.window.canvas.window().size()
    }

    fn set_caption(&mut self, caption: &str) -> Result<(), String> {
        self.window
            .canvas
            .window_mut()
            .set_title(caption)
            .map_err(|e| e.to_string())
    }

    fn draw_picture(&mut self, asset: AssetId, position: (i32, i32), size: (u32, u32)) -> Result<(), String> {
        copy_picture(&mut self.window.canvas, &self.textures, asset, position, size)
    }

    fn draw_glyphs(&mut self, glyphs: &GlyphImage, position: (i32, i32)) -> Result<(), String> {
        fill_glyphs(&mut self.window.canvas, glyphs, position)
    }

    fn present(&mut self) {
        self.window.canvas.present();
    }
}

impl AssetCatalog for SdlPlatform<'_> {
    fn picture(&self, asset: AssetId) -> Result<Picture, AssetError> {
        self.textures.picture(asset)
    }
}

impl Platform for SdlPlatform<'_> {
    fn poll_actions(&mut self) -> Vec<MenuAction> {
        self.input.poll_actions(&mut self.window.event_pump)
    }

    fn wait_for_next_frame(&mut self) {
        self.clock.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_for_target_rate() {
        assert_eq!(FrameClock::new(120).frame_duration(), Duration::from_nanos(8_333_333));
        assert_eq!(FrameClock::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_at_least_one_frame() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        clock.tick();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
