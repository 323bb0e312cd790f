use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

const SCALE: usize = 10;

/// # Window
/// An SDL2 window that presents the core's 64x32 framebuffer.
///
/// The window only gets a call to `render` when the core yields a changed
/// frame, so an idle machine costs nothing to present.
pub struct Window {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

impl Window {
    /// Creates the window bound to an SDL2 context.
    ///
    /// # Arguments
    /// * `sdl` the SDL2 context to create the video subsystem from
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "CHIP-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Window {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a framebuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes representing
    /// concatenated rows of RGB pixels, so this flattens the rows,
    /// triplicates each pixel for its three channels and scales the
    /// binary state to full intensity.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|px| std::iter::repeat(px).take(3))
            .map(|px| px * 255)
            .collect()
    }

    /// Renders a framebuffer: foreground pixels white, background black.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Window::frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
