use crossbeam_channel::Sender;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use thiserror::Error;

use crate::display::domain::frame_display::FrameDisplay;
use crate::input::control_event::ControlEvent;
use crate::shared::frame::Frame;
use crate::shared::point::Point;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("failed to create window: {0}")]
    Create(String),
    #[error("failed to update window: {0}")]
    Update(String),
}

/// Pixel-buffer window backed by minifb.
///
/// Each `present` pushes the frame and polls input; left-click edges and
/// quit requests (Escape, window close) are forwarded as `ControlEvent`s.
pub struct MinifbDisplay {
    window: Window,
    buffer: Vec<u32>,
    events: Sender<ControlEvent>,
    mouse_was_down: bool,
    quit_sent: bool,
}

impl MinifbDisplay {
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        events: Sender<ControlEvent>,
    ) -> Result<Self, DisplayError> {
        let window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .map_err(|e| DisplayError::Create(e.to_string()))?;

        Ok(Self {
            window,
            buffer: vec![0u32; width as usize * height as usize],
            events,
            mouse_was_down: false,
            quit_sent: false,
        })
    }

    fn poll_input(&mut self) {
        if !self.quit_sent
            && (!self.window.is_open() || self.window.is_key_down(Key::Escape))
        {
            let _ = self.events.send(ControlEvent::Quit);
            self.quit_sent = true;
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_was_down {
            if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
                let _ = self
                    .events
                    .send(ControlEvent::Click(Point::new(x as i32, y as i32)));
            }
        }
        self.mouse_was_down = down;
    }
}

impl FrameDisplay for MinifbDisplay {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        pack_0rgb(frame.data(), &mut self.buffer);
        self.window
            .update_with_buffer(
                &self.buffer,
                frame.width() as usize,
                frame.height() as usize,
            )
            .map_err(|e| DisplayError::Update(e.to_string()))?;
        self.poll_input();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

/// Packs interleaved RGB bytes into minifb's 0x00RRGGBB layout.
fn pack_0rgb(rgb: &[u8], out: &mut Vec<u32>) {
    out.clear();
    out.extend(rgb.chunks_exact(3).map(|px| {
        (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32
    }));
}
