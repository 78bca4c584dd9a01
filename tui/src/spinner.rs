//! Spinner Animation
//!
//! Frame-indexed spinner for the todo being worked on. The panel itself is a
//! pure render, so it never keeps time: callers advance a [`SpinnerClock`]
//! and pass the resulting frame index in.

use std::time::Duration;

use plan_core::GlyphSet;

/// Braille spinner frames
const UNICODE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII spinner frames
const ASCII_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Get the spinner glyph for a frame index (wraps around)
#[must_use]
pub fn spinner_frame(glyphs: GlyphSet, frame: usize) -> &'static str {
    let frames = match glyphs {
        GlyphSet::Unicode => UNICODE_FRAMES,
        GlyphSet::Ascii => ASCII_FRAMES,
    };
    frames[frame % frames.len()]
}

/// Accumulates elapsed time into spinner frames
#[derive(Debug)]
pub struct SpinnerClock {
    /// Current frame index
    frame: usize,
    /// Time accumulated on current frame
    frame_time: Duration,
    /// How long each frame is shown
    frame_duration: Duration,
}

impl SpinnerClock {
    /// Create a clock advancing one frame per `frame_duration`
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame: 0,
            frame_time: Duration::ZERO,
            frame_duration,
        }
    }

    /// Advance by elapsed time
    pub fn update(&mut self, delta: Duration) {
        if self.frame_duration.is_zero() {
            return;
        }

        self.frame_time += delta;
        while self.frame_time >= self.frame_duration {
            self.frame_time -= self.frame_duration;
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Current frame index
    pub fn frame(&self) -> usize {
        self.frame
    }
}
