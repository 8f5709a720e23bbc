//! Frame-scheduling host
//!
//! The host owns the canvas for its whole lifetime and drives one registered
//! [`FrameHandler`] per frame. Natively, [`Host::run`] paces frames on the
//! calling thread; in the browser, `requestAnimationFrame` calls
//! [`Host::step`] instead.

use crate::canvas::Canvas;
use crate::error::{BounceError, Result};

/// Per-frame callback
pub trait FrameHandler {
    fn on_frame(&mut self, canvas: &mut dyn Canvas);
}

impl<F> FrameHandler for F
where
    F: FnMut(&mut dyn Canvas),
{
    fn on_frame(&mut self, canvas: &mut dyn Canvas) {
        self(canvas)
    }
}

pub struct Host<C: Canvas> {
    canvas: C,
    handler: Option<Box<dyn FrameHandler>>,
    frame_rate: u32,
    max_frames: Option<u64>,
    frames: u64,
}

impl<C: Canvas> Host<C> {
    pub fn new(canvas: C, frame_rate: u32) -> Self {
        Self {
            canvas,
            handler: None,
            frame_rate: frame_rate.max(1),
            max_frames: None,
            frames: 0,
        }
    }

    /// Stop `run` after this many frames
    pub fn with_frame_limit(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Register the per-frame callback, replacing any previous one
    pub fn animate(&mut self, handler: impl FrameHandler + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Drive exactly one frame; false if nothing is registered
    pub fn step(&mut self) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler.on_frame(&mut self.canvas);
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    /// Frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    fn limit_reached(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frames >= max)
    }

    /// Block, driving frames at the frame rate until the frame limit
    ///
    /// Without a limit this only returns when the process is terminated.
    /// A frame that overruns its slot is followed immediately by the next one;
    /// missed slots are not made up.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&mut self) -> Result<()> {
        use std::time::{Duration, Instant};

        if self.handler.is_none() {
            return Err(BounceError::NoFrameHandler);
        }

        let interval = Duration::from_secs_f64(1.0 / self.frame_rate as f64);
        let (w, h) = self.canvas.size();
        log::info!(
            "Running {}x{} canvas at {} fps (limit: {:?})",
            w,
            h,
            self.frame_rate,
            self.max_frames
        );

        let mut next = Instant::now();
        while !self.limit_reached() {
            self.step();

            if self.frames % (self.frame_rate as u64 * 10) == 0 {
                log::debug!("{} frames driven", self.frames);
            }

            next += interval;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            } else {
                next = now;
            }
        }

        log::info!("Stopped after {} frames", self.frames);
        Ok(())
    }
}
