//! Deterministic in-memory backend.
//!
//! Presents frames into an owned pixel store instead of a window and
//! serves native events from a queue the test (or embedding application)
//! fills by hand. The viewport defaults to the surface size but can be
//! forced larger or smaller to exercise the scaling paths.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::backend::{Backend, NativeEvent};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::raster::FrameBuffer;
use crate::scale::TargetRect;

/// An offscreen [`Backend`] with a hand-fed native event queue.
#[derive(Debug)]
pub struct HeadlessBackend {
    surface: Option<(u32, u32)>,
    viewport_override: Option<(u32, u32)>,
    queue: VecDeque<NativeEvent>,
    last_frame: Option<FrameBuffer>,
    last_target: Option<TargetRect>,
    last_edge: Rgb,
    present_count: usize,
    modifier_mask: u16,
    fullscreen: Option<bool>,
    epoch: Instant,
}

impl HeadlessBackend {
    /// A backend with fullscreen support and a viewport tracking the
    /// surface size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            viewport_override: None,
            queue: VecDeque::new(),
            last_frame: None,
            last_target: None,
            last_edge: Rgb::BLACK,
            present_count: 0,
            modifier_mask: 0,
            fullscreen: Some(false),
            epoch: Instant::now(),
        }
    }

    /// A backend that reports fullscreen as unsupported.
    #[must_use]
    pub fn without_fullscreen() -> Self {
        Self {
            fullscreen: None,
            ..Self::new()
        }
    }

    /// Force a physical viewport size independent of the surface size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_override = Some((width, height));
    }

    /// Queue a native event for the next poll/wait.
    pub fn push_event(&mut self, event: NativeEvent) {
        self.queue.push_back(event);
    }

    /// Set the modifier mask sampled on key-down translation.
    pub fn set_modifier_mask(&mut self, mask: u16) {
        self.modifier_mask = mask;
    }

    /// The most recently presented frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    /// The target rect of the most recent present.
    #[must_use]
    pub fn last_target(&self) -> Option<TargetRect> {
        self.last_target
    }

    /// The edge color of the most recent present.
    #[must_use]
    pub fn last_edge(&self) -> Rgb {
        self.last_edge
    }

    /// How many frames have been presented.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.present_count
    }

    /// Current fullscreen state, where supported.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen == Some(true)
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for HeadlessBackend {
    fn open_surface(&mut self, width: u32, height: u32, _title: &str) -> Result<()> {
        if self.surface.is_some() {
            return Err(Error::AlreadyOpen);
        }
        self.surface = Some((width, height));
        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<()> {
        if self.surface.is_none() {
            return Err(Error::Backend("resize without a surface".into()));
        }
        self.surface = Some((width, height));
        Ok(())
    }

    fn close_surface(&mut self) {
        self.surface = None;
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.viewport_override
            .or(self.surface)
            .unwrap_or((0, 0))
    }

    fn present(&mut self, frame: &FrameBuffer, target: TargetRect, edge: Rgb) -> Result<()> {
        if self.surface.is_none() {
            return Err(Error::Backend("present without a surface".into()));
        }
        self.last_frame = Some(frame.clone());
        self.last_target = Some(target);
        self.last_edge = edge;
        self.present_count += 1;
        Ok(())
    }

    fn set_fullscreen(&mut self, enabled: bool) -> Result<()> {
        match self.fullscreen {
            Some(_) => {
                self.fullscreen = Some(enabled);
                Ok(())
            }
            None => Err(Error::Unsupported("fullscreen")),
        }
    }

    fn poll_native(&mut self) -> Option<NativeEvent> {
        self.queue.pop_front()
    }

    fn wait_native(&mut self, timeout: Option<Duration>) -> Option<NativeEvent> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }
        // No OS event source to block on: sleep out the budget and give
        // up. An indefinite wait on a drained queue also returns (the
        // alternative is deadlocking the caller).
        if let Some(timeout) = timeout {
            std::thread::sleep(timeout);
        }
        self.queue.pop_front()
    }

    fn modifier_mask(&self) -> u16 {
        self.modifier_mask
    }

    fn elapsed(&self) -> Option<Duration> {
        Some(self.epoch.elapsed())
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_open_fails() {
        let mut backend = HeadlessBackend::new();
        backend.open_surface(64, 64, "t").unwrap();
        assert!(matches!(
            backend.open_surface(64, 64, "t"),
            Err(Error::AlreadyOpen)
        ));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut backend = HeadlessBackend::new();
        backend.open_surface(64, 64, "t").unwrap();
        backend.close_surface();
        backend.close_surface();
        assert_eq!(backend.viewport_size(), (0, 0));
    }

    #[test]
    fn test_queue_order() {
        let mut backend = HeadlessBackend::new();
        backend.push_event(NativeEvent::Quit);
        backend.push_event(NativeEvent::FocusGained);
        assert_eq!(backend.poll_native(), Some(NativeEvent::Quit));
        assert_eq!(backend.poll_native(), Some(NativeEvent::FocusGained));
        assert_eq!(backend.poll_native(), None);
    }

    #[test]
    fn test_fullscreen_support_toggle() {
        let mut backend = HeadlessBackend::new();
        backend.set_fullscreen(true).unwrap();
        assert!(backend.is_fullscreen());

        let mut bare = HeadlessBackend::without_fullscreen();
        assert!(matches!(
            bare.set_fullscreen(true),
            Err(Error::Unsupported("fullscreen"))
        ));
    }

    #[test]
    fn test_present_requires_surface() {
        let mut backend = HeadlessBackend::new();
        let frame = FrameBuffer::new(8, 8);
        assert!(backend.present(&frame, TargetRect::default(), Rgb::BLACK).is_err());
    }
}
