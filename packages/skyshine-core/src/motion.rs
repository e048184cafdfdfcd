//! Pointer parallax for the hero image.
//!
//! The browser binding feeds pointer positions in and writes the resulting
//! `transform` out; the arithmetic and the one-frame-at-a-time throttle live
//! here.

/// Media query for the visitor's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Maps the pointer position to a translation of at most `strength` pixels
/// on each axis, centred on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    strength: f64,
}

impl Parallax {
    /// Strength used for the hero jet
    pub const HERO: Parallax = Parallax { strength: 15.0 };

    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Offset in pixels for a pointer at `pointer` inside a viewport of size
    /// `viewport`. A degenerate viewport yields no offset.
    pub fn offset(&self, pointer: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
        let (width, height) = viewport;
        if width <= 0.0 || height <= 0.0 {
            return (0.0, 0.0);
        }

        let x = (pointer.0 - width / 2.0) / (width / 2.0);
        let y = (pointer.1 - height / 2.0) / (height / 2.0);
        (x * self.strength, y * self.strength)
    }

    /// CSS `transform` value for the given pointer and viewport.
    pub fn transform(&self, pointer: (f64, f64), viewport: (f64, f64)) -> String {
        let (x, y) = self.offset(pointer, viewport);
        format!("translate3d({x}px, {y}px, 0)")
    }
}

/// Coalesces pointer events so at most one animation frame is queued.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback, or when scheduling failed.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_does_not_move() {
        assert_eq!(Parallax::HERO.offset((500.0, 300.0), (1000.0, 600.0)), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_full_strength() {
        let parallax = Parallax::HERO;
        assert_eq!(parallax.offset((0.0, 0.0), (1000.0, 600.0)), (-15.0, -15.0));
        assert_eq!(parallax.offset((1000.0, 600.0), (1000.0, 600.0)), (15.0, 15.0));
    }

    #[test]
    fn transform_is_translate3d() {
        let parallax = Parallax::new(20.0);
        assert_eq!(
            parallax.transform((750.0, 150.0), (1000.0, 600.0)),
            "translate3d(10px, -10px, 0)"
        );
    }

    #[test]
    fn empty_viewport_yields_no_offset() {
        assert_eq!(Parallax::HERO.offset((10.0, 10.0), (0.0, 600.0)), (0.0, 0.0));
    }

    #[test]
    fn throttle_queues_one_frame_at_a_time() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());

        throttle.complete();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
    }
}
