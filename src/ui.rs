//! Pure UI state helpers
//!
//! Small pieces of page state the DOM glue in `main.rs` drives: the
//! testimonial carousel index and the scroll progress calculation.

/// Wrapping index over the testimonial slides
#[derive(Debug, Clone, Copy)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one slide, wrapping to the first past the end
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Go back one slide, wrapping to the last before the first
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }
}

/// Scroll progress as a 0-100 percentage.
///
/// `scroll_height` is the full document height, `client_height` the viewport.
/// A page that does not scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_forward() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_carousel_wraps_backward() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn test_scroll_progress_endpoints() {
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 50.0);
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_clamped_past_bottom() {
        // Elastic overscroll can report past the end
        assert_eq!(scroll_progress(1500.0, 2000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(-20.0, 2000.0, 800.0), 0.0);
    }
}
