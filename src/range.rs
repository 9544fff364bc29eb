use crate::errors::{Error, Result};

/// Episode-position window requested by a caller, 1-based and inclusive.
///
/// `end` left unset means "up to the last available episode"; the effective
/// upper bound is resolved against the true episode count with
/// [`Window::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: u32,
    end: Option<u32>,
}

impl Window {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        Self::from_bounds(Some(start), Some(end))
    }

    /// Builds a window from optional bounds, mirroring the accepted
    /// combinations of the listing operations: no bound selects every
    /// episode, both bounds must satisfy `1 <= start <= end`, anything else
    /// is rejected with [`Error::InvalidWindow`] before any request is made.
    pub fn from_bounds(start: Option<u32>, end: Option<u32>) -> Result<Self> {
        match (start, end) {
            (None, None) => Ok(Self::default()),
            (Some(start), Some(end)) if start >= 1 && end >= 1 && start <= end => Ok(Self {
                start,
                end: Some(end),
            }),
            _ => Err(Error::InvalidWindow),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Resolves the window against the true episode count, returning the
    /// effective inclusive `(min, max)` pair. `max` never exceeds `last`.
    pub fn clamp(&self, last: u32) -> (u32, u32) {
        let max = self.end.map_or(last, |end| end.min(last));

        (self.start, max)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds() {
        let window = Window::from_bounds(Some(1), Some(5)).unwrap();
        assert_eq!(window.clamp(100), (1, 5));

        let window = Window::from_bounds(Some(4), Some(4)).unwrap();
        assert_eq!(window.clamp(100), (4, 4));

        let window = Window::from_bounds(None, None).unwrap();
        assert_eq!(window, Window::default());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            Window::from_bounds(Some(5), Some(2)),
            Err(Error::InvalidWindow)
        ));
        assert!(matches!(
            Window::from_bounds(Some(1), None),
            Err(Error::InvalidWindow)
        ));
        assert!(matches!(
            Window::from_bounds(None, Some(10)),
            Err(Error::InvalidWindow)
        ));
        assert!(matches!(
            Window::from_bounds(Some(0), Some(3)),
            Err(Error::InvalidWindow)
        ));
        assert!(matches!(
            Window::from_bounds(Some(1), Some(0)),
            Err(Error::InvalidWindow)
        ));
    }

    #[test]
    fn test_clamp() {
        let window = Window::default();
        assert_eq!(window.clamp(26), (1, 26));
        assert_eq!(window.clamp(0), (1, 0));

        let window = Window::new(3, 100).unwrap();
        assert_eq!(window.clamp(12), (3, 12));

        let window = Window::new(5, 8).unwrap();
        assert_eq!(window.clamp(12), (5, 8));

        // start beyond the true count leaves an empty window
        let window = Window::new(20, 30).unwrap();
        assert_eq!(window.clamp(12), (20, 12));
    }
}
