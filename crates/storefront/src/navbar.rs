//! Navigation bar style derived from the scroll offset.

/// Visual state of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    /// At or near the top of the page.
    #[default]
    Top,
    /// Scrolled past the threshold.
    Scrolled,
}

impl NavbarStyle {
    /// Style for a vertical scroll offset in pixels.
    #[must_use]
    pub fn for_scroll(offset_y: f64, threshold: u32) -> Self {
        if offset_y > f64::from(threshold) {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    /// CSS class to put on the navbar element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Top => "",
            Self::Scrolled => "scrolled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 50), NavbarStyle::Top);
        assert_eq!(NavbarStyle::for_scroll(50.0, 50), NavbarStyle::Top);
        assert_eq!(NavbarStyle::for_scroll(50.5, 50), NavbarStyle::Scrolled);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(NavbarStyle::Scrolled.css_class(), "scrolled");
        assert_eq!(NavbarStyle::Top.css_class(), "");
    }
}
