//! Navbar style command.

use idos_storefront::navbar::NavbarStyle;

use super::output;

/// Print the navbar style for a scroll offset.
pub fn style(offset: f64, threshold: u32) {
    let style = NavbarStyle::for_scroll(offset, threshold);
    let class = match style.css_class() {
        "" => "(none)",
        class => class,
    };
    output::line(&format!("{style:?}: class {class}"));
}
