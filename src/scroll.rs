pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const ACTIVE_CLASS: &str = "active";
pub const HEADER_SELECTOR: &str = ".header";
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

pub fn back_to_top_active(scroll_offset: f64, threshold: u32) -> bool {
    scroll_offset > f64::from(threshold)
}

/// Element id named by a same-document link, e.g. `"#skills"` -> `"skills"`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that leaves the target just below the fixed header.
pub fn anchor_scroll_top(target_top: f64, header_height: f64, margin: u32) -> f64 {
    (target_top - header_height - f64::from(margin)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_activates_strictly_above_threshold() {
        assert!(!back_to_top_active(399.0, 400));
        assert!(!back_to_top_active(400.0, 400));
        assert!(back_to_top_active(401.0, 400));
        assert!(!back_to_top_active(0.0, 400));
    }

    #[test]
    fn fragment_id_requires_a_name() {
        assert_eq!(fragment_id("#projects"), Some("projects"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about#team"), None);
    }

    #[test]
    fn anchor_target_sits_below_header_and_margin() {
        assert!((anchor_scroll_top(900.0, 70.0, 10) - 820.0).abs() < f64::EPSILON);
        assert!((anchor_scroll_top(900.0, 0.0, 10) - 890.0).abs() < f64::EPSILON);
        assert!(anchor_scroll_top(40.0, 70.0, 10).abs() < f64::EPSILON);
    }
}
