// The fixed header starts as a transparent overlay and switches to its
// opaque "scrolled" look once the page moves past this offset, in pixels.
pub const ELEVATION_THRESHOLD: i32 = 10;

pub fn is_elevated(scroll_top: i32) -> bool {
    scroll_top > ELEVATION_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_flat_at_the_top_of_the_page() {
        assert!(!is_elevated(0));
    }

    #[test]
    fn threshold_itself_is_still_flat() {
        assert!(!is_elevated(ELEVATION_THRESHOLD));
        assert!(!is_elevated(10));
    }

    #[test]
    fn one_past_the_threshold_elevates() {
        assert!(is_elevated(11));
        assert!(is_elevated(4000));
    }
}
