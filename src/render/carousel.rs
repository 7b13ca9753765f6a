//! Image carousel indicator sync.

/// Index of the image in view for a horizontal scroll offset.
///
/// Rounds to the nearest page and clamps into `0..count`.
pub fn carousel_index_for(scroll_left: f64, client_width: f64, count: usize) -> usize {
    if count == 0 || client_width <= 0.0 || !scroll_left.is_finite() {
        return 0;
    }
    let page = (scroll_left / client_width).round().max(0.0) as usize;
    page.min(count - 1)
}

/// One flag per indicator; `true` marks the active one.
///
/// A single image (or none) shows no indicators.
pub fn indicators(count: usize, active: usize) -> Vec<bool> {
    if count <= 1 {
        return Vec::new();
    }
    (0..count).map(|i| i == active).collect()
}
