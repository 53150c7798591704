/// Element id for an in-page anchor. A bare `#` is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset that lands `target_top` (viewport relative) just below a
/// fixed navbar of `nav_height`.
pub fn scroll_target(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height
}

/// Returns `None` when the default link behaviour should run.
pub fn resolve_anchor_scroll(
    href: &str,
    target_top: impl FnOnce(&str) -> Option<f64>,
    scroll_y: f64,
    nav_height: f64,
) -> Option<f64> {
    let id = anchor_target(href)?;
    let top = target_top(id)?;
    Some(scroll_target(top, scroll_y, nav_height))
}
