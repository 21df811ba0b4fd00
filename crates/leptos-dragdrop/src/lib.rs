//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop handlers for Leptos.
//! Draggable elements carry `data-id`; drop areas carry a marker attribute
//! (e.g. `data-area`) that is resolved by walking the event's composed path.

use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// Attribute holding the dragged element's id
pub const DATA_ID_ATTR: &str = "data-id";

/// MIME type used for the transfer payload
pub const PAYLOAD_MIME: &str = "text/plain";

/// Return the first marker found along a propagation path.
///
/// The path is ordered nearest-first, so the closest marked ancestor wins.
pub fn first_marked<I, T, M, F>(path: I, marker: F) -> Option<M>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<M>,
{
    path.into_iter().find_map(|node| marker(&node))
}

/// Read `attr` from the first element on the event's composed path that has it.
///
/// Non-element targets on the path (document, window) are skipped.
pub fn marker_in_path(ev: &web_sys::Event, attr: &str) -> Option<String> {
    first_marked(ev.composed_path().iter(), |node| {
        node.dyn_ref::<web_sys::Element>()
            .and_then(|el| el.get_attribute(attr))
            .filter(|value| !value.is_empty())
    })
}

/// Read `data-id` from the element the event fired on
pub fn target_id(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute(DATA_ID_ATTR))
}

/// Create dragstart handler for draggable items.
/// Stores the element id as the transfer payload, then reports it.
pub fn make_on_dragstart<F>(on_start: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(String) + Copy + 'static,
{
    move |ev: DragEvent| {
        let Some(id) = target_id(&ev) else { return };
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(PAYLOAD_MIME, &id);
        }
        on_start(id);
    }
}

/// Create dragover handler for drop areas.
///
/// Always prevents the default action so the area accepts drops.
/// `on_over` only runs when a marked ancestor is found.
pub fn make_on_dragover<F>(attr: &'static str, on_over: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(String) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(area) = marker_in_path(&ev, attr) {
            on_over(area);
        }
    }
}

/// Create drop handler for drop areas.
/// Reports (payload id, resolved area) when both are present.
pub fn make_on_drop<F>(attr: &'static str, on_drop: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(String, String) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data(PAYLOAD_MIME).ok())
            .filter(|id| !id.is_empty());
        if let (Some(id), Some(area)) = (payload, marker_in_path(&ev, attr)) {
            on_drop(id, area);
        }
    }
}

/// Create dragend handler
pub fn make_on_dragend<F>(on_end: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    move |_ev: DragEvent| on_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(node: &(&str, Option<&str>)) -> Option<String> {
        node.1.map(str::to_string)
    }

    #[test]
    fn test_nearest_marker_wins() {
        let path = [
            ("leaf", None),
            ("mid", None),
            ("column", Some("ready")),
            ("root", Some("ordered")),
        ];
        assert_eq!(first_marked(path, area), Some("ready".to_string()));
    }

    #[test]
    fn test_unmarked_path_resolves_nothing() {
        let path = [("leaf", None), ("mid", None), ("root", None)];
        assert_eq!(first_marked(path, area), None);
    }

    #[test]
    fn test_marked_leaf() {
        let path = [("leaf", Some("in-progress")), ("root", Some("ready"))];
        assert_eq!(first_marked(path, area), Some("in-progress".to_string()));
    }

    #[test]
    fn test_empty_path() {
        let path: [(&str, Option<&str>); 0] = [];
        assert_eq!(first_marked(path, area), None);
    }
}
