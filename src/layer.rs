// Layer resolution rules, DOM-free so they can be tested on the host.

/// A tagged child wins. An element found by id is used only when
/// `inside_container` accepts it, so one container never drives the layers
/// of another.
pub fn pick_layer<T>(
    tagged: Option<T>,
    by_id: Option<T>,
    inside_container: impl Fn(&T) -> bool,
) -> Option<T> {
    tagged.or_else(|| by_id.filter(|el| inside_container(el)))
}
