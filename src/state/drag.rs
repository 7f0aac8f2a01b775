// In-flight node drag. grab_* is the world-space offset from the node's
// origin to the cursor at mousedown, so the card does not jump under it.
#[derive(Debug, Default)]
pub struct NodeDrag {
    pub node_id: Option<String>,
    pub grab_dx: f64,
    pub grab_dy: f64,
}
