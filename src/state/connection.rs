use crate::graph::types::HandleRef;

// A connection drag in progress: source handle plus the cursor in world
// coordinates. Cleared on mouseup wherever it lands.
#[derive(Debug, Default)]
pub struct PendingConnection {
    pub from: Option<HandleRef>,
    pub cursor_x: f64,
    pub cursor_y: f64,
}
