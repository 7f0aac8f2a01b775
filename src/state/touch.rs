// Touch gesture bookkeeping: single-finger pan and two-finger pinch zoom.
#[derive(Debug, Default)]
pub struct TouchState {
    pub single_active: bool,
    pub pinch: bool,
    pub start_pinch_dist: f64,
    pub start_zoom: f64,
    pub world_center_x: f64,
    pub world_center_y: f64,
    pub last_x: f64,
    pub last_y: f64,
}
