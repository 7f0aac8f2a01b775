//! Edge curve geometry. Edges are horizontal cubic curves between handle
//! anchors; the same sampled polyline backs both drawing and click
//! hit-testing.

const EDGE_SAMPLES: usize = 24;

/// How far the control points bow out horizontally. Scales with the span so
/// short edges stay gently curved and long edges do not flatten.
fn control_offset(sx: f64, tx: f64) -> f64 {
    ((tx - sx).abs() * 0.5).max(40.0)
}

/// Control points for an edge leaving a right-side source anchor and entering
/// a left-side target anchor.
pub fn edge_controls(sx: f64, sy: f64, tx: f64, ty: f64) -> ((f64, f64), (f64, f64)) {
    let bend = control_offset(sx, tx);
    ((sx + bend, sy), (tx - bend, ty))
}

fn cubic(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Sampled points along the edge curve, endpoints included.
pub fn sample_edge(sx: f64, sy: f64, tx: f64, ty: f64) -> Vec<(f64, f64)> {
    let ((c1x, c1y), (c2x, c2y)) = edge_controls(sx, sy, tx, ty);
    (0..=EDGE_SAMPLES)
        .map(|i| {
            let t = i as f64 / EDGE_SAMPLES as f64;
            (
                cubic(t, sx, c1x, c2x, tx),
                cubic(t, sy, c1y, c2y, ty),
            )
        })
        .collect()
}

fn segment_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Shortest distance from a point to the sampled edge curve.
pub fn edge_distance(sx: f64, sy: f64, tx: f64, ty: f64, px: f64, py: f64) -> f64 {
    let pts = sample_edge(sx, sy, tx, ty);
    pts.windows(2)
        .map(|w| segment_distance(px, py, w[0].0, w[0].1, w[1].0, w[1].1))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_start_and_end_on_the_anchors() {
        let pts = sample_edge(10.0, 20.0, 200.0, 80.0);
        assert_eq!(pts.first().copied(), Some((10.0, 20.0)));
        assert_eq!(pts.last().copied(), Some((200.0, 80.0)));
    }

    #[test]
    fn level_edges_stay_level() {
        // Equal anchor heights give a curve that never leaves that height.
        for (_, y) in sample_edge(0.0, 50.0, 300.0, 50.0) {
            assert!((y - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_is_small_on_the_curve_and_large_off_it() {
        let (sx, sy, tx, ty) = (0.0, 50.0, 300.0, 50.0);
        assert!(edge_distance(sx, sy, tx, ty, 150.0, 50.0) < 1.0);
        assert!(edge_distance(sx, sy, tx, ty, 150.0, 400.0) > 300.0);
    }

    #[test]
    fn short_edges_keep_a_minimum_bend() {
        let ((c1x, _), (c2x, _)) = edge_controls(100.0, 0.0, 110.0, 0.0);
        assert_eq!(c1x, 140.0);
        assert_eq!(c2x, 70.0);
    }
}
