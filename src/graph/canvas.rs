//! The graph canvas. Renders node cards through the registry inside a
//! pan/zoom layer, draws the dot grid, edges and connection preview on a 2D
//! canvas underneath, keeps a minimap in the corner, and reports every node
//! and edge mutation through a single change callback.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::controls::CanvasControls;
use super::geometry;
use super::types::{
    EdgeDescriptor, GraphChange, HandleRef, NODE_WIDTH, NodeDescriptor, NodeTypeRegistry, Point,
    node_bounds,
};
use crate::state::camera::{MAX_ZOOM, MIN_ZOOM};
use crate::state::{Camera, NodeDrag, PendingConnection, TouchState};

/// Screen-px distance under which a background click counts as an edge hit.
const EDGE_HIT_TOLERANCE_PX: f64 = 8.0;
/// Cursor travel in screen px beyond which a press is a pan, not a click.
const CLICK_SLOP_PX: f64 = 4.0;
/// Dot grid pitch in world units.
const GRID_GAP: f64 = 24.0;

/// Handed to node content via context so connection points can start and
/// complete edge drags without knowing anything about the canvas internals.
#[derive(Clone, PartialEq)]
pub struct ConnectionContext {
    pub begin: Callback<HandleRef>,
    pub complete: Callback<HandleRef>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GraphCanvasProps {
    pub nodes: Vec<NodeDescriptor>,
    pub edges: Vec<EdgeDescriptor>,
    pub registry: NodeTypeRegistry,
    pub on_change: Callback<GraphChange>,
}

fn anchor_of(
    nodes: &[NodeDescriptor],
    registry: NodeTypeRegistry,
    handle: &HandleRef,
) -> Option<(f64, f64)> {
    let node = nodes.iter().find(|n| n.id == handle.node)?;
    let spec = registry.handle_spec(node.type_tag, handle.handle)?;
    Some(spec.anchor(node))
}

fn layer_style(cam: &Camera) -> String {
    format!(
        "position:absolute; left:0; top:0; transform-origin:0 0; transform:translate({:.2}px, {:.2}px) scale({:.4});",
        cam.offset_x, cam.offset_y, cam.zoom
    )
}

#[function_component(GraphCanvas)]
pub fn graph_canvas(props: &GraphCanvasProps) -> Html {
    let wrapper_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let layer_ref = use_node_ref();
    let minimap_ref = use_node_ref();
    let camera = use_mut_ref(Camera::default);
    let drag = use_mut_ref(NodeDrag::default);
    let pending = use_mut_ref(PendingConnection::default);
    let touch_state = use_mut_ref(TouchState::default);
    // Press bookkeeping for click-vs-pan: screen x, screen y, moved.
    let press = use_mut_ref(|| (0.0f64, 0.0f64, false));
    let graph_ref = use_mut_ref(|| (props.nodes.clone(), props.edges.clone()));
    let registry = props.registry;

    // Keep the latest descriptor lists visible to the event closures.
    {
        let graph_ref = graph_ref.clone();
        use_effect_with(
            (props.nodes.clone(), props.edges.clone()),
            move |(nodes, edges)| {
                *graph_ref.borrow_mut() = (nodes.clone(), edges.clone());
                || ()
            },
        );
    }

    // Mount effect: canvas sizing, draw loop, listeners.
    {
        let canvas_ref = canvas_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let layer_ref = layer_ref.clone();
        let minimap_ref = minimap_ref.clone();
        let camera = camera.clone();
        let drag = drag.clone();
        let pending = pending.clone();
        let touch_state = touch_state.clone();
        let press = press.clone();
        let graph_ref = graph_ref.clone();
        let on_change = props.on_change.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let wrapper: HtmlElement = wrapper_ref.cast::<HtmlElement>().expect("wrapper");
            let layer: HtmlElement = layer_ref.cast::<HtmlElement>().expect("node layer");
            let minimap: HtmlCanvasElement =
                minimap_ref.cast::<HtmlCanvasElement>().expect("minimap");

            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            compute_and_apply_canvas_size();

            // Initial centering on the seeded layout.
            {
                let mut cam = camera.borrow_mut();
                if !cam.initialized {
                    let (nodes, _) = &*graph_ref.borrow();
                    if let Some((min_x, min_y, max_x, max_y)) = node_bounds(nodes) {
                        let w = canvas.width() as f64;
                        let h = canvas.height() as f64;
                        cam.offset_x = w * 0.5 - (min_x + max_x) * 0.5 * cam.zoom;
                        cam.offset_y = h * 0.5 - (min_y + max_y) * 0.5 * cam.zoom;
                    }
                    cam.initialized = true;
                }
            }

            // Draw closure: background, edges, preview, minimap, layer sync.
            let last_layer_style = Rc::new(RefCell::new(String::new()));
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let minimap = minimap.clone();
                let layer = layer.clone();
                let camera = camera.clone();
                let pending = pending.clone();
                let graph_ref = graph_ref.clone();
                let last_layer_style = last_layer_style.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
                            Ok(c) => c,
                            Err(_) => return,
                        },
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let cam = camera.borrow();
                    let (nodes, edges) = &*graph_ref.borrow();

                    // Keep the DOM layer transform in lockstep with the camera.
                    let style = layer_style(&cam);
                    if *last_layer_style.borrow() != style {
                        let _ = layer.set_attribute("style", &style);
                        *last_layer_style.borrow_mut() = style;
                    }

                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    ctx.set_fill_style_str("#171717");
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_transform(cam.zoom, 0.0, 0.0, cam.zoom, cam.offset_x, cam.offset_y)
                        .ok();

                    // Dot grid; skipped when zoomed far out, the dots are
                    // sub-pixel there anyway.
                    if cam.zoom >= 0.5 {
                        let x1 = cam.world_x(w);
                        let y1 = cam.world_y(h);
                        let x0 = (cam.world_x(0.0) / GRID_GAP).floor() * GRID_GAP;
                        let y0 = (cam.world_y(0.0) / GRID_GAP).floor() * GRID_GAP;
                        ctx.set_fill_style_str("#2a2a2a");
                        let dot = (1.5 / cam.zoom).max(0.75);
                        let mut y = y0;
                        while y <= y1 {
                            let mut x = x0;
                            while x <= x1 {
                                ctx.fill_rect(x, y, dot, dot);
                                x += GRID_GAP;
                            }
                            y += GRID_GAP;
                        }
                    }

                    // Edges
                    ctx.set_stroke_style_str("#8b949e");
                    ctx.set_line_width((1.6 / cam.zoom).max(0.4));
                    for edge in edges {
                        let (Some((sx, sy)), Some((tx, ty))) = (
                            anchor_of(nodes, registry, &edge.source),
                            anchor_of(nodes, registry, &edge.target),
                        ) else {
                            continue;
                        };
                        let ((c1x, c1y), (c2x, c2y)) = geometry::edge_controls(sx, sy, tx, ty);
                        ctx.begin_path();
                        ctx.move_to(sx, sy);
                        ctx.bezier_curve_to(c1x, c1y, c2x, c2y, tx, ty);
                        ctx.stroke();
                    }

                    // Pending connection preview, dashed.
                    {
                        let p = pending.borrow();
                        if let Some(from) = &p.from {
                            if let Some((sx, sy)) = anchor_of(nodes, registry, from) {
                                ctx.set_stroke_style_str("#58a6ff");
                                let dash = js_sys::Array::of2(
                                    &JsValue::from_f64(6.0 / cam.zoom),
                                    &JsValue::from_f64(4.0 / cam.zoom),
                                );
                                ctx.set_line_dash(&dash).ok();
                                let ((c1x, c1y), (c2x, c2y)) =
                                    geometry::edge_controls(sx, sy, p.cursor_x, p.cursor_y);
                                ctx.begin_path();
                                ctx.move_to(sx, sy);
                                ctx.bezier_curve_to(c1x, c1y, c2x, c2y, p.cursor_x, p.cursor_y);
                                ctx.stroke();
                                ctx.set_line_dash(&js_sys::Array::new()).ok();
                            }
                        }
                    }

                    // Minimap: node footprints plus the viewport rectangle.
                    if let Some(mm) = minimap
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        let mw = minimap.width() as f64;
                        let mh = minimap.height() as f64;
                        mm.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                        mm.set_fill_style_str("#161b22");
                        mm.fill_rect(0.0, 0.0, mw, mh);

                        let (vx0, vy0) = (cam.world_x(0.0), cam.world_y(0.0));
                        let (vx1, vy1) = (cam.world_x(w), cam.world_y(h));
                        let (mut bx0, mut by0, mut bx1, mut by1) =
                            node_bounds(nodes).unwrap_or((vx0, vy0, vx1, vy1));
                        bx0 = bx0.min(vx0) - 40.0;
                        by0 = by0.min(vy0) - 40.0;
                        bx1 = bx1.max(vx1) + 40.0;
                        by1 = by1.max(vy1) + 40.0;
                        let scale = (mw / (bx1 - bx0)).min(mh / (by1 - by0));
                        let ox = (mw - (bx1 - bx0) * scale) * 0.5 - bx0 * scale;
                        let oy = (mh - (by1 - by0) * scale) * 0.5 - by0 * scale;

                        mm.set_fill_style_str("#30363d");
                        mm.set_stroke_style_str("#8b949e");
                        mm.set_line_width(1.0);
                        for n in nodes {
                            let x = n.position.x * scale + ox;
                            let y = n.position.y * scale + oy;
                            let bw = NODE_WIDTH * scale;
                            let bh = super::types::NODE_BASE_HEIGHT * scale;
                            mm.fill_rect(x, y, bw, bh);
                            mm.stroke_rect(x, y, bw, bh);
                        }
                        mm.set_stroke_style_str("#58a6ff");
                        mm.stroke_rect(
                            vx0 * scale + ox,
                            vy0 * scale + oy,
                            (vx1 - vx0) * scale,
                            (vy1 - vy0) * scale,
                        );
                    }
                })
            };

            // Initial draw
            (draw_closure)();

            // Animation frame loop keeps the canvas layers in sync with the
            // camera and drag state without explicit invalidation.
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let draw_loop = draw_closure.clone();
                let window_loop = window.clone();
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    (draw_loop)();
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                })
                    as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            // Wheel: zoom about the cursor.
            let wheel_cb = {
                let camera = camera.clone();
                let canvas = canvas.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let rect = canvas.get_bounding_client_rect();
                    let ax = e.client_x() as f64 - rect.left();
                    let ay = e.client_y() as f64 - rect.top();
                    let factor = (-e.delta_y() * 0.001).exp();
                    camera.borrow_mut().zoom_about(ax, ay, factor);
                }) as Box<dyn FnMut(_)>)
            };
            wrapper
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            // Mouse move: node drag, connection preview, or pan.
            let mousemove_cb = {
                let camera = camera.clone();
                let drag = drag.clone();
                let pending = pending.clone();
                let press = press.clone();
                let canvas = canvas.clone();
                let on_change = on_change.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let cx = e.client_x() as f64;
                    let cy = e.client_y() as f64;
                    {
                        let mut pr = press.borrow_mut();
                        if (cx - pr.0).abs() + (cy - pr.1).abs() > CLICK_SLOP_PX {
                            pr.2 = true;
                        }
                    }
                    let rect = canvas.get_bounding_client_rect();
                    let sx = cx - rect.left();
                    let sy = cy - rect.top();

                    let dragged = {
                        let d = drag.borrow();
                        d.node_id.clone().map(|id| (id, d.grab_dx, d.grab_dy))
                    };
                    if let Some((id, gdx, gdy)) = dragged {
                        let cam = camera.borrow();
                        let position = Point {
                            x: cam.world_x(sx) - gdx,
                            y: cam.world_y(sy) - gdy,
                        };
                        drop(cam);
                        on_change.emit(GraphChange::MoveNode { id, position });
                        return;
                    }

                    {
                        let mut p = pending.borrow_mut();
                        if p.from.is_some() {
                            let cam = camera.borrow();
                            p.cursor_x = cam.world_x(sx);
                            p.cursor_y = cam.world_y(sy);
                            return;
                        }
                    }

                    let mut cam = camera.borrow_mut();
                    if cam.panning {
                        cam.offset_x += cx - cam.last_x;
                        cam.offset_y += cy - cam.last_y;
                        cam.last_x = cx;
                        cam.last_y = cy;
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Mouse up: finish drags; a press that never moved is a click,
            // and background clicks remove the edge under the cursor.
            let mouseup_cb = {
                let camera = camera.clone();
                let drag = drag.clone();
                let pending = pending.clone();
                let press = press.clone();
                let canvas = canvas.clone();
                let graph_ref = graph_ref.clone();
                let on_change = on_change.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let was_panning = {
                        let mut cam = camera.borrow_mut();
                        let was = cam.panning;
                        cam.panning = false;
                        was
                    };
                    let had_drag = drag.borrow_mut().node_id.take().is_some();
                    let had_pending = pending.borrow_mut().from.take().is_some();
                    let (px, py, moved) = *press.borrow();
                    if !was_panning || moved || had_drag || had_pending {
                        return;
                    }
                    let rect = canvas.get_bounding_client_rect();
                    let (wx, wy, tol) = {
                        let cam = camera.borrow();
                        (
                            cam.world_x(px - rect.left()),
                            cam.world_y(py - rect.top()),
                            EDGE_HIT_TOLERANCE_PX / cam.zoom,
                        )
                    };
                    let hit = {
                        let (nodes, edges) = &*graph_ref.borrow();
                        edges
                            .iter()
                            .find(|edge| {
                                let (Some((sx, sy)), Some((tx, ty))) = (
                                    anchor_of(nodes, registry, &edge.source),
                                    anchor_of(nodes, registry, &edge.target),
                                ) else {
                                    return false;
                                };
                                geometry::edge_distance(sx, sy, tx, ty, wx, wy) <= tol
                            })
                            .map(|edge| edge.id.clone())
                    };
                    if let Some(id) = hit {
                        on_change.emit(GraphChange::RemoveEdge { id });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            // Context menu would swallow right-drag panning.
            let contextmenu_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
                e.prevent_default();
            }) as Box<dyn FnMut(_)>);
            wrapper
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Resize
            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            // Touch: single-finger pan, two-finger pinch zoom.
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let camera_tc = camera.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let rect = canvas_tc.get_bounding_client_rect();
                    if let Some(t0) = e.touches().item(0) {
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        let mut ts = touch_state_tc.borrow_mut();
                        ts.last_x = cx;
                        ts.last_y = cy;
                        ts.single_active = true;
                        ts.pinch = false;
                        if e.touches().length() >= 2 {
                            if let (Some(t0a), Some(t1)) = (e.touches().item(0), e.touches().item(1))
                            {
                                let x0 = t0a.client_x() as f64 - rect.left();
                                let y0 = t0a.client_y() as f64 - rect.top();
                                let x1 = t1.client_x() as f64 - rect.left();
                                let y1 = t1.client_y() as f64 - rect.top();
                                let dist =
                                    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt().max(1.0);
                                let midx = (x0 + x1) * 0.5;
                                let midy = (y0 + y1) * 0.5;
                                let cam = camera_tc.borrow();
                                ts.pinch = true;
                                ts.single_active = false;
                                ts.start_pinch_dist = dist;
                                ts.start_zoom = cam.zoom;
                                ts.world_center_x = cam.world_x(midx);
                                ts.world_center_y = cam.world_y(midy);
                            }
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            wrapper
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let camera_tc = camera.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = e.touches();
                    let rect = canvas_tc.get_bounding_client_rect();
                    if touches.length() == 1 {
                        if let Some(t0) = touches.item(0) {
                            let cx = t0.client_x() as f64 - rect.left();
                            let cy = t0.client_y() as f64 - rect.top();
                            let mut ts = touch_state_tc.borrow_mut();
                            if ts.single_active {
                                let dx = cx - ts.last_x;
                                let dy = cy - ts.last_y;
                                ts.last_x = cx;
                                ts.last_y = cy;
                                let mut cam = camera_tc.borrow_mut();
                                cam.offset_x += dx;
                                cam.offset_y += dy;
                            }
                        }
                    } else if touches.length() >= 2 {
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let x0 = t0.client_x() as f64 - rect.left();
                            let y0 = t0.client_y() as f64 - rect.top();
                            let x1 = t1.client_x() as f64 - rect.left();
                            let y1 = t1.client_y() as f64 - rect.top();
                            let dist = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt().max(1.0);
                            let midx = (x0 + x1) * 0.5;
                            let midy = (y0 + y1) * 0.5;
                            let ts = touch_state_tc.borrow();
                            if ts.pinch {
                                let mut cam = camera_tc.borrow_mut();
                                let sf = dist / ts.start_pinch_dist;
                                cam.zoom = (ts.start_zoom * sf).clamp(MIN_ZOOM, MAX_ZOOM);
                                cam.offset_x = midx - ts.world_center_x * cam.zoom;
                                cam.offset_y = midy - ts.world_center_y * cam.zoom;
                            }
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            wrapper
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let left = e.touches().length();
                    let mut ts = touch_state_tc.borrow_mut();
                    if left == 0 {
                        ts.single_active = false;
                        ts.pinch = false;
                    } else if left == 1 {
                        ts.pinch = false;
                        ts.single_active = true;
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            wrapper
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            wrapper
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Cleanup for all listeners and the frame loop.
            let window_clone = window.clone();
            move || {
                let _ = wrapper
                    .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = wrapper.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _ = wrapper.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = wrapper.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = wrapper.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = wrapper.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = (
                    &wheel_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &contextmenu_cb,
                    &resize_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                );
            }
        });
    }

    // Background press starts a pan; node shells stop propagation.
    let on_background_down = {
        let camera = camera.clone();
        let press = press.clone();
        Callback::from(move |e: MouseEvent| {
            let mut cam = camera.borrow_mut();
            cam.panning = true;
            cam.last_x = e.client_x() as f64;
            cam.last_y = e.client_y() as f64;
            *press.borrow_mut() = (e.client_x() as f64, e.client_y() as f64, false);
        })
    };

    // Zoom buttons anchor on the viewport center.
    let zoom_in = {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let cx = canvas.width() as f64 * 0.5;
                let cy = canvas.height() as f64 * 0.5;
                camera.borrow_mut().zoom_about(cx, cy, 1.25);
            }
        })
    };
    let zoom_out = {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let cx = canvas.width() as f64 * 0.5;
                let cy = canvas.height() as f64 * 0.5;
                camera.borrow_mut().zoom_about(cx, cy, 0.8);
            }
        })
    };
    let fit_view = {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        let graph_ref = graph_ref.clone();
        Callback::from(move |_| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let (nodes, _) = &*graph_ref.borrow();
            let Some((min_x, min_y, max_x, max_y)) = node_bounds(nodes) else {
                return;
            };
            let w = canvas.width() as f64;
            let h = canvas.height() as f64;
            let pad = 60.0;
            let bw = (max_x - min_x).max(1.0);
            let bh = (max_y - min_y).max(1.0);
            let mut cam = camera.borrow_mut();
            cam.zoom = (((w - 2.0 * pad) / bw).min((h - 2.0 * pad) / bh)).clamp(MIN_ZOOM, 1.5);
            cam.offset_x = w * 0.5 - (min_x + max_x) * 0.5 * cam.zoom;
            cam.offset_y = h * 0.5 - (min_y + max_y) * 0.5 * cam.zoom;
        })
    };

    // Connection context for the handle elements inside node content.
    let conn_ctx = {
        let begin = {
            let pending = pending.clone();
            let graph_ref = graph_ref.clone();
            Callback::from(move |handle: HandleRef| {
                let mut p = pending.borrow_mut();
                let (nodes, _) = &*graph_ref.borrow();
                // Seed the preview at the source anchor so the first frame
                // does not flash a line to the origin.
                if let Some((x, y)) = anchor_of(nodes, registry, &handle) {
                    p.cursor_x = x;
                    p.cursor_y = y;
                }
                p.from = Some(handle);
            })
        };
        let complete = {
            let pending = pending.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |target: HandleRef| {
                if let Some(source) = pending.borrow_mut().from.take() {
                    if source.node != target.node {
                        on_change.emit(GraphChange::AddEdge { source, target });
                    }
                }
            })
        };
        ConnectionContext { begin, complete }
    };

    let shells = props.nodes.iter().map(|node| {
        let Some(ty) = props.registry.lookup(node.type_tag) else {
            // Unregistered type tags render nothing.
            return html! {};
        };
        let on_node_down = {
            let drag = drag.clone();
            let camera = camera.clone();
            let canvas_ref = canvas_ref.clone();
            let id = node.id.clone();
            let position = node.position;
            Callback::from(move |e: MouseEvent| {
                if e.button() != 0 {
                    // Other buttons pan; let the press bubble to the canvas.
                    return;
                }
                e.stop_propagation();
                let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let cam = camera.borrow();
                let wx = cam.world_x(e.client_x() as f64 - rect.left());
                let wy = cam.world_y(e.client_y() as f64 - rect.top());
                drop(cam);
                let mut d = drag.borrow_mut();
                d.node_id = Some(id.clone());
                d.grab_dx = wx - position.x;
                d.grab_dy = wy - position.y;
            })
        };
        let on_remove = {
            let on_change = props.on_change.clone();
            let id = node.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_change.emit(GraphChange::RemoveNode { id: id.clone() });
            })
        };
        let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
        let shell_style = format!(
            "position:absolute; left:{:.2}px; top:{:.2}px; width:{}px; box-sizing:border-box; \
             background:#161b22; border:1px solid #30363d; border-radius:10px; padding:12px; \
             cursor:grab; user-select:none;",
            node.position.x, node.position.y, NODE_WIDTH as i32
        );
        html! {
            <div key={node.id.clone()} style={shell_style} onmousedown={on_node_down}>
                <button
                    onmousedown={swallow}
                    onclick={on_remove}
                    title="Remove building"
                    style="position:absolute; top:6px; right:6px; padding:0 6px; font-size:12px; line-height:18px; border-radius:6px;"
                >{"×"}</button>
                { (ty.render)(node) }
            </div>
        }
    });

    let layer = layer_style(&camera.borrow());
    html! {
        <div ref={wrapper_ref} style="position:absolute; inset:0; overflow:hidden;" onmousedown={on_background_down}>
            <canvas ref={canvas_ref.clone()} style="display:block; width:100%; height:100%;"></canvas>
            <div ref={layer_ref} style={layer}>
                <ContextProvider<ConnectionContext> context={conn_ctx}>
                    { for shells }
                </ContextProvider<ConnectionContext>>
            </div>
            <canvas
                ref={minimap_ref}
                width="180"
                height="120"
                style="position:absolute; right:12px; bottom:12px; border:1px solid #30363d; border-radius:8px; background:#161b22;"
            ></canvas>
            <CanvasControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_fit={fit_view} />
        </div>
    }
}
