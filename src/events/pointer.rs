use super::{Listener, Listeners};
use crate::frame::SharedMount;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and touch movement feed the cursor; leaving the canvas parks it.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, mount: &SharedMount) -> Listeners {
    let mut listeners = Listeners::default();
    listeners.push(wire_mousemove(canvas, mount));
    listeners.push(wire_touchmove(canvas, mount));
    listeners.push(wire_mouseleave(canvas, mount));
    listeners
}

fn wire_mousemove(canvas: &web::HtmlCanvasElement, mount: &SharedMount) -> Option<Listener> {
    let canvas_for_listener = canvas.clone();
    let mount = mount.clone();
    Listener::attach(canvas.as_ref(), "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = input::mouse_surface_px(ev, &canvas_for_listener);
        if let Ok(mut m) = mount.try_borrow_mut() {
            m.pointer_moved(pos.x, pos.y);
        }
    })
}

fn wire_touchmove(canvas: &web::HtmlCanvasElement, mount: &SharedMount) -> Option<Listener> {
    let canvas_for_listener = canvas.clone();
    let mount = mount.clone();
    Listener::attach(canvas.as_ref(), "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(pos) = input::touch_surface_px(ev, &canvas_for_listener) else {
            return;
        };
        if let Ok(mut m) = mount.try_borrow_mut() {
            m.pointer_moved(pos.x, pos.y);
        }
    })
}

fn wire_mouseleave(canvas: &web::HtmlCanvasElement, mount: &SharedMount) -> Option<Listener> {
    let mount = mount.clone();
    Listener::attach(canvas.as_ref(), "mouseleave", move |_ev: web::Event| {
        if let Ok(mut m) = mount.try_borrow_mut() {
            m.pointer_left();
        }
    })
}
