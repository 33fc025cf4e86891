use super::{Listener, Listeners};
use crate::dom;
use crate::frame::SharedMount;
use web_sys as web;

/// Keep the backing store in step with the displayed size. A resize may land
/// between frames; the next frame simply draws at the new size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, mount: &SharedMount) -> Listeners {
    let mut listeners = Listeners::default();
    let Some(window) = web::window() else {
        return listeners;
    };
    let canvas_resize = canvas.clone();
    let mount = mount.clone();
    listeners.push(Listener::attach(window.as_ref(), "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        if let Ok(mut m) = mount.try_borrow_mut() {
            m.resize(w, h);
            // The canvas may be back in the document after a layout change.
            m.resume();
        }
    }));
    listeners
}
