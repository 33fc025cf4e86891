pub mod pointer;
pub mod resize;

pub use pointer::wire_pointer_handlers;
pub use resize::wire_canvas_resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM listener that can be removed again.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[events] failed to attach {event}: {:?}", e);
                None
            }
        }
    }

    fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        // `closure` drops here, after the DOM no longer references it.
    }
}

/// Every listener a mount attached; detaching is idempotent.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Option<Listener>) {
        if let Some(l) = listener {
            self.0.push(l);
        }
    }

    pub fn extend(&mut self, mut other: Listeners) {
        self.0.append(&mut other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn detach_all(&mut self) {
        for l in self.0.drain(..) {
            l.detach();
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}
