//! Browser side of the canvas animators
//!
//! [`BrowserHost`] implements [`AnimationHost`] with `requestAnimationFrame`
//! and DOM listeners. [`mount_scene`] wires a [`Scene`] to a canvas; dropping
//! the returned [`SceneHandle`] tears everything down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CanvasRenderingContext2d, Element, EventTarget, HtmlCanvasElement, PointerEvent, Window,
};

use crate::core::animation::{AnimationHost, AnimatorMount, HostEvent};

/// Something that can be simulated and painted once per frame
pub trait Scene: 'static {
    /// Canvas size in CSS pixels
    fn resize(&mut self, width: f64, height: f64);

    /// Pointer position relative to the canvas, `None` once it leaves
    fn set_pointer(&mut self, pointer: Option<(f64, f64)>);

    /// Advance and paint; `now_ms` is the rAF timestamp
    fn draw(&mut self, ctx: &CanvasRenderingContext2d, now_ms: f64);
}

pub struct BrowserHost {
    window: Window,
    root: Element,
    frame: Closure<dyn FnMut(f64)>,
    pointer_move: Closure<dyn FnMut(PointerEvent)>,
    pointer_leave: Closure<dyn FnMut(PointerEvent)>,
    resize: Closure<dyn FnMut(web_sys::Event)>,
}

impl BrowserHost {
    fn target(&self, event: HostEvent) -> (&EventTarget, &js_sys::Function) {
        match event {
            HostEvent::PointerMove => (self.root.as_ref(), self.pointer_move.as_ref().unchecked_ref()),
            HostEvent::PointerLeave => {
                (self.root.as_ref(), self.pointer_leave.as_ref().unchecked_ref())
            }
            HostEvent::Resize => (self.window.as_ref(), self.resize.as_ref().unchecked_ref()),
        }
    }
}

impl AnimationHost for BrowserHost {
    fn request_frame(&mut self) -> Option<i32> {
        self.window
            .request_animation_frame(self.frame.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }

    fn add_listener(&mut self, event: HostEvent) -> bool {
        let (target, callback) = self.target(event);
        target
            .add_event_listener_with_callback(event.name(), callback)
            .is_ok()
    }

    fn remove_listener(&mut self, event: HostEvent) {
        let (target, callback) = self.target(event);
        let _ = target.remove_event_listener_with_callback(event.name(), callback);
    }
}

type MountCell = Rc<RefCell<Option<AnimatorMount<BrowserHost>>>>;

/// Keeps an animator alive. Dropping it cancels the frame loop and detaches
/// every listener.
pub struct SceneHandle {
    _mount: MountCell,
}

/// Start animating `scene` on `canvas`. Returns `None` when the browser
/// refuses a 2D context.
pub fn mount_scene<S: Scene>(
    canvas: HtmlCanvasElement,
    scene: S,
    events: &[HostEvent],
) -> Option<SceneHandle> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let scene = Rc::new(RefCell::new(scene));
    fit_to_canvas(&window, &canvas, &ctx, &mut *scene.borrow_mut());

    let cell: MountCell = Rc::new(RefCell::new(None));
    let weak: Weak<_> = Rc::downgrade(&cell);

    let frame = {
        let scene = scene.clone();
        let ctx = ctx.clone();
        Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            let Some(cell) = weak.upgrade() else {
                return;
            };
            let draw = cell
                .borrow_mut()
                .as_mut()
                .is_some_and(|mount| mount.on_frame());
            if draw {
                scene.borrow_mut().draw(&ctx, now_ms);
            }
        })
    };

    let pointer_move = {
        let scene = scene.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            let rect = canvas.get_bounding_client_rect();
            let pointer = (
                f64::from(ev.client_x()) - rect.left(),
                f64::from(ev.client_y()) - rect.top(),
            );
            scene.borrow_mut().set_pointer(Some(pointer));
        })
    };

    let pointer_leave = {
        let scene = scene.clone();
        Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| {
            scene.borrow_mut().set_pointer(None);
        })
    };

    let resize = {
        let scene = scene.clone();
        let window = window.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            fit_to_canvas(&window, &canvas, &ctx, &mut *scene.borrow_mut());
        })
    };

    let host = BrowserHost {
        window,
        root,
        frame,
        pointer_move,
        pointer_leave,
        resize,
    };
    *cell.borrow_mut() = Some(AnimatorMount::mount(host, events));

    Some(SceneHandle { _mount: cell })
}

/// Match the backing store to the displayed size and device pixel ratio
fn fit_to_canvas<S: Scene>(
    window: &Window,
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    scene: &mut S,
) {
    let ratio = window.device_pixel_ratio().max(1.0);
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    canvas.set_width((width * ratio).round() as u32);
    canvas.set_height((height * ratio).round() as u32);
    if ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).is_err() {
        leptos::logging::warn!("canvas transform rejected");
    }
    scene.resize(width, height);
}
