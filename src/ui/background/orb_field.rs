use leptos::html::Canvas;
use leptos::prelude::*;

/// Drifting orbs that shy away from the pointer
#[component]
pub fn OrbFieldCanvas(#[prop(default = "absolute inset-0 w-full h-full")] class: &'static str) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use super::host::{SceneHandle, mount_scene};
        use crate::core::animation::HostEvent;

        let handle = StoredValue::new_local(None::<SceneHandle>);
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            let seed = js_sys::Date::now() as u64;
            let mounted = mount_scene(
                canvas,
                scene::OrbScene::new(seed),
                &[HostEvent::PointerMove, HostEvent::PointerLeave, HostEvent::Resize],
            );
            if mounted.is_none() {
                leptos::logging::warn!("orb field: 2d canvas unavailable");
            }
            handle.set_value(mounted);
        });
        on_cleanup(move || handle.dispose());
    }

    view! { <canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas> }
}

#[cfg(not(feature = "ssr"))]
mod scene {
    use std::f64::consts::TAU;

    use web_sys::CanvasRenderingContext2d;

    use super::super::host::Scene;
    use crate::core::animation::{OrbField, OrbFieldConfig};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub struct OrbScene {
        field: OrbField,
        pointer: Option<(f64, f64)>,
        last_ms: Option<f64>,
    }

    impl OrbScene {
        pub fn new(seed: u64) -> Self {
            Self {
                field: OrbField::new(0.0, 0.0, OrbFieldConfig::default(), seed),
                pointer: None,
                last_ms: None,
            }
        }
    }

    impl Scene for OrbScene {
        fn resize(&mut self, width: f64, height: f64) {
            self.field.resize(width, height);
        }

        fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
            self.pointer = pointer;
        }

        fn draw(&mut self, ctx: &CanvasRenderingContext2d, now_ms: f64) {
            let dt = self.last_ms.map_or(1.0, |last| (now_ms - last) / FRAME_MS);
            self.last_ms = Some(now_ms);
            self.field.step(dt, self.pointer);

            let (width, height) = self.field.size();
            ctx.clear_rect(0.0, 0.0, width, height);
            for orb in self.field.orbs() {
                let Ok(gradient) =
                    ctx.create_radial_gradient(orb.x, orb.y, 0.0, orb.x, orb.y, orb.radius)
                else {
                    continue;
                };
                let _ = gradient.add_color_stop(0.0, &format!("hsla({:.0}, 85%, 65%, 0.55)", orb.hue));
                let _ = gradient.add_color_stop(1.0, &format!("hsla({:.0}, 85%, 65%, 0)", orb.hue));
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.begin_path();
                if ctx.arc(orb.x, orb.y, orb.radius, 0.0, TAU).is_ok() {
                    ctx.fill();
                }
            }
        }
    }
}
