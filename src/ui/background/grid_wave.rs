use leptos::html::Canvas;
use leptos::prelude::*;

/// Perspective grid rippling under the pointer
#[component]
pub fn GridWaveCanvas(#[prop(default = "absolute inset-0 w-full h-full")] class: &'static str) -> impl IntoView {
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
            let mounted = mount_scene(
                canvas,
                scene::WaveScene::default(),
                &[HostEvent::PointerMove, HostEvent::PointerLeave, HostEvent::Resize],
            );
            if mounted.is_none() {
                leptos::logging::warn!("grid wave: 2d canvas unavailable");
            }
            handle.set_value(mounted);
        });
        on_cleanup(move || handle.dispose());
    }

    view! { <canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas> }
}

#[cfg(not(feature = "ssr"))]
mod scene {
    use web_sys::CanvasRenderingContext2d;

    use super::super::host::Scene;
    use crate::core::animation::{GridWave, GridWaveConfig, ProjectedPoint};

    pub struct WaveScene {
        wave: GridWave,
        width: f64,
        height: f64,
        pointer: Option<(f64, f64)>,
    }

    impl Default for WaveScene {
        fn default() -> Self {
            Self {
                wave: GridWave::new(0.0, 0.0, GridWaveConfig::default()),
                width: 0.0,
                height: 0.0,
                pointer: None,
            }
        }
    }

    impl Scene for WaveScene {
        fn resize(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
            self.wave.resize(width, height);
        }

        fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
            self.pointer = pointer;
        }

        fn draw(&mut self, ctx: &CanvasRenderingContext2d, now_ms: f64) {
            let grid = self.wave.frame(now_ms / 1000.0, self.pointer);
            ctx.clear_rect(0.0, 0.0, self.width, self.height);
            ctx.set_line_width(1.0);

            for row in &grid {
                stroke_line(ctx, row.iter().copied());
            }
            let cols = grid.first().map_or(0, Vec::len);
            for col in 0..cols {
                stroke_line(ctx, grid.iter().map(|row| row[col]));
            }
        }
    }

    /// Stroke a polyline, breaking it wherever a point failed to project
    fn stroke_line(
        ctx: &CanvasRenderingContext2d,
        points: impl Iterator<Item = Option<ProjectedPoint>>,
    ) {
        let mut pen_down = false;
        let mut scale_sum = 0.0;
        let mut count = 0.0;
        ctx.begin_path();
        for point in points {
            match point {
                Some(p) => {
                    if pen_down {
                        ctx.line_to(p.x, p.y);
                    } else {
                        ctx.move_to(p.x, p.y);
                        pen_down = true;
                    }
                    scale_sum += p.scale;
                    count += 1.0;
                }
                None => pen_down = false,
            }
        }
        if count > 0.0 {
            let alpha = (scale_sum / count).clamp(0.05, 0.6);
            ctx.set_stroke_style_str(&format!("rgba(99, 102, 241, {alpha:.3})"));
            ctx.stroke();
        }
    }
}
