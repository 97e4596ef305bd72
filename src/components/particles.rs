use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::particles::{ParticleField, DEFAULT_PARTICLES};

const FRAME_MS: u32 = 16;
const PARTICLE_FILL: &str = "rgba(6, 182, 212, 0.6)";

fn window_size() -> (f64, f64) {
    web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style(&JsValue::from_str(PARTICLE_FILL));
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }

    ctx.set_line_width(0.5);
    for link in field.links() {
        ctx.set_stroke_style(&JsValue::from_str(&format!(
            "rgba(6, 182, 212, {:.3})",
            link.alpha
        )));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }
}

/// Full-size canvas of drifting, linked particles behind the hero.
#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Vec<Box<dyn FnOnce()>> = Vec::new();

                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let (width, height) = window_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    let field = Rc::new(RefCell::new(ParticleField::new(
                        DEFAULT_PARTICLES,
                        width,
                        height,
                        &mut StdRng::from_entropy(),
                    )));

                    if let Some(ctx) = context_2d(&canvas) {
                        let field = field.clone();
                        let interval = Interval::new(FRAME_MS, move || {
                            let mut field = field.borrow_mut();
                            field.step();
                            draw(&ctx, &field);
                        });
                        cleanup.push(Box::new(move || drop(interval)));
                    } else {
                        log::warn!("2d canvas context unavailable, particles disabled");
                    }

                    if let Some(window) = web_sys::window() {
                        let on_resize = Closure::<dyn Fn()>::new(move || {
                            let (width, height) = window_size();
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                            field.borrow_mut().resize(width, height);
                        });
                        if window
                            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                            .is_ok()
                        {
                            cleanup.push(Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "resize",
                                    on_resize.as_ref().unchecked_ref(),
                                );
                            }));
                        }
                    }
                }

                move || {
                    for step in cleanup {
                        step();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true"></canvas>
    }
}
