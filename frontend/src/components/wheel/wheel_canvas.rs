use std::f64::consts::PI;
use std::rc::Rc;

use shared::prize::{segment_angle, PrizeCatalog};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const SIZE: f64 = 320.0;
const LABEL_FONT: &str = "bold 13px 'Segoe UI', Roboto, system-ui, sans-serif";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub catalog: Rc<PrizeCatalog>,
    /// Clockwise degrees. Segment 0 starts under the pointer at rest.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn context_of(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw(context: &CanvasRenderingContext2d, catalog: &PrizeCatalog, rotation: f64) {
    let center = SIZE / 2.0;
    let radius = center - 8.0;
    let segment = segment_angle(catalog.len()).to_radians();

    context.clear_rect(0.0, 0.0, SIZE, SIZE);
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation.to_radians());

    for (index, prize) in catalog.prizes().iter().enumerate() {
        // Canvas angles start at 3 o'clock; the pointer sits at 12.
        let start = -PI / 2.0 + index as f64 * segment;
        context.begin_path();
        context.set_fill_style_str(&prize.color_token);
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, start + segment);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
        context.set_line_width(2.0);
        context.stroke();

        context.save();
        let _ = context.rotate(start + segment / 2.0);
        context.set_fill_style_str("#ffffff");
        context.set_font(LABEL_FONT);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&prize.label, radius * 0.62, 0.0);
        context.restore();
    }

    context.restore();

    context.begin_path();
    context.set_stroke_style_str("#1F1F1F");
    context.set_line_width(8.0);
    let _ = context.arc(center, center, radius, 0.0, 2.0 * PI);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let catalog = props.catalog.clone();
        use_effect_with((props.rotation, catalog), move |(rotation, catalog)| {
            if let Some(context) = canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_of) {
                draw(&context, catalog, *rotation);
            }
            || ()
        });
    }

    html! {
        <div class="relative mx-auto w-80 h-80">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 -translate-y-2 z-10 w-0 h-0 border-l-[10px] border-r-[10px] border-t-[20px] border-l-transparent border-r-transparent border-t-yellow-500"></div>
            <canvas
                ref={canvas_ref}
                width={SIZE.to_string()}
                height={SIZE.to_string()}
                class="w-full h-full rounded-full shadow-2xl"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(220, 38, 38, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-12 h-12 bg-yellow-500 rounded-full border-4 border-white shadow-lg flex items-center justify-center text-2xl">
                {"🎰"}
            </div>
        </div>
    }
}

/// Decelerating ease: `1 - (1 - t)^4`.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}
