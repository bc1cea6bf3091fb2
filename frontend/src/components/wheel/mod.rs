mod wheel_canvas;
mod wheel_utils;

use std::rc::Rc;

use gloo_timers::callback::Interval;
use shared::prize::{PrizeCatalog, SPIN_ANIMATION_MS};
use yew::prelude::*;

use crate::styles;
use wheel_canvas::{ease_out_quart, WheelCanvas};
pub use wheel_utils::{ResultDisplay, SpinButton};

const FRAME_MS: u32 = 16;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub catalog: Rc<PrizeCatalog>,
    pub name: AttrValue,
    pub spins_today: u32,
    pub shared_today: bool,
    pub can_get_second_chance: bool,
    pub can_spin: bool,
    pub is_spinning: bool,
    /// Where the current spin comes to rest, while one is running.
    pub target_rotation: Option<f64>,
    pub on_spin: Callback<()>,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let rotation = use_state_eq(|| 0.0_f64);

    {
        let rotation = rotation.clone();
        let target = props.target_rotation.filter(|_| props.is_spinning);
        use_effect_with(target, move |target| {
            let interval = (*target).map(move |target| {
                let start = (*rotation).rem_euclid(360.0);
                let started_at = js_sys::Date::now();
                let duration = f64::from(SPIN_ANIMATION_MS);
                Interval::new(FRAME_MS, move || {
                    let progress = (js_sys::Date::now() - started_at) / duration;
                    rotation.set(start + (target - start) * ease_out_quart(progress));
                })
            });
            move || drop(interval)
        });
    }

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{format!("¡Gira la ruleta, {}!", props.name)}</h3>
            <div class={styles::TEXT_SMALL}>
                {format!(
                    "Giros hoy: {} | Compartido: {} | Segunda oportunidad: {}",
                    props.spins_today,
                    yes_no(props.shared_today),
                    yes_no(props.can_get_second_chance),
                )}
            </div>
            <WheelCanvas
                catalog={props.catalog.clone()}
                rotation={*rotation}
                is_spinning={props.is_spinning}
            />
            <SpinButton
                is_spinning={props.is_spinning}
                can_spin={props.can_spin}
                onclick={props.on_spin.clone()}
            />
        </div>
    }
}
