use shared::eligibility::{cooldown_progress, format_time_left};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub name: AttrValue,
    pub time_left: i64,
    pub daily_limit_reached: bool,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    if props.daily_limit_reached {
        return html! {
            <div class={styles::CARD}>
                <h3 class={styles::TEXT_H3}>{format!("Hola {}, ya usaste tus giros de hoy", props.name)}</h3>
                <p class={styles::TEXT_BODY}>{"Vuelve mañana para girar de nuevo 🌮"}</p>
            </div>
        };
    }

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{format!("Hola {}, todavía no puedes girar", props.name)}</h3>
            <p class={styles::TEXT_BODY}>{"Regresa en:"}</p>
            <p class={styles::TEXT_COUNTDOWN}>{format_time_left(props.time_left)}</p>
            <div class={styles::PROGRESS_TRACK}>
                <div
                    class={styles::PROGRESS_BAR}
                    style={format!("width: {:.1}%", cooldown_progress(props.time_left))}
                ></div>
            </div>
        </div>
    }
}
