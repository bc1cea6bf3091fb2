pub mod components;
pub mod config;
pub mod hooks;
pub mod share;
pub mod storage;
pub mod styles;
pub mod transport;

use shared::session::SessionPhase;
use yew::prelude::*;

use crate::components::{Countdown, RegistrationForm, ResultDisplay, Wheel};
use crate::hooks::use_wheel_session;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_wheel_session();

    let content = match (session.phase, session.outcome.clone()) {
        (SessionPhase::Registration, _) => html! {
            <div class={styles::CARD}>
                <h3 class={styles::TEXT_H3}>{"¡Bienvenido! 🎉"}</h3>
                <p class={styles::TEXT_BODY}>{"Regístrate para girar la ruleta y ganar premios increíbles"}</p>
                <RegistrationForm on_register={session.register.clone()} error={session.error.clone()} />
            </div>
        },
        (SessionPhase::ResultShown, Some(outcome)) => html! {
            <ResultDisplay
                {outcome}
                claim_code={session.claim_code.clone()}
                can_get_second_chance={session.can_get_second_chance()}
                on_share={session.share.clone()}
                on_continue={session.acknowledge.clone()}
            />
        },
        (SessionPhase::Waiting, _) => html! {
            <Countdown
                name={session.name().to_string()}
                time_left={session.time_left}
                daily_limit_reached={session.daily_limit_reached()}
            />
        },
        (phase, outcome) => {
            let record = session.state.as_ref().map(|s| &s.record);
            html! {
                <Wheel
                    catalog={session.catalog.clone()}
                    name={session.name().to_string()}
                    spins_today={record.map_or(0, |r| r.spins_today)}
                    shared_today={record.is_some_and(|r| r.shared_today)}
                    can_get_second_chance={session.can_get_second_chance()}
                    can_spin={session.can_spin()}
                    is_spinning={phase == SessionPhase::Spinning}
                    target_rotation={outcome.map(|o| o.target_rotation_degrees)}
                    on_spin={session.spin.clone()}
                />
            }
        }
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::CONTAINER}>
                <div class="text-center mb-8">
                    <h1 class={styles::TEXT_TITLE}>{"🌮 Tacos al Carbon"}</h1>
                    <h2 class={styles::TEXT_SUBTITLE}>{"y Salsas Bravas"}</h2>
                    <p class="text-white/80 mt-4 text-lg">{"¡Gira la ruleta y gana premios increíbles! 🎰"}</p>
                </div>
                <div class={styles::CONTAINER_SM}>
                    {content}
                    if session.phase != SessionPhase::Registration {
                        if let Some(error) = session.error.clone() {
                            <div class={classes!(styles::CARD_ERROR, "mt-4")}>{error}</div>
                        }
                    }
                </div>
            </div>
        </div>
    }
}
