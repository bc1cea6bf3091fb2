use shared::prize::PrizeOutcome;
use shared::share::ShareTarget;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<()>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let disabled = props.is_spinning || !props.can_spin;
    let onclick = props.onclick.reform(|_: MouseEvent| ());

    html! {
        <button
            {onclick}
            {disabled}
            class={classes!(
                styles::BUTTON_PRIMARY,
                "text-xl",
                "py-6",
                disabled.then_some("opacity-75 cursor-not-allowed"),
            )}
        >
            if props.is_spinning {
                <>
                    <span class="inline-block mr-2 animate-spin">{"🎰"}</span>
                    {"Girando..."}
                </>
            } else {
                {"¡GIRAR RULETA! 🎰"}
            }
        </button>
    }
}

fn share_button_class(target: ShareTarget) -> &'static str {
    match target {
        ShareTarget::Facebook => styles::BUTTON_FACEBOOK,
        ShareTarget::WhatsApp => styles::BUTTON_WHATSAPP,
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub outcome: PrizeOutcome,
    pub claim_code: Option<String>,
    pub can_get_second_chance: bool,
    pub on_share: Callback<ShareTarget>,
    pub on_continue: Callback<()>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let outcome = &props.outcome;

    let body = if !outcome.is_win && props.can_get_second_chance {
        html! {
            <>
                <p class={styles::TEXT_BODY}>
                    {"¡No te desanimes! Comparte en redes sociales para obtener un segundo intento"}
                </p>
                <div class="flex flex-col gap-4">
                    { for ShareTarget::ALL.iter().map(|&target| {
                        let onclick = props.on_share.reform(move |_: MouseEvent| target);
                        html! {
                            <button {onclick} class={share_button_class(target)}>
                                {target.label()}
                            </button>
                        }
                    }) }
                </div>
            </>
        }
    } else {
        html! {
            <>
                if outcome.is_win {
                    <div class={styles::CARD_SUCCESS}>
                        <p class="text-green-800 font-semibold">
                            {"¡Felicidades! Muestra esta pantalla en el restaurante para reclamar tu premio."}
                        </p>
                        if let Some(code) = props.claim_code.clone() {
                            <p class="text-sm text-green-600 mt-2">{format!("Código: {}", code)}</p>
                        }
                    </div>
                }
                <button onclick={props.on_continue.reform(|_: MouseEvent| ())} class={styles::BUTTON_PRIMARY}>
                    {"Continuar 🌮"}
                </button>
            </>
        }
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{"¡Tu Premio!"}</h3>
            <div
                class="mx-auto w-32 h-32 rounded-full flex items-center justify-center text-white font-bold text-lg shadow-2xl"
                style={format!("background-color: {}", outcome.color_token)}
            >
                {outcome.label.clone()}
            </div>
            {body}
        </div>
    }
}
