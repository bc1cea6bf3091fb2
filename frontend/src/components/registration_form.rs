use shared::validation::RegistrationForm as FormInput;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub on_register: Callback<FormInput>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let consent = use_state(|| true);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let consent = consent.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            on_register.emit(FormInput::new(value_of(&name_ref), value_of(&email_ref), *consent));
        })
    };

    let toggle_consent = {
        let consent = consent.clone();
        Callback::from(move |_: Event| consent.set(!*consent))
    };

    html! {
        <form {onsubmit} class={styles::FORM}>
            <div>
                <label class={styles::TEXT_LABEL} for="name">{"Nombre"}</label>
                <input id="name" ref={name_ref} class={styles::INPUT} placeholder="Tu nombre" />
            </div>
            <div>
                <label class={styles::TEXT_LABEL} for="email">{"Correo"}</label>
                <input
                    id="email"
                    ref={email_ref}
                    type="email"
                    class={styles::INPUT}
                    placeholder="correo@ejemplo.com"
                />
            </div>
            <div class="flex items-center gap-2">
                <input id="consent" type="checkbox" checked={*consent} onchange={toggle_consent} />
                <label for="consent" class="text-sm">{"Acepto recibir promociones por correo"}</label>
            </div>
            if let Some(message) = props.error.clone() {
                <p class={styles::TEXT_ERROR}>{message}</p>
            }
            <button type="submit" class={styles::BUTTON_PRIMARY}>{"Registrarme y girar 🎉"}</button>
        </form>
    }
}
