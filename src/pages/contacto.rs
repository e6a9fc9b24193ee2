use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::checkout::captcha::{CaptchaChallenge, FormSession, SubmitOutcome};
use crate::components::notice::{Notice, NoticeKind};
use crate::config;
use crate::forms::{ContactField, ContactForm};

fn field_invalid(invalid: &[ContactField], field: ContactField) -> bool {
    invalid.contains(&field)
}

#[function_component(Contacto)]
pub fn contacto() -> Html {
    let nombre = use_state(String::new);
    let correo = use_state(String::new);
    let asunto = use_state(String::new);
    let mensaje = use_state(String::new);
    let answer = use_state(String::new);
    // Invalid-field markers appear after the first submit attempt and then
    // track every keystroke, like the original form's live re-validation.
    let attempted = use_state(|| false);
    let invalid = use_state(Vec::<ContactField>::new);
    let session = use_state(|| FormSession::new(CaptchaChallenge::random()));
    let notice = use_state(|| None::<(NoticeKind, String)>);
    let submitted = use_state(|| None::<ContactForm>);

    let current_form = ContactForm {
        nombre: (*nombre).clone(),
        correo: (*correo).clone(),
        asunto: (*asunto).clone(),
        mensaje: (*mensaje).clone(),
    };
    let locked = session.is_locked();

    let revalidate = {
        let attempted = attempted.clone();
        let invalid = invalid.clone();
        move |form: &ContactForm| {
            if *attempted {
                invalid.set(form.invalid_fields());
            }
        }
    };

    let on_nombre_input = {
        let nombre = nombre.clone();
        let current_form = current_form.clone();
        let revalidate = revalidate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = current_form.clone();
            form.nombre = input.value();
            nombre.set(form.nombre.clone());
            revalidate(&form);
        })
    };
    let on_correo_input = {
        let correo = correo.clone();
        let current_form = current_form.clone();
        let revalidate = revalidate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = current_form.clone();
            form.correo = input.value();
            correo.set(form.correo.clone());
            revalidate(&form);
        })
    };
    let on_asunto_input = {
        let asunto = asunto.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            asunto.set(input.value());
        })
    };
    let on_mensaje_input = {
        let mensaje = mensaje.clone();
        let current_form = current_form.clone();
        let revalidate = revalidate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = current_form.clone();
            form.mensaje = input.value();
            mensaje.set(form.mensaje.clone());
            revalidate(&form);
        })
    };
    let on_answer_input = {
        let answer = answer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            answer.set(input.value());
        })
    };

    let on_submit = {
        let current_form = current_form.clone();
        let attempted = attempted.clone();
        let invalid = invalid.clone();
        let session = session.clone();
        let notice = notice.clone();
        let answer = answer.clone();
        let submitted = submitted.clone();
        let nombre = nombre.clone();
        let correo = correo.clone();
        let asunto = asunto.clone();
        let mensaje = mensaje.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.is_locked() {
                return;
            }
            attempted.set(true);
            let failing = current_form.invalid_fields();
            if !failing.is_empty() {
                invalid.set(failing);
                return;
            }
            invalid.set(Vec::new());

            let mut updated = (*session).clone();
            match updated.submit(&answer, CaptchaChallenge::random) {
                SubmitOutcome::Accepted => {
                    submitted.set(Some(current_form.clone()));
                    updated.rearm();
                    nombre.set(String::new());
                    correo.set(String::new());
                    asunto.set(String::new());
                    mensaje.set(String::new());
                    answer.set(String::new());
                    attempted.set(false);
                    notice.set(Some((
                        NoticeKind::Success,
                        "Tu mensaje fue enviado correctamente.".to_string(),
                    )));
                }
                SubmitOutcome::Retry { attempts_left } => {
                    notice.set(Some((
                        NoticeKind::Error,
                        format!(
                            "Respuesta incorrecta. Te {} {} antes del bloqueo.",
                            if attempts_left == 1 { "queda" } else { "quedan" },
                            if attempts_left == 1 {
                                "1 intento".to_string()
                            } else {
                                format!("{} intentos", attempts_left)
                            }
                        ),
                    )));
                    answer.set(String::new());
                }
                SubmitOutcome::Locked => {
                    wasm_bindgen_futures::spawn_local(async {
                        gloo_timers::future::TimeoutFuture::new(config::LOCKOUT_REDIRECT_MS).await;
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    });
                }
            }
            session.set(updated);
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let close_overlay = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(None))
    };

    html! {
        <div class="contacto-page">
            <div class="contacto-panel">
                <h1>{"Contáctanos"}</h1>
                <p>{"¿Tienes dudas sobre nuestros planes? Escríbenos y te responderemos pronto."}</p>

                {
                    if let Some((kind, message)) = (*notice).clone() {
                        html! { <Notice {kind} {message} on_dismiss={dismiss_notice.clone()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if locked {
                        html! {
                            <div class="bloqueo-panel">
                                <h2>{"Formulario bloqueado"}</h2>
                                <p>
                                    {"Fallaste la verificación 3 veces. Por seguridad, \
                                      volverás a la página de inicio."}
                                </p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="contacto-form" onsubmit={on_submit}>
                                <label>{"Nombre"}</label>
                                <input
                                    type="text"
                                    class={classes!(field_invalid(&invalid, ContactField::Nombre).then_some("invalido"))}
                                    placeholder="Tu nombre completo"
                                    value={(*nombre).clone()}
                                    oninput={on_nombre_input}
                                />
                                {
                                    if field_invalid(&invalid, ContactField::Nombre) {
                                        html! { <div class="campo-error">{ContactField::Nombre.message()}</div> }
                                    } else {
                                        html! {}
                                    }
                                }

                                <label>{"Correo electrónico"}</label>
                                <input
                                    type="email"
                                    class={classes!(field_invalid(&invalid, ContactField::Correo).then_some("invalido"))}
                                    placeholder="tucorreo@ejemplo.com"
                                    value={(*correo).clone()}
                                    oninput={on_correo_input}
                                />
                                {
                                    if field_invalid(&invalid, ContactField::Correo) {
                                        html! { <div class="campo-error">{ContactField::Correo.message()}</div> }
                                    } else {
                                        html! {}
                                    }
                                }

                                <label>{"Asunto (opcional)"}</label>
                                <input
                                    type="text"
                                    placeholder="¿Sobre qué nos escribes?"
                                    value={(*asunto).clone()}
                                    oninput={on_asunto_input}
                                />

                                <label>{"Mensaje"}</label>
                                <textarea
                                    rows="5"
                                    class={classes!(field_invalid(&invalid, ContactField::Mensaje).then_some("invalido"))}
                                    placeholder="Cuéntanos en qué podemos ayudarte"
                                    value={(*mensaje).clone()}
                                    oninput={on_mensaje_input}
                                />
                                {
                                    if field_invalid(&invalid, ContactField::Mensaje) {
                                        html! { <div class="campo-error">{ContactField::Mensaje.message()}</div> }
                                    } else {
                                        html! {}
                                    }
                                }

                                <div class="captcha-caja">
                                    <label>{ session.challenge().question() }</label>
                                    <input
                                        type="text"
                                        inputmode="numeric"
                                        placeholder="Tu respuesta"
                                        value={(*answer).clone()}
                                        oninput={on_answer_input}
                                    />
                                </div>

                                <button type="submit" class="boton-principal">
                                    {"Enviar mensaje"}
                                </button>
                            </form>
                        }
                    }
                }
            </div>

            {
                if let Some(form) = (*submitted).as_ref() {
                    html! {
                        <div class="overlay-fondo">
                            <div class="overlay-tarjeta">
                                <h2>{"¡Mensaje enviado!"}</h2>
                                <p><strong>{"De: "}</strong>{ &form.nombre }</p>
                                <p><strong>{"Correo: "}</strong>{ &form.correo }</p>
                                <p><strong>{"Asunto: "}</strong>{ form.asunto_display() }</p>
                                <hr/>
                                <p class="overlay-mensaje">{ &form.mensaje }</p>
                                <p class="nota-simulacion">
                                    {"Este envío es una simulación; no se almacenó ningún dato."}
                                </p>
                                <button class="boton-principal" onclick={close_overlay}>
                                    {"Cerrar"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .contacto-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    display: flex;
                    justify-content: center;
                }
                .contacto-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    margin: 2rem;
                    width: 100%;
                    max-width: 560px;
                }
                .contacto-panel h1 {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contacto-panel > p {
                    color: #999;
                    margin-bottom: 1.5rem;
                }
                .contacto-form label {
                    display: block;
                    margin: 1rem 0 0.4rem;
                    color: #ccc;
                }
                .contacto-form input, .contacto-form textarea {
                    width: 100%;
                    padding: 0.8rem;
                    border-radius: 8px;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                    color: white;
                    font-size: 1rem;
                    font-family: inherit;
                    box-sizing: border-box;
                }
                .contacto-form input:focus, .contacto-form textarea:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.6);
                }
                .contacto-form input.invalido, .contacto-form textarea.invalido {
                    border-color: rgba(255, 68, 68, 0.7);
                }
                .campo-error {
                    color: #ff4444;
                    font-size: 0.85rem;
                    margin-top: 0.3rem;
                }
                .captcha-caja {
                    background: rgba(0, 0, 0, 0.2);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.2rem;
                    margin-top: 1.5rem;
                }
                .captcha-caja label {
                    margin-top: 0;
                    font-weight: 600;
                    color: #7EB2FF;
                }
                .contacto-form .boton-principal {
                    width: 100%;
                    margin-top: 1.5rem;
                }
                .bloqueo-panel {
                    text-align: center;
                    background: rgba(255, 68, 68, 0.1);
                    border: 1px solid rgba(255, 68, 68, 0.4);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .bloqueo-panel h2 {
                    color: #ff4444;
                    margin-bottom: 1rem;
                }
                .bloqueo-panel p {
                    color: #ccc;
                }
                .overlay-fondo {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 100;
                }
                .overlay-tarjeta {
                    background: #1e1e1e;
                    border: 1px solid rgba(0, 230, 118, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 440px;
                    width: 90%;
                }
                .overlay-tarjeta h2 {
                    color: #00e676;
                    margin-bottom: 1rem;
                }
                .overlay-tarjeta p {
                    color: #ccc;
                    margin: 0.3rem 0;
                }
                .overlay-mensaje {
                    white-space: pre-wrap;
                }
                .nota-simulacion {
                    color: #777 !important;
                    font-size: 0.85rem;
                    margin: 1rem 0 !important;
                }
                @media (max-width: 768px) {
                    .contacto-panel {
                        padding: 2rem;
                        margin: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
