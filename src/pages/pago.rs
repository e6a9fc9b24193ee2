use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::checkout::captcha::{CaptchaChallenge, FormSession, SubmitOutcome};
use crate::checkout::payment::{self, CardError, Field, PaymentDetails};
use crate::checkout::query::CheckoutQuery;
use crate::checkout::quote::format_cost;
use crate::components::notice::{Notice, NoticeKind};
use crate::config;
use crate::content::{self, Plan};
use crate::Route;

fn error_for(errors: &[(Field, CardError)], field: Field) -> Option<String> {
    errors
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, e)| e.to_string())
}

#[function_component(Pago)]
pub fn pago() -> Html {
    let plan_id = use_search_param("planId".to_string());
    let frecuencia = use_search_param("frecuencia".to_string());
    let costo = use_search_param("costo".to_string());
    let checkout =
        CheckoutQuery::from_params(plan_id.as_deref(), frecuencia.as_deref(), costo.as_deref());

    let plans = use_state(|| None::<Vec<Plan>>);
    let holder = use_state(String::new);
    let card_number = use_state(String::new);
    let expiry = use_state(String::new);
    let cvc = use_state(String::new);
    let answer = use_state(String::new);
    let field_errors = use_state(Vec::<(Field, CardError)>::new);
    let session = use_state(|| FormSession::new(CaptchaChallenge::random()));
    let notice = use_state(|| None::<(NoticeKind, String)>);

    {
        let plans = plans.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match content::fetch_plans().await {
                        Ok(data) => plans.set(Some(data)),
                        Err(e) => {
                            // The name in the summary is a nicety; the checkout
                            // parameters alone are enough to keep going.
                            gloo_console::error!(format!("Failed to load plans: {}", e));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let plan_name = checkout.as_ref().and_then(|q| {
        (*plans).as_ref().and_then(|plans| {
            plans
                .iter()
                .find(|p| p.id == q.plan_id)
                .map(|p| p.nombre.clone())
        })
    });

    let details = PaymentDetails {
        holder: (*holder).clone(),
        card_number: (*card_number).clone(),
        expiry: (*expiry).clone(),
        cvc: (*cvc).clone(),
    };
    let locked = session.is_locked();
    let can_submit = details.is_complete() && !answer.trim().is_empty() && !locked;

    let on_holder_input = {
        let holder = holder.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            holder.set(input.value());
            let remaining: Vec<_> = (*field_errors)
                .iter()
                .filter(|(f, _)| *f != Field::Holder)
                .cloned()
                .collect();
            field_errors.set(remaining);
        })
    };
    let on_card_input = {
        let card_number = card_number.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            card_number.set(input.value());
            let remaining: Vec<_> = (*field_errors)
                .iter()
                .filter(|(f, _)| *f != Field::CardNumber)
                .cloned()
                .collect();
            field_errors.set(remaining);
        })
    };
    let on_expiry_input = {
        let expiry = expiry.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            expiry.set(input.value());
            let remaining: Vec<_> = (*field_errors)
                .iter()
                .filter(|(f, _)| *f != Field::Expiry)
                .cloned()
                .collect();
            field_errors.set(remaining);
        })
    };
    let on_cvc_input = {
        let cvc = cvc.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cvc.set(input.value());
            let remaining: Vec<_> = (*field_errors)
                .iter()
                .filter(|(f, _)| *f != Field::Cvc)
                .cloned()
                .collect();
            field_errors.set(remaining);
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
        let details = details.clone();
        let session = session.clone();
        let field_errors = field_errors.clone();
        let notice = notice.clone();
        let answer = answer.clone();
        let checkout = checkout.clone();
        let plan_name = plan_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.is_locked() {
                return;
            }
            let errors = details.validate(payment::current_period());
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(Vec::new());

            let mut updated = (*session).clone();
            match updated.submit(&answer, CaptchaChallenge::random) {
                SubmitOutcome::Accepted => {
                    if let Some(query) = checkout.as_ref() {
                        let name = plan_name.clone().unwrap_or_else(|| "Plan seleccionado".to_string());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!(
                                "/confirmacion?plan={}&costo={}",
                                urlencoding::encode(&name),
                                urlencoding::encode(&format!("{:.2}", query.cost)),
                            ));
                        }
                    }
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
                            let _ = window.location().set_href("/planes");
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

    html! {
        <div class="pago-page">
            <div class="pago-panel">
                {
                    if let Some(query) = checkout.as_ref() {
                        html! {
                            <>
                                <h1>{"Pago simulado"}</h1>
                                <div class="resumen-compra">
                                    <p>
                                        <span>{"Plan: "}</span>
                                        <strong>{ plan_name.clone().unwrap_or_else(|| format!("Plan #{}", query.plan_id)) }</strong>
                                    </p>
                                    <p>
                                        <span>{"Frecuencia: "}</span>
                                        <strong>{ query.frequency.label() }</strong>
                                    </p>
                                    <p>
                                        <span>{"Monto a pagar: "}</span>
                                        <strong class="monto">{ format_cost(query.cost) }</strong>
                                    </p>
                                </div>

                                {
                                    if let Some((kind, message)) = (*notice).clone() {
                                        html! {
                                            <Notice
                                                {kind}
                                                {message}
                                                on_dismiss={dismiss_notice.clone()}
                                            />
                                        }
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
                                                      volverás a la página de planes para empezar de nuevo."}
                                                </p>
                                            </div>
                                        }
                                    } else {
                                        html! {
                                            <form class="pago-form" onsubmit={on_submit}>
                                                <label>{"Nombre del titular"}</label>
                                                <input
                                                    type="text"
                                                    class={classes!(error_for(&field_errors, Field::Holder).map(|_| "invalido"))}
                                                    placeholder="Como aparece en la tarjeta"
                                                    value={(*holder).clone()}
                                                    oninput={on_holder_input}
                                                />
                                                {
                                                    if let Some(msg) = error_for(&field_errors, Field::Holder) {
                                                        html! { <div class="campo-error">{msg}</div> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }

                                                <label>{"Número de tarjeta"}</label>
                                                <input
                                                    type="text"
                                                    inputmode="numeric"
                                                    class={classes!(error_for(&field_errors, Field::CardNumber).map(|_| "invalido"))}
                                                    placeholder="0000 0000 0000 0000"
                                                    value={(*card_number).clone()}
                                                    oninput={on_card_input}
                                                />
                                                {
                                                    if let Some(msg) = error_for(&field_errors, Field::CardNumber) {
                                                        html! { <div class="campo-error">{msg}</div> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }

                                                <div class="fila-doble">
                                                    <div>
                                                        <label>{"Vencimiento (MM/AA)"}</label>
                                                        <input
                                                            type="text"
                                                            class={classes!(error_for(&field_errors, Field::Expiry).map(|_| "invalido"))}
                                                            placeholder="MM/AA"
                                                            value={(*expiry).clone()}
                                                            oninput={on_expiry_input}
                                                        />
                                                        {
                                                            if let Some(msg) = error_for(&field_errors, Field::Expiry) {
                                                                html! { <div class="campo-error">{msg}</div> }
                                                            } else {
                                                                html! {}
                                                            }
                                                        }
                                                    </div>
                                                    <div>
                                                        <label>{"CVC"}</label>
                                                        <input
                                                            type="text"
                                                            inputmode="numeric"
                                                            class={classes!(error_for(&field_errors, Field::Cvc).map(|_| "invalido"))}
                                                            placeholder="123"
                                                            value={(*cvc).clone()}
                                                            oninput={on_cvc_input}
                                                        />
                                                        {
                                                            if let Some(msg) = error_for(&field_errors, Field::Cvc) {
                                                                html! { <div class="campo-error">{msg}</div> }
                                                            } else {
                                                                html! {}
                                                            }
                                                        }
                                                    </div>
                                                </div>

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

                                                <button type="submit" class="boton-principal" disabled={!can_submit}>
                                                    {"Confirmar pago simulado"}
                                                </button>
                                                <p class="nota-simulacion">
                                                    {"Esta es una simulación: no se procesará ningún cobro real."}
                                                </p>
                                            </form>
                                        }
                                    }
                                }
                            </>
                        }
                    } else {
                        html! {
                            <div class="parametros-invalidos">
                                <h1>{"Falta información del plan"}</h1>
                                <p>{"No encontramos una cotización válida. Vuelve al cotizador para elegir tu plan."}</p>
                                <Link<Route> to={Route::Planes} classes="boton-principal">
                                    {"Ir al cotizador"}
                                </Link<Route>>
                            </div>
                        }
                    }
                }
            </div>

            <style>
                {r#"
                .pago-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    display: flex;
                    justify-content: center;
                }
                .pago-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    margin: 2rem;
                    width: 100%;
                    max-width: 560px;
                }
                .pago-panel h1 {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .resumen-compra {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 1.2rem;
                    margin-bottom: 1.5rem;
                }
                .resumen-compra p {
                    margin: 0.3rem 0;
                }
                .resumen-compra span {
                    color: #999;
                }
                .monto {
                    color: #00e676;
                    font-size: 1.2rem;
                }
                .pago-form label {
                    display: block;
                    margin: 1rem 0 0.4rem;
                    color: #ccc;
                }
                .pago-form input {
                    width: 100%;
                    padding: 0.8rem;
                    border-radius: 8px;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                    color: white;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .pago-form input:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.6);
                }
                .pago-form input.invalido {
                    border-color: rgba(255, 68, 68, 0.7);
                }
                .campo-error {
                    color: #ff4444;
                    font-size: 0.85rem;
                    margin-top: 0.3rem;
                }
                .fila-doble {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
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
                .pago-form .boton-principal {
                    width: 100%;
                    margin-top: 1.5rem;
                }
                .nota-simulacion {
                    text-align: center;
                    color: #777;
                    font-size: 0.85rem;
                    margin-top: 1rem;
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
                .parametros-invalidos {
                    text-align: center;
                }
                .parametros-invalidos p {
                    color: #999;
                    margin: 1rem 0 2rem;
                }
                @media (max-width: 768px) {
                    .pago-panel {
                        padding: 2rem;
                        margin: 1rem;
                    }
                    .fila-doble {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
