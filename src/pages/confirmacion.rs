use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Simulated-payment confirmation. Reads the plan name and cost from the
/// query string and returns home on its own after a short pause.
#[function_component(Confirmacion)]
pub fn confirmacion() -> Html {
    let plan = use_search_param("plan".to_string());
    let costo = use_search_param("costo".to_string());

    {
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async {
                    gloo_timers::future::TimeoutFuture::new(config::CONFIRMATION_REDIRECT_MS).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                });
                || ()
            },
            (),
        );
    }

    let plan = plan.filter(|p| !p.is_empty());
    let costo = costo.filter(|c| !c.is_empty());

    html! {
        <div class="confirmacion-page">
            <div class="confirmacion-panel">
                <div class="confirmacion-icono">{"✅"}</div>
                <h1>{"¡Pago simulado exitoso!"}</h1>
                {
                    if let Some(plan) = plan.as_ref() {
                        html! {
                            <p class="confirmacion-detalle">
                                {"Felicitaciones, simulaste la activación del "}
                                <strong>{plan}</strong>
                                {
                                    if let Some(costo) = costo.as_ref() {
                                        html! { <>{" por "}<strong>{format!("${}", costo)}</strong></> }
                                    } else {
                                        html! {}
                                    }
                                }
                                {"."}
                            </p>
                        }
                    } else {
                        html! {
                            <p class="confirmacion-detalle">{"Tu suscripción simulada quedó registrada."}</p>
                        }
                    }
                }
                <p class="confirmacion-nota">
                    {"Gracias por confiar en ASISVial. En un sitio real, ahora recibirías tu \
                      confirmación de pago. No se procesó ningún cobro."}
                </p>
                <p class="confirmacion-redireccion">{"Te llevaremos al inicio en unos segundos..."}</p>
                <Link<Route> to={Route::Inicio} classes="boton-principal">
                    {"Volver al inicio"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .confirmacion-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    display: flex;
                    justify-content: center;
                    align-items: flex-start;
                }
                .confirmacion-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(0, 230, 118, 0.3);
                    border-radius: 16px;
                    padding: 3rem;
                    margin: 3rem 2rem;
                    max-width: 520px;
                    text-align: center;
                }
                .confirmacion-icono {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .confirmacion-panel h1 {
                    font-size: 2rem;
                    color: #00e676;
                    margin-bottom: 1.5rem;
                }
                .confirmacion-detalle {
                    font-size: 1.1rem;
                    color: #ccc;
                }
                .confirmacion-nota {
                    color: #999;
                    font-size: 0.9rem;
                    margin: 1.5rem 0;
                }
                .confirmacion-redireccion {
                    color: #777;
                    font-size: 0.85rem;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
