use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::checkout::query::CheckoutQuery;
use crate::checkout::quote::{format_cost, quote_cost, Frequency};
use crate::content::{self, Plan};

/// Cotizador: plan + frequency in, formatted cost and benefit list out.
/// The quote is recomputed on every change event and nothing is stored.
#[function_component(Planes)]
pub fn planes() -> Html {
    let plans = use_state(|| None::<Vec<Plan>>);
    let error = use_state(|| None::<String>);
    let selected = use_state(|| None::<u32>);
    let frequency = use_state(|| Frequency::Monthly);

    {
        let plans = plans.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match content::fetch_plans().await {
                        Ok(data) => plans.set(Some(data)),
                        Err(e) => {
                            gloo_console::error!(format!("Failed to load plans: {}", e));
                            error.set(Some(
                                "No se pudieron cargar los planes. Intenta de nuevo más tarde."
                                    .to_string(),
                            ));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_plan_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value().parse::<u32>().ok());
        })
    };

    let set_monthly = {
        let frequency = frequency.clone();
        Callback::from(move |_: Event| frequency.set(Frequency::Monthly))
    };
    let set_annual = {
        let frequency = frequency.clone();
        Callback::from(move |_: Event| frequency.set(Frequency::Annual))
    };

    let selected_plan = (*plans).as_ref().and_then(|plans| {
        (*selected).and_then(|id| plans.iter().find(|p| p.id == id).cloned())
    });

    let on_pay = {
        let selected_plan = selected_plan.clone();
        let frequency = frequency.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(plan) = selected_plan.as_ref() {
                let query = CheckoutQuery {
                    plan_id: plan.id,
                    frequency: *frequency,
                    cost: quote_cost(plan, *frequency),
                };
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .location()
                        .set_href(&format!("/pago?{}", query.to_query_string()));
                }
            }
        })
    };

    let annual = *frequency == Frequency::Annual;

    html! {
        <div class="planes-page">
            <section class="cotizador-panel">
                <h1>{"Cotizador de planes"}</h1>
                <p>{"Elige un plan y la frecuencia de pago para conocer tu costo al instante."}</p>

                {
                    if let Some(error_msg) = (*error).as_ref() {
                        html! { <p class="mensaje-error">{error_msg}</p> }
                    } else if let Some(plans) = (*plans).as_ref() {
                        html! {
                            <form class="cotizador-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                                <label for="selectPlan">{"Plan"}</label>
                                <select id="selectPlan" class="selector-plan" onchange={on_plan_change}>
                                    <option value="" selected={(*selected).is_none()} disabled=true>
                                        {"Elige un plan"}
                                    </option>
                                    {
                                        plans.iter().map(|plan| html! {
                                            <option
                                                value={plan.id.to_string()}
                                                selected={*selected == Some(plan.id)}
                                            >
                                                { &plan.nombre }
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>

                                <div class="frecuencia-grupo">
                                    <label>
                                        <input
                                            type="radio"
                                            name="frecuencia"
                                            checked={!annual}
                                            onchange={set_monthly}
                                        />
                                        {" Mensual"}
                                    </label>
                                    <label>
                                        <input
                                            type="radio"
                                            name="frecuencia"
                                            checked={annual}
                                            onchange={set_annual}
                                        />
                                        {" Anual (10% de ahorro)"}
                                    </label>
                                </div>
                            </form>
                        }
                    } else {
                        html! { <p class="mensaje-carga">{"Cargando planes..."}</p> }
                    }
                }

                {
                    if let Some(plan) = selected_plan.as_ref() {
                        let cost = quote_cost(plan, *frequency);
                        html! {
                            <div class="resultado-cotizacion">
                                <h2>{ format_cost(cost) }</h2>
                                <p>
                                    {
                                        if annual {
                                            "Pago anual con un 10% de ahorro."
                                        } else {
                                            "Pago mensual."
                                        }
                                    }
                                </p>
                                <p class="resultado-detalle">
                                    {
                                        format!(
                                            "Costo total por {} del {}.",
                                            if annual { "el año" } else { "mes" },
                                            plan.nombre
                                        )
                                    }
                                </p>
                                <ul class="beneficios-lista">
                                    {
                                        plan.beneficios.iter().map(|b| html! {
                                            <li>{"✅ "}{b}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="resultado-cotizacion vacio">
                                <p>{"Selecciona un plan para comenzar."}</p>
                                <ul class="beneficios-lista">
                                    <li class="sin-beneficios">{"Aún no hay beneficios seleccionados."}</li>
                                </ul>
                            </div>
                        }
                    }
                }

                <button
                    class={classes!("boton-pagar", annual.then_some("anual"))}
                    disabled={selected_plan.is_none()}
                    onclick={on_pay}
                >
                    {
                        if annual {
                            "¡Suscribirse anualmente y ahorrar!"
                        } else {
                            "Simular pago mensual"
                        }
                    }
                </button>
            </section>

            <style>
                {r#"
                .planes-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    display: flex;
                    justify-content: center;
                }
                .cotizador-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    margin: 2rem;
                    width: 100%;
                    max-width: 640px;
                }
                .cotizador-panel h1 {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .cotizador-panel > p {
                    color: #999;
                    margin-bottom: 2rem;
                }
                .cotizador-form label {
                    display: block;
                    margin-bottom: 0.5rem;
                    color: #ccc;
                }
                .selector-plan {
                    width: 100%;
                    padding: 0.8rem;
                    border-radius: 8px;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                    color: white;
                    font-size: 1rem;
                    margin-bottom: 1.5rem;
                }
                .frecuencia-grupo {
                    display: flex;
                    gap: 2rem;
                    margin-bottom: 1.5rem;
                }
                .frecuencia-grupo label {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    color: #ccc;
                    cursor: pointer;
                }
                .resultado-cotizacion {
                    text-align: center;
                    background: rgba(0, 0, 0, 0.2);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .resultado-cotizacion h2 {
                    font-size: 2.5rem;
                    color: #00e676;
                    margin: 0 0 0.5rem;
                }
                .resultado-cotizacion p {
                    color: #ccc;
                    margin: 0.3rem 0;
                }
                .resultado-detalle {
                    color: #999 !important;
                    font-size: 0.9rem;
                }
                .beneficios-lista {
                    list-style: none;
                    padding: 0;
                    margin-top: 1rem;
                    text-align: left;
                }
                .beneficios-lista li {
                    padding: 0.4rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: #ccc;
                }
                .sin-beneficios {
                    color: #777 !important;
                }
                .boton-pagar {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(45deg, #FFA500, #FF8C00);
                    color: #1a1a1a;
                    transition: all 0.3s ease;
                }
                .boton-pagar.anual {
                    background: linear-gradient(45deg, #00c853, #00e676);
                }
                .boton-pagar:disabled {
                    opacity: 0.4;
                    cursor: not-allowed;
                }
                .boton-pagar:hover:not(:disabled) {
                    transform: translateY(-2px);
                }
                .mensaje-error {
                    color: #ff4444;
                }
                .mensaje-carga {
                    color: #999;
                }
                @media (max-width: 768px) {
                    .cotizador-panel {
                        padding: 2rem;
                        margin: 1rem;
                    }
                    .frecuencia-grupo {
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
