use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::ClientCounter;
use crate::config;
use crate::content::{self, Plan};
use crate::Route;

#[function_component(Inicio)]
pub fn inicio() -> Html {
    let plans = use_state(|| None::<Vec<Plan>>);
    let error = use_state(|| None::<String>);

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

    html! {
        <div class="inicio-page">
            <section class="inicio-hero">
                <h1>{"Asistencia vial cuando más la necesitas"}</h1>
                <p>
                    {"ASISVial te acompaña en carretera las 24 horas, los 365 días del año. \
                      Elige un plan, cotiza en línea y maneja con tranquilidad."}
                </p>
                <Link<Route> to={Route::Planes} classes="boton-principal">
                    {"Cotizar mi plan"}
                </Link<Route>>
            </section>

            <section class="inicio-planes">
                <h2>{"Nuestros planes"}</h2>
                {
                    if let Some(error_msg) = (*error).as_ref() {
                        html! { <p class="mensaje-error">{error_msg}</p> }
                    } else if let Some(plans) = (*plans).as_ref() {
                        html! {
                            <div class="planes-grid">
                                { plans.iter().map(render_plan_card).collect::<Html>() }
                            </div>
                        }
                    } else {
                        html! { <p class="mensaje-carga">{"Cargando planes..."}</p> }
                    }
                }
            </section>

            <section class="inicio-contador">
                <h2>{"Clientes satisfechos"}</h2>
                <ClientCounter
                    target={config::SATISFIED_CLIENTS_TARGET}
                    duration_ms={config::COUNTER_DURATION_MS}
                />
                <p>{"conductores confían en ASISVial en todo el país."}</p>
            </section>

            <style>
                {r#"
                .inicio-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .inicio-hero {
                    text-align: center;
                    padding: 6rem 2rem;
                    background: rgba(26, 26, 26, 0.75);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    margin: 2rem auto;
                    max-width: 1000px;
                    border-radius: 16px;
                }
                .inicio-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .inicio-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .inicio-planes {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    text-align: center;
                }
                .inicio-planes h2, .inicio-contador h2 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .planes-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .plan-card {
                    position: relative;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: left;
                    transition: all 0.3s ease;
                }
                .plan-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(30, 144, 255, 0.4);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.15);
                }
                .plan-card.destacado {
                    border-color: rgba(255, 215, 0, 0.5);
                }
                .etiqueta-recomendado {
                    position: absolute;
                    top: -12px;
                    right: 1.5rem;
                    background: linear-gradient(45deg, #FFD700, #FFA500);
                    color: #1a1a1a;
                    font-size: 0.8rem;
                    font-weight: 600;
                    padding: 0.3rem 0.8rem;
                    border-radius: 12px;
                }
                .plan-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .plan-precio {
                    font-size: 2rem;
                    color: #00e676;
                    margin-bottom: 1rem;
                }
                .plan-precio span {
                    font-size: 1rem;
                    color: #999;
                }
                .plan-card ul {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 1.5rem;
                }
                .plan-card li {
                    color: #ccc;
                    padding: 0.3rem 0;
                }
                .inicio-contador {
                    text-align: center;
                    padding: 4rem 2rem;
                }
                .contador-clientes {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #7EB2FF;
                    margin: 0;
                }
                .inicio-contador p {
                    color: #999;
                }
                .mensaje-error {
                    color: #ff4444;
                }
                .mensaje-carga {
                    color: #999;
                }
                @media (max-width: 768px) {
                    .inicio-hero {
                        padding: 4rem 1rem;
                    }
                    .inicio-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn render_plan_card(plan: &Plan) -> Html {
    html! {
        <div class={classes!("plan-card", plan.destacado.then_some("destacado"))}>
            {
                if plan.destacado {
                    html! { <span class="etiqueta-recomendado">{"Recomendado"}</span> }
                } else {
                    html! {}
                }
            }
            <h3>{ &plan.nombre }</h3>
            <p class="plan-precio">
                { format!("${:.2}", plan.precio_mensual) }
                <span>{" / mes"}</span>
            </p>
            <ul>
                { plan.beneficios.iter().map(|b| html! { <li>{"✅ "}{b}</li> }).collect::<Html>() }
            </ul>
            <Link<Route> to={Route::Planes} classes="boton-principal">
                {"Ver detalles"}
            </Link<Route>>
        </div>
    }
}
