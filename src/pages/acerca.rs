use yew::prelude::*;

use crate::content::{self, AboutSection};

#[function_component(AcercaDe)]
pub fn acerca_de() -> Html {
    let sections = use_state(|| None::<Vec<AboutSection>>);
    let error = use_state(|| None::<String>);
    let show_bio = use_state(|| false);

    {
        let sections = sections.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match content::fetch_about().await {
                        Ok(data) => sections.set(Some(data)),
                        Err(e) => {
                            gloo_console::error!(format!("Failed to load about content: {}", e));
                            error.set(Some(
                                "No se pudo cargar la información del autor.".to_string(),
                            ));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let toggle_bio = {
        let show_bio = show_bio.clone();
        Callback::from(move |_: MouseEvent| show_bio.set(!*show_bio))
    };

    let autor = (*sections)
        .as_ref()
        .and_then(|s| s.iter().find(|item| item.id == "autor").cloned());
    let contexto = (*sections)
        .as_ref()
        .and_then(|s| s.iter().find(|item| item.id == "contexto").cloned());

    html! {
        <div class="acerca-page">
            <section class="acerca-hero">
                <h1>{"Acerca de ASISVial"}</h1>
                <p>
                    {"Somos un servicio de asistencia vehicular por suscripción: grúa, cambio de \
                      llanta, paso de corriente y más, disponibles en todo el país."}
                </p>
            </section>

            {
                if let Some(contexto) = contexto.as_ref() {
                    html! {
                        <section class="acerca-contexto">
                            <p>{ &contexto.descripcion_corta }</p>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <section class="acerca-autor">
                <h2>{"Desarrollador del sitio"}</h2>
                {
                    if let Some(error_msg) = (*error).as_ref() {
                        html! {
                            <div class="autor-tarjeta">
                                <div class="autor-foto-placeholder">{"📷"}</div>
                                <p class="mensaje-error">{error_msg}</p>
                            </div>
                        }
                    } else if let Some(autor) = autor.as_ref() {
                        html! {
                            <div class="autor-tarjeta">
                                {
                                    if let Some(foto) = autor.foto_url.as_ref() {
                                        html! { <img class="autor-foto" src={foto.clone()} alt="Foto del autor" /> }
                                    } else {
                                        html! { <div class="autor-foto-placeholder">{"📷"}</div> }
                                    }
                                }
                                {
                                    if *show_bio {
                                        html! { <p class="autor-bio">{ &autor.descripcion_corta }</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <button class="boton-secundario" onclick={toggle_bio}>
                                    { if *show_bio { "Ocultar BIO" } else { "BIO" } }
                                </button>
                            </div>
                        }
                    } else {
                        html! { <p class="mensaje-carga">{"Cargando..."}</p> }
                    }
                }
            </section>

            <style>
                {r#"
                .acerca-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    text-align: center;
                }
                .acerca-hero {
                    padding: 4rem 2rem 2rem;
                }
                .acerca-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .acerca-hero p {
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .acerca-contexto {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    color: #ccc;
                }
                .acerca-autor {
                    padding: 3rem 2rem;
                }
                .acerca-autor h2 {
                    text-transform: uppercase;
                    font-size: 1.2rem;
                    letter-spacing: 2px;
                    color: #FFD700;
                    margin-bottom: 2rem;
                }
                .autor-tarjeta {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(255, 215, 0, 0.2);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 400px;
                    margin: 0 auto;
                }
                .autor-foto {
                    width: 120px;
                    height: 120px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 3px solid #FFD700;
                    margin-bottom: 1.5rem;
                }
                .autor-foto-placeholder {
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                }
                .autor-bio {
                    color: #ccc;
                    margin-bottom: 1.5rem;
                }
                .mensaje-error {
                    color: #ff4444;
                }
                .mensaje-carga {
                    color: #999;
                }
                @media (max-width: 768px) {
                    .acerca-hero h1 {
                        font-size: 2.2rem;
                    }
                    .autor-tarjeta {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
