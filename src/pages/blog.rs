use std::collections::BTreeSet;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::content::{self, BlogPost};

const ALL_CATEGORIES: &str = "todos";

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = use_state(|| None::<Vec<BlogPost>>);
    let error = use_state(|| None::<String>);
    let category = use_state(|| ALL_CATEGORIES.to_string());
    let detail = use_state(|| None::<BlogPost>);

    {
        let posts = posts.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match content::fetch_posts().await {
                        Ok(data) => posts.set(Some(data)),
                        Err(e) => {
                            gloo_console::error!(format!("Failed to load blog posts: {}", e));
                            error.set(Some(
                                "No se pudieron cargar las publicaciones del blog.".to_string(),
                            ));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let close_detail = {
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| detail.set(None))
    };

    // Distinct categories, sorted, for the filter selector.
    let categories: Vec<String> = (*posts)
        .as_ref()
        .map(|posts| {
            posts
                .iter()
                .map(|p| p.categoria.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
        .unwrap_or_default();

    let filtered: Vec<BlogPost> = (*posts)
        .as_ref()
        .map(|posts| {
            posts
                .iter()
                .filter(|p| *category == ALL_CATEGORIES || p.categoria == *category)
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    html! {
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{"Blog ASISVial"}</h1>
                <p>{"Consejos de manejo, mantenimiento y seguridad vial."}</p>
            </section>

            <section class="blog-contenido">
                {
                    if let Some(error_msg) = (*error).as_ref() {
                        html! { <p class="mensaje-error">{error_msg}</p> }
                    } else if let Some(posts) = (*posts).as_ref() {
                        if posts.is_empty() {
                            html! { <p class="mensaje-vacio">{"No hay publicaciones disponibles en este momento."}</p> }
                        } else {
                            html! {
                                <>
                                    <div class="filtro-barra">
                                        <label for="filtro-categoria">{"Categoría: "}</label>
                                        <select id="filtro-categoria" onchange={on_category_change}>
                                            <option value={ALL_CATEGORIES} selected={*category == ALL_CATEGORIES}>
                                                {"Todas"}
                                            </option>
                                            {
                                                categories.iter().map(|c| html! {
                                                    <option value={c.clone()} selected={*category == *c}>{c}</option>
                                                }).collect::<Html>()
                                            }
                                        </select>
                                    </div>
                                    {
                                        if filtered.is_empty() {
                                            html! {
                                                <p class="mensaje-vacio">
                                                    {"No se encontraron publicaciones que coincidan con el filtro."}
                                                </p>
                                            }
                                        } else {
                                            html! {
                                                <div class="blog-grid">
                                                    {
                                                        filtered.iter().map(|post| {
                                                            let detail = detail.clone();
                                                            let selected = post.clone();
                                                            let open = Callback::from(move |_: MouseEvent| {
                                                                detail.set(Some(selected.clone()));
                                                            });
                                                            html! {
                                                                <div class="blog-card" key={post.id}>
                                                                    <span class="blog-categoria">{ &post.categoria }</span>
                                                                    <h2>{ &post.titulo }</h2>
                                                                    <p>{ &post.resumen }</p>
                                                                    <span class="blog-fecha">{ format!("Publicado el {}", post.fecha) }</span>
                                                                    <button class="boton-secundario" onclick={open}>
                                                                        {"Leer artículo completo"}
                                                                    </button>
                                                                </div>
                                                            }
                                                        }).collect::<Html>()
                                                    }
                                                </div>
                                            }
                                        }
                                    }
                                </>
                            }
                        }
                    } else {
                        html! { <p class="mensaje-carga">{"Cargando publicaciones..."}</p> }
                    }
                }
            </section>

            {
                if let Some(post) = (*detail).as_ref() {
                    html! {
                        <div class="overlay-fondo">
                            <div class="overlay-articulo">
                                <div class="overlay-cabecera">
                                    <h2>{ &post.titulo }</h2>
                                    <button class="overlay-cerrar" onclick={close_detail.clone()}>{"✕"}</button>
                                </div>
                                <p class="blog-meta">
                                    <span class="blog-categoria">{ &post.categoria }</span>
                                    {" · "}{ &post.fecha }
                                </p>
                                {
                                    post.contenido_completo
                                        .split('\n')
                                        .filter(|p| !p.trim().is_empty())
                                        .map(|p| html! { <p class="articulo-parrafo">{p}</p> })
                                        .collect::<Html>()
                                }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .blog-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .blog-hero {
                    text-align: center;
                    padding: 4rem 2rem;
                }
                .blog-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-hero p {
                    color: #999;
                }
                .blog-contenido {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .filtro-barra {
                    margin-bottom: 2rem;
                }
                .filtro-barra label {
                    color: #ccc;
                    margin-right: 0.5rem;
                }
                .filtro-barra select {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                    color: white;
                }
                .blog-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .blog-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    transition: all 0.3s ease;
                }
                .blog-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .blog-categoria {
                    display: inline-block;
                    align-self: flex-start;
                    background: rgba(255, 215, 0, 0.15);
                    color: #FFD700;
                    font-size: 0.8rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 8px;
                    margin-bottom: 0.8rem;
                }
                .blog-card h2 {
                    font-size: 1.3rem;
                    margin-bottom: 0.8rem;
                }
                .blog-card p {
                    color: #999;
                    flex-grow: 1;
                }
                .blog-fecha {
                    color: #666;
                    font-size: 0.85rem;
                    margin: 0.8rem 0;
                }
                .overlay-fondo {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 100;
                    padding: 1rem;
                }
                .overlay-articulo {
                    background: #1e1e1e;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 640px;
                    width: 100%;
                    max-height: 80vh;
                    overflow-y: auto;
                }
                .overlay-cabecera {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .overlay-cerrar {
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .blog-meta {
                    color: #666;
                    margin: 0.5rem 0 1.5rem;
                }
                .articulo-parrafo {
                    color: #ccc;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .mensaje-error {
                    color: #ff4444;
                    text-align: center;
                }
                .mensaje-vacio, .mensaje-carga {
                    color: #999;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .blog-hero {
                        padding: 3rem 1rem;
                    }
                    .blog-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
