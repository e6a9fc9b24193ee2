use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod forms;
mod checkout {
    pub mod captcha;
    pub mod payment;
    pub mod query;
    pub mod quote;
}
mod components {
    pub mod counter;
    pub mod notice;
}
mod pages {
    pub mod acerca;
    pub mod blog;
    pub mod confirmacion;
    pub mod contacto;
    pub mod inicio;
    pub mod pago;
    pub mod planes;
}

use pages::{
    acerca::AcercaDe, blog::Blog, confirmacion::Confirmacion, contacto::Contacto, inicio::Inicio,
    pago::Pago, planes::Planes,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Inicio,
    #[at("/planes")]
    Planes,
    #[at("/pago")]
    Pago,
    #[at("/confirmacion")]
    Confirmacion,
    #[at("/contacto")]
    Contacto,
    #[at("/blog")]
    Blog,
    #[at("/acerca-de")]
    AcercaDe,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Inicio => {
            info!("Rendering Inicio page");
            html! { <Inicio /> }
        }
        Route::Planes => {
            info!("Rendering Planes page");
            html! { <Planes /> }
        }
        Route::Pago => {
            info!("Rendering Pago page");
            html! { <Pago /> }
        }
        Route::Confirmacion => {
            info!("Rendering Confirmacion page");
            html! { <Confirmacion /> }
        }
        Route::Contacto => {
            info!("Rendering Contacto page");
            html! { <Contacto /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::AcercaDe => {
            info!("Rendering AcercaDe page");
            html! { <AcercaDe /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Inicio} classes="nav-logo">
                    {"ASISVial"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Planes} classes="nav-link">
                            {"Planes"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::AcercaDe} classes="nav-link">
                            {"Acerca de"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contacto} classes="nav-link">
                            {"Contacto"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <footer class="site-footer">
                <p>{"© 2026 ASISVial — sitio de demostración; los pagos son simulados."}</p>
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
