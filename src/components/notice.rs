use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: String,
    pub on_dismiss: Callback<()>,
    /// Cosmetic auto-hide; 0 keeps the notice until dismissed.
    #[prop_or(4000)]
    pub hide_after_ms: u32,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let delay = props.hide_after_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = if delay > 0 {
                    Some(Timeout::new(delay, move || on_dismiss.emit(())))
                } else {
                    None
                };
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let class = match props.kind {
        NoticeKind::Success => "aviso aviso-exito",
        NoticeKind::Error => "aviso aviso-error",
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div {class}>
            <span>{ &props.message }</span>
            <button class="aviso-cerrar" onclick={dismiss}>{"✕"}</button>
            <style>
                {r#"
                .aviso {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.8rem 1.2rem;
                    border-radius: 8px;
                    margin: 1rem 0;
                    font-size: 0.95rem;
                }
                .aviso-exito {
                    color: #00e676;
                    background: rgba(0, 230, 118, 0.1);
                    border: 1px solid rgba(0, 230, 118, 0.3);
                }
                .aviso-error {
                    color: #ff4444;
                    background: rgba(255, 68, 68, 0.1);
                    border: 1px solid rgba(255, 68, 68, 0.3);
                }
                .aviso-cerrar {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    font-size: 1rem;
                    padding: 0;
                }
                "#}
            </style>
        </div>
    }
}
