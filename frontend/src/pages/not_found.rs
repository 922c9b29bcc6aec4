use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        color: var(--text);
                    }
                    .not-found h1 {
                        font-size: 6rem;
                        margin: 0;
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .not-found p { color: var(--muted); }
                    .not-found a {
                        padding: 0.75rem 1.75rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--surface);
                        color: var(--text);
                        text-decoration: none;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </div>
    }
}
