use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod motion;
mod scramble;
mod theme;
mod viewport {
    pub mod dom;
    pub mod watcher;
}
mod components {
    pub mod background;
    pub mod experience_timeline;
    pub mod navbar;
    pub mod project_card;
    pub mod reveal;
    pub mod stacked_cards;
    pub mod text_reveal;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::background::BackgroundPattern;
use components::navbar::Nav;
use content::SiteContent;
use pages::{home::Home, not_found::NotFound};
use theme::ThemeProvider;
use viewport::dom::ViewportProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_state(|| {
        SiteContent::embedded()
            .map(Rc::new)
            .map_err(|e| {
                error!("Failed to load site content: {}", e);
                e.to_string()
            })
    });

    match &*content {
        Ok(content) => html! {
            <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                <ThemeProvider>
                    <ViewportProvider>
                        <BrowserRouter>
                            <Nav initials={content.owner.initials.clone()} />
                            <BackgroundPattern />
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    </ViewportProvider>
                </ThemeProvider>
            </ContextProvider<Rc<SiteContent>>>
        },
        Err(reason) => html! {
            <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; font-family: sans-serif; color: #999;">
                <p>{ format!("This page could not be loaded ({}).", reason) }</p>
            </div>
        },
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
