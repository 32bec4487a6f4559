pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::config::ClientConfig;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let config = ClientConfig::from_env();
        tracing::info!(api_base_url = %config.api_base_url, "Starting settings client");
        config
    });

    html! {
        <ContextProvider<ClientConfig> context={(*config).clone()}>
            <BrowserRouter>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<ClientConfig>>
    }
}
