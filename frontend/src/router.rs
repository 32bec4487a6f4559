use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{not_found::NotFound, settings::SettingsPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
