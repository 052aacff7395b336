mod browser;
mod env_variable_utils;
mod extractor;
mod logging;
mod models;
mod router;
mod storage;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logging::init(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*BACKEND_URL,
        is_debug_mode()
    );
}
