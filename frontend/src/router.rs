use crate::extractor::page::ExtractorPage;
use crate::extractor::variant::ViewVariant;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Basic,
    #[at("/tabbed")]
    Tabbed,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Basic => html! { <ExtractorPage variant={ViewVariant::Basic} /> },
        Route::Tabbed => html! { <ExtractorPage variant={ViewVariant::Tabbed} /> },
        Route::Dashboard => html! { <ExtractorPage variant={ViewVariant::Dashboard} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Basic} classes="text-blue-600 hover:underline">
                        {"Go back to the extractor"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
