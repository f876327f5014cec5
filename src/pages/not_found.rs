use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
      <div class="wrap center">
        <h1>{ "Page not found" }</h1>
        <Link<Route> to={Route::Landing} classes="cta emerald">{ "Back to Home" }</Link<Route>>
      </div>
    }
}
