// Landing page, mock sign-in and the two dashboards. All data is baked in;
// nothing talks to a server.

mod auth;
mod carousel;
mod components;
mod config;
mod counter;
mod error;
mod expiry;
mod format;
mod hooks;
mod mock;
mod model;
mod nav;
mod pages;
mod route;

use std::rc::Rc;

use gloo::console::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthService;
use crate::config::{load_config, AppConfig};
use crate::mock::{load_mock_data, MockData};
use crate::route::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let data = use_memo((), |_| load_mock_data());
    let auth = use_memo((), |_| AuthService::default());

    html! {
      <ContextProvider<Rc<AppConfig>> context={config}>
        <ContextProvider<Rc<MockData>> context={data}>
          <ContextProvider<AuthService> context={(*auth).clone()}>
            <BrowserRouter>
              <Switch<Route> render={switch} />
            </BrowserRouter>
          </ContextProvider<AuthService>>
        </ContextProvider<Rc<MockData>>>
      </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    info!("surplus_share: starting");
    yew::Renderer::<App>::new().render();
}
