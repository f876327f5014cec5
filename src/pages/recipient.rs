use std::rc::Rc;

use gloo::console::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::donor::logout_callback;
use crate::auth::AuthService;
use crate::components::{PortalHeader, StatGrid, SummaryPanel};
use crate::config::AppConfig;
use crate::expiry::{classify_expiry, ExpirySeverity};
use crate::mock::MockData;
use crate::model::{Accent, DashboardTab, FoodOffer, RequestRecord, TabSelector};
use crate::nav::Screen;

fn expiry_class(expires_in: &str) -> &'static str {
    classify_expiry(expires_in)
        .unwrap_or_else(|e| {
            warn!(format!("offer expiry: {e}"));
            ExpirySeverity::Fine
        })
        .accent_class()
}

fn offer_card(offer: &FoodOffer) -> Html {
    html! {
      <div class="card offer" key={offer.id}>
        <img src={offer.image.clone()} alt={offer.title.clone()} />
        <div class="offer-body">
          <div class="cardHead">
            <h3>{ offer.title.clone() }</h3>
            <span class="pill accent-emerald">{ offer.category.clone() }</span>
          </div>
          <div class="small">{ format!("👥 {}", offer.donor) }</div>
          <div class="small">{ format!("⌖ {} away", offer.distance) }</div>
          <div class="small">{ format!("📦 {}", offer.quantity) }</div>
          <div class={classes!("small", expiry_class(&offer.expires_in))}>
            { format!("⏱ Expires in {}", offer.expires_in) }
          </div>
          <button class="cta emerald wide">{ "Request This Food" }</button>
        </div>
      </div>
    }
}

fn request_row(req: &RequestRecord) -> Html {
    html! {
      <div class="list-row" key={req.id}>
        <div class="row">
          <span class="glyph">{ req.status.glyph() }</span>
          <div>
            <h3>{ req.food.clone() }</h3>
            <div class="small">{ format!("Pickup: {}", req.pickup) }</div>
            <div class="small">{ format!("From: {}", req.donor) }</div>
          </div>
        </div>
        <div class="right">
          <span class={req.status.badge_class()}>{ req.status.label() }</span>
          if req.status.offers_directions() {
            <div><button class="link">{ "🚚 Get Directions" }</button></div>
          }
        </div>
      </div>
    }
}

#[function_component(RecipientDashboard)]
pub fn recipient_dashboard() -> Html {
    let cfg = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let data = use_context::<Rc<MockData>>().unwrap_or_default();
    let auth = use_context::<AuthService>().unwrap_or_default();
    let navigator = use_navigator();
    let on_logout = logout_callback(Screen::RecipientDashboard, navigator, auth);
    let recipient = &data.recipient;

    let tabs = use_state_eq(TabSelector::default);
    // Search text is kept but not applied to the list.
    let search = use_state(String::new);
    let radius = use_state(|| 0usize);
    let categories = use_state(|| recipient.categories.clone());

    let on_tab = |tab: DashboardTab| {
        let tabs = tabs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tabs;
            if next.select(tab) {
                tabs.set(next);
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_radius = {
        let radius = radius.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            if let Ok(i) = sel.value().parse::<usize>() {
                radius.set(i);
            }
        })
    };

    let on_category = |i: usize| {
        let categories = categories.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let mut next = (*categories).clone();
            if let Some(c) = next.get_mut(i) {
                c.checked = input.checked();
            }
            categories.set(next);
        })
    };

    let active = tabs.active();
    let body = match active {
        DashboardTab::Available => html! {
          <div class="grid-main">
            <div class="card">
              <div class="cardHead">
                <h2>{ "Available Food Near You" }</h2>
                <input type="text" class="search" placeholder="Search food items..."
                       value={(*search).clone()} oninput={on_search} />
              </div>
              <div class="grid2">
                { for recipient.offers.iter().map(offer_card) }
              </div>
            </div>

            <aside class="side">
              <div class="card">
                <h3>{ "Your Preferences" }</h3>
                <label class="small">{ "Search Radius" }
                  <select onchange={on_radius}>
                    { for recipient.radius_options.iter().enumerate().map(|(i, label)| html! {
                        <option value={i.to_string()} selected={i == *radius}>{ label.clone() }</option>
                    }) }
                  </select>
                </label>
                <div class="small">{ "Food Categories" }</div>
                { for categories.iter().enumerate().map(|(i, c)| html! {
                    <label class="check">
                      <input type="checkbox" checked={c.checked} onchange={on_category(i)} />
                      <span>{ c.name.clone() }</span>
                    </label>
                }) }
              </div>
              <SummaryPanel title="This Week" rows={recipient.weekly_summary.clone()} />
            </aside>
          </div>
        },
        DashboardTab::Requests => html! {
          <div class="card">
            <div class="cardHead">
              <div>
                <h2>{ "My Food Requests" }</h2>
                <p class="sub">{ "Track the status of your food requests" }</p>
              </div>
            </div>
            { for recipient.requests.iter().map(request_row) }
          </div>
        },
    };

    html! {
      <div class="dashboard">
        <PortalHeader brand={cfg.brand_name.clone()} portal="Recipient Portal" accent={Accent::Emerald} {on_logout} />

        <main class="wrap">
          <h1>{ format!("Hello, {}!", recipient.display_name) }</h1>
          <p class="sub">{ "Find fresh food donations near you and track your requests." }</p>

          <StatGrid stats={recipient.stats.clone()} />

          <nav class="tabs">
            { for DashboardTab::ALL.iter().map(|&t| html! {
                <button class={classes!("tab", (t == active).then_some("active"))} onclick={on_tab(t)}>
                  { t.label() }
                </button>
            }) }
          </nav>

          { body }
        </main>
      </div>
    }
}
