use std::rc::Rc;

use gloo::console::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthService;
use crate::components::{PortalHeader, StatGrid, SummaryPanel};
use crate::config::AppConfig;
use crate::mock::MockData;
use crate::model::Accent;
use crate::nav::{NavAction, Screen};
use crate::route::go;

/// Builds the logout handler shared by both dashboards.
pub(crate) fn logout_callback(
    from: Screen,
    navigator: Option<Navigator>,
    auth: AuthService,
) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        let Some(nav) = navigator.as_ref() else { return; };
        match from.apply(NavAction::Logout, &*auth) {
            Ok(next) => {
                info!(format!("logout from {:?}", from));
                go(nav, next);
            }
            Err(e) => error!(e.to_string()),
        }
    })
}

#[function_component(DonorDashboard)]
pub fn donor_dashboard() -> Html {
    let cfg = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let data = use_context::<Rc<MockData>>().unwrap_or_default();
    let auth = use_context::<AuthService>().unwrap_or_default();
    let navigator = use_navigator();
    let on_logout = logout_callback(Screen::DonorDashboard, navigator, auth);
    let donor = &data.donor;

    html! {
      <div class="dashboard">
        <PortalHeader brand={cfg.brand_name.clone()} portal="Donor Portal" accent={Accent::Orange} {on_logout} />

        <main class="wrap">
          <h1>{ format!("Welcome back, {}!", donor.display_name) }</h1>
          <p class="sub">{ "Track your donations and see the impact you're making in the community." }</p>

          <StatGrid stats={donor.stats.clone()} />

          <div class="grid-main">
            <div class="card">
              <div class="cardHead">
                <h2>{ "Recent Donations" }</h2>
                <button class="cta emerald">{ "+ New Donation" }</button>
              </div>
              { for donor.donations.iter().map(|d| html! {
                  <div class="list-row" key={d.id}>
                    <div class="row">
                      <span class="glyph">{ d.status.glyph() }</span>
                      <div>
                        <h3>{ d.food.clone() }</h3>
                        <div class="small">{ format!("{} • {}", d.quantity, d.date) }</div>
                      </div>
                    </div>
                    <div class="right">
                      <span class={d.status.badge_class()}>{ d.status.label() }</span>
                      <div class="small">{ d.recipient.clone() }</div>
                    </div>
                  </div>
              }) }
            </div>

            <aside class="side">
              <div class="card">
                <h3>{ "Quick Actions" }</h3>
                <button class="action emerald">{ "+ Add New Donation" }</button>
                <button class="action orange">{ "⌖ Find Pickup Locations" }</button>
                <button class="action blue">{ "View Impact Report" }</button>
              </div>
              <SummaryPanel
                title="Your Impact This Month"
                rows={donor.monthly_impact.clone()}
                footnote={Some(AttrValue::from(donor.highlight.clone()))} />
            </aside>
          </div>
        </main>
      </div>
    }
}
