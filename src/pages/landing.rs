use std::rc::Rc;

use gloo::console::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthService;
use crate::carousel::Carousel;
use crate::components::Brand;
use crate::config::AppConfig;
use crate::format::group_thousands;
use crate::hooks::use_animated_counter;
use crate::mock::MockData;
use crate::model::NavigationIntent;
use crate::nav::{NavAction, Screen};
use crate::route::go;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let cfg = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let data = use_context::<Rc<MockData>>().unwrap_or_default();
    let auth = use_context::<AuthService>().unwrap_or_default();
    let navigator = use_navigator();

    let tick = cfg.counter_tick_ms;
    let steps = cfg.counter_steps;
    let daily_meals = use_animated_counter(cfg.daily_meals_target, tick, steps);
    let monthly_meals = use_animated_counter(cfg.monthly_meals_target, tick, steps);
    let people_helped = use_animated_counter(cfg.people_helped_target, tick, steps);

    let carousel = use_state(|| Carousel::new(data.testimonials.len()).ok());

    let on_cta = {
        let auth = auth.clone();
        move |intent: NavigationIntent| {
            let navigator = navigator.clone();
            let auth = auth.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(nav) = navigator.as_ref() else { return; };
                match Screen::Landing.apply(NavAction::ChooseRole(intent), &*auth) {
                    Ok(next) => {
                        info!(format!("landing: continuing as {:?}", intent));
                        go(nav, next);
                    }
                    Err(e) => error!(e.to_string()),
                }
            })
        }
    };

    let step_carousel = |forward: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mut c) = *carousel {
                if forward { c.next() } else { c.prev() }
                carousel.set(Some(c));
            }
        })
    };

    let on_dot = |i: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut c) = *carousel else { return; };
            match c.jump_to(i) {
                Ok(()) => carousel.set(Some(c)),
                Err(e) => error!(e.to_string()),
            }
        })
    };

    let current = (*carousel).and_then(|c| data.testimonials.get(c.index()).map(|s| (c, s)));
    let stories = match current {
        Some((c, story)) => {
            html! {
              <div class="carousel">
                <div class="card story">
                  <img src={story.image.clone()} alt={story.name.clone()} />
                  <div class="story-body">
                    <h3>{ story.name.clone() }</h3>
                    <p class="quote">{ format!("\"{}\"", story.story) }</p>
                    <span class="accent-orange">{ "🏅 Community Partner" }</span>
                  </div>
                </div>
                <button class="nav-btn prev" onclick={step_carousel(false)}>{ "‹" }</button>
                <button class="nav-btn next" onclick={step_carousel(true)}>{ "›" }</button>
                <div class="dots">
                  { for c.dots().enumerate().map(|(i, active)| html! {
                      <button class={classes!("dot-btn", active.then_some("active"))} onclick={on_dot(i)}></button>
                  }) }
                </div>
              </div>
            }
        }
        None => html! {},
    };

    html! {
      <div class="landing">
        <header class="site-header">
          <Brand name={cfg.brand_name.clone()} />
          <nav class="row">
            <a href="#home">{ "Home" }</a>
            <a href="#how-it-works">{ "How It Works" }</a>
            <a href="#volunteers">{ "Partner" }</a>
            <a href="#contact">{ "Contact" }</a>
          </nav>
        </header>

        <section id="home" class="hero">
          <h1>{ "Turning Surplus into " }<span class="accent-orange">{ "Smiles" }</span></h1>
          <p>{ "Connect food donors with those in need. Reduce waste, fight hunger, and build stronger communities together." }</p>
          <div class="btnRow">
            <button class="cta orange" onclick={on_cta(NavigationIntent::Donate)}>{ "♥ Donate Now" }</button>
            <button class="cta emerald" onclick={on_cta(NavigationIntent::Request)}>{ "Request Food" }</button>
          </div>
        </section>

        <section id="how-it-works" class="section">
          <h2>{ "How It Works" }</h2>
          <p class="sub">{ "Three simple steps to make a difference in your community" }</p>
          <div class="grid3">
            { for data.steps.iter().map(|s| html! {
                <div class="card step">
                  <div class="small">{ format!("STEP {}", s.step) }</div>
                  <h3>{ s.title.clone() }</h3>
                  <p>{ s.description.clone() }</p>
                </div>
            }) }
          </div>
        </section>

        <section class="section impact">
          <h2>{ "Our Impact" }</h2>
          <p class="sub">{ "Making a difference, one meal at a time" }</p>
          <div class="grid3">
            <div class="counter">
              <div class="big">{ group_thousands(daily_meals) }</div>
              <div class="label">{ "Meals Distributed Today" }</div>
            </div>
            <div class="counter">
              <div class="big">{ group_thousands(monthly_meals) }</div>
              <div class="label">{ "Meals This Month" }</div>
            </div>
            <div class="counter">
              <div class="big">{ group_thousands(people_helped) }</div>
              <div class="label">{ "People Helped" }</div>
            </div>
          </div>
        </section>

        <section class="section muted">
          <h2>{ "Success Stories" }</h2>
          <p class="sub">{ "Real impact from our community partners" }</p>
          { stories }
        </section>

        <section id="volunteers" class="section">
          <h2>{ "Get Involved" }</h2>
          <p class="sub">{ "Join our mission to eliminate food waste and hunger in our communities" }</p>
          <div class="card partner">
            <h3>{ "Partner With Us" }</h3>
            <p>{ "Businesses, organizations, and community groups can join our network to maximize impact." }</p>
            <ul>
              { for data.partner_perks.iter().map(|p| html! { <li>{ p.clone() }</li> }) }
            </ul>
            <button class="cta orange">{ "Become a Partner" }</button>
          </div>
        </section>

        <footer id="contact" class="site-footer">
          <div class="grid3">
            <div>
              <Brand name={cfg.brand_name.clone()} />
              <p class="small">{ "Connecting communities to reduce food waste and fight hunger. Together, we're making a difference." }</p>
            </div>
            <div>
              <h4>{ "Contact Info" }</h4>
              <div class="small">{ "✉ team@smartsurplus.org" }</div>
              <div class="small">{ "☎ +919474365678" }</div>
              <div class="small">{ "⌖ West Chowbaga Road, Mundapra, Kolkata, West Bengal 700107" }</div>
            </div>
            <div>
              <h4>{ "Quick Links" }</h4>
              <div><a href="#how-it-works">{ "How It Works" }</a></div>
              <div><a href="#volunteers">{ "Partner" }</a></div>
              <div><a href="#contact">{ "Contact" }</a></div>
            </div>
          </div>
          <hr />
          <p class="small center">
            { format!("© {} {}. All rights reserved. Building a world without food waste.", current_year(), cfg.brand_name) }
          </p>
        </footer>
      </div>
    }
}
