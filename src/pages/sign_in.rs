use std::rc::Rc;

use gloo::console::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthService;
use crate::components::Brand;
use crate::config::AppConfig;
use crate::error::NavError;
use crate::model::{AuthFormState, AuthMode, FormField, NavigationIntent};
use crate::nav::{NavAction, Screen};
use crate::route::{go, Route};

fn side_copy(role: NavigationIntent) -> (&'static str, &'static str) {
    match role {
        NavigationIntent::Donate => (
            "Share Your Surplus",
            "Turn your extra food into smiles and make a meaningful impact in your community.",
        ),
        NavigationIntent::Request => (
            "Get the Help You Need",
            "Access fresh, nutritious food from local donors and build a stronger community together.",
        ),
    }
}

/// Form state for a new mount of the view.
/// Entered directly (no carried state) -> Donate.
fn initial_form(carried: Option<Rc<NavigationIntent>>) -> AuthFormState {
    AuthFormState::new(carried.map(|intent| *intent).unwrap_or_default())
}

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let cfg = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let auth = use_context::<AuthService>().unwrap_or_default();
    let navigator = use_navigator();

    let carried = use_location().and_then(|loc| loc.state::<NavigationIntent>());
    let form = use_state(|| initial_form(carried));
    let mode = use_state_eq(AuthMode::default);
    let show_password = use_state_eq(|| false);
    let notice = use_state(|| None::<String>);

    let on_input = |field: FormField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let set_role = |role: NavigationIntent| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.role = role;
            form.set(next);
        })
    };

    let finish = {
        let navigator = navigator.clone();
        let notice = notice.clone();
        move |result: Result<Screen, NavError>| match result {
            Ok(next) => {
                info!(format!("sign-in: routing to {:?}", next));
                if let Some(nav) = navigator.as_ref() {
                    go(nav, next);
                }
            }
            Err(e) => {
                warn!(format!("sign-in: {e}"));
                notice.set(Some(e.to_string()));
            }
        }
    };

    let on_submit = {
        let form = form.clone();
        let mode = mode.clone();
        let auth = auth.clone();
        let finish = finish.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let action = NavAction::Submit {
                form: &*form,
                mode: *mode,
            };
            finish(Screen::Auth(form.role).apply(action, &*auth));
        })
    };

    let on_provider = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let action = NavAction::ContinueWithProvider(form.role);
            finish(Screen::Auth(form.role).apply(action, &*auth));
        })
    };

    let on_toggle_mode = {
        let mode = mode.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            notice.set(None);
            mode.set(mode.toggled());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Landing);
            }
        })
    };

    let signing_up = *mode == AuthMode::SignUp;
    let role = form.role;
    let (side_title, side_text) = side_copy(role);
    let role_btn = |r: NavigationIntent, accent: &'static str| {
        html! {
          <button type="button"
                  class={classes!("seg", (role == r).then_some(accent))}
                  onclick={set_role(r)}>
            { r.label() }
          </button>
        }
    };

    html! {
      <div class="auth-wrap">
        <div class="auth-side">
          <img src="https://images.pexels.com/photos/6995471/pexels-photo-6995471.jpeg" alt="Community sharing food" />
          <h2>{ side_title }</h2>
          <p>{ side_text }</p>
        </div>

        <div class="card auth-card">
          <button class="ghost" onclick={on_back}>{ "← Back to Home" }</button>
          <Brand name={cfg.brand_name.clone()} class="center" />
          <h1>{ if signing_up { "Create Account" } else { "Welcome Back" } }</h1>
          <p class="sub">{ if signing_up { "Join our community today" } else { "Sign in to your account" } }</p>

          <div class="segmented">
            { role_btn(NavigationIntent::Donate, "orange") }
            { role_btn(NavigationIntent::Request, "emerald") }
          </div>

          <form onsubmit={on_submit}>
            if signing_up {
              <label>{ FormField::Name.to_string() }
                <input type="text" name="name" required=true placeholder="Enter your full name"
                       value={form.name.clone()} oninput={on_input(FormField::Name)} />
              </label>
            }
            <label>{ FormField::Email.to_string() }
              <input type="email" name="email" required=true placeholder="Enter your email"
                     value={form.email.clone()} oninput={on_input(FormField::Email)} />
            </label>
            <label>{ FormField::Password.to_string() }
              <div class="row">
                <input type={if *show_password { "text" } else { "password" }} name="password"
                       required=true placeholder="Enter your password"
                       value={form.password.clone()} oninput={on_input(FormField::Password)} />
                <button type="button" class="icon-btn" onclick={on_toggle_password}>
                  { if *show_password { "Hide" } else { "Show" } }
                </button>
              </div>
            </label>
            if signing_up {
              <label>{ FormField::ConfirmPassword.to_string() }
                <input type="password" name="confirmPassword" required=true placeholder="Confirm your password"
                       value={form.confirm_password.clone()} oninput={on_input(FormField::ConfirmPassword)} />
              </label>
            }

            if let Some(msg) = (*notice).clone() {
              <div class="small notice">{ msg }</div>
            }

            <button type="submit" class={classes!("cta", "wide", if role == NavigationIntent::Donate { "orange" } else { "emerald" })}>
              { if signing_up { "Create Account" } else { "Sign In" } }
            </button>
          </form>

          <div class="divider"><span>{ "Or" }</span></div>
          <button class="ghost wide" onclick={on_provider}>{ "Continue with Google" }</button>

          <p class="center">
            { if signing_up { "Already have an account?" } else { "Don't have an account?" } }
            <button class="link" onclick={on_toggle_mode}>{ if signing_up { "Sign In" } else { "Sign Up" } }</button>
          </p>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, NavigationIntent::Donate)]
    #[case(Some(NavigationIntent::Donate), NavigationIntent::Donate)]
    #[case(Some(NavigationIntent::Request), NavigationIntent::Request)]
    fn each_visit_starts_blank_with_carried_role(
        #[case] carried: Option<NavigationIntent>,
        #[case] expected: NavigationIntent,
    ) {
        let form = initial_form(carried.map(Rc::new));
        assert_eq!(form.role, expected);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
    }
}
