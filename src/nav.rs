//! Screen-to-screen transitions.
//!
//! Each view knows which [`Screen`] it renders and asks [`Screen::apply`] where an
//! action leads. The router then pushes the matching [`crate::route::Route`].

use crate::auth::{AuthOutcome, Authenticator};
use crate::error::{NavError, SubmitError};
use crate::model::{AuthFormState, AuthMode, NavigationIntent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Auth(NavigationIntent),
    DonorDashboard,
    RecipientDashboard,
}

#[derive(Debug, Clone, Copy)]
pub enum NavAction<'a> {
    ChooseRole(NavigationIntent),
    Submit {
        form: &'a AuthFormState,
        mode: AuthMode,
    },
    ContinueWithProvider(NavigationIntent),
    Logout,
}

impl NavAction<'_> {
    fn name(&self) -> &'static str {
        match self {
            NavAction::ChooseRole(_) => "choose a role",
            NavAction::Submit { .. } => "submit",
            NavAction::ContinueWithProvider(_) => "continue with provider",
            NavAction::Logout => "log out",
        }
    }
}

impl Screen {
    pub fn dashboard_for(role: NavigationIntent) -> Self {
        match role {
            NavigationIntent::Donate => Screen::DonorDashboard,
            NavigationIntent::Request => Screen::RecipientDashboard,
        }
    }

    pub fn apply(&self, action: NavAction<'_>, auth: &dyn Authenticator) -> Result<Screen, NavError> {
        match (*self, action) {
            (Screen::Landing, NavAction::ChooseRole(intent)) => Ok(Screen::Auth(intent)),
            (Screen::Auth(_), NavAction::Submit { form, mode }) => {
                form.check_required(mode)?;
                let outcome = match mode {
                    AuthMode::SignIn => auth.sign_in(&form.email, &form.password, form.role),
                    AuthMode::SignUp => auth.sign_up(form),
                };
                settle(outcome)
            }
            (Screen::Auth(_), NavAction::ContinueWithProvider(role)) => {
                settle(auth.sign_in_with_provider(role))
            }
            (Screen::DonorDashboard | Screen::RecipientDashboard, NavAction::Logout) => {
                Ok(Screen::Landing)
            }
            (from, action) => Err(NavError::InvalidTransition {
                from,
                action: action.name(),
            }),
        }
    }
}

fn settle(outcome: AuthOutcome) -> Result<Screen, NavError> {
    match outcome {
        AuthOutcome::Success(user) => Ok(Screen::dashboard_for(user.role)),
        AuthOutcome::Failure(reason) => Err(SubmitError::Rejected(reason).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthUser, MockAuthenticator};
    use crate::model::FormField;
    use rstest::rstest;

    struct Refuser;

    impl Authenticator for Refuser {
        fn sign_in(&self, _: &str, _: &str, _: NavigationIntent) -> AuthOutcome {
            AuthOutcome::Failure("bad credentials".into())
        }
        fn sign_up(&self, form: &AuthFormState) -> AuthOutcome {
            AuthOutcome::Success(AuthUser {
                name: form.name.clone(),
                email: form.email.clone(),
                role: form.role,
            })
        }
        fn sign_in_with_provider(&self, _: NavigationIntent) -> AuthOutcome {
            AuthOutcome::Failure("provider offline".into())
        }
    }

    fn filled(role: NavigationIntent, email: &str, password: &str) -> AuthFormState {
        let mut form = AuthFormState::new(role);
        form.set(FormField::Email, email.into());
        form.set(FormField::Password, password.into());
        form
    }

    #[rstest]
    #[case(NavigationIntent::Donate)]
    #[case(NavigationIntent::Request)]
    fn choosing_a_role_carries_it_to_auth(#[case] intent: NavigationIntent) {
        let next = Screen::Landing
            .apply(NavAction::ChooseRole(intent), &MockAuthenticator)
            .unwrap();
        assert_eq!(next, Screen::Auth(intent));
    }

    #[rstest]
    #[case(NavigationIntent::Donate, "a@b.c", "hunter2", Screen::DonorDashboard)]
    #[case(NavigationIntent::Donate, "x", "🙂", Screen::DonorDashboard)]
    #[case(NavigationIntent::Request, "a@b.c", "hunter2", Screen::RecipientDashboard)]
    #[case(NavigationIntent::Request, "not an email", "'; DROP TABLE", Screen::RecipientDashboard)]
    fn submit_routes_by_role_only(
        #[case] role: NavigationIntent,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: Screen,
    ) {
        let form = filled(role, email, password);
        let next = Screen::Auth(NavigationIntent::Donate)
            .apply(
                NavAction::Submit {
                    form: &form,
                    mode: AuthMode::SignIn,
                },
                &MockAuthenticator,
            )
            .unwrap();
        assert_eq!(next, expected);
    }

    #[rstest]
    fn role_toggled_in_form_wins_over_carried_intent() {
        let form = filled(NavigationIntent::Request, "a@b.c", "pw");
        let next = Screen::Auth(NavigationIntent::Donate)
            .apply(
                NavAction::Submit {
                    form: &form,
                    mode: AuthMode::SignIn,
                },
                &MockAuthenticator,
            )
            .unwrap();
        assert_eq!(next, Screen::RecipientDashboard);
    }

    #[rstest]
    fn missing_field_blocks_submission() {
        let form = filled(NavigationIntent::Donate, "a@b.c", "");
        let err = Screen::Auth(NavigationIntent::Donate)
            .apply(
                NavAction::Submit {
                    form: &form,
                    mode: AuthMode::SignIn,
                },
                &MockAuthenticator,
            )
            .unwrap_err();
        assert_eq!(err, NavError::Submit(SubmitError::MissingField(FormField::Password)));
    }

    #[rstest]
    fn failure_outcome_does_not_route() {
        let form = filled(NavigationIntent::Donate, "a@b.c", "pw");
        let err = Screen::Auth(NavigationIntent::Donate)
            .apply(
                NavAction::Submit {
                    form: &form,
                    mode: AuthMode::SignIn,
                },
                &Refuser,
            )
            .unwrap_err();
        assert_eq!(
            err,
            NavError::Submit(SubmitError::Rejected("bad credentials".into()))
        );
    }

    #[rstest]
    fn provider_sign_in_routes_by_role() {
        let next = Screen::Auth(NavigationIntent::Donate)
            .apply(
                NavAction::ContinueWithProvider(NavigationIntent::Request),
                &MockAuthenticator,
            )
            .unwrap();
        assert_eq!(next, Screen::RecipientDashboard);
        assert!(Screen::Auth(NavigationIntent::Donate)
            .apply(NavAction::ContinueWithProvider(NavigationIntent::Donate), &Refuser)
            .is_err());
    }

    #[rstest]
    #[case(Screen::DonorDashboard)]
    #[case(Screen::RecipientDashboard)]
    fn logout_returns_to_landing(#[case] from: Screen) {
        let landing = from.apply(NavAction::Logout, &MockAuthenticator).unwrap();
        assert_eq!(landing, Screen::Landing);
    }

    #[rstest]
    #[case(Screen::Landing, NavAction::Logout)]
    #[case(Screen::DonorDashboard, NavAction::ChooseRole(NavigationIntent::Request))]
    #[case(Screen::Auth(NavigationIntent::Donate), NavAction::Logout)]
    fn unrelated_actions_are_rejected(#[case] from: Screen, #[case] action: NavAction<'static>) {
        let err = from.apply(action, &MockAuthenticator).unwrap_err();
        assert!(matches!(err, NavError::InvalidTransition { from: f, .. } if f == from));
    }
}
