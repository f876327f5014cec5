use std::ops::Deref;
use std::rc::Rc;

use crate::model::{AuthFormState, NavigationIntent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    #[allow(dead_code)]
    pub name: String,
    #[allow(dead_code)]
    pub email: String,
    pub role: NavigationIntent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(AuthUser),
    #[allow(dead_code)]
    Failure(String),
}

/// Credential check consumed by the sign-in view.
pub trait Authenticator {
    fn sign_in(&self, email: &str, password: &str, role: NavigationIntent) -> AuthOutcome;
    fn sign_up(&self, form: &AuthFormState) -> AuthOutcome;
    fn sign_in_with_provider(&self, role: NavigationIntent) -> AuthOutcome;
}

/// Accepts everything. There is no backend behind this front-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn sign_in(&self, email: &str, _password: &str, role: NavigationIntent) -> AuthOutcome {
        AuthOutcome::Success(AuthUser {
            name: String::new(),
            email: email.to_string(),
            role,
        })
    }

    fn sign_up(&self, form: &AuthFormState) -> AuthOutcome {
        AuthOutcome::Success(AuthUser {
            name: form.name.clone(),
            email: form.email.clone(),
            role: form.role,
        })
    }

    fn sign_in_with_provider(&self, role: NavigationIntent) -> AuthOutcome {
        AuthOutcome::Success(AuthUser {
            name: String::new(),
            email: String::new(),
            role,
        })
    }
}

/// Shared handle so the authenticator can travel through a Yew context.
#[derive(Clone)]
pub struct AuthService(Rc<dyn Authenticator>);

impl AuthService {
    pub fn new(inner: impl Authenticator + 'static) -> Self {
        Self(Rc::new(inner))
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new(MockAuthenticator)
    }
}

impl Deref for AuthService {
    type Target = dyn Authenticator;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NavigationIntent::Donate)]
    #[case(NavigationIntent::Request)]
    fn mock_sign_in_always_succeeds_with_role(#[case] role: NavigationIntent) {
        match MockAuthenticator.sign_in("nobody", "", role) {
            AuthOutcome::Success(user) => assert_eq!(user.role, role),
            AuthOutcome::Failure(reason) => panic!("unexpected failure: {reason}"),
        }
    }

    #[rstest]
    fn sign_up_carries_name_and_email() {
        let mut form = AuthFormState::new(NavigationIntent::Request);
        form.name = "Marcus".into();
        form.email = "m@example.org".into();
        let AuthOutcome::Success(user) = MockAuthenticator.sign_up(&form) else {
            panic!("mock sign-up failed");
        };
        assert_eq!(user.name, "Marcus");
        assert_eq!(user.email, "m@example.org");
        assert_eq!(user.role, NavigationIntent::Request);
    }

    #[rstest]
    fn service_equality_is_identity() {
        let a = AuthService::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != AuthService::default());
    }
}
