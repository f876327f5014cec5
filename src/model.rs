use std::fmt;

use serde::Deserialize;

use crate::error::SubmitError;

/// Donor-vs-recipient flag carried from the landing page into the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationIntent {
    #[default]
    Donate,
    Request,
}

impl NavigationIntent {
    pub fn label(self) -> &'static str {
        match self {
            NavigationIntent::Donate => "I Want to Donate",
            NavigationIntent::Request => "I Need Food",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    fn required_fields(self) -> &'static [FormField] {
        match self {
            AuthMode::SignIn => &[FormField::Email, FormField::Password],
            AuthMode::SignUp => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthFormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: NavigationIntent,
}

impl AuthFormState {
    pub fn new(role: NavigationIntent) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Presence check only: the first required field left blank, if any.
    pub fn check_required(&self, mode: AuthMode) -> Result<(), SubmitError> {
        match mode
            .required_fields()
            .iter()
            .find(|f| self.field(**f).trim().is_empty())
        {
            Some(missing) => Err(SubmitError::MissingField(*missing)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Collected,
    Completed,
}

impl DonationStatus {
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Collected => "collected",
            DonationStatus::Completed => "completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DonationStatus::Completed => "badge badge-green",
            DonationStatus::Collected => "badge badge-blue",
            DonationStatus::Pending => "badge badge-orange",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            DonationStatus::Completed => "✔",
            DonationStatus::Collected => "📦",
            DonationStatus::Pending => "⏱",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Collected,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Collected => "collected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            RequestStatus::Approved => "badge badge-green",
            RequestStatus::Collected => "badge badge-blue",
            RequestStatus::Pending => "badge badge-orange",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RequestStatus::Approved => "✔",
            RequestStatus::Collected => "📦",
            RequestStatus::Pending => "⏱",
        }
    }

    /// Only approved requests have a pickup to navigate to.
    pub fn offers_directions(self) -> bool {
        self == RequestStatus::Approved
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DonationRecord {
    pub id: u32,
    pub food: String,
    pub quantity: String,
    pub status: DonationStatus,
    pub date: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodOffer {
    pub id: u32,
    pub title: String,
    pub donor: String,
    pub distance: String,
    pub quantity: String,
    pub expires_in: String,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestRecord {
    pub id: u32,
    pub food: String,
    pub status: RequestStatus,
    pub pickup: String,
    pub donor: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub story: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HowItWorksStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Emerald,
    Orange,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Emerald => "accent-emerald",
            Accent::Orange => "accent-orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryPreference {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Available,
    Requests,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Available, DashboardTab::Requests];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Available => "Available Food",
            DashboardTab::Requests => "My Requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    active: DashboardTab,
}

impl TabSelector {
    pub fn active(&self) -> DashboardTab {
        self.active
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, tab: DashboardTab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn intent_defaults_to_donate() {
        assert_eq!(NavigationIntent::default(), NavigationIntent::Donate);
        assert_eq!(AuthFormState::default().role, NavigationIntent::Donate);
    }

    #[rstest]
    fn toggling_mode_twice_is_identity() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignIn.toggled().toggled(), AuthMode::SignIn);
    }

    #[rstest]
    #[case(AuthMode::SignIn, FormField::Email)]
    #[case(AuthMode::SignUp, FormField::Name)]
    fn empty_form_reports_first_missing_field(#[case] mode: AuthMode, #[case] field: FormField) {
        let form = AuthFormState::new(NavigationIntent::Request);
        assert_eq!(form.check_required(mode), Err(SubmitError::MissingField(field)));
    }

    #[rstest]
    fn sign_in_ignores_sign_up_only_fields() {
        let mut form = AuthFormState::new(NavigationIntent::Donate);
        form.set(FormField::Email, "a@b.c".into());
        form.set(FormField::Password, "pw".into());
        assert_eq!(form.check_required(AuthMode::SignIn), Ok(()));
        assert_eq!(
            form.check_required(AuthMode::SignUp),
            Err(SubmitError::MissingField(FormField::Name))
        );
    }

    #[rstest]
    fn whitespace_does_not_count_as_present() {
        let mut form = AuthFormState::new(NavigationIntent::Donate);
        form.set(FormField::Email, "   ".into());
        form.set(FormField::Password, "pw".into());
        assert_eq!(
            form.check_required(AuthMode::SignIn),
            Err(SubmitError::MissingField(FormField::Email))
        );
    }

    #[rstest]
    fn confirm_password_is_presence_checked_only() {
        let mut form = AuthFormState::new(NavigationIntent::Donate);
        form.set(FormField::Name, "Sarah".into());
        form.set(FormField::Email, "s@x.org".into());
        form.set(FormField::Password, "one".into());
        form.set(FormField::ConfirmPassword, "two".into());
        assert_eq!(form.check_required(AuthMode::SignUp), Ok(()));
    }

    #[rstest]
    #[case(DonationStatus::Completed, "badge badge-green")]
    #[case(DonationStatus::Collected, "badge badge-blue")]
    #[case(DonationStatus::Pending, "badge badge-orange")]
    fn donation_badges(#[case] status: DonationStatus, #[case] class: &str) {
        assert_eq!(status.badge_class(), class);
    }

    #[rstest]
    fn only_approved_requests_offer_directions() {
        assert!(RequestStatus::Approved.offers_directions());
        assert!(!RequestStatus::Pending.offers_directions());
        assert!(!RequestStatus::Collected.offers_directions());
    }

    #[rstest]
    fn selecting_active_tab_is_a_no_op() {
        let mut sel = TabSelector::default();
        assert_eq!(sel.active(), DashboardTab::Available);
        assert!(!sel.select(DashboardTab::Available));
        assert_eq!(sel.active(), DashboardTab::Available);

        assert!(sel.select(DashboardTab::Requests));
        assert!(!sel.select(DashboardTab::Requests));
        assert_eq!(sel.active(), DashboardTab::Requests);
    }
}
