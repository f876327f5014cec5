use yew::prelude::*;
use yew_router::prelude::*;

use crate::nav::Screen;
use crate::pages::{DonorDashboard, Landing, NotFound, RecipientDashboard, SignIn};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/signin")]
    SignIn,
    #[at("/donor-dashboard")]
    DonorDashboard,
    #[at("/recipient-dashboard")]
    RecipientDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Landing => Route::Landing,
            Screen::Auth(_) => Route::SignIn,
            Screen::DonorDashboard => Route::DonorDashboard,
            Screen::RecipientDashboard => Route::RecipientDashboard,
        }
    }
}

/// Pushes the route for `screen`. The auth intent rides along as history state
/// only, so it does not survive a reload.
pub fn go(navigator: &Navigator, screen: Screen) {
    match screen {
        Screen::Auth(intent) => navigator.push_with_state(&Route::SignIn, intent),
        other => navigator.push(&Route::from(other)),
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::SignIn => html! { <SignIn /> },
        Route::DonorDashboard => html! { <DonorDashboard /> },
        Route::RecipientDashboard => html! { <RecipientDashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NavigationIntent;
    use rstest::rstest;

    #[rstest]
    #[case(Route::Landing, "/")]
    #[case(Route::SignIn, "/signin")]
    #[case(Route::DonorDashboard, "/donor-dashboard")]
    #[case(Route::RecipientDashboard, "/recipient-dashboard")]
    fn paths(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.to_path(), path);
        assert_eq!(Route::recognize(path), Some(route));
    }

    #[rstest]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[rstest]
    #[case(Screen::Landing, Route::Landing)]
    #[case(Screen::Auth(NavigationIntent::Request), Route::SignIn)]
    #[case(Screen::DonorDashboard, Route::DonorDashboard)]
    #[case(Screen::RecipientDashboard, Route::RecipientDashboard)]
    fn screens_map_to_routes(#[case] screen: Screen, #[case] route: Route) {
        assert_eq!(Route::from(screen), route);
    }
}
