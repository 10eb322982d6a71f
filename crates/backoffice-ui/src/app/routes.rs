//! Routing definitions for the Backoffice UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/posts")]
    Posts,
    #[at("/users")]
    Users,
    #[at("/catalog/:section")]
    Catalog { section: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
