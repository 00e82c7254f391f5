use common::model::session::SessionUser;
use yew::prelude::*;

/// Session facts the list needs to decide which controls to offer. The
/// server enforces the same rules; these only hide controls that would fail.
#[derive(Properties, PartialEq, Clone)]
pub struct LocationsProps {
    #[prop_or_default]
    pub user: Option<SessionUser>,
    #[prop_or_default]
    pub is_admin: bool,
}
