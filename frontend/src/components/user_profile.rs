//! Session card shown under the list: profile with a sign-out link, or a
//! sign-in button. Both go through the authenticating proxy.

use common::model::session::SessionUser;
use yew::{html, Component, Context, Html, Properties};

pub const SIGN_IN_PATH: &str = "/oauth2/sign_in";
pub const SIGN_OUT_PATH: &str = "/oauth2/sign_out";

#[derive(Properties, PartialEq)]
pub struct UserProfileProps {
    pub user: Option<SessionUser>,
}

pub struct UserProfile;

impl Component for UserProfile {
    type Message = ();
    type Properties = UserProfileProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().user {
            Some(user) => html! {
                <div class="user-profile">
                    <div class="user-identity">
                        if let Some(image) = &user.image {
                            <img class="avatar" src={image.clone()} alt="Profile picture" width="48" height="48" />
                        }
                        <div>
                            <h2>{ &user.name }</h2>
                            <p class="muted">{ &user.email }</p>
                        </div>
                    </div>
                    <a class="button pill" href={SIGN_OUT_PATH}>{ "Sign Out" }</a>
                </div>
            },
            None => html! {
                <div class="user-profile signed-out">
                    <a class="button pill primary" href={SIGN_IN_PATH}>{ "Sign in to add locations" }</a>
                </div>
            },
        }
    }
}
