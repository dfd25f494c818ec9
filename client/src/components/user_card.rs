//! Compact client row: avatar, name, email, and a link to the profile.

use leptos::prelude::*;

use crate::state::auth::profile_path;
use crate::util::string::truncate;

pub const DEFAULT_AVATAR: &str = "/images/users/bonnie-green-2x.png";

const NAME_MAX: usize = 40;

#[component]
pub fn UserCard(
    id: String,
    name: String,
    #[prop(default = None)] email: Option<String>,
    #[prop(default = None)] avatar: Option<String>,
    /// Trailing badge text, e.g. the directory role.
    #[prop(default = None)]
    badge: Option<String>,
) -> impl IntoView {
    let href = profile_path(&id);
    let avatar = avatar.filter(|a| !a.trim().is_empty()).unwrap_or_else(|| DEFAULT_AVATAR.to_owned());
    let title = name.clone();

    view! {
        <div class="user-card">
            <img class="user-card__avatar" src=avatar alt=format!("{name} avatar") />
            <div class="user-card__text">
                <span class="user-card__name" title=title>{truncate(&name, NAME_MAX)}</span>
                {email.map(|e| view! { <span class="user-card__email">{e}</span> })}
            </div>
            {badge.map(|b| view! { <span class="user-card__badge">{b}</span> })}
            <a class="user-card__link" href=href>
                "View profile"
            </a>
        </div>
    }
}
