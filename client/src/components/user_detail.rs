//! Profile summary card shown above the personal-information editor.

use leptos::prelude::*;

use crate::components::user_card::DEFAULT_AVATAR;
use crate::util::date::format_iso_date;

#[component]
pub fn UserDetail(
    id: String,
    #[prop(default = None)] name: Option<String>,
    #[prop(default = None)] email: Option<String>,
    #[prop(default = None)] phone: Option<String>,
    #[prop(default = None)] image: Option<String>,
    #[prop(default = None)] birth_date: Option<String>,
) -> impl IntoView {
    let name = name.filter(|n| !n.trim().is_empty()).unwrap_or_else(|| format!("User {id}"));
    let image = image.filter(|i| !i.trim().is_empty()).unwrap_or_else(|| DEFAULT_AVATAR.to_owned());
    let born = birth_date.map(|d| format_iso_date(&d)).filter(|d| !d.is_empty());

    view! {
        <section class="user-detail">
            <img class="user-detail__image" src=image alt=format!("{name} picture") />
            <div class="user-detail__text">
                <h3 class="user-detail__name">{name}</h3>
                {email.map(|e| view! { <p class="user-detail__line">{e}</p> })}
                {phone.map(|p| view! { <p class="user-detail__line">{p}</p> })}
                {born.map(|b| view! { <p class="user-detail__line">"Born: " {b}</p> })}
            </div>
        </section>
    }
}
