//! Client list: paged directory users with links to their profiles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request URL is derived from `Pagination`; `use_fetch` reissues it
//! whenever the offset moves and drops any page still in flight. The total
//! from each response feeds back into the paging bounds.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::user_card::UserCard;
use crate::config::ClientConfig;
use crate::net::api::users_page_endpoint;
use crate::net::types::{DirectoryUser, UserPage};
use crate::state::clients::Pagination;
use crate::state::fetch::FetchState;
use crate::util::use_fetch::use_fetch;

pub const LOADING_TEXT: &str = "Loading users…";
pub const EMPTY_TEXT: &str = "No users found.";

/// Badge text for a directory role, shown as the directory spells it;
/// records without one are plain users.
pub fn role_label(role: Option<&str>) -> String {
    role.map(str::trim).filter(|r| !r.is_empty()).unwrap_or("user").to_owned()
}

/// What the list area shows for the current request state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Empty,
    Rows,
}

/// Any in-flight request replaces the rows with the loading line, including
/// page changes.
pub fn list_status(state: &FetchState<UserPage>) -> ListStatus {
    if state.loading {
        return ListStatus::Loading;
    }
    if let Some(err) = state.error_message() {
        return ListStatus::Failed(err);
    }
    if state.data.as_ref().is_none_or(|page| page.users.is_empty()) {
        ListStatus::Empty
    } else {
        ListStatus::Rows
    }
}

/// Name shown for a row, falling back to the id when the record is bare.
pub fn row_name(user: &DirectoryUser) -> String {
    let name = user.display_name();
    if name.trim().is_empty() { format!("User {}", user.id) } else { name }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let paging = RwSignal::new(Pagination::new(config.page_size));
    let base = config.directory_url.clone();
    let url = Memo::new(move |_| {
        let p = paging.get();
        Some(users_page_endpoint(&base, p.limit, p.skip))
    });
    let fetch = use_fetch::<UserPage>(url.into(), config.retry);

    Effect::new(move || {
        if let Some(total) = fetch.state.with(|s| s.data.as_ref().map(|page| page.total)) {
            paging.update(|p| p.total = total);
        }
    });

    let loading = move || fetch.state.with(|s| s.loading);
    let users = move || fetch.state.with(|s| s.data.as_ref().map(|page| page.users.clone()).unwrap_or_default());

    let body = move || {
        match fetch.state.with(list_status) {
            ListStatus::Loading => return view! { <p class="clients__status">{LOADING_TEXT}</p> }.into_any(),
            ListStatus::Failed(err) => {
                return view! {
                    <div class="clients__error">
                        <p>{err}</p>
                        <button class="btn" on:click=move |_| fetch.refetch(None)>"Retry"</button>
                    </div>
                }
                .into_any();
            }
            ListStatus::Empty => return view! { <p class="clients__status">{EMPTY_TEXT}</p> }.into_any(),
            ListStatus::Rows => {}
        }
        let rows = users();
        view! {
            <ul class="clients__list">
                {rows
                    .into_iter()
                    .map(|user| {
                        let name = row_name(&user);
                        let badge = role_label(user.role.as_deref());
                        view! {
                            <li class="clients__row">
                                <UserCard
                                    id=user.id.to_string()
                                    name=name
                                    email=user.email
                                    avatar=user.image
                                    badge=Some(badge)
                                />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="clients">
            <h2 class="clients__title">"Clients"</h2>
            {body}
            <div class="clients__pager">
                <button
                    class="btn"
                    disabled=move || loading() || !paging.get().has_prev()
                    on:click=move |_| paging.update(Pagination::prev)
                >
                    "Previous"
                </button>
                <span class="clients__summary">{move || paging.get().summary()}</span>
                <button
                    class="btn"
                    disabled=move || loading() || !paging.get().has_next()
                    on:click=move |_| paging.update(Pagination::next)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
