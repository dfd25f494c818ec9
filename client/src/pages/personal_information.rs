//! Personal-information editor for one directory user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/pages/user/:id/pi`. Each id change starts a fresh load and
//! supersedes the previous one through the page's `RequestSlot`. Saving only
//! validates and acknowledges locally; the directory is read-only. A save
//! takes a ticket from the same slot, so leaving for another id drops it.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::user_detail::UserDetail;
use crate::config::ClientConfig;
use crate::net::fetch::RequestSlot;
use crate::state::profile::{ProfileField, ProfileState};

#[cfg(feature = "hydrate")]
const SAVE_DELAY_MS: u32 = 600;
#[cfg(feature = "hydrate")]
const SUCCESS_VISIBLE_MS: u32 = 2_000;

#[component]
pub fn PersonalInformationPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let state = RwSignal::new(ProfileState::loading());
    let slot = StoredValue::new_local(RequestSlot::default());
    on_cleanup(move || slot.with_value(RequestSlot::cancel));

    let base = config.directory_url.clone();
    let policy = config.retry;
    Effect::new(move || {
        let id = id.get();
        let ticket = slot.with_value(RequestSlot::begin);
        state.set(ProfileState::loading());

        #[cfg(feature = "hydrate")]
        {
            let base = base.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_user(&base, &id, policy, &ticket).await;
                if !ticket.is_current() {
                    return;
                }
                match outcome {
                    Ok(user) => state.update(|s| s.finish_load(&user)),
                    Err(err) => {
                        log::warn!("load user {id} failed: {err}");
                        state.update(ProfileState::fail_load);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&base, id, ticket, policy);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut proceed = false;
        state.update(|s| proceed = s.editing && !s.loading && s.begin_save());
        if !proceed {
            return;
        }
        // A later id change begins a new request on the slot, which retires this save.
        let ticket = slot.with_value(RequestSlot::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SAVE_DELAY_MS).await;
            let mut settled = false;
            state.update(|s| settled = s.settle_save(&ticket));
            if !settled {
                return;
            }
            gloo_timers::future::TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
            state.update(|s| s.expire_success(&ticket));
        });
        #[cfg(not(feature = "hydrate"))]
        state.update(|s| {
            s.settle_save(&ticket);
        });
    };

    let summary = move || {
        let (name, email, phone, image, birth_date) = state.with(|s| {
            let name = format!("{} {}", s.form.first_name, s.form.last_name).trim().to_owned();
            (Some(name), Some(s.form.email.clone()), Some(s.form.phone.clone()), s.image.clone(), s.birth_date.clone())
        });
        view! {
            <UserDetail
                id=id.get()
                name=name
                email=email.filter(|e| !e.is_empty())
                phone=phone.filter(|p| !p.is_empty())
                image=image
                birth_date=birth_date
            />
        }
    };

    let fields = ProfileField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="form-field">
                    <label class="form-field__label" for=field.key()>{field.label()}</label>
                    <input
                        id=field.key()
                        class="form-field__input"
                        type=field.input_type()
                        placeholder=field.placeholder()
                        prop:value=move || state.with(|s| s.form.get(field).to_owned())
                        on:input=move |ev| state.update(|s| s.form.set(field, event_target_value(&ev)))
                    />
                    {move || {
                        state
                            .with(|s| s.errors.get(field.key()).copied())
                            .map(|m| view! { <p class="form-error">{m}</p> })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="profile">
            <h2 class="profile__title">"Personal information"</h2>
            {summary}
            <Show when=move || state.with(|s| s.load_error.is_some())>
                <p class="profile__error">{move || state.with(|s| s.load_error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || state.with(|s| s.success.is_some())>
                <p class="profile__success">{move || state.with(|s| s.success.clone().unwrap_or_default())}</p>
            </Show>
            <form class="profile__form" on:submit=on_save novalidate=true>
                <fieldset class="profile__grid" disabled=move || state.with(|s| !s.editing)>
                    {fields}
                </fieldset>
                <div class="profile__actions">
                    <Show
                        when=move || state.with(|s| s.editing)
                        fallback=move || {
                            view! {
                                <button
                                    class="btn"
                                    type="button"
                                    disabled=move || state.with(|s| s.loading)
                                    on:click=move |_| state.update(ProfileState::toggle_editing)
                                >
                                    "Edit"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| state.update(ProfileState::cancel_editing)
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.loading)>
                            {move || if state.with(|s| s.loading) { "Saving…" } else { "Save" }}
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
