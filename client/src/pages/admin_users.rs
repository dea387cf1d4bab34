//! Admin account moderation: block and unblock users and companies.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::AdminUser;
use crate::state::session::SessionState;
use crate::util::guard;

/// Account moderation page. Requires a signed-in administrator.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/admin/login", navigate);

    let accounts = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Pending block confirmation: (account id, display name).
    let block_target = RwSignal::new(None::<(String, String)>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_admin::list_users().await {
                    Ok(items) => {
                        accounts.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load accounts: {err}"))),
                }
                loading.set(false);
            });
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !session_state.get().is_authenticated() {
            return;
        }
        requested.set(true);
        load();
    });

    // Block/unblock refetch the list instead of patching the row; the
    // backend recomputes account standing and derived stats.
    let on_block_confirm = Callback::new(move |()| {
        let Some((id, _)) = block_target.get_untracked() else {
            return;
        };
        block_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::block_user(&id).await {
                Ok(()) => load(),
                Err(err) => error.set(Some(format!("Could not block the account: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_unblock = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::unblock_user(&id).await {
                Ok(()) => load(),
                Err(err) => error.set(Some(format!("Could not unblock the account: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Show
            when=move || session_state.get().is_authenticated()
            fallback=move || {
                view! {
                    <p class="page-placeholder">
                        {move || if session_state.get().resolved() { "Redirecting to login..." } else { "Loading..." }}
                    </p>
                }
            }
        >
            <div class="admin-page">
                <h1>"Accounts"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading accounts..."</p> }>
                    <ul class="admin-page__list">
                        {move || {
                            accounts
                                .get()
                                .into_iter()
                                .map(|account| {
                                    let block_id = account.id.clone();
                                    let block_name = account.name.clone();
                                    let unblock_id = account.id.clone();
                                    view! {
                                        <li class="account-row" class:account-row--blocked=account.blocked>
                                            <span class="account-row__name">{account.name.clone()}</span>
                                            <span class="account-row__email">
                                                {account.email.clone().unwrap_or_default()}
                                            </span>
                                            <span class="account-row__role">{account.role.as_str()}</span>
                                            <Show
                                                when={
                                                    let blocked = account.blocked;
                                                    move || blocked
                                                }
                                                fallback={
                                                    let block_id = block_id.clone();
                                                    let block_name = block_name.clone();
                                                    move || {
                                                        let block_id = block_id.clone();
                                                        let block_name = block_name.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| {
                                                                    block_target
                                                                        .set(Some((block_id.clone(), block_name.clone())))
                                                                }
                                                            >
                                                                "Block"
                                                            </button>
                                                        }
                                                    }
                                                }
                                            >
                                                <button
                                                    class="btn"
                                                    on:click={
                                                        let unblock_id = unblock_id.clone();
                                                        move |_| on_unblock.run(unblock_id.clone())
                                                    }
                                                >
                                                    "Unblock"
                                                </button>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                {move || {
                    block_target
                        .get()
                        .map(|(_, name)| {
                            view! {
                                <ConfirmDialog
                                    title="Block account"
                                    message=format!("Block {name}? They will no longer be able to sign in.")
                                    confirm_label="Block"
                                    danger=true
                                    on_confirm=on_block_confirm
                                    on_cancel=Callback::new(move |()| block_target.set(None))
                                />
                            }
                        })
                }}
            </div>
        </Show>
    }
}
