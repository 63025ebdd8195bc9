//! Account context for the storefront
//!
//! This module provides a reactive account context that:
//! - Holds the signed-in customer, re-derived from the session cookie
//! - Holds the sub-view selector shared by sign-in, register and
//!   forgot-password
//! - Adapts Leptos signals and the router to the sign-in flow's traits

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

use crate::core::config::Config;
use crate::core::{
    AccountSession, Customer, FormStore, LoginFormState, LoginView, MedusaClient, Navigator,
    SessionRefresh,
};

/// Account context providing the customer session and the login view
#[derive(Clone, Copy)]
pub struct AccountContext {
    /// Customer bound to the current session, if any
    pub customer: RwSignal<Option<Customer>>,
    /// Sub-view shown in the signed-out account area
    pub login_view: RwSignal<LoginView>,
    /// Outstanding customer refetches; only the latest one lands
    pub refresh: RwSignal<SessionRefresh>,
    client: StoredValue<MedusaClient>,
}

impl AccountContext {
    pub fn is_signed_in(&self) -> bool {
        self.customer.with(Option::is_some)
    }

    /// True while the latest customer refetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.refresh.with(SessionRefresh::is_loading)
    }

    #[cfg(feature = "hydrate")]
    async fn load_customer(self, ticket: crate::core::RefreshTicket) {
        let client = self.client.get_value();
        let result = client.fetch_customer().await;

        let latest = self
            .refresh
            .try_update(|refresh| refresh.finish(ticket))
            .unwrap_or(false);
        if !latest {
            leptos::logging::log!("Dropping stale customer response");
            return;
        }

        match result {
            Ok(customer) => self.customer.set(customer),
            Err(e) => {
                leptos::logging::warn!("Failed to fetch customer: {}", e);
                self.customer.set(None);
            }
        }
    }
}

impl AccountSession for AccountContext {
    fn refetch_customer(&self) {
        let Some(ticket) = self.refresh.try_update(SessionRefresh::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        spawn_local(self.load_customer(ticket));

        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!(
                "Customer refetch from {} deferred to the client",
                self.client.with_value(MedusaClient::customer_url)
            );
            self.refresh.update(|refresh| {
                refresh.finish(ticket);
            });
        }
    }

    fn set_login_view(&self, view: LoginView) {
        self.login_view.set(view);
    }
}

/// Provide account context to the component tree
pub fn provide_account_context(config: &Config) -> AccountContext {
    // Start signed out on both server and client to avoid hydration mismatch
    let ctx = AccountContext {
        customer: RwSignal::new(None),
        login_view: RwSignal::new(LoginView::default()),
        refresh: RwSignal::new(SessionRefresh::default()),
        client: StoredValue::new(MedusaClient::new(config)),
    };

    // Restore the session after hydration (client-side only)
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| ctx.refetch_customer());

    provide_context(ctx);
    ctx
}

/// Get account context from the component tree
pub fn use_account_context() -> AccountContext {
    expect_context::<AccountContext>()
}

impl FormStore for RwSignal<LoginFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut LoginFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// `Navigator` backed by the Leptos router
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
