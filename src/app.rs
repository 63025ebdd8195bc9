use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::core::ACCOUNT_PATH;
use crate::core::config::Config;
use crate::ui::pages::{AccountPage, LoginPage, NotFoundPage};
use crate::ui::provide_account_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = Config::from_env();
    provide_account_context(&config);
    provide_context(config);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>

        <Title text="Account | Storefront"/>

        <Router>
            <main class="min-h-screen w-full">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=ACCOUNT_PATH/> }/>
                    <Route path=path!("/account") view=AccountPage/>
                    <Route path=path!("/account/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
