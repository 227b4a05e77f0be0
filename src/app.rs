use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

use crate::components::footer::Footer;
use crate::components::toast::{ToastContext, ToastHost};
use crate::pages::home::HomePage;
use crate::pages::story::StoryPage;
use crate::types::PendingTopic;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ToastContext::new());
    provide_context(PendingTopic::new());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/storyloom.css" />
        <Title text="storyloom" />
        <Router>
            <div class="min-h-screen w-full bg-gray-100 dark:bg-teal-900 text-gray-800 dark:text-gray-100">
                <header class="flex justify-between items-center">
                    <a
                        href="/"
                        class="text-3xl text-left text-seafoam-600 dark:text-mint-400 pl-4 p-4 font-bold"
                    >
                        "storyloom"
                    </a>
                </header>
                <main class="container mx-auto p-4 md:p-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=path!("story/:id") view=StoryPage />
                    </Routes>
                </main>
                <Footer />
                <ToastHost />
            </div>
        </Router>
    }
}
