use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;

        use crate::config::ServerConfig;
        use crate::services::story_api::StoryApiClient;

        #[derive(FromRef, Clone)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
            pub story_api: StoryApiClient,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions, config: &ServerConfig) -> Self {
                Self {
                    leptos_options,
                    story_api: StoryApiClient::new(config.api_url.clone()),
                }
            }
        }
    }
}
