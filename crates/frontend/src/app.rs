use crate::shared::config::load_config;
use crate::usecases::u501_register_presence::RegisterPresencePage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once per page load
    let content = match load_config() {
        Ok(config) => {
            view! { <RegisterPresencePage config=config /> }.into_any()
        }
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            view! {
                <div class="config-error">
                    <h2>"Configuração inválida"</h2>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <ConfigProvider>
            {content}
        </ConfigProvider>
    }
}
