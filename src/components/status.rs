use crate::models::error::AppError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    pub error: Option<AppError>,
    /// A retry is in flight; the button is disabled meanwhile.
    #[prop_or(false)]
    pub retrying: bool,
    pub on_retry: Callback<()>,
    #[prop_or_else(|| AttrValue::from("Loading market data..."))]
    pub loading_label: AttrValue,
    #[prop_or_else(|| AttrValue::from("Failed to load market data"))]
    pub error_title: AttrValue,
}

/// Loading spinner or inline error panel with a retry button.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{&props.loading_label}</p>
            </div>
        };
    }

    match &props.error {
        Some(error) => {
            let onclick = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="status error" role="alert">
                    <h3>{&props.error_title}</h3>
                    <p>{error.to_string()}</p>
                    <button
                        class="retry-button"
                        {onclick}
                        disabled={props.retrying}
                    >
                        {if props.retrying { "Retrying..." } else { "Try Again" }}
                    </button>
                </div>
            }
        }
        None => html! {},
    }
}
