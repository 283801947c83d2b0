use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_else(|| "Loading...".to_string())]
    pub loading_label: String,
}

/// Inline loading spinner or error line. Renders nothing when idle.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    html! {
        <>
            if props.loading {
                <div class="status loading">
                    <div class="spinner"></div>
                    <p>{&props.loading_label}</p>
                </div>
            }
            if let Some(msg) = &props.error {
                <div class="status error">
                    <p>{msg}</p>
                </div>
            }
        </>
    }
}
