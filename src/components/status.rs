use yew::prelude::*;

/// Shared in-flight indicator for the request panels.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Waiting for the backend..."}</p>
        </div>
    }
}
