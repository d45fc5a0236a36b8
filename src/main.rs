use yew::prelude::*;

use aeroponic_dashboard::components::{FarmPanel, InputForm, PlacementView, ResultsTable};
use aeroponic_dashboard::hooks::use_placement::use_placement;
use aeroponic_dashboard::hooks::use_prediction::use_prediction;
use aeroponic_dashboard::models::inputs::FarmConfig;

#[function_component(App)]
fn app() -> Html {
    let prediction = use_prediction();
    let placement = use_placement();
    let farm = use_state(FarmConfig::default);

    let on_farm_change = {
        let farm = farm.clone();
        Callback::from(move |next: FarmConfig| farm.set(next))
    };

    let on_optimize = {
        let farm = farm.clone();
        let submit = placement.submit.clone();
        Callback::from(move |()| submit.emit((*farm).clone()))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Aeroponic Crop Recommendation & Tower Optimization"}</h1>
            </header>

            <main class="app-main">
                <section class="prediction-section">
                    <InputForm
                        on_submit={prediction.submit.clone()}
                        busy={prediction.state.is_loading()}
                    />
                    <ResultsTable state={(*prediction.state).clone()} />
                </section>

                <section class="placement-section">
                    <FarmPanel
                        farm={(*farm).clone()}
                        on_change={on_farm_change}
                        {on_optimize}
                        busy={placement.state.is_loading()}
                    />
                    <PlacementView state={(*placement.state).clone()} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
