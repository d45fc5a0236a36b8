use yew::prelude::*;

use crate::components::status::Loading;
use crate::config::Config;
use crate::hooks::use_prediction::PredictionState;
use crate::models::prediction::Prediction;

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub state: PredictionState,
}

/// Crop suitability panel. Pure render of the prediction state: a backend
/// error replaces the table entirely, otherwise ranked scores plus a
/// positive or negative recommendation banner.
#[function_component(ResultsTable)]
pub fn results_table(props: &ResultsTableProps) -> Html {
    match &props.state {
        PredictionState::Idle => Html::default(),
        PredictionState::Loading => html! { <Loading /> },
        PredictionState::Error(message) => html! {
            <div class="card results-card">
                <p class="error-msg">{message}</p>
            </div>
        },
        PredictionState::Loaded(prediction) => render_scores(prediction.as_ref()),
    }
}

fn render_scores(prediction: &Prediction) -> Html {
    if prediction.is_empty() {
        return html! {
            <div class="card results-card">
                <p class="empty-msg">{"No scores returned for these conditions."}</p>
            </div>
        };
    }

    let recommended = prediction.recommendation(Config::CONFIDENCE_THRESHOLD);

    html! {
        <div class="card results-card">
            <h3>{"Crop Suitability"}</h3>
            <table class="results-table">
                <thead>
                    <tr>
                        <th>{"Crop"}</th>
                        <th>{"Score"}</th>
                        <th>{"Confidence (%)"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        prediction.scores().iter().map(|score| {
                            let highlight = recommended.is_some_and(|top| top.crop == score.crop);
                            html! {
                                <tr class={if highlight { "row-highlight" } else { "" }}>
                                    <td>{&score.crop}</td>
                                    <td>{format!("{:.1}", score.suitability_score)}</td>
                                    <td>{format!("{:.0}", score.confidence)}</td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
            { render_banner(prediction, recommended.is_some()) }
        </div>
    }
}

fn render_banner(prediction: &Prediction, recommended: bool) -> Html {
    if !recommended {
        return html! {
            <div class="banner banner-negative">
                {"No crop recommended for these conditions."}
            </div>
        };
    }

    // recommendation() returned Some, so a top entry exists
    let top = prediction.top().map_or("", |score| score.crop.as_str());
    let explanations = prediction.explanations(Config::MAX_EXPLANATIONS);

    html! {
        <>
            <div class="banner banner-positive">
                {format!("Recommended crop: {top}")}
            </div>
            if !explanations.is_empty() {
                <ul class="explanations">
                    { for explanations.iter().map(|reason| html! { <li>{reason}</li> }) }
                </ul>
            }
        </>
    }
}
