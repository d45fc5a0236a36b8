use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::inputs::EnvironmentalInput;
use crate::models::prediction::Prediction;
use crate::services::api::predict_crops;

#[derive(Clone, PartialEq, Debug)]
pub enum PredictionState {
    Idle,
    Loading,
    Loaded(Rc<Prediction>),
    Error(String),
}

impl PredictionState {
    /// Returns true while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, PredictionState::Loading)
    }

    /// Returns the prediction if one is loaded
    pub fn data(&self) -> Option<&Rc<Prediction>> {
        match self {
            PredictionState::Loaded(prediction) => Some(prediction),
            _ => None,
        }
    }
}

/// Handle returned by `use_prediction`
#[derive(Clone, PartialEq)]
pub struct PredictionHandle {
    pub state: UseStateHandle<PredictionState>,
    pub submit: Callback<EnvironmentalInput>,
}

/// Owns one prediction request/response cycle. Each submission takes a
/// sequence token; a response arriving after a newer submission is dropped,
/// so only the latest response updates visible state.
#[hook]
pub fn use_prediction() -> PredictionHandle {
    let state = use_state(|| PredictionState::Idle);
    let sequence = use_mut_ref(|| 0u64);

    let submit = {
        let state = state.clone();
        let sequence = sequence.clone();

        Callback::from(move |input: EnvironmentalInput| {
            let state = state.clone();
            let sequence = sequence.clone();

            *sequence.borrow_mut() += 1;
            let token = *sequence.borrow();
            state.set(PredictionState::Loading);

            spawn_local(async move {
                let result = predict_crops(&input).await;

                if *sequence.borrow() != token {
                    gloo::console::warn!("Dropping stale prediction response");
                    return;
                }

                match result {
                    Ok(prediction) => state.set(PredictionState::Loaded(Rc::new(prediction))),
                    Err(e) => {
                        gloo::console::error!(format!("Prediction request failed: {e}"));
                        state.set(PredictionState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    PredictionHandle { state, submit }
}
