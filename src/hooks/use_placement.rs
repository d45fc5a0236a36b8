use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::inputs::FarmConfig;
use crate::models::placement::Placement;
use crate::services::api::optimize_placement;

#[derive(Clone, PartialEq, Debug)]
pub enum PlacementState {
    Idle,
    Loading,
    Loaded(Rc<Placement>),
    Error(String),
}

impl PlacementState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PlacementState::Loading)
    }

    pub fn data(&self) -> Option<&Rc<Placement>> {
        match self {
            PlacementState::Loaded(placement) => Some(placement),
            _ => None,
        }
    }
}

/// Handle returned by `use_placement`
#[derive(Clone, PartialEq)]
pub struct PlacementHandle {
    pub state: UseStateHandle<PlacementState>,
    pub submit: Callback<FarmConfig>,
}

/// Owns one placement request/response cycle, with the same stale-response
/// guard as `use_prediction`.
#[hook]
pub fn use_placement() -> PlacementHandle {
    let state = use_state(|| PlacementState::Idle);
    let sequence = use_mut_ref(|| 0u64);

    let submit = {
        let state = state.clone();
        let sequence = sequence.clone();

        Callback::from(move |farm: FarmConfig| {
            let state = state.clone();
            let sequence = sequence.clone();

            *sequence.borrow_mut() += 1;
            let token = *sequence.borrow();
            state.set(PlacementState::Loading);

            spawn_local(async move {
                let result = optimize_placement(&farm).await;

                if *sequence.borrow() != token {
                    gloo::console::warn!("Dropping stale placement response");
                    return;
                }

                match result {
                    Ok(placement) => state.set(PlacementState::Loaded(Rc::new(placement))),
                    Err(e) => {
                        gloo::console::error!(format!("Placement request failed: {e}"));
                        state.set(PlacementState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    PlacementHandle { state, submit }
}
