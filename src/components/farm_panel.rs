use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::inputs::FarmConfig;

#[derive(Properties, PartialEq)]
pub struct FarmPanelProps {
    pub farm: FarmConfig,
    pub on_change: Callback<FarmConfig>,
    pub on_optimize: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
}

/// Farm configuration panel. Values are deliberately unvalidated
/// client-side; the backend rejects layouts it cannot place.
#[function_component(FarmPanel)]
pub fn farm_panel(props: &FarmPanelProps) -> Html {
    let number_input = |label: &'static str,
                        value: String,
                        step: &'static str,
                        apply: fn(&mut FarmConfig, f64)| {
        let farm = props.farm.clone();
        let on_change = props.on_change.clone();

        let oninput = Callback::from(move |event: InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            // Unparseable text leaves the previous value in place
            if let Ok(parsed) = target.value().parse::<f64>() {
                let mut next = farm.clone();
                apply(&mut next, parsed);
                on_change.emit(next);
            }
        });

        html! {
            <div class="form-group">
                <label>{label}</label>
                <input type="number" {value} {step} {oninput} disabled={props.busy} />
            </div>
        }
    };

    let on_click = {
        let on_optimize = props.on_optimize.clone();
        Callback::from(move |_: MouseEvent| on_optimize.emit(()))
    };

    html! {
        <div class="card farm-card">
            <h3>{"Farm Configuration"}</h3>
            { number_input("Farm Length (m)", props.farm.farm_length.to_string(), "1",
                |farm, v| farm.farm_length = v) }
            { number_input("Farm Width (m)", props.farm.farm_width.to_string(), "1",
                |farm, v| farm.farm_width = v) }
            { number_input("Minimum Spacing (m)", props.farm.min_spacing.to_string(), "0.1",
                |farm, v| farm.min_spacing = v) }
            { number_input("Maximum Towers", props.farm.max_towers.to_string(), "1",
                |farm, v| farm.max_towers = v.max(0.0) as u32) }
            <button type="button" onclick={on_click} disabled={props.busy}>
                { if props.busy { "Optimizing..." } else { "Optimize Tower Placement" } }
            </button>
        </div>
    }
}
