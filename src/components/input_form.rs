use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::inputs::{EnvironmentalInput, Field, FieldErrors, FormValues};

/// Explicit form phase instead of ad-hoc boolean flags. `Submitting` tracks
/// the owning panel's in-flight request via the `busy` prop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FormPhase {
    Editing,
    Submitting,
}

#[derive(Properties, PartialEq)]
pub struct InputFormProps {
    /// Receives the numeric-coerced form on successful validation. The form
    /// does not know what happens to the result.
    pub on_submit: Callback<EnvironmentalInput>,

    /// True while this panel's request is in flight; disables the button.
    #[prop_or(false)]
    pub busy: bool,
}

/// Environmental parameter form. Validation is all-or-nothing: any failing
/// field blocks submission and every failing field's message is set at once.
#[function_component(InputForm)]
pub fn input_form(props: &InputFormProps) -> Html {
    let values = use_state(FormValues::default);
    let errors = use_state(FieldErrors::new);
    let success = use_state(|| false);

    let phase = if props.busy {
        FormPhase::Submitting
    } else {
        FormPhase::Editing
    };

    let on_field_input = {
        let values = values.clone();
        let errors = errors.clone();
        let success = success.clone();

        Callback::from(move |(field, event): (Field, InputEvent)| {
            let target: HtmlInputElement = event.target_unchecked_into();

            let mut next_values = (*values).clone();
            next_values.set(field, target.value());
            values.set(next_values);

            // Editing clears only this field's error, plus any banner
            let mut next_errors = (*errors).clone();
            next_errors.remove(&field);
            errors.set(next_errors);
            success.set(false);
        })
    };

    let on_predict = {
        let values = values.clone();
        let errors = errors.clone();
        let success = success.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |_: MouseEvent| {
            match values.validate() {
                Err(failures) => {
                    errors.set(failures);
                    success.set(false);
                }
                Ok(input) => {
                    errors.set(FieldErrors::new());
                    success.set(true);

                    let success = success.clone();
                    Timeout::new(Config::SUCCESS_BANNER_MS, move || success.set(false)).forget();

                    on_submit.emit(input);
                }
            }
        })
    };

    let render_field = |field: Field| {
        let error = errors.get(&field).cloned();
        let on_input = {
            let on_field_input = on_field_input.clone();
            Callback::from(move |event: InputEvent| on_field_input.emit((field, event)))
        };

        html! {
            <div class="form-group">
                <label>{field.label()}</label>
                <input
                    type="number"
                    name={field.key()}
                    value={values.get(field).to_string()}
                    step={field.step()}
                    oninput={on_input}
                    class={if error.is_some() { "input-error" } else { "" }}
                    disabled={phase == FormPhase::Submitting}
                />
                <div class="form-hint">{field.hint()}</div>
                if let Some(message) = error {
                    <div class="error-msg">{message}</div>
                }
            </div>
        }
    };

    html! {
        <div class="form-card">
            <h3 class="form-title">{"Enter Crop Prediction Details"}</h3>
            {
                Field::all().chunks(2).map(|pair| html! {
                    <div class="field-grid">
                        { for pair.iter().map(|field| render_field(*field)) }
                    </div>
                }).collect::<Html>()
            }
            <button
                type="button"
                class="predict-button"
                onclick={on_predict}
                disabled={phase == FormPhase::Submitting}
            >
                { if phase == FormPhase::Submitting { "Predicting..." } else { "Predict Crop Suitability" } }
            </button>
            if *success {
                <div class="success-msg">{"Inputs look good, prediction requested."}</div>
            }
        </div>
    }
}
