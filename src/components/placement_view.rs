use chrono::Utc;
use yew::prelude::*;

use crate::components::status::Loading;
use crate::config::Config;
use crate::hooks::use_placement::PlacementState;
use crate::models::placement::{Grid, Placement};

#[derive(Properties, PartialEq)]
pub struct PlacementViewProps {
    pub state: PlacementState,
}

/// Tower placement panel: rendered layout image plus read-only grid
/// metadata when the backend supplies it.
#[function_component(PlacementView)]
pub fn placement_view(props: &PlacementViewProps) -> Html {
    match &props.state {
        PlacementState::Idle => Html::default(),
        PlacementState::Loading => html! { <Loading /> },
        PlacementState::Error(message) => html! {
            <div class="card placement-card">
                <p class="error-msg">{message}</p>
            </div>
        },
        PlacementState::Loaded(placement) => render_placement(placement.as_ref()),
    }
}

fn render_placement(placement: &Placement) -> Html {
    html! {
        <div class="card placement-card">
            <h3>{"Optimized Tower Placement"}</h3>
            <p><strong>{"Total Towers: "}</strong>{placement.total_towers}</p>
            { render_image(placement) }
            if let Some(grid) = &placement.grid {
                { render_grid(grid) }
            }
        </div>
    }
}

fn render_image(placement: &Placement) -> Html {
    match placement.image_src(Config::API_BASE_URL) {
        Some(src) => {
            // Cache-buster: the backend overwrites the layout file in place
            let src = format!("{src}?t={}", Utc::now().timestamp_millis());
            html! { <img src={src} alt="Tower Placement" class="placement-image" /> }
        }
        None => html! { <p class="empty-msg">{"No layout image available."}</p> },
    }
}

fn render_grid(grid: &Grid) -> Html {
    let row_range = if grid.n_rows == 0 {
        "-".to_string()
    } else {
        format!("{}–{}", grid.row_label(0), grid.row_label(grid.n_rows - 1))
    };

    html! {
        <div class="grid-summary">
            <h4>{"Grid"}</h4>
            <ul>
                <li>{format!("Cell size: {:.2} m", grid.cell_size_m)}</li>
                <li>{format!("Rows: {row_range} ({})", grid.n_rows)}</li>
                <li>{format!("Columns: {}", grid.n_cols)}</li>
            </ul>
            if !grid.eligible_cells.is_empty() {
                <p class="eligible-cells">
                    {format!("Eligible cells: {}", grid.eligible_cells.join(", "))}
                </p>
            }
        </div>
    }
}
