//! Pure Yew view components for the speedometer UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use yew::prelude::*;

use live_speedometer::{AlarmStatus, UNIT_LABELS};

use crate::hooks::TextInput;

/// Alarm chip rendered while CPS is the active unit.
#[derive(Properties, PartialEq)]
pub struct AlarmChipProps {
    pub status: AlarmStatus,
    pub value: f64,
}

#[function_component(AlarmChip)]
pub fn alarm_chip(props: &AlarmChipProps) -> Html {
    html! {
        <div class="chip-row">
            <span class={classes!("chip", props.status.severity.css_class())}>
                { format!("{} {} ({:.1} CPS)", props.status.glyph, props.status.label, props.value) }
            </span>
        </div>
    }
}

/// One button per unit label; the selected one is rendered "contained".
#[derive(Properties, PartialEq)]
pub struct UnitSelectorProps {
    pub selected: usize,
    pub onselect: Callback<usize>,
}

#[function_component(UnitSelector)]
pub fn unit_selector(props: &UnitSelectorProps) -> Html {
    html! {
        <div class="unit-buttons">
            { UNIT_LABELS.iter().enumerate().map(|(idx, unit)| {
                let onclick = {
                    let onselect = props.onselect.clone();
                    Callback::from(move |_: MouseEvent| onselect.emit(idx))
                };
                let class = if props.selected == idx { "btn-contained" } else { "btn-outlined" };
                html! {
                    <button key={*unit} {class} {onclick}>{ *unit }</button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Renders the three threshold inputs.
///
/// The fields accept any text; malformed values are not rejected here
/// but degrade the classification downstream.
pub fn render_threshold_inputs(low: &TextInput, medium: &TextInput, high: &TextInput) -> Html {
    html! {
        <div class="thresholds">
            <p class="thresholds-caption">{ "Alarm Thresholds (Applicable only in CPS)" }</p>
            <div class="threshold-row">
                { threshold_field("Low", low) }
                { threshold_field("Medium", medium) }
                { threshold_field("High", high) }
            </div>
        </div>
    }
}

fn threshold_field(label: &str, input: &TextInput) -> Html {
    html! {
        <label class="threshold-field">
            <span>{ label }</span>
            <input
                type="number"
                value={input.text.clone()}
                oninput={input.oninput.clone()}
            />
        </label>
    }
}
