//! Main module for the Live Speedometer Monitor using Yew.
//! Wires UI components, state hooks, and the sample timer.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use live_speedometer::{classify_alarm, SampleSet, ThresholdText, UNIT_LABELS};

mod components;
mod config;
mod gauge;
mod hooks;

use components::{render_threshold_inputs, AlarmChip, UnitSelector};
use config::SAMPLE_INTERVAL_MS;
use gauge::Speedometer;
use hooks::use_text_input;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let samples = use_state(SampleSet::zeroed);
    let unit_index = use_state(|| 0usize);
    let low = use_text_input("");
    let medium = use_text_input("");
    let high = use_text_input("");

    // Replace the sample set wholesale every tick. The interval handle
    // is dropped by the effect destructor, which cancels the timer on
    // unmount so no ghost update can fire after teardown.
    {
        let samples = samples.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(SAMPLE_INTERVAL_MS, move || {
                samples.set(SampleSet::simulate(&mut rand::rng()));
            });
            move || drop(interval)
        });
    }

    // Index always in range: it only ever comes from the fixed list.
    let current_unit = UNIT_LABELS[*unit_index];
    let current_value = samples.value_for(*unit_index);

    let thresholds = ThresholdText {
        low: low.text.clone(),
        medium: medium.text.clone(),
        high: high.text.clone(),
    };
    let alarm = classify_alarm(current_value, &thresholds);

    let onselect = {
        let unit_index = unit_index.clone();
        Callback::from(move |idx: usize| unit_index.set(idx))
    };

    html! {
        <div class="card">
            <h2>{ "Simple Speedometer" }</h2>

            <div class="gauge-area">
                <Speedometer value={current_value} units={current_unit} />
            </div>

            // Threshold semantics only apply to rate-like CPS values,
            // so the chip is hidden for the other units.
            if current_unit == "CPS" {
                <AlarmChip status={alarm} value={current_value} />
            }

            <UnitSelector selected={*unit_index} {onselect} />

            { render_threshold_inputs(&low, &medium, &high) }
        </div>
    }
}

/// App wrapper providing the page shell around the widget.
#[function_component]
pub fn App() -> Html {
    html! {
        <div class="container">
            <h1>{ "Live Speedometer Monitor" }</h1>
            <Main />
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
