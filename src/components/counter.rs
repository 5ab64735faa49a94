use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::motion::use_in_view;
use crate::directory::record::group_thousands;

pub const COUNT_DURATION_MS: u32 = 1_500;
pub const FRAME_MS: u32 = 30;

/// A stat like "27K+" split into the number to count up to and the text
/// that trails it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatValue {
    pub target: u64,
    pub suffix: String,
    grouped: bool,
}

impl StatValue {
    pub fn render(&self, value: u64) -> String {
        let number = if self.grouped {
            group_thousands(value)
        } else {
            value.to_string()
        };
        format!("{}{}", number, self.suffix)
    }
}

/// None for values that are not a leading number, e.g. "24/7".
pub fn parse_stat(raw: &str) -> Option<StatValue> {
    let end = raw
        .find(|c: char| !(c.is_ascii_digit() || c == ','))
        .unwrap_or(raw.len());
    let (number, suffix) = raw.split_at(end);
    if suffix.starts_with('/') {
        return None;
    }
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let target = digits.parse().ok()?;
    Some(StatValue {
        target,
        suffix: suffix.to_string(),
        grouped: number.contains(','),
    })
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn value_at(target: u64, elapsed_ms: u32) -> u64 {
    if elapsed_ms >= COUNT_DURATION_MS {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(COUNT_DURATION_MS);
    (target as f64 * ease_out_cubic(progress)).round() as u64
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), 0.0);
    let elapsed = use_state_eq(|| 0u32);
    let stat = parse_stat(&props.value);

    {
        let elapsed_setter = elapsed.setter();
        let counts = stat.is_some();
        use_effect_with_deps(
            move |deps: &(bool, u32)| {
                let (visible, elapsed) = *deps;
                // each frame schedules the next; dropping the timeout on teardown stops the chain
                let frame = (counts && visible && elapsed < COUNT_DURATION_MS).then(|| {
                    let next = elapsed + FRAME_MS;
                    Timeout::new(FRAME_MS, move || elapsed_setter.set(next))
                });
                move || drop(frame)
            },
            (visible, *elapsed),
        );
    }

    let shown = match &stat {
        Some(stat) => stat.render(value_at(stat.target, *elapsed)),
        None => props.value.to_string(),
    };

    html! {
        <div class="stat" ref={node}>
            <h3 class="stat-value">{shown}</h3>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}
