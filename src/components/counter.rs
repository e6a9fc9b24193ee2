use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientCounterProps {
    pub target: u32,
    #[prop_or(2000)]
    pub duration_ms: u32,
}

/// Climbs from 0 to `target` over roughly `duration_ms`, ticking every 10 ms.
#[function_component(ClientCounter)]
pub fn client_counter(props: &ClientCounterProps) -> Html {
    let count = use_state(|| 0u32);

    {
        let count = count.clone();
        let target = props.target;
        let duration_ms = props.duration_ms.max(10);
        use_effect_with_deps(
            move |_| {
                let step = (target as f64 / (duration_ms as f64 / 10.0)).max(1.0);
                let current = std::rc::Rc::new(std::cell::RefCell::new(0.0f64));
                let interval_handle = std::rc::Rc::new(std::cell::RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let interval = Interval::new(10, move || {
                    let mut value = current.borrow_mut();
                    *value += step;
                    if *value >= target as f64 {
                        *value = target as f64;
                        if let Some(interval) = interval_handle.borrow_mut().take() {
                            drop(interval);
                        }
                    }
                    count.set(*value as u32);
                });
                *interval_handle_clone.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    html! {
        <p class="contador-clientes">{ format!("{}+", format_miles(*count)) }</p>
    }
}

/// Thousands separator, Spanish style: 5280 -> "5.280".
pub fn format_miles(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_miles;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_miles(0), "0");
        assert_eq!(format_miles(999), "999");
        assert_eq!(format_miles(5280), "5.280");
        assert_eq!(format_miles(1_234_567), "1.234.567");
    }
}
