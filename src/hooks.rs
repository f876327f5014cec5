use std::cell::RefCell;

use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::counter::CounterAnimation;

/// One interval tick: advances the animation and hands the new value to `show`.
/// Returns whether the interval should keep running.
fn on_tick(anim: &RefCell<CounterAnimation>, show: impl FnOnce(u64)) -> bool {
    let (value, done) = {
        let mut a = anim.borrow_mut();
        (a.tick(), a.is_finished())
    };
    show(value);
    !done
}

/// Counts from 0 up to `target` once per mount.
///
/// The interval is dropped as soon as the animation finishes, or on unmount if
/// that happens first.
#[hook]
pub fn use_animated_counter(target: u64, tick_ms: u32, steps: u32) -> u64 {
    let anim = use_mut_ref(|| CounterAnimation::new(target, steps));
    let shown = use_state_eq(|| anim.borrow().value());
    let running = use_state_eq(|| true);

    {
        let anim = anim.clone();
        let shown = shown.setter();
        let stop = running.setter();
        use_effect_with(*running, move |running| {
            let handle = if *running {
                Some(Interval::new(tick_ms, move || {
                    if !on_tick(&anim, |v| shown.set(v)) {
                        stop.set(false);
                    }
                }))
            } else {
                None
            };
            move || drop(handle)
        });
    }

    *shown
}
