use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::config::SCRAMBLE_TICK_MS;
use crate::scramble::{ticks_to_resolve, Phase, Scrambler};

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    pub is_visible: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Scrambles `text` into place each time `is_visible` turns true.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let glyphs = use_state(|| vec![None; props.text.chars().count()]);

    {
        let glyphs = glyphs.clone();
        use_effect_with_deps(
            move |(text, is_visible)| {
                let mut scrambler = Scrambler::new(text);
                scrambler.set_visible(*is_visible);
                glyphs.set(scrambler.display().to_vec());

                let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
                if scrambler.is_running() {
                    debug!(
                        "Scrambling \"{}\" over {} ticks",
                        text,
                        ticks_to_resolve(text.chars().count())
                    );
                    let scrambler = Rc::new(RefCell::new(scrambler));
                    let slot = ticker.clone();
                    let interval = Interval::new(SCRAMBLE_TICK_MS, move || {
                        let (frame, running) = {
                            let mut scrambler = scrambler.borrow_mut();
                            if !scrambler.is_running() {
                                return;
                            }
                            scrambler.tick(&mut rand::thread_rng());
                            if scrambler.phase() == Phase::Resolved {
                                debug!("Resolved \"{}\"", scrambler.display_string());
                            }
                            (scrambler.display().to_vec(), scrambler.is_running())
                        };
                        glyphs.set(frame);
                        if !running {
                            // The interval cannot be dropped from inside its own callback.
                            if let Some(interval) = slot.borrow_mut().take() {
                                Timeout::new(0, move || drop(interval)).forget();
                            }
                        }
                    });
                    *ticker.borrow_mut() = Some(interval);
                }

                move || {
                    ticker.borrow_mut().take();
                }
            },
            (props.text.clone(), props.is_visible),
        );
    }

    let opacity = if props.is_visible { 1 } else { 0 };

    html! {
        <div
            class={classes!("text-reveal", props.class.clone())}
            style={format!("opacity: {}; transition: opacity 0.3s ease;", opacity)}
        >
            <style>
                {r#"
                    .text-reveal {
                        letter-spacing: 0.02em;
                    }
                    .text-reveal span {
                        display: inline-block;
                        font-variant-numeric: tabular-nums;
                    }
                    .text-reveal span.space {
                        min-width: 0.3em;
                    }
                "#}
            </style>
            { for glyphs.iter().map(|glyph| match glyph {
                Some(' ') => html! { <span class="space">{" "}</span> },
                Some(ch) => html! { <span>{ ch.to_string() }</span> },
                None => html! { <span>{"\u{00A0}"}</span> },
            }) }
        </div>
    }
}
