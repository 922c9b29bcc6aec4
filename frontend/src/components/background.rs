use yew::prelude::*;

use crate::motion::{Easing, Transition};

/// Slow floating outlines drifting behind the page: (class, cycle seconds, easing).
const FLOATERS: [(&str, f64, Easing); 3] = [
    ("floater floater-square", 25.0, Easing::Linear),
    ("floater floater-circle", 30.0, Easing::Linear),
    ("floater floater-dot", 20.0, Easing::EaseInOut),
];

#[function_component(BackgroundPattern)]
pub fn background_pattern() -> Html {
    html! {
        <div class="background-pattern">
            <style>
                {r#"
                    .background-pattern {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .background-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(150px);
                        transition: background 0.5s ease;
                    }
                    .background-orb.blue {
                        top: 0;
                        right: 0;
                        width: 800px;
                        height: 800px;
                        background: var(--orb-blue);
                    }
                    .background-orb.purple {
                        bottom: 0;
                        left: 0;
                        width: 900px;
                        height: 900px;
                        background: var(--orb-purple);
                    }
                    .background-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image:
                            linear-gradient(var(--grid-line) 1px, transparent 1px),
                            linear-gradient(90deg, var(--grid-line) 1px, transparent 1px);
                        background-size: 80px 80px;
                    }
                    .background-dots {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: radial-gradient(var(--subtle) 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .floater {
                        position: absolute;
                        border: 1px solid var(--faint-border);
                    }
                    .floater-square {
                        top: 5rem;
                        left: 25%;
                        width: 8rem;
                        height: 8rem;
                        border-radius: 1.5rem;
                        animation-name: floatSpin;
                    }
                    .floater-circle {
                        bottom: 8rem;
                        right: 33%;
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        animation-name: floatSpinReverse;
                    }
                    .floater-dot {
                        top: 50%;
                        right: 5rem;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        animation-name: floatBob;
                    }
                    @keyframes floatSpin {
                        0% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-30px) rotate(180deg); }
                        100% { transform: translateY(0) rotate(360deg); }
                    }
                    @keyframes floatSpinReverse {
                        0% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(40px) rotate(-180deg); }
                        100% { transform: translateY(0) rotate(-360deg); }
                    }
                    @keyframes floatBob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-50px); }
                    }
                    .background-vignette {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 50%, transparent 0%, var(--vignette) 100%);
                    }
                "#}
            </style>
            <div class="background-orb blue" />
            <div class="background-orb purple" />
            <div class="background-grid" />
            <div class="background-dots" />
            { for FLOATERS.iter().map(|&(class, seconds, easing)| {
                let cycle = Transition::new(seconds).easing(easing);
                html! {
                    <div
                        class={class}
                        style={format!(
                            "animation-duration: {}s; animation-timing-function: {}; animation-iteration-count: infinite;",
                            cycle.duration,
                            cycle.easing.css()
                        )}
                    />
                }
            }) }
            <div class="background-vignette" />
        </div>
    }
}
