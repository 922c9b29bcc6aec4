//! The "What I Do" deck: full-height sticky cards that stack as you scroll.

use std::rc::Rc;

use log::debug;
use serde::Deserialize;
use yew::prelude::*;

use crate::content::Card;
use crate::motion::{self, Easing, Pose, Transition};
use crate::viewport::dom::use_in_view;
use crate::viewport::watcher::{Margin, WatchOptions};

/// Pose of a card that is stacked but not active.
pub const CARD_INACTIVE: Pose = Pose::scaled(0.95).with_opacity(0.6);

/// Viewport shrink applied when testing a card, as a CSS margin.
pub const CARD_ROOT_MARGIN: &str = "0px 0px -200px 0px";

/// Each card activates once 40% of it is inside the viewport minus its
/// bottom 200px, so it lights up before it is centered.
pub fn card_watch_options() -> WatchOptions {
    let margin = Margin::parse(CARD_ROOT_MARGIN).unwrap_or(Margin::bottom(-200.0));
    WatchOptions::continuous().amount(0.4).margin(margin)
}

/// Stroke style that draws the card's curved line in as the card activates.
/// The path is normalised with `pathLength="1"`.
pub fn line_draw_style(active: bool) -> String {
    let t = Transition::new(1.5).delay(0.2).easing(Easing::EaseInOut);
    format!(
        "stroke-dasharray: 1; stroke-dashoffset: {}; transition: stroke-dashoffset {}s {} {}s;",
        if active { 0 } else { 1 },
        t.duration,
        t.easing.css(),
        t.delay
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckMode {
    /// Active index follows the cards in and out of view.
    #[default]
    Continuous,
    /// Active index never drops below the highest one reached.
    Latched,
}

/// Folds per-card visibility into the deck's active card index.
///
/// Sticky cards stay pinned under the ones scrolling over them, so several can
/// be "in view" at once; the active one is the highest index among them.
#[derive(Clone, PartialEq, Debug)]
pub struct DeckTracker {
    mode: DeckMode,
    in_view: Vec<bool>,
    highest: Option<usize>,
}

impl DeckTracker {
    pub fn new(len: usize, mode: DeckMode) -> Self {
        DeckTracker {
            mode,
            in_view: vec![false; len],
            highest: None,
        }
    }

    pub fn len(&self) -> usize {
        self.in_view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_view.is_empty()
    }

    /// Records one card's signal and returns the resulting active index.
    /// Indices outside the deck are ignored.
    pub fn report(&mut self, index: usize, in_view: bool) -> Option<usize> {
        if let Some(slot) = self.in_view.get_mut(index) {
            *slot = in_view;
        }
        if let Some(current) = self.in_view.iter().rposition(|&v| v) {
            self.highest = Some(self.highest.map_or(current, |h| h.max(current)));
        }
        self.active()
    }

    pub fn active(&self) -> Option<usize> {
        match self.mode {
            DeckMode::Continuous => self.in_view.iter().rposition(|&v| v),
            DeckMode::Latched => self.highest,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StackedCardsProps {
    pub cards: Rc<Vec<Card>>,
    #[prop_or_default]
    pub mode: DeckMode,
}

#[function_component(StackedCards)]
pub fn stacked_cards(props: &StackedCardsProps) -> Html {
    let tracker = use_mut_ref(|| DeckTracker::new(props.cards.len(), props.mode));
    let active = use_state_eq(|| None::<usize>);

    let on_card_change = {
        let tracker = tracker.clone();
        let active = active.clone();
        Callback::from(move |(index, in_view): (usize, bool)| {
            let next = tracker.borrow_mut().report(index, in_view);
            if *active != next {
                debug!("Deck active card: {:?}", next);
            }
            active.set(next);
        })
    };

    if tracker.borrow().is_empty() {
        return html! {};
    }
    let len = tracker.borrow().len();

    html! {
        <div class="deck">
            <style>
                {r#"
                    .deck {
                        position: relative;
                    }
                    .deck-slot {
                        height: 100vh;
                        position: sticky;
                        top: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0 2rem;
                        box-sizing: border-box;
                    }
                    .deck-frame {
                        width: 100%;
                        max-width: 72rem;
                        will-change: transform;
                    }
                    .deck-card {
                        position: relative;
                        border-radius: 3rem;
                        padding: 4rem;
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        overflow: hidden;
                        background: var(--card);
                        border: 2px solid var(--border);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        box-sizing: border-box;
                    }
                    .deck-tint {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                    }
                    .deck-decor {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    .decor-circle {
                        position: absolute;
                        top: -5rem;
                        right: -5rem;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 50%;
                        border: 2px solid var(--border);
                    }
                    .decor-square {
                        position: absolute;
                        bottom: -4rem;
                        left: -4rem;
                        width: 12rem;
                        height: 12rem;
                        border-radius: 1.5rem;
                        border: 2px solid var(--border);
                    }
                    .decor-ring {
                        position: absolute;
                        top: 25%;
                        right: 25%;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        border: 2px solid var(--faint-border);
                    }
                    .decor-triangle {
                        position: absolute;
                        bottom: 33%;
                        right: 33%;
                    }
                    .decor-triangle polygon,
                    .decor-curve path {
                        fill: none;
                        stroke: var(--faint-border);
                        stroke-width: 2;
                    }
                    .decor-curve {
                        position: absolute;
                        bottom: 0;
                        right: 0;
                    }
                    .decor-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.03;
                        background-image:
                            linear-gradient(var(--text) 1px, transparent 1px),
                            linear-gradient(90deg, var(--text) 1px, transparent 1px);
                        background-size: 50px 50px;
                    }
                    .decor-dots {
                        position: absolute;
                        top: 2.5rem;
                        left: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .decor-dots span {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: var(--subtle);
                    }
                    .decor-orb {
                        position: absolute;
                        bottom: -8rem;
                        right: -8rem;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .deck-body {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                    }
                    .deck-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 5rem;
                        height: 5rem;
                        border-radius: 1rem;
                        color: #fff;
                        font-size: 1.875rem;
                        font-weight: 700;
                    }
                    .deck-title {
                        margin: 0;
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        line-height: 1.1;
                        color: var(--text);
                    }
                    .deck-description {
                        margin: 0;
                        max-width: 48rem;
                        font-size: clamp(1.125rem, 2vw, 1.5rem);
                        line-height: 1.6;
                        color: var(--body);
                    }
                    .deck-skills {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .deck-skill {
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        background: var(--surface-hover);
                        border: 1px solid var(--border);
                        color: var(--text);
                    }
                    .deck-rail {
                        position: fixed;
                        right: 1.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 40;
                    }
                    .deck-rail span {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: var(--subtle);
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .deck-rail span.current {
                        background: var(--accent);
                        transform: scale(1.6);
                    }
                    @media (max-width: 768px) {
                        .deck-slot { padding: 0 1rem; }
                        .deck-card { padding: 2rem; border-radius: 1.5rem; }
                        .deck-rail { display: none; }
                    }
                "#}
            </style>
            { for props.cards.iter().enumerate().map(|(index, card)| html! {
                <ScrollCard
                    key={card.id.clone()}
                    card={card.clone()}
                    index={index}
                    on_change={on_card_change.clone()}
                />
            }) }
            {
                if let Some(current) = *active {
                    html! {
                        <div class="deck-rail">
                            { for (0..len).map(|i| html! {
                                <span class={classes!((i == current).then_some("current"))} />
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollCardProps {
    pub card: Card,
    pub index: usize,
    pub on_change: Callback<(usize, bool)>,
}

#[function_component(ScrollCard)]
pub fn scroll_card(props: &ScrollCardProps) -> Html {
    let ScrollCardProps { card, index, on_change } = props;
    let node = use_node_ref();
    let active = use_in_view(node.clone(), card_watch_options());

    {
        let on_change = on_change.clone();
        use_effect_with_deps(
            move |(index, active)| {
                on_change.emit((*index, *active));
                || ()
            },
            (*index, active),
        );
    }

    let gradient = card.gradient.css();
    let shape = |hidden: Pose, shown: Pose, transition: Transition| {
        motion::style(hidden, shown, active, transition)
    };

    html! {
        <div ref={node} class="deck-slot" style={format!("z-index: {};", index)}>
            <div class="deck-frame">
                <div
                    class={classes!("deck-card", active.then_some("active"))}
                    style={shape(CARD_INACTIVE, Pose::REST, Transition::new(0.7))}
                >
                    <div class="deck-tint" style={format!("background: {};", gradient)} />

                    <div class="deck-decor">
                        <div
                            class="decor-circle"
                            style={shape(Pose::scaled(0.0), Pose::REST.with_rotate(360.0), Transition::new(1.5))}
                        />
                        <div
                            class="decor-square"
                            style={shape(Pose::scaled(0.0).with_rotate(45.0), Pose::REST, Transition::new(1.2).delay(0.1))}
                        />
                        <div
                            class="decor-ring"
                            style={shape(Pose::scaled(0.0), Pose::REST, Transition::new(0.8).delay(0.2))}
                        />
                        <div
                            class="decor-triangle"
                            style={shape(Pose::HIDDEN, Pose::REST.with_rotate(360.0), Transition::new(1.5).delay(0.15))}
                        >
                            <svg width="100" height="100" viewBox="0 0 100 100">
                                <polygon points="50,10 90,90 10,90" />
                            </svg>
                        </div>
                        <div class="decor-dots">
                            { for (0..5).map(|i| html! {
                                <span style={shape(Pose::slide(-20.0), Pose::REST, Transition::new(0.5).delay(0.3).stagger(i, 0.05))} />
                            }) }
                        </div>
                        <svg class="decor-curve" width="200" height="200" viewBox="0 0 200 200">
                            <path d="M 0 200 Q 100 100 200 0" pathLength="1" style={line_draw_style(active)} />
                        </svg>
                        <div class="decor-grid" />
                        <div
                            class="decor-orb"
                            style={format!(
                                "background: {}; {}",
                                gradient,
                                shape(Pose::HIDDEN.with_scale(0.0), Pose::REST.with_opacity(0.2), Transition::new(1.0))
                            )}
                        />
                    </div>

                    <div class="deck-body">
                        <div>
                            <div
                                class="deck-badge"
                                style={format!(
                                    "background: {}; {}",
                                    gradient,
                                    shape(Pose::rise(16.0), Pose::REST, Transition::new(0.5))
                                )}
                            >
                                { &card.number }
                            </div>
                        </div>
                        <h3
                            class="deck-title"
                            style={shape(Pose::rise(32.0), Pose::REST, Transition::new(0.7).delay(0.1))}
                        >
                            { &card.title }
                        </h3>
                        <p
                            class="deck-description"
                            style={shape(Pose::rise(32.0), Pose::REST, Transition::new(0.7).delay(0.2))}
                        >
                            { &card.description }
                        </p>
                    </div>

                    <div class="deck-skills">
                        { for card.skills.iter().enumerate().map(|(i, skill)| html! {
                            <div
                                key={skill.clone()}
                                class="deck-skill"
                                style={shape(
                                    Pose::rise(16.0),
                                    Pose::REST,
                                    Transition::new(0.5).delay(0.3).stagger(i, 0.05),
                                )}
                            >
                                { skill }
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_card_scroll_activates_in_order() {
        let mut deck = DeckTracker::new(4, DeckMode::Continuous);
        let mut trail = Vec::new();
        // Scrolling down: each card enters while the previous stays pinned.
        for index in 0..4 {
            trail.push(deck.report(index, true));
        }
        assert_eq!(trail, vec![Some(0), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn continuous_deck_drops_back_when_scrolling_up() {
        let mut deck = DeckTracker::new(4, DeckMode::Continuous);
        for index in 0..4 {
            deck.report(index, true);
        }
        assert_eq!(deck.report(3, false), Some(2));
        assert_eq!(deck.report(2, false), Some(1));
    }

    #[test]
    fn latched_deck_never_reverts() {
        let mut deck = DeckTracker::new(4, DeckMode::Latched);
        for index in 0..3 {
            deck.report(index, true);
        }
        assert_eq!(deck.report(2, false), Some(2));
        assert_eq!(deck.report(1, false), Some(2));
        assert_eq!(deck.report(0, false), Some(2));
        assert_eq!(deck.report(3, true), Some(3));
    }

    #[test]
    fn nothing_in_view_means_no_active_card() {
        let mut deck = DeckTracker::new(2, DeckMode::Continuous);
        assert_eq!(deck.active(), None);
        assert_eq!(deck.report(0, false), None);
        assert_eq!(deck.report(9, true), None);
        assert_eq!(deck.len(), 2);
        assert!(!deck.is_empty());
    }

    #[test]
    fn card_pose_is_symmetric_and_idempotent() {
        let t = Transition::new(0.7);
        let inactive = motion::style(CARD_INACTIVE, Pose::REST, false, t);
        let active = motion::style(CARD_INACTIVE, Pose::REST, true, t);
        assert!(inactive.contains("opacity: 0.6;"));
        assert!(inactive.contains("scale(0.95)"));
        assert!(active.contains("opacity: 1;"));
        assert!(active.contains("scale(1)"));
        // Re-activating or re-deactivating yields the same style.
        assert_eq!(inactive, motion::style(CARD_INACTIVE, Pose::REST, false, t));
        assert_eq!(active, motion::style(CARD_INACTIVE, Pose::REST, true, t));
    }

    #[test]
    fn curved_line_draws_in_only_while_active() {
        let hidden = line_draw_style(false);
        let drawn = line_draw_style(true);
        assert!(hidden.contains("stroke-dashoffset: 1;"));
        assert!(drawn.contains("stroke-dashoffset: 0;"));
        assert!(drawn.ends_with("transition: stroke-dashoffset 1.5s ease-in-out 0.2s;"));
    }

    #[test]
    fn card_watch_uses_negative_bottom_margin() {
        let options = card_watch_options();
        assert!(!options.once);
        assert_eq!(options.margin, Margin::bottom(-200.0));
        assert_eq!(Margin::parse(CARD_ROOT_MARGIN), Some(options.margin));
    }
}
