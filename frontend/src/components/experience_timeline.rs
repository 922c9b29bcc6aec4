use yew::prelude::*;

use crate::content::Experience;
use crate::motion::{self, Pose, Transition};
use crate::viewport::dom::use_in_view;
use crate::viewport::watcher::WatchOptions;

/// Which side of the center line an entry sits on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even entries go left, odd entries go right.
    pub fn for_index(index: usize) -> Side {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Entrance pose: pushed out toward its own side.
    pub fn entrance(self) -> Pose {
        match self {
            Side::Left => Pose::slide(-50.0),
            Side::Right => Pose::slide(50.0),
        }
    }

    fn class(self) -> &'static str {
        match self {
            Side::Left => "timeline-entry left",
            Side::Right => "timeline-entry right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub experiences: Vec<Experience>,
}

#[function_component(ExperienceTimeline)]
pub fn experience_timeline(props: &TimelineProps) -> Html {
    html! {
        <div class="timeline">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: linear-gradient(to bottom, transparent, var(--border), transparent);
                    }
                    .timeline-entry {
                        position: relative;
                        display: flex;
                        margin-bottom: 3rem;
                    }
                    .timeline-entry.left { justify-content: flex-start; }
                    .timeline-entry.right { justify-content: flex-end; }
                    .timeline-body {
                        width: 45%;
                        padding: 1.75rem;
                        border-radius: 1.25rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        transition: border-color 0.3s ease;
                    }
                    .timeline-body:hover { border-color: var(--accent); }
                    .timeline-period {
                        font-size: 0.8rem;
                        color: var(--accent);
                        letter-spacing: 0.05em;
                    }
                    .timeline-body h3 {
                        margin: 0.5rem 0 0.25rem;
                        color: var(--text);
                    }
                    .timeline-company {
                        color: var(--muted);
                        margin-bottom: 0.75rem;
                    }
                    .timeline-body p {
                        color: var(--body);
                        line-height: 1.6;
                        margin: 0;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: 50%;
                        top: 2rem;
                        width: 1rem;
                        height: 1rem;
                        margin-left: -0.5rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #3b82f6, #a855f7);
                        box-shadow: 0 0 0 4px var(--bg);
                    }
                    @media (max-width: 768px) {
                        .timeline-line, .timeline-dot { display: none; }
                        .timeline-body { width: 100%; }
                    }
                "#}
            </style>
            <div class="timeline-line" />
            { for props.experiences.iter().enumerate().map(|(index, experience)| html! {
                <TimelineEntry
                    key={format!("{}-{}", experience.company, experience.period)}
                    experience={experience.clone()}
                    index={index}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineEntryProps {
    experience: Experience,
    index: usize,
}

#[function_component(TimelineEntry)]
fn timeline_entry(props: &TimelineEntryProps) -> Html {
    let TimelineEntryProps { experience, index } = props;
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), WatchOptions::continuous().amount(0.3));
    let side = Side::for_index(*index);
    let entrance = Transition::new(0.6).stagger(*index, 0.1);

    html! {
        <div ref={node} class={side.class()}>
            <div
                class="timeline-body"
                style={motion::style(side.entrance(), Pose::REST, in_view, entrance)}
            >
                <span class="timeline-period">{ &experience.period }</span>
                <h3>{ &experience.role }</h3>
                <div class="timeline-company">{ &experience.company }</div>
                <p>{ &experience.description }</p>
            </div>
            <div
                class="timeline-dot"
                style={motion::style(Pose::scaled(0.0), Pose::REST, in_view, entrance.delay(entrance.delay + 0.2))}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_alternate_sides() {
        let sides: Vec<_> = (0..4).map(Side::for_index).collect();
        assert_eq!(sides, [Side::Left, Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn entrance_comes_from_own_side() {
        assert!(Side::Left.entrance().translate_x < 0.0);
        assert!(Side::Right.entrance().translate_x > 0.0);
        assert_eq!(Side::Left.entrance().opacity, 0.0);
    }
}
