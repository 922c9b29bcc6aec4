use yew::prelude::*;

use crate::content::Project;
use crate::motion::{self, Pose, Transition};
use crate::viewport::dom::use_in_view;
use crate::viewport::watcher::WatchOptions;

/// Style for a gradient-filled layer that grows while the card is hovered.
fn tinted(gradient: &str, rest: Pose, lifted: Pose, hovered: bool, transition: Transition) -> String {
    format!("background: {}; {}", gradient, motion::style(rest, lifted, hovered, transition))
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, index } = props;
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), WatchOptions::continuous().amount(0.3));
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let hovered = *hovered;

    let entrance = Transition::new(0.6).stagger(*index, 0.1);
    let gradient = project.gradient.css();
    let hover = |rest: Pose, lifted: Pose, transition: Transition| {
        motion::style(rest, lifted, hovered, transition)
    };

    html! {
        <div
            ref={node}
            class="project-card"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            style={motion::style(Pose::rise(50.0), Pose::REST, in_view, entrance)}
        >
            <div class="project-card-inner">
                <div
                    class="project-glow"
                    style={tinted(&gradient, Pose::HIDDEN, Pose::scaled(1.5).with_rotate(180.0).with_opacity(0.2), hovered, Transition::new(1.0))}
                />

                <div class="project-visual">
                    <div
                        class="project-visual-fill"
                        style={tinted(&gradient, Pose::REST.with_opacity(0.5), Pose::scaled(1.2).with_rotate(5.0).with_opacity(0.5), hovered, Transition::new(0.5))}
                    />
                    <div
                        class="project-shape circle"
                        style={hover(Pose::REST, Pose::scaled(1.2).with_rotate(360.0), Transition::new(1.0))}
                    />
                    <div
                        class="project-shape square"
                        style={hover(Pose::REST, Pose::scaled(1.2).with_rotate(-360.0), Transition::new(1.0))}
                    />
                </div>

                <div class="project-content">
                    <h3 style={hover(Pose::REST, Pose::slide(5.0).with_opacity(1.0), Transition::new(0.3))}>
                        { &project.title }
                    </h3>
                    <p style={hover(Pose::REST, Pose::slide(5.0).with_opacity(1.0), Transition::new(0.3).delay(0.05))}>
                        { &project.description }
                    </p>
                    <div class="project-tags">
                        { for project.tags.iter().enumerate().map(|(i, tag)| html! {
                            <span
                                key={tag.clone()}
                                class="project-tag"
                                style={motion::style(
                                    Pose::scaled(0.8).with_opacity(0.0),
                                    Pose::REST,
                                    in_view,
                                    Transition::new(0.3).stagger(*index, 0.1).stagger(i, 0.05),
                                )}
                            >
                                { tag }
                            </span>
                        }) }
                    </div>
                </div>

                <div
                    class="project-accent"
                    style={tinted(&gradient, Pose::REST.with_opacity(0.2), Pose::scaled(2.0).with_opacity(0.2), hovered, Transition::new(0.5))}
                />
            </div>
        </div>
    }
}

/// Styles shared by every project card; rendered once by the grid.
pub const PROJECT_CARD_CSS: &str = r#"
    .project-card {
        position: relative;
        cursor: pointer;
    }
    .project-card:hover .project-card-inner {
        transform: translateY(-10px) scale(1.02);
    }
    .project-card-inner {
        position: relative;
        padding: 2rem;
        border-radius: 1.5rem;
        overflow: hidden;
        background: var(--surface);
        border: 1px solid var(--border);
        backdrop-filter: blur(4px);
        transition: transform 0.5s ease;
    }
    .project-glow {
        position: absolute;
        inset: 0;
    }
    .project-visual {
        position: relative;
        height: 12rem;
        border-radius: 1rem;
        margin-bottom: 1.5rem;
        overflow: hidden;
        background: var(--surface-hover);
        transition: transform 0.3s ease;
    }
    .project-visual:hover {
        transform: scale(1.05);
    }
    .project-visual-fill {
        position: absolute;
        inset: 0;
    }
    .project-shape {
        position: absolute;
        border: 2px solid rgba(255, 255, 255, 0.3);
    }
    .project-shape.circle {
        top: 1rem;
        right: 1rem;
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
    }
    .project-shape.square {
        bottom: 1rem;
        left: 1rem;
        width: 3rem;
        height: 3rem;
    }
    .project-content {
        position: relative;
        z-index: 1;
    }
    .project-content h3 {
        margin: 0 0 0.75rem;
        font-size: 1.5rem;
        color: var(--text);
    }
    .project-content p {
        margin: 0 0 1rem;
        color: var(--muted);
        line-height: 1.6;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .project-tag {
        font-size: 0.75rem;
        padding: 0.375rem 0.75rem;
        border-radius: 9999px;
        background: var(--surface-hover);
        border: 1px solid var(--border);
        color: var(--body);
    }
    .project-accent {
        position: absolute;
        top: 0;
        right: 0;
        width: 5rem;
        height: 5rem;
        filter: blur(40px);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tinted_layer_follows_hover_flag() {
        let t = Transition::new(0.5);
        let lifted = Pose::scaled(2.0).with_opacity(0.2);
        let resting = tinted("red", Pose::REST.with_opacity(0.2), lifted, false, t);
        let hovered = tinted("red", Pose::REST.with_opacity(0.2), lifted, true, t);
        assert!(resting.starts_with("background: red; opacity: 0.2;"));
        assert!(resting.contains("scale(1)"));
        assert!(hovered.contains("scale(2)"));
        assert!(hovered.ends_with(&t.css()));
    }
}
