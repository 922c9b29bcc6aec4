use std::rc::Rc;

use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::experience_timeline::ExperienceTimeline;
use crate::components::navbar::{scroll_to, NavSection};
use crate::components::project_card::{ProjectCard, PROJECT_CARD_CSS};
use crate::components::reveal::Reveal;
use crate::components::stacked_cards::StackedCards;
use crate::components::text_reveal::TextReveal;
use crate::content::SiteContent;
use crate::motion::{self, Pose, Transition};
use crate::viewport::dom::use_in_view;
use crate::viewport::watcher::WatchOptions;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let title = content
        .as_ref()
        .map(|c| format!("{} {} | Portfolio", c.owner.first_name, c.owner.last_name))
        .unwrap_or_else(|| "Portfolio".to_string());
    use_title(title);

    use_effect_with_deps(
        |_| {
            info!("Home page rendered");
            || ()
        },
        (),
    );

    let Some(content) = content else {
        warn!("Home rendered without site content");
        return html! {};
    };

    html! {
        <main class="home">
            <style>
                {r#"
                    .home section {
                        position: relative;
                        padding: 8rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .section-heading {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: var(--text);
                        margin: 0 0 3rem;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .pill-button {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        border: 1px solid var(--border);
                        transition: transform 0.3s ease;
                    }
                    .pill-button:hover { transform: scale(1.05); }
                    .pill-button.primary {
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        color: white;
                        border: none;
                    }
                    .pill-button.secondary {
                        background: var(--surface);
                        color: var(--text);
                    }
                "#}
            </style>
            <Hero content={content.clone()} />
            <AboutSection content={content.clone()} />
            <SkillsSection content={content.clone()} />
            <ProjectsSection content={content.clone()} />
            <ExperienceSection content={content.clone()} />
            <ContactSection content={content} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let owner = &props.content.owner;
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), WatchOptions::once());
    let enter = |hidden: Pose, delay: f64| {
        motion::style(hidden, Pose::REST, shown, Transition::new(0.8).delay(delay))
    };

    let view_projects = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to(NavSection::Projects);
    });

    html! {
        <section id="home" class="hero" ref={node}>
            <style>
                {r#"
                    .home section.hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        color: var(--muted);
                        font-size: 0.875rem;
                        margin-bottom: 2rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 9vw, 7rem);
                        line-height: 1;
                        margin: 0 0 1.5rem;
                        color: var(--text);
                    }
                    .hero-tagline {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        font-size: 1.25rem;
                        color: var(--muted);
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-bottom: 2.5rem;
                    }
                    .hero-social {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                    }
                    .hero-social a {
                        color: var(--muted);
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .hero-social a:hover { color: var(--accent); }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        width: 1.5rem;
                        height: 2.5rem;
                        margin-left: -0.75rem;
                        border-radius: 9999px;
                        border: 2px solid var(--border);
                    }
                    .scroll-indicator span {
                        display: block;
                        width: 4px;
                        height: 8px;
                        margin: 6px auto;
                        border-radius: 2px;
                        background: var(--muted);
                        animation: scrollHint 1.5s ease-in-out infinite;
                    }
                    @keyframes scrollHint {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="hero-badge" style={enter(Pose::rise(20.0), 0.2)}>
                    { &owner.welcome }
                </div>
                <h1 style={enter(Pose::rise(30.0), 0.3)}>
                    { &owner.first_name }{" "}
                    <span class="gradient-text">{ &owner.last_name }</span>
                </h1>
                <p class="hero-tagline" style={enter(Pose::rise(20.0), 0.5)}>
                    { &owner.tagline }
                </p>
                <div class="hero-actions" style={enter(Pose::rise(20.0), 0.7)}>
                    <button class="pill-button primary" onclick={view_projects}>
                        {"View Projects"}
                    </button>
                    <a class="pill-button secondary" href={owner.resume_url.clone()} download="">
                        {"Resume"}
                    </a>
                </div>
                <div class="hero-social" style={enter(Pose::HIDDEN, 0.9)}>
                    { for props.content.social.iter().map(|link| html! {
                        <a key={link.url.clone()} href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                            { &link.label }
                        </a>
                    }) }
                </div>
            </div>
            <div class="scroll-indicator" style={enter(Pose::HIDDEN, 1.2)}>
                <span></span>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section(props: &SectionProps) -> Html {
    let about = &props.content.about;

    html! {
        <section id="about">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 4rem;
                    }
                    .about-grid p {
                        color: var(--body);
                        line-height: 1.8;
                        font-size: 1.1rem;
                    }
                    .about-closing { color: var(--text) !important; font-weight: 500; }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .about-stat {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                    }
                    .about-stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .about-stat-label { color: var(--text); }
                    .about-stat-sublabel { color: var(--subtle); font-size: 0.8rem; }
                    .about-list h4 { color: var(--text); margin: 0 0 0.75rem; }
                    .about-list ul { margin: 0; padding-left: 1.25rem; color: var(--muted); }
                    .about-status {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .about-status span {
                        padding: 0.375rem 0.875rem;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                        background: var(--surface-hover);
                        color: var(--accent);
                    }
                    @media (max-width: 900px) {
                        .about-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-heading">{"About "}<span class="gradient-text">{"Me"}</span></h2>
                </Reveal>
                <div class="about-grid">
                    <div>
                        { for about.paragraphs.iter().enumerate().map(|(i, paragraph)| html! {
                            <Reveal key={i} transition={Transition::new(0.8).stagger(i, 0.1)}>
                                <p>{ paragraph }</p>
                            </Reveal>
                        }) }
                        <Reveal transition={Transition::new(0.8).stagger(about.paragraphs.len(), 0.1)}>
                            <p class="about-closing">{ &about.closing }</p>
                        </Reveal>
                    </div>
                    <div>
                        <Reveal hidden={Pose::slide(30.0)}>
                            <div class="about-stats">
                                { for about.stats.iter().map(|stat| html! {
                                    <div class="about-stat" key={stat.label.clone()}>
                                        <div class="about-stat-value gradient-text">{ &stat.value }</div>
                                        <div class="about-stat-label">{ &stat.label }</div>
                                        <div class="about-stat-sublabel">{ &stat.sublabel }</div>
                                    </div>
                                }) }
                            </div>
                        </Reveal>
                        <Reveal hidden={Pose::slide(30.0)} transition={Transition::new(0.8).delay(0.2)}>
                            <div class="about-list">
                                <h4>{"Dev Philosophy"}</h4>
                                <ul>
                                    { for about.philosophy.iter().map(|item| html! { <li>{ item }</li> }) }
                                </ul>
                                <div class="about-status">
                                    { for about.status.iter().map(|item| html! { <span>{ item }</span> }) }
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Section heading that scrambles in the first time it scrolls into view.
#[derive(Properties, PartialEq)]
struct ScrambledHeadingProps {
    text: AttrValue,
}

#[function_component(ScrambledHeading)]
fn scrambled_heading(props: &ScrambledHeadingProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), WatchOptions::once());

    html! {
        <h2 ref={node} class="section-heading">
            <TextReveal text={props.text.clone()} is_visible={visible} />
        </h2>
    }
}

#[function_component(SkillsSection)]
fn skills_section(props: &SectionProps) -> Html {
    let cards = use_memo(|content| Rc::new(content.cards.clone()), props.content.clone());

    html! {
        <section id="skills">
            <div class="section-inner">
                <ScrambledHeading text="What I Do" />
            </div>
            <StackedCards cards={(*cards).clone()} mode={props.content.deck_mode} />
        </section>
    }
}

#[function_component(ProjectsSection)]
fn projects_section(props: &SectionProps) -> Html {
    html! {
        <section id="projects">
            <style>
                { PROJECT_CARD_CSS }
                {r#"
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 900px) {
                        .project-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-inner">
                <ScrambledHeading text="Featured Projects" />
                <div class="project-grid">
                    { for props.content.projects.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.title.clone()} project={project.clone()} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section(props: &SectionProps) -> Html {
    html! {
        <section id="experience">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-heading">{"Experience"}</h2>
                </Reveal>
                <ExperienceTimeline experiences={props.content.experiences.clone()} />
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section(props: &SectionProps) -> Html {
    let content = &props.content;
    let contact = &content.contact;
    let (lead, rest) = match contact.heading.split_first() {
        Some((lead, rest)) => (lead.as_str(), rest),
        None => ("", &[][..]),
    };

    html! {
        <section id="contact">
            <style>
                {r#"
                    .contact {
                        text-align: center;
                    }
                    .contact .section-heading {
                        line-height: 1.1;
                    }
                    .contact-blurb {
                        max-width: 36rem;
                        margin: 0 auto 2.5rem;
                        color: var(--muted);
                        font-size: 1.2rem;
                    }
                    .contact-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-bottom: 2rem;
                    }
                    .contact-line {
                        color: var(--subtle);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="section-inner contact">
                <Reveal>
                    <h2 class="section-heading">
                        { lead }
                        { for rest.iter().map(|line| html! {
                            <>
                                <br />
                                <span class="gradient-text">{ line }</span>
                            </>
                        }) }
                    </h2>
                </Reveal>
                <Reveal transition={Transition::new(0.8).delay(0.2)}>
                    <p class="contact-blurb">{ &contact.blurb }</p>
                </Reveal>
                <Reveal transition={Transition::new(0.8).delay(0.4)}>
                    <div class="contact-actions">
                        <a class="pill-button primary" href={content.mailto()}>{"Email Me"}</a>
                        <a class="pill-button secondary" href={content.tel()}>{"Call Me"}</a>
                    </div>
                    <p class="contact-line">
                        { format!("{} · {}", content.owner.email, content.owner.phone_display) }
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
