use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config::NAV_COMPACT_AFTER_PX;
use crate::theme::{use_theme, use_theme_toggle};

/// Page sections reachable from the navbar, in page order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavSection {
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 6] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Projects,
        NavSection::Skills,
        NavSection::Experience,
        NavSection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Projects => "Projects",
            NavSection::Skills => "Skills",
            NavSection::Experience => "Experience",
            NavSection::Contact => "Contact",
        }
    }

    /// Element id of the section, the lowercase label.
    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Projects => "projects",
            NavSection::Skills => "skills",
            NavSection::Experience => "experience",
            NavSection::Contact => "contact",
        }
    }
}

/// Scrolls the section into view; smoothing comes from `scroll-behavior`.
pub fn scroll_to(section: NavSection) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor()));
    match element {
        Some(element) => element.scroll_into_view(),
        None => debug!("No #{} section on this page", section.anchor()),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub initials: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_COMPACT_AFTER_PX;
    let theme = use_theme();
    let toggle_theme = use_theme_toggle();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: NavSection| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to(section);
        })
    };

    let menu_class = if *menu_open {
        "nav-items mobile-menu-open"
    } else {
        "nav-items"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 1rem;
                        transition: padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 1rem;
                    }
                    .nav-pill {
                        max-width: 72rem;
                        margin: 0 auto;
                        border-radius: 9999px;
                        padding: 0.75rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        backdrop-filter: blur(24px) saturate(150%);
                        background: var(--surface);
                        border: 1px solid var(--border);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
                        animation: navDrop 0.6s ease-out 0.2s both;
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .nav-logo {
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        font-size: 1.25rem;
                        font-weight: 700;
                        border: none;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-items {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: none;
                        background: transparent;
                        color: var(--muted);
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .nav-link:hover {
                        color: var(--text);
                        background: var(--surface-hover);
                        transform: scale(1.1);
                    }
                    .theme-toggle {
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 50%;
                        border: 1px solid var(--border);
                        background: var(--surface);
                        color: var(--accent);
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: transform 0.5s ease;
                    }
                    .theme-toggle:hover {
                        transform: scale(1.15) rotate(180deg);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--text);
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-items { display: none; }
                        .nav-items.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 1rem;
                            right: 1rem;
                            padding: 1rem;
                            border-radius: 1.5rem;
                            background: var(--card);
                            border: 1px solid var(--border);
                        }
                    }
                "#}
            </style>
            <div class="nav-pill">
                <button class="nav-logo" onclick={go_to(NavSection::Home)}>
                    { &props.initials }
                </button>

                <div class={menu_class}>
                    { for NavSection::ALL.iter().map(|&section| html! {
                        <button class="nav-link" onclick={go_to(section)}>
                            { section.label() }
                        </button>
                    }) }
                </div>

                <div style="display: flex; align-items: center; gap: 0.75rem;">
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme}
                        aria-label={if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }}
                        title={format!("Current theme: {}", theme)}
                    >
                        { theme.toggle_glyph() }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercase_labels() {
        for section in NavSection::ALL {
            assert_eq!(section.anchor(), section.label().to_lowercase());
        }
    }

    #[test]
    fn sections_listed_in_menu_order() {
        let labels: Vec<_> = NavSection::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["Home", "About", "Projects", "Skills", "Experience", "Contact"]
        );
    }
}
