//! Light/dark theme state shared through a Yew context.
//!
//! The root component owns a [`ThemeStore`] reducer and hands its handle down
//! with [`ThemeProvider`]; every component that paints theme-dependent colors
//! reads it with [`use_theme`]. The toggle handler in the navbar is the only
//! writer.

use std::fmt;
use std::rc::Rc;

use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }

    /// Glyph shown on the toggle button: a sun while dark, a moon while light.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

/// Colors published as CSS custom properties for the current theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_hover: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub faint_border: &'static str,
    pub text: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub accent: &'static str,
    pub grid_line: &'static str,
    pub orb_blue: &'static str,
    pub orb_purple: &'static str,
    pub vignette: &'static str,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                background: "#000000",
                surface: "rgba(255, 255, 255, 0.05)",
                surface_hover: "rgba(255, 255, 255, 0.10)",
                card: "#171717",
                border: "rgba(255, 255, 255, 0.10)",
                faint_border: "rgba(255, 255, 255, 0.05)",
                text: "#ffffff",
                body: "#d4d4d4",
                muted: "#a3a3a3",
                subtle: "#525252",
                accent: "#60a5fa",
                grid_line: "rgba(255, 255, 255, 0.02)",
                orb_blue: "rgba(37, 99, 235, 0.20)",
                orb_purple: "rgba(147, 51, 234, 0.20)",
                vignette: "rgba(0, 0, 0, 0.3)",
            },
            Theme::Light => Palette {
                background: "#fafafa",
                surface: "rgba(255, 255, 255, 0.80)",
                surface_hover: "#ffffff",
                card: "#ffffff",
                border: "rgba(0, 0, 0, 0.10)",
                faint_border: "rgba(0, 0, 0, 0.05)",
                text: "#000000",
                body: "#404040",
                muted: "#525252",
                subtle: "#737373",
                accent: "#2563eb",
                grid_line: "rgba(0, 0, 0, 0.04)",
                orb_blue: "rgba(59, 130, 246, 0.30)",
                orb_purple: "rgba(168, 85, 247, 0.30)",
                vignette: "rgba(255, 255, 255, 0.3)",
            },
        }
    }
}

pub enum ThemeAction {
    Toggle,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ThemeStore {
    pub theme: Theme,
}

impl ThemeStore {
    pub fn toggle(&self) -> Self {
        ThemeStore {
            theme: self.theme.toggled(),
        }
    }
}

impl Reducible for ThemeStore {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let next = self.toggle();
                info!("Theme switched to {}", next.theme);
                Rc::new(next)
            }
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeStore>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the theme reducer and republishes the palette as global CSS variables.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_reducer(ThemeStore::default);
    let palette = store.theme.palette();

    let global = css!(
        r#"
        :root {
            --bg: ${bg};
            --surface: ${surface};
            --surface-hover: ${surface_hover};
            --card: ${card};
            --border: ${border};
            --faint-border: ${faint_border};
            --text: ${text};
            --body: ${body};
            --muted: ${muted};
            --subtle: ${subtle};
            --accent: ${accent};
            --grid-line: ${grid_line};
            --orb-blue: ${orb_blue};
            --orb-purple: ${orb_purple};
            --vignette: ${vignette};
        }
        html {
            scroll-behavior: smooth;
        }
        body {
            margin: 0;
            background: var(--bg);
            color: var(--text);
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            transition: background-color 0.5s ease, color 0.5s ease;
        }
        "#,
        bg = palette.background,
        surface = palette.surface,
        surface_hover = palette.surface_hover,
        card = palette.card,
        border = palette.border,
        faint_border = palette.faint_border,
        text = palette.text,
        body = palette.body,
        muted = palette.muted,
        subtle = palette.subtle,
        accent = palette.accent,
        grid_line = palette.grid_line,
        orb_blue = palette.orb_blue,
        orb_purple = palette.orb_purple,
        vignette = palette.vignette,
    );

    html! {
        <ContextProvider<ThemeContext> context={store}>
            <Global css={global} />
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme; falls back to the default when rendered outside a provider.
#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|store| store.theme)
        .unwrap_or_default()
}

/// Callback that flips the theme, or a no-op outside a provider.
#[hook]
pub fn use_theme_toggle() -> Callback<MouseEvent> {
    let store = use_context::<ThemeContext>();
    Callback::from(move |_| {
        if let Some(store) = &store {
            store.dispatch(ThemeAction::Toggle);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(ThemeStore::default().theme, Theme::Dark);
    }

    #[test]
    fn toggle_alternates_between_dark_and_light() {
        let store = ThemeStore::default();
        let once = store.toggle();
        assert_eq!(once.theme, Theme::Light);
        let twice = once.toggle();
        assert_eq!(twice.theme, Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_palette() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled().palette(), theme.palette());
        }
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }

    #[test]
    fn reducer_applies_toggle() {
        let store = Rc::new(ThemeStore::default());
        let store = store.reduce(ThemeAction::Toggle);
        assert_eq!(store.theme, Theme::Light);
        let store = store.reduce(ThemeAction::Toggle);
        assert_eq!(store.theme, Theme::Dark);
    }

    #[test]
    fn display_matches_css_names() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
