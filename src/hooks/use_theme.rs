use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Handle returned by `use_theme`
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Follows the system color scheme until the user toggles; kept in memory only.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(detect_system_preference);
    let overridden = use_mut_ref(|| false);

    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            apply_theme_to_dom(*theme);
            || ()
        });
    }

    {
        let setter = theme.setter();
        let overridden = overridden.clone();
        use_effect_with((), move |_| {
            let listener = system_preference_listener(move || {
                if !*overridden.borrow() {
                    setter.set(detect_system_preference());
                }
            });
            move || drop(listener)
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            *overridden.borrow_mut() = true;
            theme.set(theme.toggled());
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Sets `data-theme` on `<html>`
fn apply_theme_to_dom(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.attribute()) {
            gloo::console::warn!(format!("Failed to apply theme: {e:?}"));
        }
    }
}

fn system_preference_listener<F>(on_change: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let media_query = web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())?;
    let target = media_query.dyn_into::<web_sys::EventTarget>().ok()?;

    Some(EventListener::new(&target, "change", move |_| on_change()))
}
