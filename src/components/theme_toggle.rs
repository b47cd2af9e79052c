use yew::prelude::*;

use crate::hooks::use_theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Light/dark switch button
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let (icon, label) = match props.theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        Theme::Light => ("🌙", "Switch to dark mode"),
    };

    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
