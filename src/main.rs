use yew::prelude::*;

use kse100_dashboard::components::{ApiStatus, ThemeToggle};
use kse100_dashboard::config::Config;
use kse100_dashboard::hooks::use_theme::use_theme;
use kse100_dashboard::pages::{DashboardPage, SectorsPage};
use kse100_dashboard::services::query::QueryClient;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Page {
    Dashboard,
    Sectors,
}

impl Page {
    const ALL: [Page; 2] = [Page::Dashboard, Page::Sectors];

    fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Sectors => "Sectors",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| QueryClient::new());
    let page = use_state(|| Page::Dashboard);
    let theme = use_theme();

    let nav = Page::ALL
        .iter()
        .map(|&target| {
            let onclick = {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| page.set(target))
            };
            let class = classes!("nav-tab", (*page == target).then_some("active"));
            html! {
                <button {class} {onclick}>{target.label()}</button>
            }
        })
        .collect::<Html>();

    // Switching pages unmounts the other page and abandons its pending results
    let content = match *page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Sectors => html! { <SectorsPage dark_mode={theme.theme.is_dark()} /> },
    };

    html! {
        <ContextProvider<QueryClient> context={(*client).clone()}>
            <div class="app-container">
                <header class="app-header">
                    <div class="brand">
                        <span class="brand-logo">{"📈"}</span>
                        <span class="brand-name">{Config::APP_NAME}</span>
                    </div>
                    <nav class="app-nav">{nav}</nav>
                    <div class="header-actions">
                        <ApiStatus />
                        <ThemeToggle theme={theme.theme} on_toggle={theme.toggle.clone()} />
                    </div>
                </header>

                <main class="app-main">
                    {content}
                </main>

                <footer class="app-footer">
                    <p>{format!("{} · KSE100 market data", Config::APP_NAME)}</p>
                </footer>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<QueryClient>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
