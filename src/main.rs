use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod directory;
mod intake;
mod components {
    pub mod counter;
    pub mod faq;
    pub mod motion;
    pub mod partner_directory;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod register;
}

use pages::{about::About, home::Home, register::Register};

/// Scroll offset past which the navbar turns solid.
const NAV_SOLID_AFTER: f64 = 600.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services section");
            html! { <Home focus={Some(AttrValue::from("services"))} /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SOLID_AFTER;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"DottFit"}
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About Us"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Register} classes="nav-register-button">
                            {"Register"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
