use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

mod config;
mod chat {
    pub mod assistant;
    pub mod gemini;
    pub mod transcript;
}
mod pages {
    pub mod landing;
}

use chat::assistant::ChatAssistant;
use config::AssistantConfig;
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let dropdown_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 20);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Clicking anywhere outside the dropdown closes it.
    {
        let dropdown_open = dropdown_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let document_clone = document.clone();

                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let inside_dropdown = e
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(".nav-dropdown").ok().flatten())
                        .is_some();
                    if !inside_dropdown {
                        dropdown_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                document
                    .add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document_clone
                        .remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dropdown_open.set(!*dropdown_open);
        })
    };

    let close_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            dropdown_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{ "Habilit" }</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div class="nav-dropdown">
                        <button class="nav-link" onclick={toggle_dropdown}>
                            { "A Plataforma ▾" }
                        </button>
                        if *dropdown_open {
                            <div class="nav-dropdown-panel">
                                <a href="#solucao" onclick={close_dropdown.clone()}>
                                    { "O App" }
                                </a>
                                <a href="#como-funciona" onclick={close_dropdown.clone()}>
                                    { "Como Funciona" }
                                </a>
                            </div>
                        }
                    </div>
                    <a href="#instrutores" class="nav-link" onclick={close_menu.clone()}>
                        { "Para Instrutores" }
                    </a>
                    <button class="nav-cta" onclick={close_menu.clone()}>
                        { "Acesso Antecipado" }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let assistant_config = AssistantConfig::from_build_env();

    html! {
        <>
            <Nav />
            <Landing />
            <ChatAssistant config={assistant_config} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
