use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::content::{ANNOUNCEMENT, BUNDLES_ANCHOR, NAV_LINKS};
use crate::dom::{scroll_to_section, ScrollFrame};
use crate::hooks::use_window_scroll;
use crate::state::{NavbarAction, NavbarState};

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer_eq(NavbarState::default);

    {
        let state = state.clone();
        use_window_scroll((), Callback::from(move |frame: ScrollFrame| {
            state.dispatch(NavbarAction::Scrolled(frame.scroll_y));
        }));
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavbarAction::ToggleMenu);
        })
    };

    // Anchor links keep their default jump; the menu just closes.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavbarAction::Navigated))
    };

    let shop = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavbarAction::Navigated);
            if let Err(e) = scroll_to_section(BUNDLES_ANCHOR) {
                log::warn!("Shop button: {}", e);
            }
        })
    };

    html! {
        <>
            <div class="announcement-bar">{ANNOUNCEMENT}</div>

            <nav class={classes!("top-nav", state.scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo">
                        {"Cold"}<span class="accent">{"Boxers"}</span>
                    </a>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.href} class="nav-link">{link.name}</a>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <Button variant={ButtonVariant::Primary} compact={true} onclick={shop.clone()}>
                            {"Shop Bundles"}
                        </Button>
                        <span class="nav-bag" aria-label="Bag">{"👜"}</span>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        if state.menu_open {
                            <span class="burger-close">{"✕"}</span>
                        } else {
                            <>
                                <span></span>
                                <span></span>
                                <span></span>
                            </>
                        }
                    </button>
                </div>
            </nav>

            if state.menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                            {link.name}
                        </a>
                    }) }
                    <Button variant={ButtonVariant::Primary} full_width={true} onclick={shop}>
                        {"Shop Bundles"}
                    </Button>
                </div>
            }

            <style>
                {r#"
                .announcement-bar {
                    position: relative;
                    z-index: 50;
                    background: #171717;
                    color: #ffffff;
                    font-size: 0.75rem;
                    padding: 0.5rem 0;
                    text-align: center;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1.5rem 0;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(10, 10, 10, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                    text-decoration: none;
                }

                .nav-logo .accent {
                    color: #38bdf8;
                }

                .nav-links, .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-actions {
                    gap: 1rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #d1d5db;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    transition: color 0.2s;
                }

                .nav-link:hover, .nav-bag:hover {
                    color: #ffffff;
                }

                .nav-bag {
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    color: #ffffff;
                    cursor: pointer;
                }

                .burger-menu span:not(.burger-close) {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    background: #0a0a0a;
                    padding: 6rem 1.5rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    animation: menuDrop 0.3s ease-out;
                }

                .mobile-link {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #ffffff;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding-bottom: 1rem;
                }

                @keyframes menuDrop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 768px) {
                    .nav-links, .nav-actions {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }

                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
