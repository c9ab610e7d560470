use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::motion::{doubled, marquee_offset};

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub reverse: bool,
}

/// Endless horizontal strip of images. The list is rendered twice and the
/// track slides by one copy per cycle.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = use_node_ref();

    {
        let track = track.clone();
        use_effect_with_deps(
            move |reverse: &bool| {
                let reverse = *reverse;
                let started = Date::now();
                let interval = Interval::new(config::MARQUEE_TICK_MS, move || {
                    if let Some(track) = track.cast::<HtmlElement>() {
                        let x = marquee_offset(Date::now() - started, config::MARQUEE_CYCLE_MS, reverse);
                        let _ = track
                            .style()
                            .set_property("transform", &format!("translateX({:.3}%)", x));
                    }
                });
                move || drop(interval)
            },
            props.reverse,
        );
    }

    html! {
        <div class="marquee">
            <div class="marquee-fade marquee-fade-left"></div>
            <div class="marquee-fade marquee-fade-right"></div>
            <div ref={track} class="marquee-track">
                { for doubled(&props.images).into_iter().enumerate().map(|(i, src)| html! {
                    <div class="marquee-tile" key={i}>
                        <img {src} alt="Gallery" loading="lazy" />
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .marquee {
                    position: relative;
                    display: flex;
                    overflow: hidden;
                    width: 100%;
                }

                .marquee-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 6rem;
                    z-index: 10;
                }

                .marquee-fade-left { left: 0; background: linear-gradient(to right, #0a0a0a, transparent); }
                .marquee-fade-right { right: 0; background: linear-gradient(to left, #0a0a0a, transparent); }

                .marquee-track {
                    display: flex;
                    gap: 1rem;
                    padding: 0 0.5rem;
                    will-change: transform;
                }

                .marquee-tile {
                    width: 300px;
                    height: 400px;
                    flex-shrink: 0;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    filter: grayscale(1);
                    transition: filter 0.5s;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: #171717;
                }

                .marquee-tile:hover { filter: none; }
                .marquee-tile img { width: 100%; height: 100%; object-fit: cover; }
                "#}
            </style>
        </div>
    }
}
