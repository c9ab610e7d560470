use log::warn;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{ScrollFrame, StyleTarget};
use crate::hooks::use_window_scroll;
use crate::motion::{parallax_offset, parallax_transform, scroll_progress};

#[derive(Properties, PartialEq)]
pub struct ParallaxImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or(config::PARALLAX_DEFAULT_OFFSET_PX)]
    pub offset: f64,
}

/// Dims an image that failed to load instead of showing a broken icon.
pub fn dim_failed_image(image: &impl StyleTarget) {
    if let Err(e) = image.set_style("opacity", config::FAILED_IMAGE_OPACITY) {
        warn!("Could not dim image: {}", e);
    }
}

pub fn dim_on_error() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            warn!("Image failed to load: {:?}", img.get_attribute("src"));
            dim_failed_image(&img);
        }
    })
}

/// Writes the parallax transform for a frame at `progress` through the viewport.
pub fn apply_parallax(image: &impl StyleTarget, progress: f64, range: f64) {
    let transform = parallax_transform(parallax_offset(progress, range), config::PARALLAX_SCALE);
    let _ = image.set_style("transform", &transform);
}

#[function_component(ParallaxImage)]
pub fn parallax_image(props: &ParallaxImageProps) -> Html {
    let frame = use_node_ref();
    let image = use_node_ref();

    {
        let frame = frame.clone();
        let image = image.clone();
        let range = props.offset;
        use_window_scroll(range, Callback::from(move |scroll: ScrollFrame| {
            let (Some(frame), Some(image)) = (frame.cast::<Element>(), image.cast::<HtmlElement>()) else {
                return;
            };
            let rect = frame.get_bounding_client_rect();
            let progress = scroll_progress(rect.top(), rect.height(), scroll.viewport_height);
            apply_parallax(&image, progress, range);
        }));
    }

    html! {
        <div ref={frame} class="parallax-frame">
            <img
                ref={image}
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                style={format!("transform: {};", parallax_transform(-props.offset, config::PARALLAX_SCALE))}
                onerror={dim_on_error()}
            />
            <div class="parallax-shade"></div>

            <style>
                {r#"
                .parallax-frame {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    width: 100%;
                    height: 100%;
                    background: #171717;
                }

                .parallax-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.9;
                    will-change: transform;
                }

                .parallax-frame:hover img { opacity: 1; }

                .parallax-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.1);
                    transition: background 0.5s;
                }

                .parallax-frame:hover .parallax-shade { background: transparent; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::dom::testing::{FakeElement, FakeWindow};
    use crate::dom::ScrollSubscription;

    #[test]
    fn failed_image_is_dimmed() {
        let image = FakeElement::default();
        dim_failed_image(&image);
        assert_eq!(image.style("opacity").as_deref(), Some("0.5"));
    }

    #[test]
    fn parallax_follows_the_current_offset() {
        let window = FakeWindow::default();
        let image = Rc::new(FakeElement::default());

        let subscribe = |range: f64| {
            let image = image.clone();
            ScrollSubscription::on(window.clone(), move |_| apply_parallax(&*image, 1.0, range))
                .unwrap()
        };

        let first = subscribe(50.0);
        assert_eq!(image.style("transform").as_deref(), Some("translateY(50.00px) scale(1.15)"));

        // A new offset prop resubscribes with the new range.
        drop(first);
        let _second = subscribe(80.0);
        window.scroll_to(400.0);
        assert_eq!(window.listener_count(), 1);
        assert_eq!(image.style("transform").as_deref(), Some("translateY(80.00px) scale(1.15)"));
    }
}
