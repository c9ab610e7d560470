use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view_once;
use crate::motion::fade_from_transform;

#[derive(Properties, PartialEq)]
pub struct FadeInUpProps {
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(config::FADE_IN_DISTANCE_PX)]
    pub distance: u32,
    /// Optional starting scale, for cards that grow into place.
    #[prop_or_default]
    pub scale_from: Option<f64>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children up into place the first time they scroll into view.
#[function_component(FadeInUp)]
pub fn fade_in_up(props: &FadeInUpProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(node.clone(), config::FADE_IN_ROOT_MARGIN);

    let style = format!(
        "--fade-from: {}; transition-delay: {}s; transition-duration: {}s;",
        fade_from_transform(props.distance, props.scale_from),
        props.delay,
        config::FADE_IN_DURATION_SECS,
    );

    html! {
        <div
            ref={node}
            class={classes!("fade-in-up", visible.then(|| "visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
