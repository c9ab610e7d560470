use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view_once;
use crate::motion::{split_words, stagger_delay};

#[derive(Properties, PartialEq)]
pub struct RevealTextProps {
    pub text: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Slides each word up from below its line, one after another.
#[function_component(RevealText)]
pub fn reveal_text(props: &RevealTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view_once(node.clone(), config::REVEAL_ROOT_MARGIN);

    html! {
        <span
            ref={node}
            class={classes!("reveal-text", revealed.then(|| "revealed"), props.class.clone())}
        >
            { for split_words(props.text).into_iter().enumerate().map(|(i, word)| html! {
                <span class="reveal-mask" key={i}>
                    <span
                        class="reveal-word"
                        style={format!("transition-delay: {}s;", stagger_delay(i, config::WORD_STAGGER_SECS))}
                    >
                        {word}
                    </span>
                </span>
            }) }
        </span>
    }
}
