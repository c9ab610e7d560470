use yew::prelude::*;

use crate::config;

fn embed() -> Html {
    html! {
        <iframe
            title={config::MODEL_VIEWER_TITLE}
            frameborder="0"
            allowfullscreen=true
            allow="autoplay; fullscreen; xr-spatial-tracking"
            src={config::MODEL_VIEWER_SRC}
        ></iframe>
    }
}

#[function_component(ModelViewer)]
pub fn model_viewer() -> Html {
    html! {
        <div class="model-viewer">
            <div class="model-glow"></div>
            <div class="model-frame">{embed()}</div>

            <style>
                {r#"
                .model-viewer { position: relative; width: 100%; height: 100%; }
                .model-glow {
                    position: absolute;
                    inset: -10%;
                    background: rgba(59, 130, 246, 0.1);
                    filter: blur(100px);
                    border-radius: 9999px;
                    pointer-events: none;
                }
                .model-frame {
                    position: relative;
                    z-index: 10;
                    height: 100%;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .model-frame iframe { width: 100%; height: 100%; min-height: 400px; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn embed_allows_fullscreen() {
        let VNode::VTag(tag) = embed() else {
            panic!("embed should be an element");
        };
        assert_eq!(tag.tag(), "iframe");
        let attrs: Vec<(&str, &str)> = tag.attributes.iter().collect();
        assert!(attrs.contains(&("allowfullscreen", "allowfullscreen")));
        assert!(attrs.contains(&("src", config::MODEL_VIEWER_SRC)));
        assert!(attrs.contains(&("title", config::MODEL_VIEWER_TITLE)));
    }
}
