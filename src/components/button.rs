use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    // Black button used on the light guarantee section.
    Dark,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Dark => "btn-dark",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

#[styled_component]
pub fn Button(props: &ButtonProps) -> Html {
    let style = css!(
        r#"
        position: relative;
        overflow: hidden;
        padding: 1rem 2rem;
        font-size: 0.875rem;
        font-weight: 500;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        cursor: pointer;
        border: 1px solid transparent;
        transition: all 0.3s ease, transform 0.15s ease;

        &:hover { transform: scale(1.02); }
        &:active { transform: scale(0.98); }

        &.btn-full { width: 100%; }
        &.btn-compact { padding: 0.5rem 1.5rem; font-size: 0.75rem; }

        &.btn-primary { background: #ffffff; color: #000000; }
        &.btn-primary:hover { background: #e0f2fe; }
        &.btn-secondary { background: #2a2a2a; color: #ffffff; border-color: rgba(255, 255, 255, 0.1); }
        &.btn-secondary:hover { background: #262626; }
        &.btn-outline { background: transparent; color: #ffffff; border-color: #ffffff; }
        &.btn-outline:hover { background: #ffffff; color: #000000; }
        &.btn-dark { background: #000000; color: #ffffff; }
        &.btn-dark:hover { background: #1f2937; }

        .btn-label { position: relative; z-index: 10; }
        .btn-glow {
            position: absolute;
            inset: 0;
            background: #bae6fd;
            opacity: 0;
            transition: opacity 0.3s ease;
        }
        &:hover .btn-glow { opacity: 0.2; }
        "#
    );

    let is_primary = props.variant == ButtonVariant::Primary;

    html! {
        <button
            class={classes!(
                style,
                props.variant.class(),
                props.full_width.then(|| "btn-full"),
                props.compact.then(|| "btn-compact"),
                props.class.clone(),
            )}
            onclick={props.onclick.clone()}
        >
            <span class="btn-label">{ for props.children.iter() }</span>
            if is_primary {
                <div class="btn-glow"></div>
            }
        </button>
    }
}
