use yew::prelude::*;

use crate::content::FaqEntry;
use crate::state::FaqState;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{"+"}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
    pub state: FaqState,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = props.on_toggle.reform(move |e: MouseEvent| {
                    e.prevent_default();
                    index
                });
                html! {
                    <FaqItem key={index} {entry} open={props.state.is_open(index)} {on_toggle} />
                }
            }) }

            <style>
                {r#"
                .faq-list { display: flex; flex-direction: column; gap: 1rem; }
                .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                .faq-question {
                    width: 100%;
                    padding: 2rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: inherit;
                    text-align: left;
                    cursor: pointer;
                    font-size: 1.25rem;
                    font-weight: 500;
                    transition: color 0.2s;
                }
                .faq-question:hover { color: #7dd3fc; }
                .toggle-icon { font-size: 1.5rem; color: #6b7280; transition: transform 0.3s; }
                .faq-item.open .toggle-icon { transform: rotate(45deg); }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, opacity 0.3s ease;
                }
                .faq-item.open .faq-answer { max-height: 20rem; opacity: 1; }
                .faq-answer p { padding-bottom: 2rem; color: #9ca3af; line-height: 1.6; font-size: 1.125rem; }
                "#}
            </style>
        </div>
    }
}
