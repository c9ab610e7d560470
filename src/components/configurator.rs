use yew::prelude::*;

use crate::content::{ColorOption, Size};

#[derive(Properties, PartialEq)]
pub struct ConfiguratorProps {
    pub selected_color: ColorOption,
    pub selected_size: Size,
    pub on_color: Callback<ColorOption>,
    pub on_size: Callback<Size>,
}

/// Color and size pickers above the bundle cards. The choice is only
/// displayed; bundles do not read it.
#[function_component(Configurator)]
pub fn configurator(props: &ConfiguratorProps) -> Html {
    html! {
        <div class="configurator">
            <div class="picker">
                <p class="picker-label">{"Select Color"}</p>
                <div class="swatches">
                    { for ColorOption::ALL.iter().map(|&color| {
                        let selected = color == props.selected_color;
                        let onclick = props.on_color.reform(move |_: MouseEvent| color);
                        html! {
                            <button
                                key={color.name()}
                                class={classes!("swatch", selected.then(|| "selected"))}
                                style={format!("background-color: {};", color.hex())}
                                aria-label={color.name()}
                                aria-pressed={selected.to_string()}
                                {onclick}
                            >
                                if selected {
                                    <div class="swatch-name">{color.name()}</div>
                                }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="picker">
                <p class="picker-label">{"Select Size"}</p>
                <div class="sizes">
                    { for Size::ALL.iter().map(|&size| {
                        let selected = size == props.selected_size;
                        let onclick = props.on_size.reform(move |_: MouseEvent| size);
                        html! {
                            <button
                                key={size.label()}
                                class={classes!("size-option", selected.then(|| "selected"))}
                                aria-pressed={selected.to_string()}
                                {onclick}
                            >
                                {size.label()}
                            </button>
                        }
                    }) }
                </div>
                <p class="fit-hint">{"Tight supportive fit. If you prefer less compression, size up."}</p>
            </div>

            <style>
                {r#"
                .configurator {
                    max-width: 36rem;
                    margin: 0 auto 5rem;
                    padding: 2rem;
                    background: #171717;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .picker + .picker { margin-top: 2rem; }

                .picker-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }

                .swatches { display: flex; gap: 1rem; }
                .swatch {
                    position: relative;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 2px solid transparent;
                    cursor: pointer;
                    outline: none;
                    transition: all 0.2s;
                }
                .swatch:hover { transform: scale(1.05); }
                .swatch.selected {
                    border-color: #0ea5e9;
                    transform: scale(1.1);
                    box-shadow: 0 10px 15px rgba(14, 165, 233, 0.2);
                }

                .swatch-name {
                    position: absolute;
                    bottom: -2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 10px;
                    font-weight: 700;
                    white-space: nowrap;
                    color: #ffffff;
                    background: rgba(0, 0, 0, 0.8);
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                }

                .sizes { display: flex; gap: 0.75rem; }
                .size-option {
                    flex: 1;
                    padding: 0.75rem 0;
                    font-size: 0.875rem;
                    font-weight: 700;
                    border-radius: 0.5rem;
                    border: 2px solid #262626;
                    background: transparent;
                    color: #9ca3af;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .size-option:hover { border-color: #525252; }
                .size-option.selected { background: #ffffff; color: #000000; border-color: #ffffff; }

                .fit-hint { font-size: 0.75rem; color: #6b7280; margin-top: 1rem; text-align: center; }
                "#}
            </style>
        </div>
    }
}
