use chrono::Datelike;
use log::{debug, info, warn};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::button::{Button, ButtonVariant};
use crate::components::configurator::Configurator;
use crate::components::fade_in::FadeInUp;
use crate::components::faq::FaqAccordion;
use crate::components::marquee::Marquee;
use crate::components::model_viewer::ModelViewer;
use crate::components::parallax_image::{dim_on_error, ParallaxImage};
use crate::components::reveal_text::RevealText;
use crate::config::{self, asset_url};
use crate::content::{
    self, star_rating, Bundle, Review, BUNDLES, BUNDLES_ANCHOR, FAQS, FAQ_ANCHOR, FEATURES,
    GALLERY_IMAGES, GUARANTEES, HERO_HIGHLIGHTS, HOW_IT_WORKS_ANCHOR, LEGAL_LINKS, OUTCOMES, REVIEWS,
    ROUTINE_TIPS, STEPS,
};
use crate::dom::{self, section_link, ScrollFrame};
use crate::hooks::use_window_scroll;
use crate::motion::map_range;
use crate::state::{PageAction, PageState};

fn highlight_icon(name: &str) -> &'static str {
    match name {
        "thermometer" => "🌡",
        "refresh" => "↻",
        "wind" => "≋",
        "shield" => "⛨",
        _ => "•",
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let copy = use_node_ref();
    let visual = use_node_ref();

    {
        let copy = copy.clone();
        let visual = visual.clone();
        use_window_scroll((), Callback::from(move |frame: ScrollFrame| {
            if let Some(copy) = copy.cast::<HtmlElement>() {
                let opacity = map_range(frame.scroll_y, config::HERO_FADE_SCROLL, (1.0, 0.0));
                let _ = copy.style().set_property("opacity", &format!("{:.3}", opacity));
            }
            if let Some(visual) = visual.cast::<HtmlElement>() {
                let y = map_range(frame.scroll_y, config::HERO_DRIFT_SCROLL, config::HERO_DRIFT_PX);
                let _ = visual
                    .style()
                    .set_property("transform", &format!("translateY({:.2}px)", y));
            }
        }));
    }

    let scroll_down = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_one_screen() {
            warn!("Scroll hint: {}", e);
        }
    });

    html! {
        <section class="hero">
            <div class="hero-gradient"></div>
            <div class="hero-blob"></div>

            <div class="hero-grid">
                <div ref={copy} class="hero-copy">
                    <h1 class="hero-title enter" style="animation-delay: 0s;">
                        {"Sauna heat."}<br/>
                        <span class="ice-gradient">{"Managed."}</span>
                    </h1>
                    <p class="hero-subtitle enter" style="animation-delay: 0.2s;">
                        {"Premium cooling boxer briefs designed to support fertility by helping reduce unwanted heat exposure. Built for sauna routines."}
                    </p>
                    <div class="hero-cta-group enter" style="animation-delay: 0.4s;">
                        <Button onclick={section_link(BUNDLES_ANCHOR)}>{"Shop Bundles"}</Button>
                        <Button variant={ButtonVariant::Secondary} onclick={section_link(HOW_IT_WORKS_ANCHOR)}>
                            {"How it works"}
                        </Button>
                    </div>
                    <div class="hero-highlights enter-fade" style="animation-delay: 0.6s;">
                        { for HERO_HIGHLIGHTS.iter().map(|(icon, text)| html! {
                            <div class="highlight" key={*text}>
                                <div class="highlight-icon">{highlight_icon(icon)}</div>
                                <span>{*text}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-visual">
                    <div ref={visual} class="hero-visual-inner hero-pop">
                        <div class="hero-image">
                            <div class="hero-image-tint"></div>
                            <img src={asset_url(content::HERO_IMAGE)} alt="ColdBoxers Hero" onerror={dim_on_error()} />
                        </div>
                        <div class="floating-badge">
                            <div class="badge-title">{"Fertility Smart"}</div>
                            <div class="badge-body">{"Engineered for heat management and comfort."}</div>
                        </div>
                    </div>
                    <div class="hero-visual-glow"></div>
                </div>
            </div>

            <div class="scroll-hint" onclick={scroll_down}>{"⌄"}</div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 0 5rem !important;
                }

                .hero-gradient {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 66%;
                    height: 100%;
                    background: linear-gradient(to left, #171717, transparent);
                    opacity: 0.6;
                    pointer-events: none;
                }

                .hero-blob {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 600px;
                    height: 600px;
                    background: rgba(12, 74, 110, 0.1);
                    filter: blur(150px);
                    border-radius: 9999px;
                    pointer-events: none;
                }

                .hero-grid {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-title {
                    font-size: 6rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    line-height: 0.9;
                    color: #ffffff;
                    margin-bottom: 2rem;
                }

                .ice-gradient {
                    background: linear-gradient(to right, #7dd3fc, #38bdf8, #0ea5e9);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: #9ca3af;
                    max-width: 32rem;
                    line-height: 1.6;
                    border-left: 2px solid #0c4a6e;
                    padding-left: 1.5rem;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group { display: flex; gap: 1rem; margin-bottom: 3rem; }

                .hero-highlights {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem 2rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .highlight { display: flex; align-items: center; gap: 0.75rem; }
                .highlight-icon {
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #38bdf8;
                }

                .enter { opacity: 0; animation: enterUp 0.8s ease-out forwards; }
                .enter-fade { opacity: 0; animation: enterFade 1s ease-out forwards; }

                .hero-visual {
                    position: relative;
                    height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero-visual-inner { position: relative; width: 100%; height: 100%; z-index: 10; }
                .hero-pop { animation: heroPop 1.2s cubic-bezier(0.22, 1, 0.36, 1) both; }

                .hero-image {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .hero-image img { width: 100%; height: 100%; object-fit: cover; }
                .hero-image-tint {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to top right, rgba(14, 165, 233, 0.2), transparent);
                    mix-blend-mode: overlay;
                }

                .floating-badge {
                    position: absolute;
                    bottom: -2rem;
                    left: -2rem;
                    z-index: 20;
                    max-width: 200px;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(23, 23, 23, 0.9);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: bob 5s ease-in-out infinite;
                }

                .badge-title { color: #38bdf8; font-weight: 700; font-size: 1.125rem; margin-bottom: 0.25rem; }
                .badge-body { font-size: 0.75rem; color: #9ca3af; }

                .hero-visual-glow {
                    position: absolute;
                    inset: -10%;
                    z-index: -1;
                    background: rgba(14, 165, 233, 0.1);
                    filter: blur(80px);
                    border-radius: 9999px;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 1.5rem;
                    color: #6b7280;
                    cursor: pointer;
                    animation: nudge 2s infinite;
                }

                .scroll-hint:hover { color: #ffffff; }

                @keyframes enterUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes enterFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes heroPop {
                    from { opacity: 0; transform: scale(0.9) rotate(-5deg); }
                    to { opacity: 1; transform: scale(1) rotate(0); }
                }

                @keyframes bob {
                    0%, 100% { transform: translateY(-10px); }
                    50% { transform: translateY(10px); }
                }

                @keyframes nudge {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Problem)]
fn problem() -> Html {
    html! {
        <section class="problem">
            <div class="narrow center">
                <FadeInUp>
                    <h2 class="display">{"Heat adds up."}</h2>
                </FadeInUp>
                <FadeInUp delay={0.2}>
                    <p class="lead">
                        {"Sauna sessions feel great. The heat down there does not. For men, testicular temperature matters. Sperm production works best in a cooler environment."}
                    </p>
                </FadeInUp>
                <FadeInUp delay={0.4}>
                    <p class="body-copy">
                        {"ColdBoxers gives you a clean, simple habit for heat heavy days. No DIY ice tricks. No bulky devices. Just premium underwear that does its job."}
                    </p>
                </FadeInUp>
            </div>

            <style>
                {r#"
                .problem { background: rgba(23, 23, 23, 0.5); }
                .problem .display { font-size: 4.5rem; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Outcome)]
fn outcome() -> Html {
    html! {
        <section class="outcome">
            <div class="wide two-col">
                <div class="outcome-image">
                    <ParallaxImage src={asset_url(content::OUTCOME_IMAGE)} alt="Lifestyle Sauna" offset={80.0} />
                </div>
                <div class="outcome-copy">
                    <div>
                        <RevealText text="Keep the lifestyle." class={classes!("headline")} />
                        <RevealText text="Protect the plan." class={classes!("headline", "muted")} />
                    </div>
                    { for OUTCOMES.iter().enumerate().map(|(i, item)| html! {
                        <FadeInUp key={item.title} delay={0.2 * (i + 1) as f64}>
                            <div class="outcome-point">
                                <div class="outcome-rule"></div>
                                <div>
                                    <h4>{item.title}</h4>
                                    <p>{item.body}</p>
                                </div>
                            </div>
                        </FadeInUp>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .outcome {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .outcome-image { height: 600px; }
                .outcome-copy { display: flex; flex-direction: column; gap: 3rem; }
                .outcome-point { display: flex; gap: 1.5rem; }
                .outcome-point h4 { color: #ffffff; font-weight: 700; margin-bottom: 0.5rem; }
                .outcome-point p { color: #9ca3af; }
                .outcome-rule { width: 4px; background: #262626; transition: background 0.5s; }
                .outcome-point:hover .outcome-rule { background: #0ea5e9; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <div class="features-skew"></div>
            <div class="wide">
                <div class="section-intro">
                    <h2>{"Cooling built into premium underwear."}</h2>
                    <p>
                        {"ColdBoxers is a boxer brief with a discreet front pocket designed for a reusable liquid cooling pad. Insert the pad when you want cooling. Remove it when you do not."}
                    </p>
                </div>

                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <FadeInUp key={feature.title} distance={30} delay={i as f64 * 0.1}>
                            <div class="feature-card">
                                <div class="feature-check">{"✓"}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        </FadeInUp>
                    }) }
                </div>

                <div class="model-section">
                    <ModelViewer />
                </div>

                <div class="certifications">
                    {"Fabric and dyes: OEKO TEX certified • PFAS tested • skin safe dyes"}
                </div>
            </div>

            <style>
                {r#"
                .features-skew {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    background: #171717;
                    transform: skewY(-2deg) scale(1.1);
                    transform-origin: top left;
                }

                .feature-card {
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2.5rem;
                    border-radius: 1rem;
                    transition: transform 0.2s, border-color 0.3s;
                }

                .feature-card:hover { transform: translateY(-10px); border-color: rgba(14, 165, 233, 0.3); }
                .feature-card h3 { font-size: 1.5rem; font-weight: 700; color: #ffffff; margin-bottom: 1rem; }
                .feature-card p { color: #9ca3af; line-height: 1.6; }

                .feature-check {
                    width: 3rem;
                    height: 3rem;
                    margin-bottom: 1.5rem;
                    border-radius: 0.5rem;
                    background: #262626;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    transition: background 0.3s;
                }

                .feature-card:hover .feature-check { background: #0ea5e9; }

                .certifications {
                    margin-top: 4rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #4b5563;
                    font-family: monospace;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .model-section { height: 600px; margin-top: 4rem; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let images: Vec<AttrValue> = GALLERY_IMAGES
        .iter()
        .map(|file| AttrValue::from(asset_url(file)))
        .collect();

    html! {
        <section class="gallery">
            <div class="section-intro">
                <h2 class="eyebrow">{"In Action"}</h2>
                <p class="gallery-title">{"The Routine in Motion"}</p>
            </div>
            <Marquee {images} />

            <style>
                {r#"
                .gallery {
                    padding: 6rem 0 !important;
                    background: #000000;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .gallery .section-intro { margin-bottom: 3rem; }
                .eyebrow {
                    font-size: 0.875rem !important;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #0ea5e9;
                    margin-bottom: 0.5rem !important;
                }
                .gallery-title { color: #ffffff !important; font-size: 1.5rem !important; font-weight: 700; }
                "#}
            </style>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id={HOW_IT_WORKS_ANCHOR} class="how-it-works">
            <div class="wide">
                <h2 class="display fade-title">{"Chill. Insert. Go."}</h2>

                <div class="steps-grid">
                    <div class="steps-line"></div>
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <FadeInUp key={step.title} distance={30} delay={i as f64 * 0.2}>
                            <div class="step">
                                <div class="step-number">{content::step_number(i)}</div>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        </FadeInUp>
                    }) }
                </div>

                <FadeInUp distance={0} scale_from={Some(0.95)} class={classes!("routine")}>
                    <h4>
                        <span class="routine-bar"></span>
                        {"Sauna Routine "}<span class="muted">{"Recommended"}</span>
                    </h4>
                    <ul>
                        { for ROUTINE_TIPS.iter().map(|tip| html! {
                            <li key={*tip}><span class="tick">{"✓"}</span>{*tip}</li>
                        }) }
                    </ul>
                </FadeInUp>
            </div>

            <style>
                {r#"
                .how-it-works { background: #000000; }
                .fade-title {
                    text-align: center;
                    margin-bottom: 6rem;
                    background: linear-gradient(to bottom, #ffffff, #1f2937);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .steps-grid { position: relative; gap: 3rem; }
                .steps-line {
                    position: absolute;
                    top: 3rem;
                    left: 0;
                    width: 100%;
                    height: 1px;
                    background: linear-gradient(to right, transparent, #0c4a6e, transparent);
                }

                .step { position: relative; z-index: 10; background: #000000; padding: 1rem; text-align: center; }
                .step h3 { font-size: 1.5rem; font-weight: 700; color: #ffffff; margin-bottom: 1rem; }
                .step:hover h3 { color: #38bdf8; }
                .step p { color: #9ca3af; line-height: 1.6; }

                .step-number {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 2rem;
                    border-radius: 9999px;
                    background: #171717;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #0ea5e9;
                    transition: box-shadow 0.5s;
                }

                .step:hover .step-number { box-shadow: 0 0 30px rgba(14, 165, 233, 0.2); }

                .routine {
                    margin: 6rem auto 0;
                    max-width: 48rem;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    background: rgba(23, 23, 23, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .routine h4 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }

                .routine-bar { width: 0.5rem; height: 2rem; background: #0ea5e9; border-radius: 9999px; }
                .routine ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1rem; }
                .routine li {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    color: #d1d5db;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .tick { color: #0ea5e9; }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BundleCardProps {
    bundle: &'static Bundle,
}

#[function_component(BundleCard)]
fn bundle_card(props: &BundleCardProps) -> Html {
    let bundle = props.bundle;
    let variant = if bundle.is_featured() {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    html! {
        <div class={classes!("bundle-card", bundle.is_featured().then(|| "featured"))}>
            <div class="bundle-image">
                <img src={asset_url(bundle.image)} alt={bundle.name} loading="lazy" onerror={dim_on_error()} />
                if let Some(badge) = bundle.badge {
                    <div class="bundle-badge">{badge}</div>
                }
            </div>
            <div class="bundle-body">
                <h3>{bundle.name}</h3>
                <p class="bundle-description">{bundle.description}</p>
                <div class="bundle-price">{bundle.display_price()}</div>
                <ul class="bundle-includes">
                    { for bundle.includes.iter().map(|item| html! {
                        <li key={*item}><span class="dot"></span>{*item}</li>
                    }) }
                </ul>
                <Button full_width={true} {variant}>{bundle.cta}</Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BundlesProps {
    state: PageState,
    on_action: Callback<PageAction>,
}

#[function_component(Bundles)]
fn bundles(props: &BundlesProps) -> Html {
    let on_color = props.on_action.reform(PageAction::SelectColor);
    let on_size = props.on_action.reform(PageAction::SelectSize);

    html! {
        <section id={BUNDLES_ANCHOR} class="bundles">
            <div class="wide">
                <div class="section-intro">
                    <h2>{"Choose your bundle."}</h2>
                    <p>{"All bundles include boxer briefs and reusable liquid cooling pads."}</p>
                </div>

                <Configurator
                    selected_color={props.state.selected_color}
                    selected_size={props.state.selected_size}
                    {on_color}
                    {on_size}
                />

                <div class="bundle-grid">
                    { for BUNDLES.iter().enumerate().map(|(i, bundle)| html! {
                        <FadeInUp key={bundle.id} distance={50} delay={i as f64 * 0.1}>
                            <BundleCard {bundle} />
                        </FadeInUp>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .bundle-grid { align-items: start; }

                .bundle-card {
                    position: relative;
                    background: #171717;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: transform 0.3s, border-color 0.3s;
                }

                .bundle-card:hover { transform: translateY(-12px); border-color: rgba(255, 255, 255, 0.2); }
                .bundle-card.featured { border-color: #0ea5e9; box-shadow: 0 0 50px rgba(14, 165, 233, 0.1); }

                .bundle-image { position: relative; height: 16rem; overflow: hidden; background: #262626; }
                .bundle-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
                .bundle-card:hover .bundle-image img { transform: scale(1.05); }

                .bundle-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 20;
                    background: #0ea5e9;
                    color: #ffffff;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.375rem 0.75rem;
                    border-radius: 9999px;
                }

                .bundle-body { padding: 2rem; }
                .bundle-body h3 { font-size: 1.5rem; font-weight: 700; color: #ffffff; margin-bottom: 0.5rem; }
                .bundle-description { color: #9ca3af; font-size: 0.875rem; height: 2.5rem; margin-bottom: 1.5rem; }
                .bundle-price { font-size: 2.25rem; font-weight: 700; color: #ffffff; margin-bottom: 2rem; }
                .bundle-includes { list-style: none; padding: 0; margin-bottom: 2rem; display: flex; flex-direction: column; gap: 1rem; }
                .bundle-includes li { display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; color: #d1d5db; }
                .dot { width: 6px; height: 6px; border-radius: 9999px; background: #0ea5e9; }
                "#}
            </style>
        </section>
    }
}

fn review_card(index: usize, review: &Review, stars: &str) -> Html {
    html! {
        <div class="review-card" key={index}>
            <div class="review-quote">{"\""}</div>
            <div class="review-stars">{stars.to_string()}</div>
            <p class="review-text">{review.text}</p>
            <div class="review-author">{review.author}</div>
        </div>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    let stars = star_rating();

    html! {
        <section class="reviews">
            <div class="wide center">
                <h2>{"Loved for the routine."}<br/>{"Kept for the comfort."}</h2>
                <div class="card-grid">
                    { for REVIEWS.iter().enumerate().map(|(i, review)| review_card(i, review, &stars)) }
                </div>
                <p class="rating"><span class="rating-dot"></span>{"Rated 4.8/5 by 500+ customers."}</p>
            </div>

            <style>
                {r#"
                .reviews { background: linear-gradient(to bottom, #0a0a0a, #000000); }
                .reviews h2 { font-size: 3rem; font-weight: 700; margin-bottom: 5rem; }

                .review-card {
                    position: relative;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    background: rgba(23, 23, 23, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: transform 0.2s;
                }

                .review-card:hover { transform: scale(1.02); }
                .review-quote {
                    position: absolute;
                    top: -2rem;
                    left: 1.5rem;
                    font-size: 6rem;
                    font-family: serif;
                    color: #262626;
                    user-select: none;
                }
                .review-card:hover .review-quote { color: rgba(14, 165, 233, 0.2); }
                .review-stars { color: #0ea5e9; margin-bottom: 1.5rem; font-size: 1.125rem; }
                .review-text { font-size: 1.125rem; font-style: italic; color: #d1d5db; line-height: 1.6; margin-bottom: 2rem; }
                .review-author { font-size: 0.75rem; font-weight: 700; color: #6b7280; text-transform: uppercase; letter-spacing: 0.1em; }

                .rating {
                    margin-top: 3rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .rating-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #22c55e; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Guarantee)]
fn guarantee() -> Html {
    html! {
        <section class="guarantee">
            <div class="medium two-col">
                <div>
                    <h2>{"Try it."}<br/>{"Keep it if you love it."}</h2>
                    <Button variant={ButtonVariant::Dark} onclick={section_link(BUNDLES_ANCHOR)}>
                        {"Shop Risk Free"}
                    </Button>
                </div>
                <div class="guarantee-list">
                    { for GUARANTEES.iter().map(|item| html! {
                        <div class="guarantee-card" key={item.title}>
                            <h3>{item.title}</h3>
                            <p>{item.body}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .guarantee { background: #ffffff; color: #000000; }
                .guarantee h2 { font-size: 3rem; font-weight: 700; line-height: 1.2; margin-bottom: 2rem; }
                .guarantee-list { display: grid; gap: 2rem; }
                .guarantee-card { padding: 2rem; background: #f9fafb; border-radius: 1rem; }
                .guarantee-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                .guarantee-card p { color: #4b5563; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="wide">
                <div class="footer-cta">
                    <div>
                        <h2>{"Make sauna days fertility smart."}</h2>
                        <p>{"Premium cooling boxer briefs. Smarter habit."}</p>
                    </div>
                    <Button onclick={section_link(BUNDLES_ANCHOR)}>{"Shop Bundles"}</Button>
                </div>
                <div class="footer-legal">
                    <p class="disclaimer">
                        {"ColdBoxers is intended for comfort and personal heat management. It is not intended to diagnose, treat, cure, or prevent any disease. Individual results vary. Consult a healthcare professional for personal medical advice."}
                    </p>
                    <div class="footer-bottom">
                        <p>{format!("© {} ColdBoxers. All rights reserved.", year)}</p>
                        <div class="legal-links">
                            { for LEGAL_LINKS.iter().map(|name| html! {
                                <a key={*name} href="#">{*name}</a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer { background: #000000; padding: 5rem 0; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                .footer-cta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .footer-cta h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
                .footer-cta p { color: #9ca3af; }
                .footer-legal {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 2.5rem;
                    font-size: 0.75rem;
                    color: #4b5563;
                }
                .disclaimer { max-width: 56rem; margin-bottom: 1.5rem; }
                .footer-bottom { display: flex; justify-content: space-between; align-items: center; }
                .legal-links { display: flex; gap: 1.5rem; }
                .legal-links a { color: inherit; text-decoration: none; }
                .legal-links a:hover { color: #ffffff; }
                "#}
            </style>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(PageState::default);

    use_mount(|| {
        if let Err(e) = dom::scroll_to_top() {
            debug!("Initial scroll reset skipped: {}", e);
        }
        info!("Landing page mounted");
    });

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: PageAction| state.dispatch(action))
    };
    let on_faq = on_action.reform(PageAction::ToggleFaq);

    html! {
        <div class="landing-page">
            <Hero />
            <Problem />
            <Outcome />
            <Features />
            <Gallery />
            <HowItWorks />
            <Bundles state={(*state).clone()} on_action={on_action.clone()} />
            <Reviews />
            <Guarantee />
            <section id={FAQ_ANCHOR} class="faq">
                <div class="narrow">
                    <h2 class="center">{"FAQ"}</h2>
                    <FaqAccordion entries={FAQS} state={state.active_faq} on_toggle={on_faq} />
                </div>
            </section>
            <Footer />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #e5e7eb;
                    overflow-x: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .landing-page ::selection {
                    background: #0ea5e9;
                    color: #ffffff;
                }

                .landing-page section {
                    position: relative;
                    padding: 8rem 0;
                    overflow: hidden;
                }

                .wide { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .medium { max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; }
                .narrow { max-width: 48rem; margin: 0 auto; padding: 0 1.5rem; }
                .center { text-align: center; }
                .muted { color: #6b7280; }

                .two-col {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }

                .card-grid, .steps-grid, .bundle-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .display {
                    font-size: 4.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                    margin-bottom: 2rem;
                }

                .section-intro {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }

                .section-intro h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .section-intro p, .lead, .body-copy {
                    color: #9ca3af;
                    font-size: 1.125rem;
                }

                .lead {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }


                .fade-in-up {
                    opacity: 0;
                    transform: var(--fade-from);
                    transition-property: opacity, transform;
                    transition-timing-function: cubic-bezier(0.21, 0.47, 0.32, 0.98);
                }

                .fade-in-up.visible {
                    opacity: 1;
                    transform: none;
                }

                .reveal-text { display: inline-block; }
                .reveal-text.headline {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }
                .reveal-text.headline.muted { color: #6b7280; }

                .reveal-mask {
                    display: inline-block;
                    overflow: hidden;
                    vertical-align: bottom;
                    margin-right: 0.25em;
                }

                .reveal-word {
                    display: inline-block;
                    transform: translateY(110%);
                    transition: transform 0.5s ease-out;
                }

                .revealed .reveal-word { transform: translateY(0); }

                .faq h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 4rem; }

                @media (max-width: 1024px) {
                    .hero-grid, .two-col, .card-grid, .steps-grid, .bundle-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-visual { order: -1; height: 50vh; }
                    .hero-title { font-size: 3.75rem; }
                    .display { font-size: 3rem; }
                    .steps-line { display: none; }
                }

                @media (max-width: 768px) {
                    .hero-cta-group, .footer-cta, .footer-bottom {
                        flex-direction: column;
                    }

                    .section-intro h2, .reviews h2, .guarantee h2 { font-size: 2.25rem; }
                    .model-section { height: 400px; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    fn text_of(node: &VNode) -> String {
        match node {
            VNode::VTag(tag) => tag.children().iter().map(text_of).collect(),
            VNode::VText(text) => text.text.to_string(),
            VNode::VList(list) => list.iter().map(text_of).collect(),
            _ => String::new(),
        }
    }

    #[test]
    fn review_card_shows_rating_quote_and_author() {
        let card = review_card(0, &REVIEWS[0], &star_rating());
        let VNode::VTag(tag) = &card else {
            panic!("review card should be an element");
        };
        assert_eq!(tag.tag(), "div");
        let text = text_of(&card);
        assert!(text.contains("★★★★★"));
        assert!(text.contains(REVIEWS[0].text));
        assert!(text.ends_with(REVIEWS[0].author));
    }
}
