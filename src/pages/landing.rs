use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::fade_in::use_fade_in;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::components::newsletter::Newsletter;
use crate::components::notification::use_notifier;
use crate::components::sparkles::use_scroll_sparkles;
use crate::components::vintage_item::VintageItem;
use crate::config;
use crate::dom;
use crate::error::{PageError, Result};
use crate::tracking::{self, track_event};

const VINTAGE_ITEMS: &[(&str, &str)] = &[
    ("👗", "Tea dress"),
    ("👒", "Straw hat"),
    ("👜", "Leather handbag"),
    ("💍", "Heirloom ring"),
    ("🧣", "Silk scarf"),
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("🧵", "Hand-picked pieces", "Every garment is chosen one at a time for its story, fabric and fit."),
    ("🌿", "Kind to the planet", "Pre-loved fashion keeps beautiful things out of landfill and in wardrobes."),
    ("✨", "A little bit of magic", "Each parcel arrives wrapped with a note about where your treasure came from."),
];

/// Marks the page as loaded and plays the hero entrance animations.
/// Missing hero parts are skipped.
pub fn play_entrance(content: Option<HtmlElement>, visual: Option<HtmlElement>) -> Result<()> {
    dom::body()?.class_list().add_1("loaded")?;
    if let Some(content) = content {
        content.style().set_property("animation", "slideInLeft 0.8s ease-out")?;
    }
    if let Some(visual) = visual {
        visual.style().set_property("animation", "slideInRight 0.8s ease-out")?;
    }
    Ok(())
}

/// Runs the entrance animation on window `load`, or right away when the
/// page finished loading before the app mounted.
#[hook]
fn use_entrance_animation(content: NodeRef, visual: NodeRef) {
    use_effect_with_deps(
        move |_| {
            let run = move || {
                if let Err(e) = play_entrance(content.cast(), visual.cast()) {
                    warn!("Entrance animation skipped: {}", e);
                }
            };

            let already_loaded = dom::document()
                .map(|document| document.ready_state() == "complete")
                .unwrap_or(false);

            let listener = if already_loaded {
                run();
                None
            } else {
                web_sys::window().and_then(|window| {
                    let callback = Closure::<dyn Fn()>::new(run);
                    window
                        .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())
                        .ok()
                        .map(|_| (window, callback))
                })
            };

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window
                        .remove_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let notifier = use_notifier();
    let notify_ref = use_node_ref();
    let hero_content = use_node_ref();
    let hero_visual = use_node_ref();

    use_scroll_sparkles();
    use_fade_in(config::FADE_SELECTOR);
    use_entrance_animation(hero_content.clone(), hero_visual.clone());

    {
        let notify_ref = notify_ref.clone();
        use_effect_with_deps(
            move |_| {
                if notify_ref.get().is_none() {
                    error!("{}", PageError::MissingElement("#notifyBtn"));
                }
                info!("🌟 Maisie's Closet is ready! Welcome to the magical world of vintage treasures!");
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(true);
            track_event(tracking::NOTIFY_BUTTON_CLICKED);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{ STYLES }</style>
            <Header />

            <main>
                <section id="home" class="hero">
                    <div class="container hero__inner">
                        <div class="hero__content" ref={hero_content}>
                            <h1 class="hero__title">{"Maisie's Closet"}</h1>
                            <p class="hero__subtitle">
                                {"Vintage treasures with a story to tell. Lovingly found, carefully restored, ready for their next adventure."}
                            </p>
                            <button
                                id="notifyBtn"
                                ref={notify_ref.clone()}
                                class="btn btn--primary"
                                onclick={open_modal}
                            >
                                {"Notify Me When We Open"}
                            </button>
                        </div>
                        <div class="hero__visual" ref={hero_visual}>
                            { for VINTAGE_ITEMS.iter().map(|&(emoji, label)| html! {
                                <VintageItem {emoji} {label} />
                            }) }
                        </div>
                    </div>
                </section>

                <section id="about" class="about">
                    <div class="container">
                        <h2 class="section__title">{"Our Story"}</h2>
                        <div class="about__text">
                            <p>{"Maisie's Closet began with a grandmother's wardrobe and a rainy afternoon spent trying on forty years of fashion."}</p>
                            <p>{"Since then we've searched estate sales, flea markets and attics for clothes that were made to last."}</p>
                            <p>{"We believe the best outfits come with a history, and we can't wait to help you write the next chapter."}</p>
                        </div>
                    </div>
                </section>

                <section id="features" class="features">
                    <div class="container features__grid">
                        { for FEATURES.iter().map(|&(icon, title, text)| html! {
                            <article class="feature">
                                <div class="feature__icon">{ icon }</div>
                                <h3 class="feature__title">{ title }</h3>
                                <p class="feature__text">{ text }</p>
                            </article>
                        }) }
                    </div>
                </section>

                <Newsletter notify={notifier.notify()} />
            </main>

            <footer class="footer">
                <p>{"© Maisie's Closet. Made with 💜 and a lot of lavender."}</p>
            </footer>

            <Modal open={*modal_open} on_close={close_modal} trigger={notify_ref.clone()} />

            { notifier.view() }
        </div>
    }
}

const STYLES: &str = r#"
    :root {
        --lavender: #b39ddb;
        --plum: #6a1b9a;
        --cream: #fff8f0;
        --ink: #2d2238;
    }
    body {
        margin: 0;
        font-family: Georgia, "Times New Roman", serif;
        background: var(--cream);
        color: var(--ink);
    }
    .container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .header {
        position: sticky;
        top: 0;
        z-index: 100;
        background: rgba(255, 248, 240, 0.95);
        box-shadow: 0 2px 12px rgba(45, 34, 56, 0.08);
    }
    .header__inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .header__logo {
        font-size: 1.5rem;
        color: var(--plum);
        text-decoration: none;
    }
    .nav__menu {
        display: flex;
        gap: 1.5rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav__link {
        color: var(--ink);
        text-decoration: none;
    }
    .nav__link:hover {
        color: var(--plum);
    }
    .hero {
        padding: 6rem 0;
    }
    .hero__inner {
        display: flex;
        align-items: center;
        gap: 3rem;
    }
    .hero__content {
        flex: 1;
    }
    .hero__title {
        font-size: 3.5rem;
        color: var(--plum);
        margin: 0 0 1rem;
    }
    .hero__visual {
        flex: 1;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
    }
    .item {
        display: inline-block;
        font-size: 3.5rem;
        cursor: default;
    }
    .btn {
        border: none;
        border-radius: 999px;
        padding: 0.9rem 1.8rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .btn--primary {
        background: var(--plum);
        color: white;
    }
    .section__title {
        font-size: 2.25rem;
        color: var(--plum);
    }
    .about, .features, .newsletter {
        padding: 4rem 0;
    }
    .features__grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
        gap: 2rem;
    }
    .feature {
        background: white;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 8px 24px rgba(45, 34, 56, 0.08);
    }
    .feature__icon {
        font-size: 2.5rem;
    }
    .newsletter__form {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .newsletter__input {
        flex: 1;
        min-width: 220px;
        padding: 0.9rem 1.2rem;
        border: 2px solid var(--lavender);
        border-radius: 999px;
        font-size: 1rem;
    }
    .visually-hidden {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0 0 0 0);
    }
    .footer {
        text-align: center;
        padding: 2rem 0;
        color: #7a6a86;
    }
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 1000;
        background: rgba(45, 34, 56, 0.6);
        align-items: center;
        justify-content: center;
    }
    .modal.show {
        display: flex;
    }
    .modal__content {
        position: relative;
        max-width: 420px;
        background: white;
        border-radius: 20px;
        padding: 2.5rem 2rem 2rem;
    }
    .modal__close {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        background: none;
        border: none;
        font-size: 1.75rem;
        cursor: pointer;
    }
    .modal__link {
        color: var(--plum);
    }
    @keyframes sparkle {
        0% { opacity: 1; transform: scale(0); }
        50% { opacity: 1; transform: scale(1.5); }
        100% { opacity: 0; transform: scale(0); }
    }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @media (max-width: 768px) {
        .hero__inner {
            flex-direction: column;
        }
        .nav__menu {
            gap: 0.75rem;
            font-size: 0.9rem;
        }
    }
"#;
