use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::Severity;
use crate::error::{PageError, Result};
use crate::subscribers::{is_valid_email, trim_email, KeyValueStore, SubscribeOutcome, SubscriberList};
use crate::tracking::{self, track_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Invalid,
    Subscribed,
    AlreadySubscribed,
    SaveFailed,
}

impl Submission {
    pub fn message(self) -> &'static str {
        match self {
            Submission::Invalid => "Please enter a valid email address",
            Submission::Subscribed => "Thank you for subscribing! 💜",
            Submission::AlreadySubscribed => "You're already subscribed! 😊",
            Submission::SaveFailed => "We couldn't save your subscription, please try again",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Submission::Invalid | Submission::SaveFailed => Severity::Error,
            Submission::Subscribed => Severity::Success,
            Submission::AlreadySubscribed => Severity::Info,
        }
    }
}

/// Validates `raw` and, if it is a well-formed address, records it.
/// Storage is only opened once the address passes validation.
pub fn submit<S, F>(raw: &str, open_list: F) -> Submission
where
    S: KeyValueStore,
    F: FnOnce() -> Result<SubscriberList<S>>,
{
    let email = trim_email(raw);
    if email.is_empty() || !is_valid_email(email) {
        return Submission::Invalid;
    }
    match open_list().and_then(|list| list.subscribe(email)) {
        Ok(SubscribeOutcome::Added) => Submission::Subscribed,
        Ok(SubscribeOutcome::AlreadySubscribed) => Submission::AlreadySubscribed,
        Err(e) => {
            error!("Subscription not saved: {}", e);
            Submission::SaveFailed
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    pub notify: Callback<(String, Severity)>,
}

#[function_component(Newsletter)]
pub fn newsletter(props: &NewsletterProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |_| {
                if input_ref.get().is_none() {
                    error!("{}", PageError::MissingElement("#emailInput"));
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let input_ref = input_ref.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                error!("{}", PageError::MissingElement("#emailInput"));
                return;
            };

            let outcome = submit(&input.value(), SubscriberList::browser);
            notify.emit((outcome.message().to_string(), outcome.severity()));
            match outcome {
                Submission::Invalid => {
                    let _ = input.focus();
                }
                Submission::Subscribed => input.set_value(""),
                Submission::AlreadySubscribed | Submission::SaveFailed => {}
            }

            track_event(tracking::NEWSLETTER_SIGNUP_ATTEMPTED);
        })
    };

    html! {
        <section id="newsletter" class="newsletter">
            <div class="container">
                <h2 class="section__title">{"Stay in the Loop"}</h2>
                <p class="newsletter__text">
                    {"New arrivals, styling notes and the occasional treasure hunt, straight to your inbox."}
                </p>
                <form id="newsletterForm" class="newsletter__form" {onsubmit}>
                    <label for="emailInput" class="visually-hidden">{"Email address"}</label>
                    <input
                        ref={input_ref}
                        id="emailInput"
                        class="newsletter__input"
                        type="text"
                        inputmode="email"
                        placeholder="your@email.com"
                        autocomplete="email"
                    />
                    <button type="submit" class="btn btn--primary">{"Subscribe"}</button>
                </form>
            </div>
        </section>
    }
}
