use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const CONFIRMATION: &str = "C'est noté ! La prochaine Pince arrive bientôt dans ta boîte. 🦞";

/// Local state of the newsletter form. Nothing here leaves the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionFormState {
    pub email: String,
    pub submitted: bool,
}

impl SubscriptionFormState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Same rule the browser applies to a required email field.
    pub fn accepts(&self) -> bool {
        let email = self.email.trim();
        !email.is_empty() && email.contains('@')
    }

    /// Returns `true` only on the submit that flips the flag.
    pub fn submit(&mut self) -> bool {
        if self.submitted || !self.accepts() {
            return false;
        }
        self.submitted = true;
        true
    }
}

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let form = use_state(SubscriptionFormState::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_email(input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if next.submit() {
                info!("newsletter form submitted");
                form.set(next);
            }
        })
    };

    subscribe_view(&form, oninput, onsubmit)
}

/// The confirmation takes the form's place once a submit went through.
fn subscribe_view(
    form: &SubscriptionFormState,
    oninput: Callback<InputEvent>,
    onsubmit: Callback<SubmitEvent>,
) -> Html {
    if form.submitted {
        return html! {
            <p class="subscribe-confirmation" role="status">{CONFIRMATION}</p>
        };
    }

    html! {
        <form class="subscribe-form" {onsubmit}>
            <input
                type="email"
                required=true
                placeholder="ton@email.com"
                aria-label="Adresse email"
                value={form.email.clone()}
                {oninput}
            />
            <button type="submit" class="btn btn--primary">{"Je veux La Pince"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submit_flips_once() {
        let mut form = SubscriptionFormState::default();
        form.set_email("nico@jean-claw.ai".into());
        assert!(form.submit());
        assert!(form.submitted);
        assert!(!form.submit());
        assert!(form.submitted);
    }

    #[test]
    fn edits_after_submit_keep_confirmation() {
        let mut form = SubscriptionFormState::default();
        form.set_email("nico@jean-claw.ai".into());
        form.submit();
        form.set_email(String::new());
        assert!(form.submitted);
        assert!(!form.submit());
    }

    #[test]
    fn empty_or_malformed_submit_is_rejected() {
        let mut form = SubscriptionFormState::default();
        assert!(!form.submit());
        assert!(!form.submitted);

        form.set_email("   ".into());
        assert!(!form.submit());

        form.set_email("pas-un-email".into());
        assert!(!form.submit());
        assert!(!form.submitted);
    }

    #[derive(Properties, PartialEq)]
    struct ViewProps {
        state: SubscriptionFormState,
    }

    #[function_component(View)]
    fn view(props: &ViewProps) -> Html {
        subscribe_view(&props.state, Callback::from(|_| ()), Callback::from(|_| ()))
    }

    async fn render(state: SubscriptionFormState) -> String {
        yew::ServerRenderer::<View>::with_props(move || ViewProps { state })
            .render()
            .await
    }

    #[tokio::test]
    async fn confirmation_replaces_the_form() {
        let mut state = SubscriptionFormState::default();
        state.set_email("nico@jean-claw.ai".into());
        assert!(state.submit());

        let rendered = render(state).await;
        assert!(rendered.contains("La prochaine Pince arrive bientôt dans ta boîte."));
        assert!(rendered.contains(r#"role="status""#));
        assert!(!rendered.contains("<form"));
        assert!(!rendered.contains("<input"));
    }

    #[tokio::test]
    async fn form_shows_until_submitted() {
        let mut state = SubscriptionFormState::default();
        state.set_email("pas-un-email".into());
        assert!(!state.submit());

        let rendered = render(state).await;
        assert!(rendered.contains("<form"));
        assert!(rendered.contains("Je veux La Pince"));
        assert!(!rendered.contains("La prochaine Pince"));
    }
}
