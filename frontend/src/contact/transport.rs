use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;

use super::form::ContactPayload;
use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

/// The contact endpoint, as seen from the form.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// `POST {backend}/api/contact` with the payload as JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpContactTransport {
    endpoint: String,
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self {
            endpoint: config::contact_endpoint(),
        }
    }
}

impl ContactTransport for HttpContactTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}

/// Send one request and log how it went. No retry.
pub async fn deliver<T: ContactTransport>(
    transport: &T,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    info!("Sending contact request for {}", payload.service.slug());
    let outcome = transport.send(payload).await;
    match &outcome {
        Ok(()) => info!("Contact request accepted"),
        Err(e) => error!("Contact request failed: {}", e),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{
        ContactForm, Field, FormStatus, SubmitBlocked, FAILURE_MESSAGE, SUCCESS_MESSAGE,
    };
    use futures::executor::block_on;
    use std::cell::RefCell;

    // Same sequence the booking form runs on submit.
    async fn submit<T: ContactTransport>(
        form: &mut ContactForm,
        transport: &T,
    ) -> Result<(), SubmitBlocked> {
        let payload = form.begin_submit()?;
        let outcome = deliver(transport, &payload).await;
        form.finish(outcome);
        Ok(())
    }

    struct ScriptedEndpoint {
        reply: Result<(), SubmitError>,
        received: RefCell<Vec<ContactPayload>>,
    }

    impl ScriptedEndpoint {
        fn replying(reply: Result<(), SubmitError>) -> Self {
            Self {
                reply,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactTransport for ScriptedEndpoint {
        async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn booking() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Made Wirawan".into());
        form.set(Field::Phone, "0877 2913 8734".into());
        form.set(Field::Email, "made@example.com".into());
        form.set(Field::Service, "laser-hair-removal".into());
        form
    }

    #[test]
    fn invalid_form_makes_no_request() {
        let endpoint = ScriptedEndpoint::replying(Ok(()));
        let mut form = ContactForm::default();
        form.set(Field::Service, "body-contouring".into());

        let result = block_on(submit(&mut form, &endpoint));

        assert_eq!(result, Err(SubmitBlocked::Invalid(2)));
        assert!(endpoint.received.borrow().is_empty());
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn accepted_request_clears_the_form() {
        let endpoint = ScriptedEndpoint::replying(Ok(()));
        let mut form = booking();

        block_on(submit(&mut form, &endpoint)).expect("submitted");

        let received = endpoint.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Made Wirawan");
        assert_eq!(form.status(), FormStatus::Sent);
        assert_eq!(form.banner(), Some(SUCCESS_MESSAGE));
        assert!(form.name.is_empty());
    }

    #[test]
    fn non_2xx_keeps_fields_and_shows_generic_error() {
        let endpoint = ScriptedEndpoint::replying(Err(SubmitError::Status(500)));
        let mut form = booking();

        block_on(submit(&mut form, &endpoint)).expect("submitted");

        assert_eq!(endpoint.received.borrow().len(), 1);
        assert_eq!(form.status(), FormStatus::Failed);
        assert_eq!(form.banner(), Some(FAILURE_MESSAGE));
        assert_eq!(form.name, "Made Wirawan");
        assert_eq!(form.email, "made@example.com");
    }

    #[test]
    fn transport_failure_is_reported_like_a_bad_status() {
        let offline = ScriptedEndpoint::replying(Err(SubmitError::Transport("offline".into())));
        let rejected = ScriptedEndpoint::replying(Err(SubmitError::Status(404)));
        let mut a = booking();
        let mut b = booking();

        block_on(submit(&mut a, &offline)).expect("submitted");
        block_on(submit(&mut b, &rejected)).expect("submitted");

        assert_eq!(a, b);
    }

    #[test]
    fn in_flight_submission_is_not_repeated() {
        let endpoint = ScriptedEndpoint::replying(Ok(()));
        let mut form = booking();
        form.begin_submit().expect("valid form");

        let result = block_on(submit(&mut form, &endpoint));

        assert_eq!(result, Err(SubmitBlocked::InFlight));
        assert!(endpoint.received.borrow().is_empty());
    }
}
