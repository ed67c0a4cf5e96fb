use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::transport::SubmitError;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{8,20}$").expect("phone pattern is valid"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your booking request has been sent. We will contact you shortly to confirm.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while sending your request. Please try again or contact us on WhatsApp.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    FacialTreatments,
    AcneSkinRepair,
    AntiAging,
    Injectables,
    LaserHairRemoval,
    BodyContouring,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::FacialTreatments,
        Service::AcneSkinRepair,
        Service::AntiAging,
        Service::Injectables,
        Service::LaserHairRemoval,
        Service::BodyContouring,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Service::FacialTreatments => "facial-treatments",
            Service::AcneSkinRepair => "acne-skin-repair",
            Service::AntiAging => "anti-aging",
            Service::Injectables => "injectables",
            Service::LaserHairRemoval => "laser-hair-removal",
            Service::BodyContouring => "body-contouring",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::FacialTreatments => "Facial Treatments",
            Service::AcneSkinRepair => "Acne & Skin Repair",
            Service::AntiAging => "Anti-Aging Solutions",
            Service::Injectables => "Injectables (Non-Surgical Enhancements)",
            Service::LaserHairRemoval => "Laser Hair Removal",
            Service::BodyContouring => "Body Contouring",
        }
    }

    /// Parse the value of the `<select>`; the empty placeholder is `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Service => "service",
            Field::Message => "message",
        })
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed,
}

/// Why `begin_submit` refused to start a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
}

/// JSON body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Service,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Option<Service>,
    pub message: String,
    errors: FieldErrors,
    status: FormStatus,
}

impl ContactForm {
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Banner text for the last finished submission, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Sent => Some(SUCCESS_MESSAGE),
            FormStatus::Failed => Some(FAILURE_MESSAGE),
            _ => None,
        }
    }

    /// Update a text field from its input. Editing clears that field's error.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Service => self.service = Service::from_slug(&value),
            Field::Message => self.message = value,
        }
        self.errors.remove(&field);
        if self.status == FormStatus::Sent {
            self.status = FormStatus::Editing;
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Please enter your name");
        }
        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, "Please enter your phone number");
        } else if !PHONE_PATTERN.is_match(self.phone.trim()) {
            errors.insert(Field::Phone, "Please enter a valid phone number");
        }
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_PATTERN.is_match(email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }
        if self.service.is_none() {
            errors.insert(Field::Service, "Please choose a treatment");
        }
        errors
    }

    /// Validate and, if everything is in order, mark the form as submitting
    /// and hand back the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        self.errors = self.validate();
        let Some(service) = self.service.filter(|_| self.errors.is_empty()) else {
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        };
        self.status = FormStatus::Submitting;
        Ok(ContactPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            service,
            message: self.message.trim().to_string(),
        })
    }

    /// Record the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                *self = ContactForm {
                    status: FormStatus::Sent,
                    ..ContactForm::default()
                };
            }
            Err(_) => {
                self.status = FormStatus::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ayu Lestari".into());
        form.set(Field::Phone, "+62 877-2913-8734".into());
        form.set(Field::Service, "anti-aging".into());
        form
    }

    #[test]
    fn empty_name_and_phone_give_exactly_two_errors() {
        let mut form = ContactForm::default();
        form.set(Field::Service, "facial-treatments".into());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid(2)));
        let fields: Vec<Field> = form.errors().keys().copied().collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone]);
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn blank_form_flags_every_required_field() {
        let errors = ContactForm::default().validate();
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Service]);
    }

    #[test]
    fn phone_pattern_is_permissive() {
        let mut form = filled();
        for phone in ["0877 2913 8734", "+6287729138734", "(0361) 555-1234"] {
            form.phone = phone.into();
            assert!(form.validate().is_empty(), "{phone} should pass");
        }
        for phone in ["12345", "call me", "+62 877 2913 8734 5555 1234"] {
            form.phone = phone.into();
            assert!(form.validate().contains_key(&Field::Phone), "{phone} should fail");
        }
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let mut form = filled();
        assert!(form.validate().is_empty());

        form.email = "ayu@example.com".into();
        assert!(form.validate().is_empty());

        form.email = "ayu@example".into();
        assert_eq!(
            form.validate().get(&Field::Email),
            Some(&"Please enter a valid email address")
        );
    }

    #[test]
    fn unknown_service_slug_clears_selection() {
        let mut form = filled();
        form.set(Field::Service, "".into());
        assert_eq!(form.service, None);
        form.set(Field::Service, "tattoo-removal".into());
        assert!(form.validate().contains_key(&Field::Service));
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        let _ = form.begin_submit();
        assert!(form.error(Field::Name).is_some());

        form.set(Field::Name, "A".into());
        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Phone).is_some());
    }

    #[test]
    fn begin_submit_trims_and_blocks_reentry() {
        let mut form = filled();
        form.name = "  Ayu Lestari ".into();

        let payload = form.begin_submit().expect("valid form");
        assert_eq!(payload.name, "Ayu Lestari");
        assert_eq!(payload.service, Service::AntiAging);
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn success_clears_fields_and_shows_confirmation() {
        let mut form = filled();
        form.message = "Evening slot please".into();
        form.begin_submit().expect("valid form");

        form.finish(Ok(()));

        assert_eq!(form.status(), FormStatus::Sent);
        assert_eq!(form.banner(), Some(SUCCESS_MESSAGE));
        assert!(form.name.is_empty() && form.phone.is_empty() && form.message.is_empty());
        assert_eq!(form.service, None);
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled();
        form.begin_submit().expect("valid form");

        form.finish(Err(SubmitError::Status(502)));

        assert_eq!(form.status(), FormStatus::Failed);
        assert_eq!(form.banner(), Some(FAILURE_MESSAGE));
        assert_eq!(form.name, "Ayu Lestari");
        assert_eq!(form.service, Some(Service::AntiAging));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn payload_serializes_with_wire_names() {
        let mut form = filled();
        let payload = form.begin_submit().expect("valid form");
        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(json["service"], "anti-aging");
        assert_eq!(json["phone"], "+62 877-2913-8734");
        assert_eq!(json["email"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }

    #[test]
    fn slugs_round_trip_for_every_service() {
        for service in Service::ALL {
            assert_eq!(Service::from_slug(service.slug()), Some(service));
        }
    }
}
