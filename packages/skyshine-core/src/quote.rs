//! Quote request form.
//!
//! Two states, `Editing` and `Submitted`. Submitting checks that name, email
//! and airport are non-empty. A failed check notifies the visitor and leaves
//! the form untouched. A passing check emits one
//! [`AnalyticsEvent::QuoteFormSubmitted`] and locks the form; filing another
//! request needs a fresh form (a page reload in the browser).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::error::QuoteError;
use crate::notify::Notifier;
use crate::types::ServiceKind;

/// Shown through the [`Notifier`] when a required field is empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please complete required fields.";

/// Trip details for a quote. Serialized as the analytics payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Tail number
    pub tail: String,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    /// ICAO or IATA code
    pub airport: String,
    /// Sent as the service label, or `""` when none was chosen
    #[serde(with = "service_key")]
    pub service: Option<ServiceKind>,
    pub notes: String,
    /// Fleet pricing requested
    pub fleet: bool,
}

impl QuoteForm {
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Tail => &self.tail,
            QuoteField::AircraftType => &self.aircraft_type,
            QuoteField::Airport => &self.airport,
            QuoteField::Notes => &self.notes,
        }
    }

    fn slot(&mut self, field: QuoteField) -> &mut String {
        match field {
            QuoteField::Name => &mut self.name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Tail => &mut self.tail,
            QuoteField::AircraftType => &mut self.aircraft_type,
            QuoteField::Airport => &mut self.airport,
            QuoteField::Notes => &mut self.notes,
        }
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_required(&self) -> Vec<QuoteField> {
        QuoteField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

mod service_key {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::types::ServiceKind;

    pub fn serialize<S>(service: &Option<ServiceKind>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(service.as_ref().map_or("", ServiceKind::label))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ServiceKind>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        ServiceKind::parse_selection(&key).map_err(de::Error::custom)
    }
}

/// Text fields of [`QuoteForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Tail,
    AircraftType,
    Airport,
    Notes,
}

impl QuoteField {
    pub const REQUIRED: [QuoteField; 3] = [QuoteField::Name, QuoteField::Email, QuoteField::Airport];

    /// Payload key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            QuoteField::Name => "name",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::Tail => "tail",
            QuoteField::AircraftType => "type",
            QuoteField::Airport => "airport",
            QuoteField::Notes => "notes",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Input placeholder; required fields carry a trailing `*`.
    pub fn placeholder(&self) -> &'static str {
        match self {
            QuoteField::Name => "Name*",
            QuoteField::Email => "Email*",
            QuoteField::Phone => "Phone",
            QuoteField::Tail => "Tail number",
            QuoteField::AircraftType => "Aircraft type",
            QuoteField::Airport => "Airport (ICAO/IATA)*",
            QuoteField::Notes => "Notes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStatus {
    #[default]
    Editing,
    Submitted,
}

/// Quote form state owned by the "Get a Quote" section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    status: QuoteStatus,
    form: QuoteForm,
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> QuoteStatus {
        self.status
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.status == QuoteStatus::Submitted
    }

    fn ensure_editing(&self) -> Result<(), QuoteError> {
        if self.is_submitted() {
            return Err(QuoteError::AlreadySubmitted);
        }
        Ok(())
    }

    pub fn edit(&mut self, field: QuoteField, value: impl Into<String>) -> Result<(), QuoteError> {
        self.ensure_editing()?;
        *self.form.slot(field) = value.into();
        Ok(())
    }

    pub fn set_service(&mut self, service: Option<ServiceKind>) -> Result<(), QuoteError> {
        self.ensure_editing()?;
        self.form.service = service;
        Ok(())
    }

    pub fn set_fleet(&mut self, fleet: bool) -> Result<(), QuoteError> {
        self.ensure_editing()?;
        self.form.fleet = fleet;
        Ok(())
    }

    /// Validate and file the request.
    ///
    /// On a missing required field the visitor is notified with
    /// [`REQUIRED_FIELDS_MESSAGE`] and the form stays in `Editing`.
    pub fn submit(
        &mut self,
        sink: &dyn AnalyticsSink,
        notifier: &dyn Notifier,
    ) -> Result<(), QuoteError> {
        self.ensure_editing()?;

        let missing = self.form.missing_required();
        if !missing.is_empty() {
            warn!(missing = ?missing, "Quote request rejected");
            notifier.notify(REQUIRED_FIELDS_MESSAGE);
            return Err(QuoteError::MissingRequired(missing));
        }

        sink.emit(&AnalyticsEvent::QuoteFormSubmitted {
            form: self.form.clone(),
        });
        info!(airport = %self.form.airport, fleet = self.form.fleet, "Quote request submitted");
        self.status = QuoteStatus::Submitted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::NoopSink;
    use crate::notify::LogNotifier;

    fn filled() -> QuoteRequest {
        let mut quote = QuoteRequest::new();
        quote.edit(QuoteField::Name, "Dana Park").unwrap();
        quote.edit(QuoteField::Email, "dana@example.com").unwrap();
        quote.edit(QuoteField::Airport, "KTEB").unwrap();
        quote
    }

    #[test]
    fn missing_required_lists_empty_fields_in_order() {
        let mut quote = QuoteRequest::new();
        quote.edit(QuoteField::Email, "dana@example.com").unwrap();
        assert_eq!(
            quote.form().missing_required(),
            vec![QuoteField::Name, QuoteField::Airport]
        );
    }

    #[test]
    fn optional_fields_do_not_block_submit() {
        let mut quote = filled();
        assert!(quote.submit(&NoopSink, &LogNotifier).is_ok());
        assert_eq!(quote.status(), QuoteStatus::Submitted);
    }

    #[test]
    fn submitted_form_is_locked() {
        let mut quote = filled();
        quote.submit(&NoopSink, &LogNotifier).unwrap();

        assert_eq!(
            quote.edit(QuoteField::Notes, "one more thing"),
            Err(QuoteError::AlreadySubmitted)
        );
        assert_eq!(quote.set_fleet(true), Err(QuoteError::AlreadySubmitted));
        assert_eq!(
            quote.set_service(Some(ServiceKind::Brightwork)),
            Err(QuoteError::AlreadySubmitted)
        );
        assert_eq!(quote.form().notes, "");
    }

    #[test]
    fn error_message_names_fields() {
        let err = QuoteError::MissingRequired(vec![QuoteField::Name, QuoteField::Airport]);
        assert_eq!(err.to_string(), "missing required fields: name, airport");
    }

    #[test]
    fn payload_uses_type_key_for_aircraft() {
        let mut quote = filled();
        quote.edit(QuoteField::AircraftType, "G650").unwrap();
        quote.set_service(Some(ServiceKind::LeatherTreatment)).unwrap();
        let value = serde_json::to_value(quote.form()).unwrap();
        assert_eq!(value["type"], "G650");
        assert_eq!(value["service"], "Leather Treatment");
        assert_eq!(value["fleet"], false);
    }

    #[test]
    fn unselected_service_is_an_empty_string() {
        let value = serde_json::to_value(filled().form()).unwrap();
        assert_eq!(value["service"], "");
    }

    #[test]
    fn service_key_reads_back() {
        let mut form: QuoteForm = serde_json::from_value(serde_json::json!({
            "name": "", "email": "", "phone": "", "tail": "", "type": "",
            "airport": "", "service": "", "notes": "", "fleet": false,
        }))
        .unwrap();
        assert_eq!(form.service, None);

        form.service = Some(ServiceKind::FullDetail);
        let back: QuoteForm = serde_json::from_value(serde_json::to_value(&form).unwrap()).unwrap();
        assert_eq!(back.service, Some(ServiceKind::FullDetail));
    }

    #[test]
    fn unknown_service_key_is_rejected() {
        let err = serde_json::from_value::<QuoteForm>(serde_json::json!({
            "name": "", "email": "", "phone": "", "tail": "", "type": "",
            "airport": "", "service": "Polish", "notes": "", "fleet": false,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown service: Polish"));
    }

    #[test]
    fn required_flags() {
        assert!(QuoteField::Airport.is_required());
        assert!(!QuoteField::Tail.is_required());
        assert!(QuoteField::Name.placeholder().ends_with('*'));
    }
}
