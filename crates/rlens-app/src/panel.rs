//! # Panel State Machine
//!
//! One generic controller drives all ten panels; the per-panel behaviour comes
//! from its [`PanelDescriptor`]. Lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──complete──▶ Succeeded | Failed
//!                      ▲                          │
//!                      └──────────submit──────────┘
//! ```
//!
//! `submit` is refused while a request is outstanding and while any input is
//! blank. Every accepted submission gets a [`RequestToken`]; `complete` only
//! applies an outcome whose token matches this instance and the outstanding
//! request.

use std::fmt;

use chrono::{DateTime, Local};
use rlens_core::prelude::*;
use rlens_core::{PanelDescriptor, PanelId, PanelResult};
use rlens_gateway::{GatewayError, RawPayload, RequestInputs};

/// Generation number of a mounted panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies one accepted submission of one panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub instance: InstanceId,
    pub seq: u64,
}

/// Everything needed to perform an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: RequestToken,
    pub endpoint_path: &'static str,
    pub inputs: RequestInputs,
}

/// Why `submit` was refused. The machine state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A required input is blank.
    EmptyInput { label: &'static str },
    /// A request is already outstanding.
    InFlight,
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejection::EmptyInput { label } => write!(f, "{label} is required"),
            SubmitRejection::InFlight => write!(f, "A request is already in progress"),
        }
    }
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The token did not match the outstanding request; nothing changed.
    Stale,
}

/// Request lifecycle. A result and an error message can never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus {
    Idle,
    Submitting {
        started_at: DateTime<Local>,
    },
    Succeeded {
        result: Box<PanelResult>,
        completed_at: DateTime<Local>,
    },
    Failed {
        message: String,
        completed_at: DateTime<Local>,
    },
}

/// Controller for one mounted panel.
#[derive(Debug, Clone)]
pub struct PanelMachine {
    descriptor: &'static PanelDescriptor,
    instance: InstanceId,
    /// One value per `descriptor.required_inputs`, same order.
    values: Vec<String>,
    focus: usize,
    status: RequestStatus,
    next_seq: u64,
    outstanding: Option<u64>,
    rejection: Option<SubmitRejection>,
}

impl PanelMachine {
    pub fn new(descriptor: &'static PanelDescriptor, instance: InstanceId) -> Self {
        Self {
            descriptor,
            instance,
            values: vec![String::new(); descriptor.required_inputs.len()],
            focus: 0,
            status: RequestStatus::Idle,
            next_seq: 0,
            outstanding: None,
            rejection: None,
        }
    }

    pub fn id(&self) -> PanelId {
        self.descriptor.id
    }

    pub fn descriptor(&self) -> &'static PanelDescriptor {
        self.descriptor
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, RequestStatus::Submitting { .. })
    }

    pub fn result(&self) -> Option<&PanelResult> {
        match &self.status {
            RequestStatus::Succeeded { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// The last refused submit, cleared by the next edit or accepted submit.
    pub fn rejection(&self) -> Option<SubmitRejection> {
        self.rejection
    }

    // ── Inputs ───────────────────────────────────────────────────────────

    pub fn input(&self, name: &str) -> Option<&str> {
        self.field_index(name).map(|i| self.values[i].as_str())
    }

    /// `(field name, current value)` in form order.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.descriptor
            .required_inputs
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name, value.as_str()))
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.values.len().max(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.values.len().max(1);
        self.focus = (self.focus + len - 1) % len;
    }

    /// Replace a field's value. Refused while submitting or for unknown fields.
    pub fn edit_input(&mut self, field: &str, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        let Some(index) = self.field_index(field) else {
            warn!("{} has no input named '{}'", self.id(), field);
            return false;
        };
        self.values[index] = value.into();
        self.rejection = None;
        true
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) -> bool {
        let name = self.focused_name();
        let mut value = self.values[self.focus].clone();
        value.push(c);
        self.edit_input(name, value)
    }

    /// Remove the last character of the focused field.
    pub fn pop_char(&mut self) -> bool {
        let name = self.focused_name();
        let mut value = self.values[self.focus].clone();
        if value.pop().is_none() {
            return false;
        }
        self.edit_input(name, value)
    }

    pub fn clear_focused(&mut self) -> bool {
        let name = self.focused_name();
        self.edit_input(name, String::new())
    }

    fn focused_name(&self) -> &'static str {
        self.descriptor.required_inputs[self.focus].name
    }

    fn field_index(&self, name: &str) -> Option<usize> {
        self.descriptor
            .required_inputs
            .iter()
            .position(|f| f.name == name)
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Check the submit guard without changing anything.
    pub fn can_submit(&self) -> std::result::Result<(), SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }
        match self
            .descriptor
            .required_inputs
            .iter()
            .zip(&self.values)
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((field, _)) => Err(SubmitRejection::EmptyInput { label: field.label }),
            None => Ok(()),
        }
    }

    /// Start a submission: clears the previous result or error and moves to
    /// `Submitting`. Input values are sent trimmed.
    pub fn submit(&mut self) -> std::result::Result<Submission, SubmitRejection> {
        if let Err(rejection) = self.can_submit() {
            debug!("{} {} submit refused: {}", self.id(), self.instance, rejection);
            if rejection != SubmitRejection::InFlight {
                self.rejection = Some(rejection);
            }
            return Err(rejection);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.outstanding = Some(seq);
        self.rejection = None;
        self.status = RequestStatus::Submitting {
            started_at: Local::now(),
        };

        let token = RequestToken {
            instance: self.instance,
            seq,
        };
        let inputs = self
            .inputs()
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .collect();

        info!(
            "{} {} submitting to {}",
            self.id(),
            self.instance,
            self.descriptor.endpoint_path
        );
        Ok(Submission {
            token,
            endpoint_path: self.descriptor.endpoint_path,
            inputs,
        })
    }

    /// Apply a gateway outcome if `token` is the outstanding request.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<RawPayload, GatewayError>,
    ) -> Completion {
        if token.instance != self.instance || self.outstanding != Some(token.seq) {
            debug!(
                "{} {} ignoring stale completion {:?}",
                self.id(),
                self.instance,
                token
            );
            return Completion::Stale;
        }
        self.outstanding = None;
        let completed_at = Local::now();

        self.status = match outcome {
            Ok(payload) => match (self.descriptor.normalize)(&payload) {
                Ok(result) => {
                    info!("{} {} succeeded", self.id(), self.instance);
                    // Inputs are locked while submitting, so this is what was sent
                    let requested = self.input("username").map(str::trim).unwrap_or_default();
                    RequestStatus::Succeeded {
                        result: Box::new(result.with_requested_username(requested)),
                        completed_at,
                    }
                }
                Err(e) => {
                    warn!("{} {}: {} raw={}", self.id(), self.instance, e, e.raw_excerpt());
                    RequestStatus::Failed {
                        message: e.to_string(),
                        completed_at,
                    }
                }
            },
            Err(e) => {
                warn!("{} {} failed: {}", self.id(), self.instance, e);
                RequestStatus::Failed {
                    message: e.user_message(),
                    completed_at,
                }
            }
        };
        Completion::Applied
    }
}
