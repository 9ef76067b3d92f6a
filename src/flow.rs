//! Submission flow for the design view
//!
//! A submission is split in two halves around the backend call:
//! [`DesignModel::begin`] records the message, raises the busy flag and issues
//! a sequence [`Ticket`]; [`DesignModel::complete`] applies the outcome only if
//! the ticket is still the latest one issued. Responses to superseded
//! submissions are dropped without touching the view.

use crate::api::Backend;
use crate::error::{ApiError, Flow, Result};
use crate::routes::Route;
use crate::types::{DesignRequest, GenerationResult, Message};
use leptos::prelude::{RwSignal, Update};
use std::cell::RefCell;

/// Sequence token for one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a completed submission did to the view
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The result viewer now shows the new artifact.
    Applied,
    /// The submission failed; the caller should navigate to `route`.
    Failed { route: Route, error: ApiError },
    /// A newer submission was issued meanwhile; nothing changed.
    Stale,
}

/// View-state of the design page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignModel {
    messages: Vec<Message>,
    result: Option<GenerationResult>,
    busy: bool,
    issued: u64,
}

impl DesignModel {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a submission. Blank text is ignored.
    pub fn begin(&mut self, username: &str, text: &str) -> Option<(Ticket, DesignRequest)> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(text));
        self.issued += 1;
        self.busy = true;
        Some((
            Ticket(self.issued),
            DesignRequest {
                username: username.to_string(),
                statements: text.to_string(),
            },
        ))
    }

    /// Apply the backend outcome for `ticket`.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<GenerationResult>) -> Completion {
        if ticket.0 != self.issued {
            tracing::debug!("Discarding response for superseded submission #{}", ticket.0);
            return Completion::Stale;
        }
        self.busy = false;

        let outcome = outcome.and_then(|result| match result.reported_error() {
            Some(msg) => Err(ApiError::Application(msg.to_string())),
            None => Ok(result),
        });

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Completion::Applied
            }
            Err(error) => {
                tracing::error!("Circuit design failed: {}", error);
                let route = error.route_for(Flow::Design).unwrap_or(Route::Error);
                Completion::Failed { route, error }
            }
        }
    }

    /// Drop the conversation and result for a new session.
    ///
    /// The ticket counter keeps counting, so anything still in flight is
    /// stale once it lands.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.result = None;
        self.busy = false;
        self.issued += 1;
    }

    /// Show an artifact picked from history. No backend call.
    pub fn show(&mut self, result: GenerationResult) {
        self.result = Some(result);
    }
}

/// Shared access to a [`DesignModel`] across an await point
pub trait ModelHandle {
    /// Run `f` against the model; `None` if the model is gone.
    fn with_model<R>(&self, f: impl FnOnce(&mut DesignModel) -> R) -> Option<R>;
}

impl ModelHandle for RwSignal<DesignModel> {
    fn with_model<R>(&self, f: impl FnOnce(&mut DesignModel) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ModelHandle for RefCell<DesignModel> {
    fn with_model<R>(&self, f: impl FnOnce(&mut DesignModel) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<M: ModelHandle> ModelHandle for std::rc::Rc<M> {
    fn with_model<R>(&self, f: impl FnOnce(&mut DesignModel) -> R) -> Option<R> {
        (**self).with_model(f)
    }
}

/// Submit `text` and await the backend directly.
///
/// Returns `None` when the text was blank and nothing was sent.
pub async fn submit<B, M>(backend: &B, model: &M, username: &str, text: &str) -> Option<Completion>
where
    B: Backend + ?Sized,
    M: ModelHandle,
{
    let (ticket, request) = model.with_model(|m| m.begin(username, text)).flatten()?;
    tracing::info!("Submitting design request #{}", ticket.0);
    let outcome = backend.design_circuit(&request).await;
    model.with_model(|m| m.complete(ticket, outcome))
}
