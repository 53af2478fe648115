//! Collaborator resolution for creator / last-modifier cells
//!
//! A cell watching `_creator` or `_last_modifier` holds one
//! [`CollaboratorResolver`]. Each time the watched value changes the cell
//! calls [`CollaboratorResolver::begin`], which either settles synchronously
//! (absent value, known collaborator, non-email identifier) or hands back a
//! [`Resolution::Lookup`] the caller runs against the host.
//!
//! ```text
//! Unresolved ──begin──▶ Resolving(request) ──complete(request)──▶ Resolved
//!      │                      ▲                                     │
//!      └──begin (sync)──▶ Resolved ◀────────────── begin ───────────┘
//! ```
//!
//! Every `begin` allocates a new request id. A completion carrying an older
//! id is discarded, so a slow lookup for a previous value can never
//! overwrite the result for the current one. In-flight lookups are not
//! cancelled.
//!
//! The state belongs to the identifier passed to the latest `begin`.
//! [`CollaboratorResolver::state_for`] reports a different identifier as
//! unresolved, so a cell whose row changed never shows the previous
//! row's collaborator while the new resolution has not started yet.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::GalleryResult;
use crate::host::GalleryHost;
use crate::types::Collaborator;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*@([a-zA-Z0-9\-]+\.)+[a-zA-Z]{2,}$"#)
        .expect("email pattern compiles")
});

static UNRESOLVED: ResolveState = ResolveState::Unresolved;

/// Syntactic email check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Identifier of one resolution attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// A lookup waiting on the host
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLookup {
    pub request: RequestId,
    pub email: String,
    fallback: Collaborator,
}

/// Resolution state of one cell
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResolveState {
    /// Nothing requested yet
    #[default]
    Unresolved,
    /// Waiting on a user-info lookup
    Resolving(PendingLookup),
    /// Settled; `None` when the watched value is absent
    Resolved(Option<Collaborator>),
}

/// What the caller must do after [`CollaboratorResolver::begin`]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Settled synchronously
    Ready(Option<Collaborator>),
    /// Run `get_user_common_info(email)` and report back with `request`
    Lookup { request: RequestId, email: String },
}

/// Per-cell collaborator resolution state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollaboratorResolver {
    state: ResolveState,
    /// Identifier the state was produced for
    source: Option<String>,
    last_request: u64,
}

impl CollaboratorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// State as seen by a cell currently watching `value`
    pub fn state_for(&self, value: Option<&str>) -> &ResolveState {
        if self.source.as_deref() == non_empty(value) {
            &self.state
        } else {
            &UNRESOLVED
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.state, ResolveState::Resolving(_))
    }

    /// Resolved collaborator, if settled with one
    pub fn collaborator(&self) -> Option<&Collaborator> {
        match &self.state {
            ResolveState::Resolved(c) => c.as_ref(),
            _ => None,
        }
    }

    /// Start resolving `value`, superseding any earlier attempt
    pub fn begin(
        &mut self,
        value: Option<&str>,
        collaborators: &[Collaborator],
        media_url: &str,
    ) -> Resolution {
        self.last_request += 1;
        let request = RequestId(self.last_request);
        self.source = non_empty(value).map(str::to_string);

        let Some(value) = non_empty(value) else {
            debug!(request = request.0, "No identifier to resolve");
            return self.settle(None);
        };

        if let Some(known) = collaborators.iter().find(|c| c.has_email(value)) {
            debug!(request = request.0, email = %value, "Resolved from collaborator list");
            return self.settle(Some(known.clone()));
        }

        if !is_valid_email(value) {
            debug!(request = request.0, value = %value, "Identifier is not an email, using fallback");
            return self.settle(Some(Collaborator::fallback(value, media_url)));
        }

        debug!(request = request.0, email = %value, "Looking up user info");
        self.state = ResolveState::Resolving(PendingLookup {
            request,
            email: value.to_string(),
            fallback: Collaborator::fallback(value, media_url),
        });
        Resolution::Lookup {
            request,
            email: value.to_string(),
        }
    }

    /// Apply a lookup result; returns `false` when `request` is stale
    pub fn complete(&mut self, request: RequestId, result: GalleryResult<Collaborator>) -> bool {
        let pending = match &self.state {
            ResolveState::Resolving(pending) if pending.request == request => pending,
            _ => {
                debug!(request = request.0, "Discarding stale user-info result");
                return false;
            }
        };
        let collaborator = match result {
            Ok(collaborator) => collaborator,
            Err(e) => {
                warn!(email = %pending.email, error = %e, "User-info lookup failed, using fallback");
                pending.fallback.clone()
            }
        };
        self.state = ResolveState::Resolved(Some(collaborator));
        true
    }

    fn settle(&mut self, collaborator: Option<Collaborator>) -> Resolution {
        self.state = ResolveState::Resolved(collaborator.clone());
        Resolution::Ready(collaborator)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve an identifier to completion in one call
pub async fn resolve_collaborator(
    host: &dyn GalleryHost,
    value: Option<&str>,
    collaborators: &[Collaborator],
) -> Option<Collaborator> {
    let mut resolver = CollaboratorResolver::new();
    match resolver.begin(value, collaborators, &host.get_media_url()) {
        Resolution::Ready(collaborator) => collaborator,
        Resolution::Lookup { request, email } => {
            let result = host.get_user_common_info(&email).await;
            resolver.complete(request, result);
            resolver.collaborator().cloned()
        }
    }
}
