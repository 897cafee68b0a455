//! Queue of modal requests shared by everything on the page.
//!
//! Callers enqueue through [`DialogManager::alert`] or [`DialogManager::confirm`] and
//! suspend on the returned future. The presenter reads [`DialogManager::front`], shows
//! it, and answers with [`DialogManager::respond`], which dequeues the request and wakes
//! its caller. Requests are presented strictly oldest first.

use crate::app::i18n::MessageKey;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{oneshot, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
}

/// Content shown under the title. The manager never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Text(String),
    /// Resolved against the page's message catalog when presented.
    Message(MessageKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub title: String,
    pub body: DialogBody,
}

impl DialogSpec {
    pub fn new(title: impl Into<String>, body: DialogBody) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    Accept,
    Decline,
    Dismiss,
}

enum Responder {
    Alert(oneshot::Sender<Acknowledged>),
    Confirm(oneshot::Sender<bool>),
}

impl Responder {
    fn kind(&self) -> DialogKind {
        match self {
            Responder::Alert(_) => DialogKind::Alert,
            Responder::Confirm(_) => DialogKind::Confirm,
        }
    }

    /// Returns false when the caller dropped its future before the answer arrived.
    fn settle(self, response: DialogResponse) -> bool {
        match self {
            Responder::Alert(tx) => tx.send(Acknowledged).is_ok(),
            Responder::Confirm(tx) => tx.send(response == DialogResponse::Accept).is_ok(),
        }
    }
}

struct DialogRequest {
    id: DialogId,
    title: String,
    body: DialogBody,
    responder: Responder,
}

/// What the presenter needs to draw a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSnapshot {
    pub id: DialogId,
    pub kind: DialogKind,
    pub title: String,
    pub body: DialogBody,
}

#[derive(Default)]
struct DialogRegistry {
    next_id: u64,
    pending: VecDeque<DialogRequest>,
}

#[derive(Clone)]
pub struct DialogManager {
    registry: Arc<Mutex<DialogRegistry>>,
    changes: Arc<watch::Sender<u64>>,
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogManager {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            registry: Arc::new(Mutex::new(DialogRegistry::default())),
            changes: Arc::new(changes),
        }
    }

    /// Queues an alert. The future resolves once the user dismisses it and never
    /// resolves if the page is torn down first.
    pub fn alert(&self, spec: DialogSpec) -> impl Future<Output = Acknowledged> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        self.enqueue(spec, Responder::Alert(tx));
        wait_for(rx)
    }

    /// Queues a confirmation. Resolves to true only when the user accepts.
    pub fn confirm(&self, spec: DialogSpec) -> impl Future<Output = bool> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        self.enqueue(spec, Responder::Confirm(tx));
        wait_for(rx)
    }

    pub fn front(&self) -> Option<DialogSnapshot> {
        self.lock().pending.front().map(|request| DialogSnapshot {
            id: request.id,
            kind: request.responder.kind(),
            title: request.title.clone(),
            body: request.body.clone(),
        })
    }

    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Ticks on every registry change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Settles the request with `id` and removes it. Returns false if it was
    /// already settled or never existed.
    pub fn respond(&self, id: DialogId, response: DialogResponse) -> bool {
        let request = {
            let mut registry = self.lock();
            registry
                .pending
                .iter()
                .position(|request| request.id == id)
                .and_then(|index| registry.pending.remove(index))
        };
        let Some(request) = request else {
            tracing::debug!(dialog = id.0, "ignoring response for settled dialog");
            return false;
        };
        self.publish();
        let kind = request.responder.kind();
        if !request.responder.settle(response) {
            tracing::debug!(dialog = id.0, ?kind, "dialog caller stopped waiting");
        }
        tracing::debug!(dialog = id.0, ?kind, ?response, "dialog settled");
        true
    }

    /// Drops every pending request without answering it. Their callers stay
    /// suspended for good.
    pub fn teardown(&self) {
        let dropped: Vec<DialogRequest> = self.lock().pending.drain(..).collect();
        if dropped.is_empty() {
            return;
        }
        tracing::info!(count = dropped.len(), "dropping unanswered dialogs");
        drop(dropped);
        self.publish();
    }

    fn enqueue(&self, spec: DialogSpec, responder: Responder) -> DialogId {
        let kind = responder.kind();
        let id = {
            let mut registry = self.lock();
            registry.next_id += 1;
            let id = DialogId(registry.next_id);
            registry.pending.push_back(DialogRequest {
                id,
                title: spec.title,
                body: spec.body,
                responder,
            });
            id
        };
        self.publish();
        tracing::debug!(dialog = id.0, ?kind, "dialog queued");
        id
    }

    fn publish(&self) {
        self.changes
            .send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    fn lock(&self) -> MutexGuard<'_, DialogRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn wait_for<T>(rx: oneshot::Receiver<T>) -> T {
    match rx.await {
        Ok(value) => value,
        Err(_) => std::future::pending().await,
    }
}
