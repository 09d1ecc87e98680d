use alloc::boxed::Box;
use alloc::string::ToString;
use core::cell::{Ref, RefCell};
use core::future::Future;

use crate::*;

/// Why an operation was dropped at admission.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    InFlight,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and its result is in the store.
    Applied,
    /// The remote call failed; the store carries the error message.
    Failed,
    /// Nothing happened.
    Rejected(Rejection),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Operation {
    Restart,
    Move(Direction),
    Suggest,
}

impl Operation {
    const fn requires_live_game(self) -> bool {
        !matches!(self, Self::Restart)
    }
}

/// Serializes player intent into calls against a [`GameService`] and folds
/// the results into a [`SessionStore`].
///
/// At most one call is outstanding at a time. Calls issued while another is
/// pending, and moves or suggestions issued after a win or loss, are dropped
/// without touching the store.
pub struct Controller<S> {
    service: S,
    store: RefCell<SessionStore>,
    suggest_depth: u32,
    on_change: Option<Box<dyn Fn()>>,
}

impl<S: GameService> Controller<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: RefCell::new(SessionStore::new()),
            suggest_depth: DEFAULT_SUGGEST_DEPTH,
            on_change: None,
        }
    }

    pub fn with_suggest_depth(mut self, depth: u32) -> Self {
        self.suggest_depth = depth.max(1);
        self
    }

    /// Called after every store mutation.
    pub fn on_change(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> Ref<'_, SessionStore> {
        self.store.borrow()
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_store(&self.store.borrow())
    }

    pub fn is_terminal(&self) -> bool {
        self.store.borrow().is_terminal()
    }

    pub fn in_flight(&self) -> bool {
        self.store.borrow().in_flight()
    }

    pub async fn restart(&self) -> Outcome {
        self.dispatch(
            Operation::Restart,
            || self.service.restart(),
            |store, response: GameResponse| store.set_board(response.board),
        )
        .await
    }

    pub async fn perform_move(&self, direction: Direction) -> Outcome {
        self.dispatch(
            Operation::Move(direction),
            || self.service.make_move(direction),
            |store, response: GameResponse| {
                store.set_board(response.board);
                store.set_status(response.status);
            },
        )
        .await
    }

    pub async fn suggest(&self) -> Outcome {
        let depth = self.suggest_depth;
        self.dispatch(
            Operation::Suggest,
            || self.service.suggest(depth),
            |store, suggestion: Suggestion| store.set_suggestion(Some(suggestion)),
        )
        .await
    }

    /// Manual single-cell edit. Not gated; a pending call that completes
    /// afterwards replaces the whole board.
    pub fn edit_cell(&self, row: usize, col: usize, text: &str) -> Result<u32> {
        let value = self.store.borrow_mut().edit_cell(row, col, text)?;
        log::debug!("edit cell ({}, {}) = {}", row, col, value);
        self.notify();
        Ok(value)
    }

    async fn dispatch<T, F, Fut, A>(&self, operation: Operation, call: F, apply: A) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = core::result::Result<T, ServiceError>>,
        A: FnOnce(&mut SessionStore, T),
    {
        let flight = match self.admit(operation) {
            Ok(flight) => flight,
            Err(rejection) => {
                log::debug!("{:?} rejected: {:?}", operation, rejection);
                return Outcome::Rejected(rejection);
            }
        };
        log::debug!("{:?} started", operation);
        self.notify();

        let result = call().await;

        let outcome = {
            let mut store = self.store.borrow_mut();
            match result {
                Ok(value) => {
                    apply(&mut store, value);
                    Outcome::Applied
                }
                Err(err) => {
                    log::warn!("{:?} failed: {}", operation, err);
                    store.set_error(Some(err.to_string()));
                    Outcome::Failed
                }
            }
        };
        drop(flight);
        log::debug!("{:?} finished: {:?}", operation, outcome);
        outcome
    }

    fn admit(&self, operation: Operation) -> core::result::Result<InFlight<'_, S>, Rejection> {
        let mut store = self.store.borrow_mut();
        if store.in_flight() {
            return Err(Rejection::InFlight);
        }
        if operation.requires_live_game() && store.is_terminal() {
            return Err(Rejection::Terminal);
        }
        store.begin_operation();
        Ok(InFlight { controller: self })
    }

    fn notify(&self) {
        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }
}

/// Holds the in-flight flag; dropping it releases the flag on every path,
/// including when the pending future itself is dropped.
struct InFlight<'a, S: GameService> {
    controller: &'a Controller<S>,
}

impl<S: GameService> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.controller.store.borrow_mut().set_in_flight(false);
        self.controller.notify();
    }
}
