use core::future::Future;
use core::result::Result;

use crate::{Direction, GameResponse, ServiceError, Suggestion};

/// Remote 2048 engine.
///
/// Futures are polled on a single thread, so no `Send` bound is required.
pub trait GameService {
    /// Fresh board, `PATCH /api/restart`.
    fn restart(&self) -> impl Future<Output = Result<GameResponse, ServiceError>>;

    /// Applies a move, `PATCH /api/move/{direction}`.
    fn make_move(&self, direction: Direction)
    -> impl Future<Output = Result<GameResponse, ServiceError>>;

    /// Recommended move, `POST /api/suggest/{depth}`.
    fn suggest(&self, depth: u32) -> impl Future<Output = Result<Suggestion, ServiceError>>;
}
