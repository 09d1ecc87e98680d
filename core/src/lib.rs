//! Client-side session logic for a 2048 board whose authoritative state
//! lives in a remote engine.

#![no_std]

extern crate alloc;

pub use controller::*;
pub use error::*;
pub use input::*;
pub use service::*;
pub use store::*;
pub use view::*;

pub use game2048_protocol::{
    Board, DEFAULT_SUGGEST_DEPTH, Direction, Endpoint, GameResponse, Method, MoveStatus, SIZE,
    Suggestion,
};

mod controller;
mod error;
mod input;
mod service;
mod store;
mod view;
