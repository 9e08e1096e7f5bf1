//! HTTP Handlers

mod capability;
mod live;
mod ping;
mod websocket;

pub use capability::*;
pub use live::*;
pub use ping::*;
pub use websocket::*;
