//! Core data types.

mod ohlcv;
mod order;
mod position;
mod session;
mod signal;
mod timeframe;

pub use ohlcv::{Bar, BarSeries};
pub use order::{OrderHandle, OrderRequest, OrderStatus, Side};
pub use position::Position;
pub use session::SessionWindow;
pub use signal::{Direction, Signal};
pub use timeframe::Timeframe;
