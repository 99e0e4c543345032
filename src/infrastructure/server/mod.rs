//! HTTP server support

mod shutdown;

pub use shutdown::shutdown_signal;
