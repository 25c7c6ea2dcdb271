//! Digest rendering and delivery.

mod fs_sink;
mod html;
mod sink;

pub use fs_sink::HtmlFileSink;
pub use html::render_digest;
pub use sink::{NotificationSink, SinkError};
