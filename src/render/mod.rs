pub mod dot;
pub mod html;
pub mod json;

pub use dot::DotRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
