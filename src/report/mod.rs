pub mod html;
pub mod summary;
pub mod text;

pub use html::HtmlReport;
pub use summary::Summary;
pub use text::TextReport;

#[cfg(test)]
mod test_helpers;
