pub mod date;
pub mod html;
pub mod price;

pub use date::{format_date, format_timestamp};
pub use html::{escape_html, escape_html_opt, Escaped};
pub use price::format_price;
