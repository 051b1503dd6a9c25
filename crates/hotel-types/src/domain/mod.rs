pub mod booking;
pub mod filter;
pub mod ids;
pub mod room;
pub mod user;

pub use booking::*;
pub use filter::*;
pub use ids::*;
pub use room::*;
pub use user::*;
