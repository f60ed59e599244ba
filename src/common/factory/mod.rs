mod card;
mod dashboard;
mod user;

pub use card::*;
pub use dashboard::*;
pub use user::*;
