mod team;
mod user;

pub use team::Team;
pub use user::{Member, User};
