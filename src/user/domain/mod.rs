//! Domain model for team members.

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::{EmailAddress, UserId, UserName};
pub use user::{NewUser, User, UserPatch};
