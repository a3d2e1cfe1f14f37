//! Application services for the user directory.

mod directory;

pub use directory::{
    CreateUserRequest, UpdateUserRequest, UserDirectory, UserDirectoryError, UserDirectoryResult,
};
