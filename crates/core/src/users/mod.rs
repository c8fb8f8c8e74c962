//! Users module - domain models, services, and traits.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, User, UserDetails};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
