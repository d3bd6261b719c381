//! One repository per table. Repositories are stateless unit structs with
//! associated async functions taking the pool explicitly; every statement is
//! a single parameterized query.

mod auth_token_repo;
mod booking_repo;
mod message_repo;
mod property_repo;
mod review_repo;
mod search_repo;
mod user_repo;

pub use auth_token_repo::AuthTokenRepo;
pub use booking_repo::BookingRepo;
pub use message_repo::MessageRepo;
pub use property_repo::PropertyRepo;
pub use review_repo::ReviewRepo;
pub use search_repo::SearchRepo;
pub use user_repo::UserRepo;
