pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::author;
pub use domain::book;
pub use outbound::repositories;
