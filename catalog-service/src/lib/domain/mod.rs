pub mod account;
pub mod auth;
pub mod author;
pub mod book;
pub mod catalog_name;
pub mod pagination;
