pub mod account;
pub mod author;
pub mod book;

pub use account::SqliteAccountRepository;
pub use author::SqliteAuthorRepository;
pub use book::SqliteBookRepository;
