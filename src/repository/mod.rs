//! Repository layer for database operations

pub mod books;
pub mod issuances;
pub mod publishers;
pub mod readers;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub readers: readers::ReadersRepository,
    pub books: books::BooksRepository,
    pub publishers: publishers::PublishersRepository,
    pub issuances: issuances::IssuancesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            readers: readers::ReadersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            issuances: issuances::IssuancesRepository::new(pool.clone()),
            pool,
        }
    }
}
