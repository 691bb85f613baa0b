//! API handlers for Biblioteka REST endpoints

pub mod books;
pub mod health;
pub mod issuances;
pub mod openapi;
pub mod publishers;
pub mod readers;
pub mod users;
