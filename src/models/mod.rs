pub mod company;
pub mod error;
pub mod health;
pub mod index;
pub mod sector;
pub mod table;
pub mod validate;
