mod file_repository;
#[cfg(test)]
mod memory;
mod postgres;

pub use file_repository::FileRepository;
#[cfg(test)]
pub use memory::InMemoryFileRepository;
pub use postgres::PgFileRepository;
