//! Service layer between HTTP handlers and repositories.

pub mod tecnico;

pub use tecnico::TecnicoService;
