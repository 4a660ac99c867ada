pub mod tecnico;
