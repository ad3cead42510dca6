pub mod bootstrap;
pub mod csv;
