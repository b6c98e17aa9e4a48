pub mod engineer;
pub mod personas;
pub mod serve;
