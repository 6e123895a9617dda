pub mod cuentos;
pub mod health;
