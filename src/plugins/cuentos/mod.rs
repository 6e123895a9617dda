pub mod handlers;
pub mod models;
pub mod plugin;
pub mod repo;

#[cfg(test)]
mod tests;
