pub mod app;
pub mod model;

#[cfg(test)]
mod testing;
