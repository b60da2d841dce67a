pub mod dependency_injection;
pub mod middleware;
pub mod runtime;
pub mod server;
pub mod shutdown;

#[cfg(test)]
mod fakes;
