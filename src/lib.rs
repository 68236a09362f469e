pub mod admission;
pub mod edge;
pub mod error;
pub mod lb;
pub mod policy;
pub mod sim;
pub mod stats;
pub mod traffic;
pub mod viz;

#[cfg(test)]
mod test;
