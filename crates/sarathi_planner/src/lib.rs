pub mod catalog;
pub mod coordinate;
pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_utils;
