pub mod csv_store;
#[cfg(test)]
pub mod memory_store;
