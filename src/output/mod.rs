mod naming;

pub use naming::{derive_output_path, COPY_MARKER};
#[cfg(test)]
pub mod unit_test;
