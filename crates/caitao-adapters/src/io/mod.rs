//! Adaptadores de archivo: lectura de filas y escritura atómica.
pub mod reader;
pub mod sheet;
pub mod writer;

pub use reader::read_rows;
pub use writer::write_atomic;
