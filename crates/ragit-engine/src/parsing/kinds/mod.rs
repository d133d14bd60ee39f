pub mod heading;
pub mod table;

pub use heading::Heading;
pub use table::TableRow;
