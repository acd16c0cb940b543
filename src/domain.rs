//! Domain module - regions, the field catalogue and extracted records

pub mod field;
pub mod records;
pub mod region;

pub use field::Field;
pub use records::{
    BoardItem, BoardPage, KeywordItem, KeywordPage, ListingItem, ListingPage, ProductRecord,
    ReviewPage, ReviewRecord,
};
pub use region::Region;
