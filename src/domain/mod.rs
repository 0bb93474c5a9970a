pub mod criteria;
pub mod listing;
pub mod table;

pub use criteria::{FormData, ListingType, SearchCriteria};
pub use listing::{ListingRow, LISTING_COLUMNS};
pub use table::PropertyTable;
