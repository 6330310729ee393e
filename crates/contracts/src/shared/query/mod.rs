//! Read descriptors against the external reactive store and decoding of the
//! cell values it delivers.

pub mod cell;
pub mod descriptor;
pub mod key;

pub use cell::{decode_amount, decode_row_ids, CellValueError};
pub use descriptor::{Aggregate, BalanceQuery, Filter, Query, SplitsMode};
pub use key::QueryKey;
