//! Page Controller Module
//!
//! Fetch-or-serve-from-cache logic, next-page prefetch and pager state.

mod page;
mod state;

pub use page::{BlockReason, Navigation, PageController, PageLoad};
pub use state::PaginationState;
