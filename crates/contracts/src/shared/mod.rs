pub mod api_response;
pub mod error;
pub mod paging;
pub mod query;
pub mod wire;

pub use api_response::{ItemResponse, ListResponse, PaginationMeta};
pub use error::ContractError;
pub use paging::{Page, DEFAULT_PAGE_SIZE};
pub use query::{from_query_params, to_query_params, QueryCriteria, QueryParams};
