//! Variant Browser Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod query;
pub mod annotation;
pub mod pagination;
pub mod session;

pub use types::{PageResult, VariantRow, ErrorPayload, Population, RowId, NOT_AVAILABLE};
pub use error::{Error, Result};
pub use query::{FilterCriteria, FilterForm, FrequencyRange, CHROMOSOMES, SEARCH_PATH};
pub use annotation::{AnnotationInfo, ENSEMBL_REST_URL, parse_annotation, variation_url};
pub use pagination::{PageButton, NavState, RangeLabel, PAGE_WINDOW_WIDTH, page_window, nav_state, range_label};
pub use session::{AnnotationCache, AnnotationState, PageController, RequestTicket};
