pub mod fetcher;
pub mod http;
pub mod retry;
pub mod source;
pub mod types;

pub use fetcher::{FetchOutcome, FetchState, QuoteFetcher, QuoteSurface, SurfaceUpdate};
pub use http::HttpQuoteSource;
pub use retry::RetryPolicy;
pub use source::{QuoteError, QuoteSource};
pub use types::{FieldPair, Quote, default_field_pairs, parse_quote};
