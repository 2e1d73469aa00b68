//! URL state codecs
//!
//! Every piece of view state has a string form for the query string. Decoding
//! never fails: malformed input (hand-edited URLs, stale bookmarks) decodes to
//! the type's default.
//!
//! | State | Parameter | Form |
//! |-------|-----------|------|
//! | page index | `page` | 1-based integer |
//! | page size | `pageSize` | integer |
//! | sort | `sort` | `[{"id":"price","dir":"desc"}]` |
//! | column filters | `filters` | `[{"id":"status","value":["active"]}]` |
//! | visibility | `columns` | `{"sku":false}` |
//! | selection | `select` | `{"r1":true}` |
//! | select mode | `selectMode` | `true` |
//! | search | `search` | raw text |

mod history;
mod json;
mod pagination;
mod query;

pub use history::HistoryMode;
pub use history::HistoryWriter;
pub use history::MemoryHistory;
pub use pagination::decode_page;
pub use pagination::decode_page_size;
pub use pagination::encode_page;
pub use pagination::encode_page_size;
pub use query::decode_query;
pub use query::encode_query;

/// String encoding of one piece of view state.
///
/// `decode(&encode(x)) == x` holds for every reachable `x`, and `decode`
/// returns `Self::default()` for input it cannot parse.
pub trait StateCodec: Sized + Default {
    /// Encodes the state as a URL-safe token (before percent-encoding).
    fn encode(&self) -> String;

    /// Decodes a token, falling back to the default on any parse failure.
    fn decode(input: &str) -> Self;
}

impl StateCodec for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(input: &str) -> Self {
        input.to_string()
    }
}

impl StateCodec for bool {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(input: &str) -> Self {
        input == "true"
    }
}
