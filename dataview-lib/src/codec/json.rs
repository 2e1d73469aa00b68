//! JSON-valued codecs

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::StateCodec;
use crate::state::ColumnFilters;
use crate::state::ColumnVisibility;
use crate::state::RowSelection;
use crate::state::Sorting;

fn encode_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode view state: {}", e);
            String::new()
        }
    }
}

fn decode_json<T: DeserializeOwned + Default>(input: &str) -> T {
    if input.is_empty() {
        return T::default();
    }
    match serde_json::from_str(input) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Ignoring malformed view state {:?}: {}", input, e);
            T::default()
        }
    }
}

macro_rules! json_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StateCodec for $ty {
                fn encode(&self) -> String {
                    encode_json(self)
                }

                fn decode(input: &str) -> Self {
                    decode_json(input)
                }
            }
        )*
    };
}

json_codec!(Sorting, ColumnFilters, ColumnVisibility, RowSelection);
