mod arithmetic;
mod error;
mod ids;
mod reducer;
mod serialization;
mod sorting;
mod types;

pub use arithmetic::{add_days, add_months};
pub use error::{DateError, ReducerError, SerializationError};
pub use ids::{IdGenerator, SequentialIds, ShortIds, UuidIds, DEFAULT_SHORT_ID_LENGTH};
pub use reducer::{reduce, Action, CreatePayload, DeletePayload, UpdatePayload};
pub use serialization::{
    format_iso_datetime, parse_contentful_app_state, parse_dates, parse_iso_datetime,
    serialize_app_state, serialize_dates,
};
pub use sorting::{date_comparator, is_sorted, sort_dates};
pub use types::{AppState, ContentfulAppState, EventDate, SerializedAppState, SerializedEventDate};
