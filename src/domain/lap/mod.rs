pub mod classification;
pub mod date;
pub mod field;
pub mod record;
pub mod time_codec;

pub use classification::{ControlType, Drivetrain};
pub use field::{FieldKind, LapField};
pub use record::{LapRecord, PowerValue};
pub use time_codec::{NO_TIME_MS, NO_TIME_TEXT, TimeCodec};
