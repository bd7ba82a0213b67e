pub mod timecode;

pub use timecode::{
    active_segment, convert_timestamp_to_seconds, format_time, TimecodeError,
};
