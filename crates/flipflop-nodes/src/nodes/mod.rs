mod date_string;
mod group_positioner;
mod legacy_date;

pub use date_string::DateToStringNode;
pub use group_positioner::GroupPositionerNode;
pub use legacy_date::LegacyDateNode;
