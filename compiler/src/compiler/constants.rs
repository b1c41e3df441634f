/// Every chart query is capped at this many rows. Not configurable.
pub const ROW_LIMIT: u32 = 1000;
