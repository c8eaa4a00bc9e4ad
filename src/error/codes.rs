/// Error code registry for random-standup
///
/// Roster errors use the 1000-1999 range.
pub struct ErrorCode;

impl ErrorCode {
    pub const ROSTER_NOT_FOUND: u16 = 1001;
    pub const ROSTER_READ_FAILED: u16 = 1002;
    pub const ROSTER_PARSE_ERROR: u16 = 1003;
}
