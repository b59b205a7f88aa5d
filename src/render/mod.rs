pub mod frame;

use std::time::Duration;

pub const FULL_BLOCK: char = '\u{2588}';
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1000);
