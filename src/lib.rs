//! Work Timer：悬浮窗多计时器的核心逻辑（计时器集合、时间字符串编解码）与 .ico 转换

pub mod icon;
pub mod logging;
pub mod timecode;
pub mod timers;

pub use timecode::{TimeParseError, format_hms, parse_absolute, parse_initial, parse_relative};
pub use timers::{NamedTimer, TickClock, TimerCollection, TimerConfig, TimerError};
