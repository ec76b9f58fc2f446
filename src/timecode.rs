//! 时间字符串编解码：`HH:MM:SS` / `MM:SS` 绝对时间、`10m` / `1h` / `30s` 相对时长，以及秒数格式化

use thiserror::Error;

pub const SECS_PER_MINUTE: i64 = 60;
pub const SECS_PER_HOUR: i64 = 3600;

/// 解析失败（错误信息即展示给用户的提示）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected MM:SS or HH:MM:SS, got {0} field(s)")]
    FieldCount(usize),
    #[error("invalid time field {0:?}")]
    InvalidField(String),
    #[error("invalid duration {0:?}")]
    InvalidDuration(String),
    #[error("time {0:?} is out of range")]
    OutOfRange(String),
}

/// 解析 `MM:SS` 或 `HH:MM:SS`，返回总秒数。
///
/// 各分量不做范围检查：`"0:75"`、`"-1:00"` 都会照常相加；总数超出 i64 时返回 `OutOfRange`。
pub fn parse_absolute(input: &str) -> Result<i64, TimeParseError> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    let fields = parts
        .iter()
        .map(|p| {
            let p = p.trim();
            p.parse::<i64>()
                .map_err(|_| TimeParseError::InvalidField(p.to_owned()))
        })
        .collect::<Result<Vec<i64>, _>>();

    let weights: &[i64] = match parts.len() {
        2 => &[SECS_PER_MINUTE, 1],
        3 => &[SECS_PER_HOUR, SECS_PER_MINUTE, 1],
        n => return Err(TimeParseError::FieldCount(n)),
    };
    fields?
        .iter()
        .zip(weights)
        .try_fold(0i64, |total, (&v, &w)| v.checked_mul(w)?.checked_add(total))
        .ok_or_else(|| TimeParseError::OutOfRange(input.trim().to_owned()))
}

/// 新建计时器时的初始时间：空白视为 `00:00:00`，否则按绝对时间解析
pub fn parse_initial(input: &str) -> Result<i64, TimeParseError> {
    if input.trim().is_empty() {
        return Ok(0);
    }
    parse_absolute(input)
}

/// 解析 `10`、`10m`、`1.5h`、`30s`、`-5m` 等相对时长，无单位时按分钟计。
/// 空输入返回 0。小数部分按秒截断（向零取整）。
pub fn parse_relative(input: &str) -> Result<i64, TimeParseError> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        return Ok(0);
    }

    let (number, multiplier) = if let Some(rest) = s.strip_suffix('s') {
        (rest, 1)
    } else if let Some(rest) = s.strip_suffix('m') {
        (rest, SECS_PER_MINUTE)
    } else if let Some(rest) = s.strip_suffix('h') {
        (rest, SECS_PER_HOUR)
    } else {
        (s.as_str(), SECS_PER_MINUTE)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| TimeParseError::InvalidDuration(input.trim().to_owned()))?;
    if !value.is_finite() {
        return Err(TimeParseError::InvalidDuration(input.trim().to_owned()));
    }
    // `as` 对超出 i64 的值做饱和截断
    Ok((value * multiplier as f64) as i64)
}

/// 秒数格式化为 "HH:MM:SS"，小时不按 24 回绕；负数按 0 处理
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    let h = s / SECS_PER_HOUR;
    let m = (s % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let s = s % SECS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
