//! 多个命名计时器的状态与推进逻辑（不依赖任何 UI）

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::timecode::format_hms;

/// 默认最多同时存在的计时器数
pub const MAX_TIMERS: usize = 10;

/// 计时器集合配置
#[derive(Clone, Debug)]
pub struct TimerConfig {
    pub max_timers: usize,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            max_timers: MAX_TIMERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("limit of {max} timers reached")]
    Capacity { max: usize },
    #[error("a timer named {0:?} already exists")]
    Duplicate(String),
    #[error("timer name must not be empty")]
    EmptyName,
    #[error("no timer named {0:?}")]
    NotFound(String),
}

/// 单个计时器
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTimer {
    /// 规范化后的名字（去首尾空白、小写）
    pub name: String,
    pub elapsed_secs: i64,
}

/// 名字规范化：创建与查找都走这里
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 计时器集合。任一时刻至多一个计时器在跑，由 `running` 记录其下标。
#[derive(Debug, Default)]
pub struct TimerCollection {
    config: TimerConfig,
    timers: Vec<NamedTimer>,
    running: Option<usize>,
}

impl TimerCollection {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.timers.len() >= self.config.max_timers
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&NamedTimer> {
        self.index_of(name).map(|i| &self.timers[i])
    }

    pub fn is_running(&self, name: &str) -> bool {
        matches!((self.index_of(name), self.running), (Some(i), Some(r)) if i == r)
    }

    /// 当前在跑的计时器名字
    pub fn running_name(&self) -> Option<&str> {
        self.running.map(|i| self.timers[i].name.as_str())
    }

    /// 按添加顺序遍历，附带是否在跑
    pub fn iter(&self) -> impl Iterator<Item = (&NamedTimer, bool)> {
        self.timers
            .iter()
            .enumerate()
            .map(move |(i, t)| (t, self.running == Some(i)))
    }

    /// 已计时间格式化为 "HH:MM:SS"
    pub fn display(&self, name: &str) -> Option<String> {
        self.get(name).map(|t| format_hms(t.elapsed_secs))
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.timers.iter().position(|t| t.name == key)
    }

    fn require(&self, name: &str) -> Result<usize, TimerError> {
        self.index_of(name)
            .ok_or_else(|| TimerError::NotFound(normalize_name(name)))
    }

    /// 新建计时器（暂停状态）。负的初始值按 0 记。
    pub fn add(&mut self, name: &str, initial_secs: i64) -> Result<(), TimerError> {
        if self.is_full() {
            return Err(TimerError::Capacity {
                max: self.config.max_timers,
            });
        }
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(TimerError::EmptyName);
        }
        if self.contains(&key) {
            return Err(TimerError::Duplicate(key));
        }
        debug!(name = %key, initial_secs, "timer added");
        self.timers.push(NamedTimer {
            name: key,
            elapsed_secs: initial_secs.max(0),
        });
        Ok(())
    }

    /// 开始 / 暂停：正在跑的再点一次即全部停止；否则切换为唯一在跑的计时器。
    /// 返回该计时器新的运行状态。
    pub fn toggle(&mut self, name: &str) -> Result<bool, TimerError> {
        let idx = self.require(name)?;
        let now_running = self.running != Some(idx);
        self.running = now_running.then_some(idx);
        debug!(name = %self.timers[idx].name, running = now_running, "timer toggled");
        Ok(now_running)
    }

    /// 归零并停止
    pub fn reset(&mut self, name: &str) -> Result<(), TimerError> {
        let idx = self.require(name)?;
        self.timers[idx].elapsed_secs = 0;
        if self.running == Some(idx) {
            self.running = None;
        }
        debug!(name = %self.timers[idx].name, "timer reset");
        Ok(())
    }

    /// 增减时间（delta 可为负），结果不低于 0；返回新的已计秒数
    pub fn add_time(&mut self, name: &str, delta_secs: i64) -> Result<i64, TimerError> {
        let idx = self.require(name)?;
        let timer = &mut self.timers[idx];
        timer.elapsed_secs = timer.elapsed_secs.saturating_add(delta_secs).max(0);
        debug!(name = %timer.name, delta_secs, elapsed = timer.elapsed_secs, "time added");
        Ok(timer.elapsed_secs)
    }

    /// 推进一秒：只有在跑的计时器加 1。由外部每秒调用一次。
    pub fn tick(&mut self) {
        if let Some(i) = self.running {
            let timer = &mut self.timers[i];
            timer.elapsed_secs = timer.elapsed_secs.saturating_add(1);
        }
    }
}

/// 把墙钟时间换算成整秒 tick 数，不足一秒的部分留到下一次
#[derive(Debug, Default)]
pub struct TickClock {
    last_tick_at: Option<DateTime<Utc>>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回自上次记账以来应推进的秒数。首次调用只记录起点；时钟回拨时重新起算。
    pub fn advance(&mut self, now: DateTime<Utc>) -> u32 {
        let Some(last) = self.last_tick_at else {
            self.last_tick_at = Some(now);
            return 0;
        };
        let elapsed = (now - last).num_seconds();
        if elapsed < 0 {
            self.last_tick_at = Some(now);
            return 0;
        }
        if elapsed == 0 {
            return 0;
        }
        self.last_tick_at = Some(last + chrono::Duration::seconds(elapsed));
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }
}
