//! 有界的内存日志
//!
//! 测试通过它断言引擎、词法分析器写出的日志。满了以后丢弃最旧的记录并计数。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::logger::LogSink;
use crate::record::{Level, Record};

/// 缓冲区快照
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingBufferStats {
    pub record_count: usize,
    /// 被挤出的记录数
    pub dropped_count: usize,
    pub capacity: usize,
}

#[derive(Default)]
struct Slots {
    records: VecDeque<Record>,
    dropped: usize,
}

pub struct LogRingBuffer {
    capacity: usize,
    slots: Mutex<Slots>,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            capacity,
            slots: Mutex::new(Slots {
                records: VecDeque::with_capacity(capacity),
                dropped: 0,
            }),
        })
    }

    fn record(&self, record: &Record) {
        let mut slots = self.slots();
        if self.capacity == 0 {
            slots.dropped += 1;
            return;
        }
        while slots.records.len() >= self.capacity {
            slots.records.pop_front();
            slots.dropped += 1;
        }
        slots.records.push_back(record.clone());
    }

    /// 所有记录，最旧的在前
    pub fn dump_records(&self) -> Vec<Record> {
        self.slots().records.iter().cloned().collect()
    }

    /// 只取消息文本
    pub fn messages(&self) -> Vec<String> {
        self.slots()
            .records
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    /// 模块路径以 `prefix` 开头、级别不低于 `min` 的消息
    pub fn messages_from(&self, prefix: &str, min: Level) -> Vec<String> {
        self.slots()
            .records
            .iter()
            .filter(|r| r.target.starts_with(prefix) && r.level >= min)
            .map(|r| r.message.clone())
            .collect()
    }

    /// 是否有任意一条消息包含给定片段
    pub fn contains(&self, needle: &str) -> bool {
        self.slots()
            .records
            .iter()
            .any(|r| r.message.contains(needle))
    }

    pub fn clear(&self) {
        *self.slots() = Slots::default();
    }

    pub fn stats(&self) -> RingBufferStats {
        let slots = self.slots();
        RingBufferStats {
            record_count: slots.records.len(),
            dropped_count: slots.dropped,
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.slots().dropped
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.record(record);
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.record(record);
    }
}

impl std::fmt::Debug for LogRingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogRingBuffer")
            .field("stats", &self.stats())
            .finish()
    }
}
