//! 子操作计数与结果归类

/// 单个域名流水线内的子操作计数器
#[derive(Debug, Default, Clone, Copy)]
pub struct SettingTally {
    succeeded: u32,
    attempted: u32,
}

impl SettingTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次子操作的结果
    pub fn record(&mut self, ok: bool) {
        self.attempted += 1;
        if ok {
            self.succeeded += 1;
        }
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    #[must_use]
    pub fn succeeded(&self) -> u32 {
        self.succeeded
    }

    /// 归类为 (success, message)。
    ///
    /// 全部成功 → `Success (m/k)`；部分成功 → `Partial success (m/k)`
    /// （success 仍为 true，消息承载降级信息）；全部失败或零尝试 →
    /// 失败，使用调用方给定的 `empty_message`。
    #[must_use]
    pub fn classify(&self, empty_message: &str) -> (bool, String) {
        if self.attempted > 0 && self.succeeded == self.attempted {
            (
                true,
                format!("Success ({}/{})", self.succeeded, self.attempted),
            )
        } else if self.succeeded > 0 {
            (
                true,
                format!("Partial success ({}/{})", self.succeeded, self.attempted),
            )
        } else {
            (false, empty_message.to_string())
        }
    }
}
