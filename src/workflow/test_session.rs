//! 测验会话状态机
//!
//! 状态流转：NotStarted → InProgress → Submitting → Submitted
//!
//! 关键不变量：
//! - N > 0 时恒有 0 <= current_index < N
//! - time_remaining 永不为负
//! - 每个会话至多提交一次：超时自动交卷与手动交卷并发时，
//!   第二次 begin_submit 必须是空操作
//! - 时钟一旦停止就不再恢复（交卷失败重试期间同样保持停止）

use chrono::Utc;

use crate::models::{AnswerMap, Question, TestResultPayload};

/// 固定测验时长：90 分钟
pub const TEST_DURATION_SECS: u64 = 90 * 60;

/// 会话所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Submitting,
    /// 终态，不再流出
    Submitted,
}

/// tick() 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 倒计时继续，携带剩余秒数
    Running(u64),
    /// 时间耗尽，调用方应触发自动交卷；同一会话只会返回一次
    Expired,
    /// 时钟已停止或会话不在进行中，本次 tick 无任何效果
    Inactive,
}

/// 单次测验会话
///
/// 由创建它的视图独占持有，会话之间没有共享可变状态；
/// 导航离开或成功交卷后整体丢弃。
#[derive(Debug)]
pub struct TestSession {
    paper_id: String,
    /// 规范化题目，会话期间固定不变
    questions: Vec<Question>,
    phase: Phase,
    current_index: usize,
    answers: AnswerMap,
    time_remaining: u64,
    clock_stopped: bool,
}

impl TestSession {
    pub fn new(paper_id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            paper_id: paper_id.into(),
            questions,
            phase: Phase::NotStarted,
            current_index: 0,
            answers: AnswerMap::new(),
            time_remaining: TEST_DURATION_SECS,
            clock_stopped: false,
        }
    }

    // ========== 只读访问 ==========

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paper_id(&self) -> &str {
        &self.paper_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// 当前题已提交的答案
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(&self.current_index).map(String::as_str)
    }

    /// 已作答题数（进度显示用）
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 剩余秒数
    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    /// 已用秒数
    pub fn time_spent(&self) -> u64 {
        TEST_DURATION_SECS - self.time_remaining
    }

    // ========== 状态转换 ==========

    /// 开始测验：初始化倒计时、下标与答案
    ///
    /// 仅在 NotStarted 阶段有效，返回是否真正开始
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::InProgress;
        self.current_index = 0;
        self.answers.clear();
        self.time_remaining = TEST_DURATION_SECS;
        true
    }

    /// 记录/覆盖当前题的答案（选项文本），不移动下标
    pub fn select_answer(&mut self, value: impl Into<String>) -> bool {
        if self.phase != Phase::InProgress || self.questions.is_empty() {
            return false;
        }
        self.answers.insert(self.current_index, value.into());
        true
    }

    /// 下一题；已在最后一题时不动
    pub fn next(&mut self) -> bool {
        if self.phase != Phase::InProgress || self.current_index + 1 >= self.questions.len() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// 上一题；已在第一题时不动
    pub fn previous(&mut self) -> bool {
        if self.phase != Phase::InProgress || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// 自由跳转到任意有效下标（不要求先作答）
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.phase != Phase::InProgress || index >= self.questions.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// 推进倒计时一秒
    ///
    /// 归零时停止时钟并返回一次 Expired，由调用方触发自动交卷；
    /// 此后迟到的 tick 一律返回 Inactive，无任何可观察效果。
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::InProgress || self.clock_stopped {
            return TickOutcome::Inactive;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.clock_stopped = true;
            return TickOutcome::Expired;
        }
        TickOutcome::Running(self.time_remaining)
    }

    /// 进入提交阶段并打包交卷载荷
    ///
    /// 仅在 InProgress 阶段返回 Some；Submitting/Submitted 期间重入
    /// 返回 None，保证至多一次提交在途。
    pub fn begin_submit(&mut self) -> Option<TestResultPayload> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.phase = Phase::Submitting;
        self.clock_stopped = true;

        Some(TestResultPayload {
            paper_id: self.paper_id.clone(),
            answers: self.answers.clone(),
            time_spent: self.time_spent(),
            completed_at: Utc::now(),
            total_questions: self.questions.len(),
        })
    }

    /// 交卷成功，进入终态
    pub fn mark_submitted(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Submitted;
        }
    }

    /// 交卷失败：回到 InProgress 以便手动重试，但时钟保持停止，
    /// 避免超时自动交卷反复触发
    pub fn mark_submit_failed(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::InProgress;
        }
    }

    /// 停止时钟；幂等，任意阶段调用都安全
    pub fn stop(&mut self) {
        self.clock_stopped = true;
    }
}
