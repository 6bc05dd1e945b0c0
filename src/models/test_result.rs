//! 测验结果模型
//!
//! TestResult 由后端持有，客户端只拿到只读副本用于展示与分析；
//! TestResultPayload 是交卷时发送给后端的载荷。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::paper::Paper;

/// 答案映射：题目下标 -> 提交的选项文本（稀疏，只含已作答的题）
///
/// serde_json 会把整数键序列化为字符串键（"0"、"1"...），与后端格式一致。
pub type AnswerMap = BTreeMap<usize, String>;

/// 历史测验记录（后端返回）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub result_id: String,
    /// 评分所依据的试卷快照
    #[serde(default)]
    pub paper_details: Paper,
    #[serde(default)]
    pub answers: AnswerMap,
    /// 用时（秒）
    #[serde(default)]
    pub time_spent: u64,
    /// 完成时间（RFC3339 字符串，仅用于展示与排序）
    #[serde(default)]
    pub completed_at: String,
}

/// 交卷时发送给后端的载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultPayload {
    pub paper_id: String,
    pub answers: AnswerMap,
    /// 用时（秒）= 固定时长 - 剩余时间
    pub time_spent: u64,
    pub completed_at: DateTime<Utc>,
    pub total_questions: usize,
}
