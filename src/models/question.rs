//! 规范化题目模型
//!
//! 把试卷的平行数组按题聚合为 Question 记录，供答题流程与报表共用。
//! 规范化结果是派生数据：只读，试卷变化时整体重算，绝不原地修改。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::paper::Paper;

/// 规范化后的单道题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 显示编号
    pub question_number: String,
    pub question_text: String,
    /// 选项文本，按选项键的字典序升序排列
    pub options: Vec<String>,
    /// 正确答案的选项键（如 "B"）
    pub correct_answer: String,
    pub subject: String,
    pub difficulty: String,
    pub concept: String,
    pub explanation: String,
    pub weightage: f64,
}

/// 把键->文本的选项映射转换为按键升序的文本列表
///
/// 顺序严格由键的字典序定义。约定键是 "A".."D" 这类单字母，此时字典序
/// 恰好就是显示顺序；键不连续或大小写混用时同样按字典序处理。
pub fn options_in_key_order(options: &BTreeMap<String, String>) -> Vec<String> {
    options.values().cloned().collect()
}

/// 把试卷规范化为有序的题目列表
///
/// 纯函数。试卷缺失某个数组时对应字段退化为空值/占位值，绝不 panic；
/// 试卷整体缺失（空结构）时产出空列表。
pub fn normalize(paper: &Paper) -> Vec<Question> {
    (0..paper.question_count())
        .map(|i| Question {
            question_number: paper.question_number.get(i).cloned().unwrap_or_default(),
            question_text: paper.question_text.get(i).cloned().unwrap_or_default(),
            options: paper
                .options
                .get(i)
                .map(options_in_key_order)
                .unwrap_or_default(),
            correct_answer: paper.correct_answer.get(i).cloned().unwrap_or_default(),
            subject: paper.subject.get(i).cloned().unwrap_or_default(),
            difficulty: paper.difficulty.get(i).cloned().unwrap_or_default(),
            concept: paper.concept.get(i).cloned().unwrap_or_default(),
            explanation: paper.explanation.get(i).cloned().unwrap_or_default(),
            weightage: paper.weightage.get(i).copied().unwrap_or(1.0),
        })
        .collect()
}
