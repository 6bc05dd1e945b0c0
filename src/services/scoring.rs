//! 评分能力
//!
//! 核心契约：correct_answer 里存的是选项"键"，用户提交的是选项"文本"，
//! 比较前必须先把键解引用为同一张试卷里的选项文本。单次成绩详情和
//! 跨测验聚合都复用这里的逐题判分，不允许出现两套比较逻辑。

use crate::models::{AnswerMap, Paper};

/// 单次测验的得分汇总
///
/// 派生数据，按需重算，不做缓存
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSummary {
    pub correct_count: usize,
    pub total_count: usize,
    /// 正确率百分比，保留两位小数
    pub percentage: f64,
}

/// 解析第 index 题的正确选项文本
///
/// 任一环节缺失（选项映射、答案键、键不存在）都返回 None，不会越界
pub fn correct_option_value(paper: &Paper, index: usize) -> Option<&str> {
    let key = paper.correct_answer.get(index)?;
    paper.options.get(index)?.get(key).map(String::as_str)
}

/// 判断第 index 题是否答对
///
/// 未作答视为答错。注意：按选项文本比较，若同一题两个选项文本完全
/// 相同，选了错误键但文本一致的答案也会被判对（与后端现有约定一致）。
pub fn question_is_correct(paper: &Paper, index: usize, answers: &AnswerMap) -> bool {
    match (answers.get(&index), correct_option_value(paper, index)) {
        (Some(user), Some(correct)) => user == correct,
        _ => false,
    }
}

/// 计算一次测验的得分
pub fn score(paper: &Paper, answers: &AnswerMap) -> ScoreSummary {
    let total_count = paper.question_count();
    let correct_count = (0..total_count)
        .filter(|&i| question_is_correct(paper, i, answers))
        .count();

    ScoreSummary {
        correct_count,
        total_count,
        percentage: percentage_of(correct_count, total_count),
    }
}

/// correct/total 的百分比，保留两位小数；total 为 0 时定义为 0
pub fn percentage_of(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(correct as f64 / total as f64 * 100.0)
}

/// 四舍五入保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
