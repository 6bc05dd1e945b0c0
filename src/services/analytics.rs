//! 分析聚合能力
//!
//! 对全部历史测验逐题重新判分后汇总，不信任结果里任何预存的百分比，
//! 避免评分键在生成与回看之间发生变化时出现偏差。

use std::collections::BTreeMap;

use crate::models::TestResult;
use crate::services::scoring::{percentage_of, question_is_correct};

/// 单一维度（科目/难度）的正确数与总数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionStat {
    pub correct: usize,
    pub total: usize,
}

/// 跨全部历史测验的聚合统计
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsSummary {
    pub total_tests: usize,
    pub total_questions: usize,
    pub total_correct: usize,
    /// 按"见过的总题数"加权的平均百分比，而非各测验百分比的算术平均：
    /// 50 道题的测验理应比 5 道题的测验占更大权重
    pub average_percentage: f64,
    /// 平均用时（分钟，四舍五入）
    pub average_time_minutes: u64,
    /// 按科目的正确/总数（按原始维度值分组）
    pub subject_stats: BTreeMap<String, DimensionStat>,
    /// 按难度的正确/总数（按原始维度值分组）
    pub difficulty_stats: BTreeMap<String, DimensionStat>,
}

/// 聚合历史测验记录
///
/// 纯函数、确定性；对同一批结果重复调用产出完全相同的结果，
/// 也可在任意子集上重跑。
pub fn aggregate(results: &[TestResult]) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary {
        total_tests: results.len(),
        ..Default::default()
    };

    let mut total_time: u64 = 0;

    for result in results {
        let paper = &result.paper_details;
        let count = paper.question_count();
        summary.total_questions += count;
        total_time += result.time_spent;

        for index in 0..count {
            let correct = question_is_correct(paper, index, &result.answers);
            if correct {
                summary.total_correct += 1;
            }

            // 维度值缺失的题只跳过该维度的统计，不影响总数
            bump_dimension(&mut summary.subject_stats, paper.subject.get(index), correct);
            bump_dimension(
                &mut summary.difficulty_stats,
                paper.difficulty.get(index),
                correct,
            );
        }
    }

    summary.average_percentage = percentage_of(summary.total_correct, summary.total_questions);
    if !results.is_empty() {
        let mean_seconds = total_time as f64 / results.len() as f64;
        summary.average_time_minutes = (mean_seconds / 60.0).round() as u64;
    }

    summary
}

fn bump_dimension(
    stats: &mut BTreeMap<String, DimensionStat>,
    value: Option<&String>,
    correct: bool,
) {
    let Some(value) = value else { return };
    if value.is_empty() {
        return;
    }

    let entry = stats.entry(value.clone()).or_default();
    entry.total += 1;
    if correct {
        entry.correct += 1;
    }
}
