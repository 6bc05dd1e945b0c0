//! 分析报表输出
//!
//! 消费历史测验记录：整体统计、按科目/难度分解、测验历史与单卷逐题
//! 详情。全部数字都来自 services 层的重新判分，报表只负责排版。

use tracing::info;

use crate::models::TestResult;
use crate::services::analytics::AnalyticsSummary;
use crate::services::scoring::{correct_option_value, question_is_correct, score};
use crate::utils::format_duration;

/// 输出整体统计与维度分解
pub fn print_summary(summary: &AnalyticsSummary) {
    info!("{}", "=".repeat(60));
    info!("📊 测验分析");
    info!("{}", "=".repeat(60));
    info!("测验次数: {}", summary.total_tests);
    info!("总题数: {}", summary.total_questions);
    info!("总答对: {}", summary.total_correct);
    info!("平均得分: {}%", summary.average_percentage);
    info!("平均用时: {} 分钟", summary.average_time_minutes);

    if !summary.subject_stats.is_empty() {
        info!("{}", "─".repeat(60));
        info!("按科目:");
        for (subject, stat) in &summary.subject_stats {
            info!("  {}: {}/{}", subject, stat.correct, stat.total);
        }
    }

    if !summary.difficulty_stats.is_empty() {
        info!("{}", "─".repeat(60));
        info!("按难度:");
        for (difficulty, stat) in &summary.difficulty_stats {
            info!("  {}: {}/{}", difficulty, stat.correct, stat.total);
        }
    }
    info!("{}", "=".repeat(60));
}

/// 输出测验历史（最近的在前），逐条重新判分
pub fn print_history(results: &[TestResult]) {
    let mut ordered: Vec<&TestResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    info!("测验历史:");
    for (index, result) in ordered.iter().enumerate() {
        let summary = score(&result.paper_details, &result.answers);
        info!(
            "  #{} [{}] 得分 {}/{} ({}%) 用时 {} 单号 {}",
            index + 1,
            result.completed_at,
            summary.correct_count,
            summary.total_count,
            summary.percentage,
            format_duration(result.time_spent),
            result.result_id
        );
    }
}

/// 输出单次测验的逐题详情
pub fn print_result_details(result: &TestResult) {
    let paper = &result.paper_details;
    let summary = score(paper, &result.answers);

    info!("{}", "=".repeat(60));
    info!(
        "成绩单 {} - 得分 {}/{} ({}%), 用时 {}",
        result.result_id,
        summary.correct_count,
        summary.total_count,
        summary.percentage,
        format_duration(result.time_spent)
    );
    info!("{}", "=".repeat(60));

    for index in 0..paper.question_count() {
        let label = paper
            .question_number
            .get(index)
            .map(String::as_str)
            .unwrap_or("");
        let text = paper
            .question_text
            .get(index)
            .map(String::as_str)
            .unwrap_or("");
        let correct = question_is_correct(paper, index, &result.answers);
        let user_answer = result
            .answers
            .get(&index)
            .map(String::as_str)
            .unwrap_or("未作答");
        let correct_value = correct_option_value(paper, index).unwrap_or("?");
        let correct_key = paper
            .correct_answer
            .get(index)
            .map(String::as_str)
            .unwrap_or("?");

        info!("Q{}: {}", label, text);
        info!("  判定: {}", if correct { "✅ 正确" } else { "❌ 错误" });
        info!("  你的答案: {}", user_answer);
        info!("  正确答案: {} ({})", correct_value, correct_key);

        if let Some(explanation) = paper.explanation.get(index) {
            if !explanation.is_empty() {
                info!("  解析: {}", explanation);
            }
        }

        let mut meta = Vec::new();
        if let Some(subject) = paper.subject.get(index) {
            if !subject.is_empty() {
                meta.push(format!("科目: {}", subject));
            }
        }
        if let Some(difficulty) = paper.difficulty.get(index) {
            if !difficulty.is_empty() {
                meta.push(format!("难度: {}", difficulty));
            }
        }
        if let Some(concept) = paper.concept.get(index) {
            if !concept.is_empty() {
                meta.push(format!("概念: {}", concept));
            }
        }
        if !meta.is_empty() {
            info!("  {}", meta.join(" | "));
        }
    }
}
