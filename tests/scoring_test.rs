use std::collections::BTreeMap;

use jee_test_client::models::{AnswerMap, Paper};
use jee_test_client::services::{correct_option_value, question_is_correct, score};

fn option_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// n 道题的试卷：第 i 题选项为 opt-i-A..opt-i-D，正确答案键固定为 B
fn uniform_paper(n: usize) -> Paper {
    let mut paper = Paper::default();
    for i in 0..n {
        paper.question_number.push((i + 1).to_string());
        paper.question_text.push(format!("question {}", i + 1));
        let mut options = BTreeMap::new();
        for key in ["A", "B", "C", "D"] {
            options.insert(key.to_string(), format!("opt-{}-{}", i, key));
        }
        paper.options.push(options);
        paper.correct_answer.push("B".to_string());
    }
    paper
}

/// 前 k 题填正确选项文本的答案映射
fn correct_answers(paper: &Paper, k: usize) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for i in 0..k {
        answers.insert(i, correct_option_value(paper, i).unwrap().to_string());
    }
    answers
}

#[test]
fn scenario_a_value_comparison() {
    let paper = Paper {
        question_number: vec!["1".to_string()],
        options: vec![option_map(&[
            ("A", "CH"),
            ("B", "C2H2"),
            ("C", "C2H6"),
            ("D", "C2H4"),
        ])],
        correct_answer: vec!["B".to_string()],
        ..Default::default()
    };

    // 提交选项文本 "C2H2" 判对
    let mut answers = AnswerMap::new();
    answers.insert(0, "C2H2".to_string());
    assert_eq!(score(&paper, &answers).correct_count, 1);

    // 提交键本身（"B"）判错：比较的是解引用后的文本
    answers.insert(0, "B".to_string());
    assert_eq!(score(&paper, &answers).correct_count, 0);

    // 提交其他选项文本判错
    answers.insert(0, "C2H6".to_string());
    assert_eq!(score(&paper, &answers).correct_count, 0);
}

#[test]
fn exact_correct_value_always_counts_correct() {
    let paper = uniform_paper(5);
    for i in 0..5 {
        let mut answers = AnswerMap::new();
        answers.insert(i, correct_option_value(&paper, i).unwrap().to_string());
        assert!(
            question_is_correct(&paper, i, &answers),
            "第 {} 题提交正确选项文本应判对",
            i
        );
    }
}

#[test]
fn no_answers_scores_zero() {
    let paper = uniform_paper(4);
    let summary = score(&paper, &AnswerMap::new());

    assert_eq!(summary.correct_count, 0);
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.percentage, 0.0);
}

#[test]
fn percentage_rounds_to_two_decimals() {
    let paper = uniform_paper(3);

    let one = correct_answers(&paper, 1);
    assert_eq!(score(&paper, &one).percentage, 33.33);

    let two = correct_answers(&paper, 2);
    assert_eq!(score(&paper, &two).percentage, 66.67);

    let all = correct_answers(&paper, 3);
    assert_eq!(score(&paper, &all).percentage, 100.0);
}

#[test]
fn empty_paper_percentage_is_zero() {
    let summary = score(&Paper::default(), &AnswerMap::new());
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.percentage, 0.0);
}

#[test]
fn shorter_parallel_arrays_never_panic() {
    // correct_answer 比 question_number 短：超出部分一律判错
    let mut paper = uniform_paper(3);
    paper.correct_answer.truncate(1);

    let answers = correct_answers(&uniform_paper(3), 3);
    let summary = score(&paper, &answers);

    assert_eq!(summary.total_count, 3);
    assert_eq!(summary.correct_count, 1);
}

#[test]
fn out_of_range_answers_are_ignored() {
    let paper = uniform_paper(2);
    let mut answers = correct_answers(&paper, 2);
    answers.insert(99, "whatever".to_string());

    assert_eq!(score(&paper, &answers).correct_count, 2);
}

#[test]
fn duplicate_option_text_matches_by_value() {
    // 两个选项文本相同：按值比较时，选错键但文本一致的答案也判对。
    // 这是现有契约的已知特性，固化在测试里。
    let paper = Paper {
        question_number: vec!["1".to_string()],
        options: vec![option_map(&[("A", "same"), ("B", "same"), ("C", "other")])],
        correct_answer: vec!["A".to_string()],
        ..Default::default()
    };

    let mut answers = AnswerMap::new();
    answers.insert(0, "same".to_string());
    assert!(question_is_correct(&paper, 0, &answers));
}

#[test]
fn missing_correct_key_counts_wrong() {
    // correct_answer 指向不存在的键：解引用失败，一律判错且不 panic
    let paper = Paper {
        question_number: vec!["1".to_string()],
        options: vec![option_map(&[("A", "x")])],
        correct_answer: vec!["Z".to_string()],
        ..Default::default()
    };

    let mut answers = AnswerMap::new();
    answers.insert(0, "x".to_string());
    assert!(!question_is_correct(&paper, 0, &answers));
    assert!(correct_option_value(&paper, 0).is_none());
}
