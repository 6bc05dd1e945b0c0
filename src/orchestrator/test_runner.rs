//! 交互式答题流程
//!
//! 从标准输入读取命令驱动会话状态机，同时由 Countdown 任务每秒推进
//! 倒计时；两路事件用 select! 合流。交卷（无论超时自动还是手动）后
//! 立即停掉定时任务，保证不会出现第二次提交。

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::clients::ExamClient;
use crate::config::AuthSession;
use crate::error::AppError;
use crate::models::{normalize, Paper};
use crate::utils::{format_clock, position_letter};
use crate::workflow::{Countdown, Phase, TestSession, TickOutcome, TEST_DURATION_SECS};

/// 剩余时间低于该值时给出提醒（10 分钟）
const LOW_TIME_WARN_SECS: u64 = 600;

enum LoopAction {
    Continue,
    Break,
}

/// 进行一次完整测验
///
/// 会话由本函数独占持有；中途退出直接丢弃（不做部分保存）。
pub async fn run_test(
    client: &ExamClient,
    auth: &AuthSession,
    paper_id: String,
    paper: Paper,
) -> Result<()> {
    let questions = normalize(&paper);
    if questions.is_empty() {
        return Err(AppError::empty_paper(paper_id).into());
    }

    let mut session = TestSession::new(paper_id, questions);
    print_instructions(&session);

    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(1);
    let mut countdown: Option<Countdown> = None;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = tick_rx.recv() => {
                match session.tick() {
                    TickOutcome::Running(remaining) => {
                        if remaining == LOW_TIME_WARN_SECS {
                            warn!("⏰ 剩余时间不足 10 分钟！");
                        }
                    }
                    TickOutcome::Expired => {
                        warn!("⏰ 时间到，自动交卷");
                        stop_countdown(&mut countdown);
                        submit(&mut session, client, auth).await;
                        if session.phase() == Phase::Submitted {
                            break;
                        }
                        // 交卷失败：会话保留，时钟保持停止，等待手动 submit 重试
                    }
                    TickOutcome::Inactive => {}
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // 标准输入关闭，丢弃会话
                    stop_countdown(&mut countdown);
                    break;
                };
                let action = handle_line(
                    line.trim(),
                    &mut session,
                    &mut countdown,
                    &tick_tx,
                    client,
                    auth,
                ).await;
                if let LoopAction::Break = action {
                    stop_countdown(&mut countdown);
                    break;
                }
            }
        }
    }

    Ok(())
}

async fn handle_line(
    line: &str,
    session: &mut TestSession,
    countdown: &mut Option<Countdown>,
    tick_tx: &mpsc::Sender<()>,
    client: &ExamClient,
    auth: &AuthSession,
) -> LoopAction {
    let mut parts = line.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let argument = parts.next().unwrap_or("").trim();

    match command {
        "start" => {
            if session.start() {
                *countdown = Some(Countdown::start(tick_tx.clone()));
                info!("✅ 测验开始，限时 90 分钟");
                show_question(session);
            } else {
                println!("测验已经开始");
            }
        }
        "a" => {
            if session.phase() != Phase::InProgress {
                println!("请先输入 start 开始测验");
                return LoopAction::Continue;
            }
            match resolve_answer(session, argument) {
                Some(value) => {
                    session.select_answer(value);
                    show_question(session);
                }
                None => println!("无效选项，请输入选项字母（如 a B）或完整选项文本"),
            }
        }
        "n" | "p" | "g" if session.phase() != Phase::InProgress => {
            println!("请先输入 start 开始测验");
        }
        "n" => {
            session.next();
            show_question(session);
        }
        "p" => {
            session.previous();
            show_question(session);
        }
        "g" => {
            // 按显示序号跳转（从 1 开始）
            match argument.parse::<usize>() {
                Ok(number) if number >= 1 && session.jump_to(number - 1) => {
                    show_question(session);
                }
                _ => println!("无效题号，范围 1-{}", session.question_count()),
            }
        }
        "time" => {
            println!("剩余时间: {}", format_clock(session.time_remaining()));
        }
        "submit" => {
            if session.phase() == Phase::NotStarted {
                println!("请先输入 start 开始测验");
                return LoopAction::Continue;
            }
            stop_countdown(countdown);
            submit(session, client, auth).await;
            if session.phase() == Phase::Submitted {
                return LoopAction::Break;
            }
        }
        "quit" => {
            info!("已退出测验，本次作答未保存");
            return LoopAction::Break;
        }
        "" => {}
        _ => println!("未知命令。可用命令: start / a <选项> / n / p / g <题号> / time / submit / quit"),
    }

    LoopAction::Continue
}

/// 交卷：打包载荷并提交
///
/// begin_submit 的守卫保证重入（提交在途或已提交）时直接返回
async fn submit(session: &mut TestSession, client: &ExamClient, auth: &AuthSession) {
    let Some(payload) = session.begin_submit() else {
        return;
    };

    info!(
        "📤 正在提交测验结果... (已答 {}/{} 题, 用时 {})",
        payload.answers.len(),
        payload.total_questions,
        format_clock(payload.time_spent)
    );

    match client.submit_result(auth, &payload).await {
        Ok(result_id) => {
            session.mark_submitted();
            info!("✅ 交卷成功，成绩单号: {}", result_id);
        }
        Err(e) => {
            session.mark_submit_failed();
            warn!("⚠️ 交卷失败: {}", e);
            warn!("会话已保留，可输入 submit 重试（计时保持停止）");
        }
    }
}

fn stop_countdown(countdown: &mut Option<Countdown>) {
    if let Some(countdown) = countdown.as_mut() {
        countdown.stop();
    }
}

/// 把用户输入解析为选项文本
///
/// 单个字母按显示位置取值（A=第一个选项），其余输入视为完整选项文本
fn resolve_answer(session: &TestSession, input: &str) -> Option<String> {
    let question = session.current_question()?;

    if input.len() == 1 {
        let letter = input.chars().next()?.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            let index = (letter as u8 - b'A') as usize;
            return question.options.get(index).cloned();
        }
    }

    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}

fn print_instructions(session: &TestSession) {
    println!("{}", "=".repeat(60));
    println!("MCQ 测验");
    println!("  题目总数: {}", session.question_count());
    println!("  限时: {}", format_clock(TEST_DURATION_SECS));
    println!("  可在题目间自由跳转，时间耗尽自动交卷");
    println!("{}", "=".repeat(60));
    println!("输入 start 开始测验");
}

fn show_question(session: &TestSession) {
    let Some(question) = session.current_question() else {
        return;
    };

    println!();
    println!(
        "第 {}/{} 题  [已答 {}/{}]  剩余 {}",
        session.current_index() + 1,
        session.question_count(),
        session.answered_count(),
        session.question_count(),
        format_clock(session.time_remaining())
    );
    println!("Q{}: {}", question.question_number, question.question_text);

    if question.options.is_empty() {
        println!("  （本题没有可用选项）");
    }
    for (index, option) in question.options.iter().enumerate() {
        let marker = if session.current_answer() == Some(option.as_str()) {
            "＊"
        } else {
            "  "
        };
        println!("{} {}. {}", marker, position_letter(index), option);
    }

    let mut meta = Vec::new();
    if !question.subject.is_empty() {
        meta.push(format!("科目: {}", question.subject));
    }
    if !question.difficulty.is_empty() {
        meta.push(format!("难度: {}", question.difficulty));
    }
    if !question.concept.is_empty() {
        meta.push(format!("概念: {}", question.concept));
    }
    if !meta.is_empty() {
        println!("  {}", meta.join(" | "));
    }
}
