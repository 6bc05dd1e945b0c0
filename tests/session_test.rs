use std::collections::BTreeMap;

use tokio::sync::mpsc;

use jee_test_client::models::{normalize, Paper};
use jee_test_client::workflow::{
    Countdown, Phase, TestSession, TickOutcome, TEST_DURATION_SECS,
};

/// n 道题的会话，每题选项 A/B，正确键 A
fn session_with(n: usize) -> TestSession {
    let mut paper = Paper::default();
    for i in 0..n {
        paper.question_number.push((i + 1).to_string());
        paper.question_text.push(format!("question {}", i + 1));
        let mut options = BTreeMap::new();
        options.insert("A".to_string(), format!("opt-{}-a", i));
        options.insert("B".to_string(), format!("opt-{}-b", i));
        paper.options.push(options);
        paper.correct_answer.push("A".to_string());
    }
    TestSession::new("paper-1", normalize(&paper))
}

#[test]
fn start_initializes_session() {
    let mut session = session_with(3);
    assert_eq!(session.phase(), Phase::NotStarted);

    assert!(session.start());
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.time_remaining(), TEST_DURATION_SECS);
    assert!(session.answers().is_empty());

    // 重复 start 无效
    assert!(!session.start());
}

#[test]
fn select_answer_records_and_overwrites() {
    let mut session = session_with(3);

    // 未开始时不可作答
    assert!(!session.select_answer("x"));

    session.start();
    assert!(session.select_answer("opt-0-a"));
    assert_eq!(session.current_answer(), Some("opt-0-a"));
    // 不移动下标
    assert_eq!(session.current_index(), 0);

    // 覆盖
    assert!(session.select_answer("opt-0-b"));
    assert_eq!(session.current_answer(), Some("opt-0-b"));
    assert_eq!(session.answered_count(), 1);
}

#[test]
fn next_is_noop_at_last_question() {
    // 场景 C：current_index 在 N-1 处调用 next() 不动
    let mut session = session_with(3);
    session.start();

    assert!(session.jump_to(2));
    assert!(!session.next());
    assert_eq!(session.current_index(), 2);
}

#[test]
fn previous_is_noop_at_first_question() {
    let mut session = session_with(3);
    session.start();

    assert!(!session.previous());
    assert_eq!(session.current_index(), 0);
}

#[test]
fn jump_then_previous() {
    // 场景 D：N=5 时 jumpTo(3) 再 previous() 应停在 2
    let mut session = session_with(5);
    session.start();

    assert!(session.jump_to(3));
    assert!(session.previous());
    assert_eq!(session.current_index(), 2);
}

#[test]
fn jump_to_rejects_invalid_index() {
    let mut session = session_with(3);
    session.start();

    assert!(!session.jump_to(3));
    assert_eq!(session.current_index(), 0);
}

#[test]
fn tick_strictly_decreases_until_expiry() {
    let mut session = session_with(1);
    session.start();

    let mut previous = session.time_remaining();
    let mut expired = 0;

    for _ in 0..TEST_DURATION_SECS {
        match session.tick() {
            TickOutcome::Running(remaining) => {
                assert!(remaining < previous, "剩余时间必须严格递减");
                previous = remaining;
            }
            TickOutcome::Expired => expired += 1,
            TickOutcome::Inactive => panic!("倒计时归零前不应出现 Inactive"),
        }
    }

    assert_eq!(expired, 1, "Expired 只能出现一次");
    assert_eq!(session.time_remaining(), 0);

    // 迟到的 tick 没有任何可观察效果
    assert_eq!(session.tick(), TickOutcome::Inactive);
    assert_eq!(session.tick(), TickOutcome::Inactive);
    assert_eq!(session.time_remaining(), 0);
}

#[test]
fn begin_submit_is_single_flight() {
    let mut session = session_with(2);
    session.start();
    session.select_answer("opt-0-a");
    session.tick();
    session.tick();

    let payload = session.begin_submit().expect("首次提交应拿到载荷");
    assert_eq!(session.phase(), Phase::Submitting);
    assert_eq!(payload.paper_id, "paper-1");
    assert_eq!(payload.total_questions, 2);
    assert_eq!(payload.time_spent, 2);
    assert_eq!(payload.answers.get(&0).map(String::as_str), Some("opt-0-a"));

    // 提交在途时重入是空操作
    assert!(session.begin_submit().is_none());

    session.mark_submitted();
    assert_eq!(session.phase(), Phase::Submitted);
    // 终态：不再接受任何提交或 tick
    assert!(session.begin_submit().is_none());
    assert_eq!(session.tick(), TickOutcome::Inactive);
}

#[test]
fn failed_submit_keeps_session_resubmittable_with_clock_stopped() {
    let mut session = session_with(2);
    session.start();
    session.tick();

    assert!(session.begin_submit().is_some());
    session.mark_submit_failed();

    // 会话保留，可手动重试
    assert_eq!(session.phase(), Phase::InProgress);
    let retry = session.begin_submit().expect("失败后应可重新提交");
    assert_eq!(retry.time_spent, 1, "重试期间时钟保持停止，用时不变");

    session.mark_submit_failed();
    // 时钟保持停止：不会再次触发超时自动交卷
    assert_eq!(session.tick(), TickOutcome::Inactive);
}

#[test]
fn stop_is_idempotent_in_any_phase() {
    let mut session = session_with(2);
    session.stop();
    session.stop();

    session.start();
    session.stop();
    session.stop();
    assert_eq!(session.tick(), TickOutcome::Inactive);
    assert_eq!(session.time_remaining(), TEST_DURATION_SECS);
}

#[test]
fn empty_session_guards_navigation() {
    let mut session = session_with(0);
    session.start();

    assert!(!session.select_answer("x"));
    assert!(!session.next());
    assert!(!session.jump_to(0));
    assert!(session.current_question().is_none());
}

#[tokio::test(start_paused = true)]
async fn countdown_ticks_every_second_and_stops() {
    let (tx, mut rx) = mpsc::channel::<()>(1);
    let mut countdown = Countdown::start(tx);

    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());

    countdown.stop();
    // 幂等
    countdown.stop();

    // 任务中止后发送端被丢弃，不会再有 tick
    assert!(rx.recv().await.is_none());
    assert!(!countdown.is_running());
}

#[tokio::test(start_paused = true)]
async fn countdown_stops_on_drop() {
    let (tx, mut rx) = mpsc::channel::<()>(1);
    {
        let _countdown = Countdown::start(tx);
        assert!(rx.recv().await.is_some());
    }
    // 句柄析构即停止，杜绝悬挂定时器
    assert!(rx.recv().await.is_none());
}
