use jee_test_client::config::{AuthSession, Config};
use jee_test_client::logger;
use jee_test_client::models::{AnswerMap, TestResult, TestResultPayload};
use jee_test_client::ExamClient;

#[test]
fn payload_serializes_to_backend_shape() {
    let mut answers = AnswerMap::new();
    answers.insert(0, "C2H2".to_string());
    answers.insert(2, "CH".to_string());

    let payload = TestResultPayload {
        paper_id: "paper-42".to_string(),
        answers,
        time_spent: 321,
        completed_at: "2026-08-25T08:30:00Z".parse().unwrap(),
        total_questions: 5,
    };

    let json = serde_json::to_value(&payload).unwrap();

    // 后端契约使用 camelCase 字段名
    assert_eq!(json["paperId"], "paper-42");
    assert_eq!(json["timeSpent"], 321);
    assert_eq!(json["totalQuestions"], 5);
    // 答案映射的键是字符串化的题目下标（稀疏，只含已作答的题）
    assert_eq!(json["answers"]["0"], "C2H2");
    assert_eq!(json["answers"]["2"], "CH");
    assert!(json["answers"].get("1").is_none());
    // 完成时间是 RFC3339 字符串
    assert!(json["completedAt"].as_str().unwrap().starts_with("2026-08-25T"));
}

#[test]
fn test_result_deserializes_from_backend_shape() {
    // 历史成绩接口返回 snake_case 字段与字符串键的答案映射
    let json = r#"{
        "result_id": "res-7",
        "paper_details": {
            "question_number": [1, 2],
            "options": [
                {"A": "x", "B": "y"},
                {"A": "p", "B": "q"}
            ],
            "correct_answer": ["A", "B"]
        },
        "answers": {"0": "x", "1": "p"},
        "time_spent": 540,
        "completed_at": "2026-08-20T12:00:00Z"
    }"#;

    let result: TestResult = serde_json::from_str(json).expect("应能解析历史记录");
    assert_eq!(result.result_id, "res-7");
    assert_eq!(result.paper_details.question_count(), 2);
    assert_eq!(result.answers.get(&0).map(String::as_str), Some("x"));
    assert_eq!(result.time_spent, 540);

    let summary = jee_test_client::score(&result.paper_details, &result.answers);
    assert_eq!(summary.correct_count, 1);
    assert_eq!(summary.percentage, 50.0);
}

// ========== 以下为真实后端联调测试，默认忽略 ==========
// 需要配置 JEE_ID_TOKEN / JEE_USER_NAME 后手动运行：cargo test -- --ignored

#[tokio::test]
#[ignore]
async fn test_list_papers() {
    logger::init();

    let config = Config::from_env();
    let auth = AuthSession::from_config(&config).expect("需要配置 JEE_ID_TOKEN 和 JEE_USER_NAME");
    let client = ExamClient::new(&config);

    let papers = client.list_papers(&auth).await.expect("拉取试卷列表失败");
    println!("找到 {} 份试卷", papers.len());
}

#[tokio::test]
#[ignore]
async fn test_fetch_paper_and_normalize() {
    logger::init();

    let config = Config::from_env();
    let auth = AuthSession::from_config(&config).expect("需要配置 JEE_ID_TOKEN 和 JEE_USER_NAME");
    let client = ExamClient::new(&config);

    let papers = client.list_papers(&auth).await.expect("拉取试卷列表失败");
    let first = papers.first().expect("至少需要一份试卷");

    let paper = client
        .fetch_paper(&auth, &first.paper_id)
        .await
        .expect("取卷失败");
    let questions = jee_test_client::normalize(&paper);
    assert!(!questions.is_empty(), "试卷应包含题目");
}

#[tokio::test]
#[ignore]
async fn test_fetch_analytics() {
    logger::init();

    let config = Config::from_env();
    let auth = AuthSession::from_config(&config).expect("需要配置 JEE_ID_TOKEN 和 JEE_USER_NAME");
    let client = ExamClient::new(&config);

    let results = client.fetch_analytics(&auth).await.expect("拉取历史记录失败");
    let summary = jee_test_client::aggregate(&results);
    println!(
        "共 {} 次测验, 平均得分 {}%",
        summary.total_tests, summary.average_percentage
    );
}
