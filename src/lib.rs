//! # JEE Test Client
//!
//! 试卷生成与测验服务的终端客户端
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - Paper（平行数组试卷）、Question（规范化题目）、TestResult
//!
//! ### ② 业务能力层（Services）
//! - `services/scoring` - 逐题判分与得分汇总
//! - `services/analytics` - 跨历史测验的聚合统计
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/test_session` - 测验会话状态机（90 分钟倒计时、自动交卷）
//! - `workflow/countdown` - 可取消的每秒定时任务
//!
//! ### ④ 客户端层（Clients）
//! - `clients/exam_client` - 考试服务 API（列卷 / 取卷 / 交卷 / 历史成绩）
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/` - 命令分发、交互式答题、报表输出
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ExamClient, PaperListing};
pub use config::{AuthSession, Config};
pub use error::{AppError, AppResult};
pub use models::{normalize, AnswerMap, Paper, Question, TestResult, TestResultPayload};
pub use orchestrator::{App, Command};
pub use services::{aggregate, score, AnalyticsSummary, ScoreSummary};
pub use workflow::{Countdown, Phase, TestSession, TickOutcome, TEST_DURATION_SECS};
