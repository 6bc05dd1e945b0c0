//! 编排层
//!
//! ## 职责
//!
//! 命令分发与流程调度，是整个客户端的"指挥中心"。
//!
//! ### `app` - 应用入口
//! - 解析子命令（papers / test / analytics / review）
//! - 构造 AuthSession 与 ExamClient 并显式下发
//!
//! ### `test_runner` - 交互式答题
//! - 持有 TestSession 与 Countdown
//! - 合流标准输入命令与定时 tick
//! - 触发交卷（手动 / 超时自动）
//!
//! ### `analytics_report` - 报表输出
//! - 整体统计、维度分解、测验历史、逐题详情
//!
//! ## 设计原则
//!
//! 1. 只有编排层持有网络客户端与定时任务
//! 2. 向下依赖：orchestrator → workflow / services → models
//! 3. 不做业务判断：判分与聚合全部委托 services

pub mod analytics_report;
pub mod app;
pub mod test_runner;

pub use app::{App, Command};
