//! 应用入口编排
//!
//! 解析命令行子命令，构造认证会话与 API 客户端，分发到具体流程。
//! 认证信息缺失时在这里直接拦截，不发起任何网络操作。

use anyhow::{bail, Result};
use tracing::info;

use crate::clients::ExamClient;
use crate::config::{AuthSession, Config};
use crate::orchestrator::{analytics_report, test_runner};
use crate::services::aggregate;

/// 命令行子命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 列出可测验的试卷
    Papers,
    /// 进行一次测验
    Test { paper_id: String },
    /// 查看整体分析报表与测验历史
    Analytics,
    /// 查看单次测验的逐题详情
    Review { result_id: String },
}

impl Command {
    pub fn parse(args: &[String]) -> Option<Self> {
        let mut iter = args.iter();
        match iter.next().map(String::as_str) {
            Some("papers") => Some(Command::Papers),
            Some("test") => iter.next().map(|paper_id| Command::Test {
                paper_id: paper_id.clone(),
            }),
            Some("analytics") => Some(Command::Analytics),
            Some("review") => iter.next().map(|result_id| Command::Review {
                result_id: result_id.clone(),
            }),
            _ => None,
        }
    }

    pub fn usage() -> &'static str {
        "用法: jee_test_client <命令>\n\
         命令:\n\
           papers            列出可测验的试卷\n\
           test <paper_id>   开始一次测验\n\
           analytics         查看整体分析报表\n\
           review <result_id> 查看单次测验逐题详情"
    }
}

/// 应用程序
pub struct App {
    auth: AuthSession,
    client: ExamClient,
}

impl App {
    /// 初始化应用：校验认证信息并构造客户端
    pub fn initialize(config: Config) -> Result<Self> {
        let auth = AuthSession::from_config(&config)?;
        let client = ExamClient::new(&config);
        Ok(Self { auth, client })
    }

    /// 执行子命令
    pub async fn run(self, command: Command) -> Result<()> {
        match command {
            Command::Papers => self.run_papers().await,
            Command::Test { paper_id } => self.run_test(paper_id).await,
            Command::Analytics => self.run_analytics().await,
            Command::Review { result_id } => self.run_review(result_id).await,
        }
    }

    async fn run_papers(self) -> Result<()> {
        let papers = self.client.list_papers(&self.auth).await?;

        if papers.is_empty() {
            info!("暂无可测验的试卷");
            return Ok(());
        }

        info!("共 {} 份试卷:", papers.len());
        for paper in &papers {
            match &paper.title {
                Some(title) => info!("  {} - {}", paper.paper_id, title),
                None => info!("  {}", paper.paper_id),
            }
        }
        Ok(())
    }

    async fn run_test(self, paper_id: String) -> Result<()> {
        info!("正在取卷: {}", paper_id);
        let paper = self.client.fetch_paper(&self.auth, &paper_id).await?;
        test_runner::run_test(&self.client, &self.auth, paper_id, paper).await
    }

    async fn run_analytics(self) -> Result<()> {
        let results = self.client.fetch_analytics(&self.auth).await?;

        if results.is_empty() {
            info!("还没有测验记录");
            return Ok(());
        }

        let summary = aggregate(&results);
        analytics_report::print_summary(&summary);
        analytics_report::print_history(&results);
        Ok(())
    }

    async fn run_review(self, result_id: String) -> Result<()> {
        let results = self.client.fetch_analytics(&self.auth).await?;

        let Some(result) = results.iter().find(|r| r.result_id == result_id) else {
            bail!("未找到成绩单: {}", result_id);
        };

        analytics_report::print_result_details(result);
        Ok(())
    }
}
