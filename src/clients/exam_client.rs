//! 考试服务 API 客户端
//!
//! 封装与后端的全部 JSON 契约：列卷、取卷、交卷、取历史成绩。
//! 只依赖"发请求体、解析 JSON、按 success/error 判别"这一层语义，
//! 不关心传输细节。

use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::{AuthSession, Config};
use crate::error::AppError;
use crate::models::{Paper, TestResult, TestResultPayload};

/// 考试服务客户端
pub struct ExamClient {
    http: reqwest::Client,
    base_url: String,
}

/// 试卷列表项（retrieve-papers 返回）
#[derive(Debug, Clone, Deserialize)]
pub struct PaperListing {
    pub paper_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PaperListResponse {
    papers: Option<Vec<PaperListing>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FetchPaperResponse {
    paper: Option<Paper>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(rename = "resultId")]
    result_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyticsResponse {
    results: Option<Vec<TestResult>>,
    error: Option<String>,
}

impl ExamClient {
    /// 创建新的考试服务客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 拉取当前用户的试卷列表
    pub async fn list_papers(&self, auth: &AuthSession) -> Result<Vec<PaperListing>> {
        let endpoint = format!("{}/retrieve-papers", self.base_url);
        let body = json!({
            "token": auth.token,
            "name": auth.user_name,
        });

        let response: PaperListResponse = self.post_json(&endpoint, &body).await?;

        match response.papers {
            Some(papers) => {
                debug!("拉取到 {} 份试卷", papers.len());
                Ok(papers)
            }
            None => Err(AppError::api_bad_response(
                &endpoint,
                response.error.unwrap_or_else(|| "未返回试卷列表".to_string()),
            )
            .into()),
        }
    }

    /// 拉取一张试卷用于测验
    pub async fn fetch_paper(&self, auth: &AuthSession, paper_id: &str) -> Result<Paper> {
        let endpoint = format!("{}/get-paper-for-test", self.base_url);
        let body = json!({
            "token": auth.token,
            "paperId": paper_id,
        });

        let response: FetchPaperResponse = self.post_json(&endpoint, &body).await?;

        match response.paper {
            Some(paper) => {
                debug!("取卷成功: {} 道题", paper.question_count());
                Ok(paper)
            }
            None => Err(AppError::api_bad_response(
                &endpoint,
                response.error.unwrap_or_else(|| "试卷不存在".to_string()),
            )
            .into()),
        }
    }

    /// 提交测验结果，返回后端分配的成绩单号
    ///
    /// 后端不保证该调用幂等，调用方负责单飞（提交在途时禁止重入）
    pub async fn submit_result(
        &self,
        auth: &AuthSession,
        payload: &TestResultPayload,
    ) -> Result<String> {
        let endpoint = format!("{}/submit-test-result", self.base_url);
        let body = json!({
            "token": auth.token,
            "userName": auth.user_name,
            "testResult": payload,
        });

        debug!("交卷 Payload: {}", serde_json::to_string(payload)?);

        let response: SubmitResponse = self.post_json(&endpoint, &body).await?;

        if response.success {
            Ok(response.result_id.unwrap_or_default())
        } else {
            Err(AppError::api_bad_response(
                &endpoint,
                response.error.unwrap_or_else(|| "提交被拒绝".to_string()),
            )
            .into())
        }
    }

    /// 拉取当前用户的全部历史测验记录
    pub async fn fetch_analytics(&self, auth: &AuthSession) -> Result<Vec<TestResult>> {
        let endpoint = format!("{}/get-user-analytics", self.base_url);
        let body = json!({
            "token": auth.token,
            "userName": auth.user_name,
        });

        let response: AnalyticsResponse = self.post_json(&endpoint, &body).await?;

        match response.results {
            Some(results) => {
                debug!("拉取到 {} 条历史测验记录", results.len());
                Ok(results)
            }
            None => Err(AppError::api_bad_response(
                &endpoint,
                response.error.unwrap_or_else(|| "未返回历史记录".to_string()),
            )
            .into()),
        }
    }

    /// 发送 POST 请求并解析 JSON 响应
    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self
            .http
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let parsed = response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        Ok(parsed)
    }
}
