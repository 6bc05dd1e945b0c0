//! 倒计时定时任务
//!
//! 把"每秒一跳"的周期回调实现为可取消的 tokio 任务：会话离开进行中
//! 状态后必须停止，悬挂的定时器在卸载后继续触发属于缺陷（会造成
//! 重复交卷 / 写已销毁状态）。

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// 每秒向通道发送一次 tick 的后台任务句柄
#[derive(Debug)]
pub struct Countdown {
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    /// 启动倒计时任务
    ///
    /// 接收端被丢弃时任务自行退出
    pub fn start(tx: mpsc::Sender<()>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // interval 的第一跳立即完成，跳过它，从整一秒之后开始
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// 停止倒计时；幂等，任意阶段调用都安全
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}
