//! 流程层
//!
//! 定义"一次测验"的完整状态与计时：
//! - `test_session` - 会话状态机（导航、作答、倒计时、交卷守卫）
//! - `countdown` - 可取消的每秒定时任务
//!
//! 状态机本身是纯内存结构，不发网络请求；网络交互由编排层驱动。

pub mod countdown;
pub mod test_session;

pub use countdown::Countdown;
pub use test_session::{Phase, TestSession, TickOutcome, TEST_DURATION_SECS};
