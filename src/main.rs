use anyhow::Result;

use jee_test_client::config::Config;
use jee_test_client::logger;
use jee_test_client::orchestrator::{App, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{}", Command::usage());
        std::process::exit(2);
    };

    // 加载配置
    let config = Config::load()?;

    // 初始化并运行应用
    App::initialize(config)?.run(command).await
}
