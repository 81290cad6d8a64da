use anyhow::Result;
use tts_server::utils::logging;
use tts_server::{App, Config, TtsArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志（写到 stderr）
    logging::init();

    // 加载配置和参数
    let config = Config::from_env();
    let args = TtsArgs::from_env();

    App::initialize(config)?.run(&args).await?;

    Ok(())
}
