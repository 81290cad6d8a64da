/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数。
/// stdout 留给调用方解析，日志一律写到 stderr。
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志（RUST_LOG 未设置时默认 info）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 TTS 启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 服务地址: translate.google.{}", config.tld);
    info!("🗑️ 清理模式: {}", config.cleanup_pattern);
    info!("{}", "=".repeat(60));
}

/// 记录完成信息
///
/// # 参数
/// - `output_file`: 输出文件路径
/// - `bytes`: 音频字节数
/// - `encoded_len`: base64 长度
pub fn log_complete(output_file: &str, bytes: usize, encoded_len: usize) {
    info!("{}", "─".repeat(60));
    info!("✅ 合成完成: {}", output_file);
    info!("📊 音频 {} 字节, base64 {} 字符", bytes, encoded_len);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
