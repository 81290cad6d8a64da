/// 程序配置
///
/// 命令行只接受三个位置参数；这里的字段都有默认值，可以通过环境变量覆盖
#[derive(Clone, Debug)]
pub struct Config {
    /// Google 翻译域名后缀（translate.google.<tld>）
    pub tld: String,
    /// 接口根地址，未设置时为 https://translate.google.<tld>
    pub base_url: Option<String>,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 慢速朗读
    pub slow: bool,
    /// 清理旧音频时匹配的文件名模式
    pub cleanup_pattern: String,
    /// 清理目录，未设置时使用输出文件所在目录
    pub cleanup_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tld: "com".to_string(),
            base_url: None,
            timeout_secs: 30,
            slow: false,
            cleanup_pattern: "tts_*.mp3".to_string(),
            cleanup_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            tld: lookup("TTS_TLD").filter(|v| !v.is_empty()).unwrap_or(default.tld),
            base_url: lookup("TTS_BASE_URL").filter(|v| !v.is_empty()).or(default.base_url),
            timeout_secs: lookup("TTS_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(default.timeout_secs),
            slow: lookup("TTS_SLOW").and_then(|v| v.parse().ok()).unwrap_or(default.slow),
            cleanup_pattern: lookup("TTS_CLEANUP_PATTERN").filter(|v| !v.is_empty()).unwrap_or(default.cleanup_pattern),
            cleanup_dir: lookup("TTS_CLEANUP_DIR").filter(|v| !v.is_empty()).or(default.cleanup_dir),
        }
    }
}
