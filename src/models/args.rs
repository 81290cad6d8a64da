/// 默认朗读文本
pub const DEFAULT_TEXT: &str = "Guten Tag";
/// 默认语言
pub const DEFAULT_LANG: &str = "de";
/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "output.mp3";

/// 命令行位置参数
///
/// 用法: tts_server "德语文本" "de" "输出文件.mp3"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsArgs {
    /// 要朗读的文本
    pub text: String,
    /// 语言代码
    pub lang: String,
    /// 输出文件路径
    pub output_file: String,
}

impl Default for TtsArgs {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            lang: DEFAULT_LANG.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl TtsArgs {
    /// 从进程参数读取（跳过程序名）
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// 按位置读取参数，缺失的使用默认值，多余的忽略
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let default = Self::default();
        Self {
            text: args.next().unwrap_or(default.text),
            lang: args.next().unwrap_or(default.lang),
            output_file: args.next().unwrap_or(default.output_file),
        }
    }
}
