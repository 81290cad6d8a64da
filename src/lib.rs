//! # TTS Server
//!
//! 把一段文本合成为语音文件，并把音频以 base64 形式打印到 stdout，
//! 供 Next.js API 路由调用
//!
//! 用法: `tts_server "德语文本" "de" "输出文件.mp3"`
//!
//! ## 分层
//!
//! - `clients/` - Google 翻译 TTS 客户端与文本分段
//! - `services/` - 旧文件清理、base64 编码与输出
//! - `workflow/` - 一次调用的完整流程（清理 → 合成 → 保存 → 编码 → 输出）
//! - `app` - 组装并运行
//!
//! ## 输出约定
//!
//! ```text
//! Audio saved to: <path>
//! BASE64_START<payload>BASE64_END
//! ```
//!
//! 日志一律写到 stderr，失败时进程以非零状态退出

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{GttsClient, SpeechSynthesizer};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Language, TtsArgs};
pub use services::encoder::{extract_payload, BASE64_END, BASE64_START};
pub use workflow::{TtsFlow, TtsOutcome};
