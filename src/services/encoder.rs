//! 音频编码与输出服务 - 业务能力层
//!
//! 负责回读音频文件、base64 编码，并按调用方约定的格式写到 stdout

use crate::error::FileError;
use base64::{engine::general_purpose, Engine as _};
use std::io::Write;
use std::path::Path;
use tokio::fs;

/// 载荷起始标记
pub const BASE64_START: &str = "BASE64_START";
/// 载荷结束标记
pub const BASE64_END: &str = "BASE64_END";

/// 读取文件并编码为 base64
///
/// # 返回
/// 返回 (原始字节数, base64 字符串)
pub async fn encode_file(path: &Path) -> Result<(usize, String), FileError> {
    let audio_data = fs::read(path)
        .await
        .map_err(|e| FileError::read_failed(path.display().to_string(), e))?;

    Ok((audio_data.len(), general_purpose::STANDARD.encode(&audio_data)))
}

/// 用标记包裹载荷
pub fn wrap_payload(payload: &str) -> String {
    format!("{}{}{}", BASE64_START, payload, BASE64_END)
}

/// 从进程输出中取出第一段载荷，空载荷视为没有
pub fn extract_payload(output: &str) -> Option<&str> {
    let start = output.find(BASE64_START)? + BASE64_START.len();
    let len = output[start..].find(BASE64_END)?;
    Some(&output[start..start + len]).filter(|payload| !payload.is_empty())
}

/// 写出结果
///
/// ```text
/// Audio saved to: <path>
/// BASE64_START<payload>BASE64_END
/// ```
pub fn write_result<W: Write>(out: &mut W, output_file: &str, payload: &str) -> std::io::Result<()> {
    writeln!(out, "Audio saved to: {}", output_file)?;
    writeln!(out, "{}", wrap_payload(payload))?;
    out.flush()
}
