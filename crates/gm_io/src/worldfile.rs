// crates/gm_io/src/worldfile.rs

//! 世界文件驱动
//!
//! 世界文件是与栅格影像一一配对的六行文本附属文件，
//! 每行一个十进制浮点数，按固定行序编码该影像的仿射地理配准变换：
//!
//! ```text
//! 第1行  pixel_size_x   x 方向像素尺寸
//! 第2行  rotation_x     x 方向旋转系数
//! 第3行  rotation_y     y 方向旋转系数
//! 第4行  pixel_size_y   y 方向像素尺寸（北上影像通常为负）
//! 第5行  origin_x       左上角 x 地理坐标
//! 第6行  origin_y       左上角 y 地理坐标
//! ```
//!
//! 第六行之后的内容被忽略。

use std::path::Path;

use gm_foundation::GmError;
use gm_geo::AffineTransform;

use crate::error::{IoError, IoResult};

/// 世界文件系数行数
const WORLD_FILE_LINES: usize = 6;

/// 读取世界文件并构造仿射变换
///
/// # Errors
///
/// - [`IoError::WorldFileNotFound`]: 路径无法解析为可读文件
/// - [`IoError::MalformedWorldFile`]: 不足六行，或前六行中任一行无法解析为浮点数
pub fn read_world_file(path: &Path) -> IoResult<AffineTransform> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(IoError::world_file_not_found(path));
        }
        Err(err) => {
            return Err(IoError::Foundation(GmError::io_with_source(
                format!("读取世界文件失败: {}", path.display()),
                err,
            )));
        }
    };

    parse_world_file(&content, path)
}

/// 解析世界文件内容
///
/// 与 [`read_world_file`] 分离，便于对内容本身做单独校验。
pub fn parse_world_file(content: &str, path: &Path) -> IoResult<AffineTransform> {
    let lines: Vec<&str> = content.lines().take(WORLD_FILE_LINES).collect();

    if lines.len() < WORLD_FILE_LINES {
        return Err(IoError::malformed_world_file(
            path,
            lines.len(),
            format!(
                "世界文件需要 {} 行系数，实际只有 {} 行",
                WORLD_FILE_LINES,
                lines.len()
            ),
        ));
    }

    let mut params = [0.0_f64; WORLD_FILE_LINES];
    for (i, raw) in lines.iter().enumerate() {
        let text = raw.trim();
        params[i] = text.parse::<f64>().map_err(|_| {
            IoError::malformed_world_file(path, i + 1, format!("无法解析为浮点数: '{}'", text))
        })?;
    }

    Ok(AffineTransform::from_world_file_params(params))
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_read_valid_world_file() {
        let path = temp_path("gm_worldfile_valid.tfw");
        std::fs::write(&path, "0.5\n0.0\n0.0\n-0.5\n100.0\n200.0\n").unwrap();

        let affine = read_world_file(&path).expect("读取失败");
        assert_eq!(affine.world_file_params(), [0.5, 0.0, 0.0, -0.5, 100.0, 200.0]);

        let (x, y) = affine.apply(10.0, 10.0);
        assert!((x - 105.0).abs() < 1e-10);
        assert!((y - 195.0).abs() < 1e-10);

        // 清理
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_world_file() {
        let path = temp_path("gm_worldfile_does_not_exist.tfw");
        let err = read_world_file(&path).unwrap_err();
        match err {
            IoError::WorldFileNotFound { path: p } => assert_eq!(p, path),
            _ => panic!("错误的错误类型"),
        }
    }

    #[test]
    fn test_too_few_lines() {
        let path = temp_path("gm_worldfile_short.tfw");
        std::fs::write(&path, "0.5\n0.0\n0.0\n").unwrap();

        let err = read_world_file(&path).unwrap_err();
        match err {
            IoError::MalformedWorldFile { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("只有 3 行"));
            }
            _ => panic!("错误的错误类型"),
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unparseable_line() {
        let content = "0.5\n0.0\nabc\n-0.5\n100.0\n200.0\n";
        let err = parse_world_file(content, Path::new("bad.tfw")).unwrap_err();
        match err {
            IoError::MalformedWorldFile { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("abc"));
            }
            _ => panic!("错误的错误类型"),
        }
    }

    #[test]
    fn test_extra_lines_ignored() {
        let content = "1.0\n0.0\n0.0\n1.0\n0.0\n0.0\n第七行不参与解析\n";
        let affine = parse_world_file(content, Path::new("extra.tfw")).expect("解析失败");
        assert!(affine.is_identity());
    }

    #[test]
    fn test_whitespace_and_crlf_tolerated() {
        let content = " 0.5 \r\n0.0\r\n0.0\r\n-0.5\r\n100.0\r\n 200.0 \r\n";
        let affine = parse_world_file(content, Path::new("crlf.tfw")).expect("解析失败");
        assert_eq!(affine.world_file_params(), [0.5, 0.0, 0.0, -0.5, 100.0, 200.0]);
    }

    #[test]
    fn test_scientific_notation() {
        let content = "5e-1\n0\n0\n-5e-1\n1.0e2\n2.0e2\n";
        let affine = parse_world_file(content, Path::new("sci.tfw")).expect("解析失败");
        assert_eq!(affine.world_file_params(), [0.5, 0.0, 0.0, -0.5, 100.0, 200.0]);
    }

    #[test]
    fn test_empty_file() {
        let err = parse_world_file("", Path::new("empty.tfw")).unwrap_err();
        match err {
            IoError::MalformedWorldFile { line, .. } => assert_eq!(line, 0),
            _ => panic!("错误的错误类型"),
        }
    }
}
