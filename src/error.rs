//! 에러 타입 정의 모듈
//!
//! fcombine에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// fcombine에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum CombineError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path:?}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path:?}")]
    NotADirectory { path: PathBuf },

    /// 확장자가 정규화 후 비어 있음
    #[error("확장자가 비어 있습니다")]
    EmptyExtension,

    /// 개별 파일 읽기 실패 (파이프라인에서는 비치명적으로 처리)
    #[error("파일을 읽을 수 없습니다 ({file:?}): {reason}")]
    FileReadError { file: PathBuf, reason: String },

    /// 출력 파일 쓰기 실패
    #[error("출력 파일 쓰기 실패 ({path:?}): {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },
}

impl CombineError {
    /// 에러와 연관된 파일 경로 (해당되는 경우)
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            CombineError::InputNotFound { path } => Some(path),
            CombineError::NotADirectory { path } => Some(path),
            CombineError::FileReadError { file, .. } => Some(file),
            CombineError::WriteError { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// fcombine 결과 타입 별칭
pub type Result<T> = std::result::Result<T, CombineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CombineError::NotADirectory {
            path: PathBuf::from("/tmp/some-file.txt"),
        };
        let msg = error.to_string();
        assert!(msg.contains("폴더가 아닙니다"));
        assert!(msg.contains("some-file.txt"));
    }

    #[test]
    fn test_empty_extension_display() {
        let msg = CombineError::EmptyExtension.to_string();
        assert!(msg.contains("확장자"));
    }

    #[test]
    fn test_error_path_accessor() {
        let error = CombineError::FileReadError {
            file: PathBuf::from("a.txt"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(error.path(), Some(&PathBuf::from("a.txt")));
        assert_eq!(CombineError::EmptyExtension.path(), None);
    }
}
