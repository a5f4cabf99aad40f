//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 파일 이름 필터링을 담당합니다.
//! 확장자 매칭 위에 추가로 적용되는 선택적 필터입니다.

use glob::Pattern;

use crate::error::{CombineError, Result};

/// 컴파일된 패턴 매처
#[derive(Default)]
pub struct PatternMatcher {
    pattern: Option<Pattern>,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 모든 파일 매칭)
    ///
    /// # Returns
    /// 컴파일된 `PatternMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use fcombine::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("chapter_*".to_string())).unwrap();
    /// assert!(matcher.matches("chapter_01.txt"));
    /// assert!(!matcher.matches("notes.txt"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| CombineError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 패턴과 일치하는지 확인
    ///
    /// 패턴이 설정되어 있지 않으면 항상 true를 반환합니다.
    pub fn matches(&self, file_name: &str) -> bool {
        match &self.pattern {
            Some(p) => p.matches(file_name),
            None => true,
        }
    }

    /// 패턴이 설정되어 있는지 확인
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}
