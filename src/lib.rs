//! fcombine - SAME-EXTENSION FILE COMBINER
//!
//! 폴더 내 동일 확장자 파일들을 하나의 파일로 병합하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📁 **재귀 탐색**: 루트 폴더 아래의 모든 하위 폴더를 탐색 (.git / node_modules 제외)
//! - 🔤 **확장자 매칭**: 선행 점 유무와 대소문자를 구분하지 않는 확장자 매칭
//! - 📑 **결정적 순서**: 상대 경로 사전순 정렬로 항상 같은 병합 결과
//! - 🛡️ **출력 자기 제외**: 이전 실행의 출력 파일이 입력으로 섞이지 않음
//! - ⚠️ **비치명적 건너뛰기**: 읽을 수 없는 파일은 경고 후 건너뛰고 계속 진행
//! - 🔍 **패턴 필터링**: glob 형식의 파일 이름 필터링
//! - 🧪 **드라이런 모드**: 실제 병합 없이 처리될 파일 목록 미리 확인
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! fcombine ./data txt
//!
//! # 선행 점이 있어도 동일하게 동작
//! fcombine ./data .txt
//!
//! # 파일 이름 패턴 필터
//! fcombine ./notes md --pattern "chapter_*"
//! ```

pub mod cli;
pub mod combiner;
pub mod error;
pub mod pattern;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use combiner::{
    combine_files, collect_matching_files, normalize_extension, resolve_output_path,
    sort_by_relative_path, CombineOptions, CombineReport,
};
pub use error::{CombineError, Result};
pub use pattern::PatternMatcher;
pub use stats::{format_bytes, Statistics};
