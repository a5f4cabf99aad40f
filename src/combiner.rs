//! 파일 병합 모듈
//!
//! 폴더 탐색, 확장자 매칭, 정렬, 읽기/병합, 출력 쓰기를 담당합니다.

use memmap2::Mmap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CombineError, Result};
use crate::pattern::PatternMatcher;

/// 탐색에서 제외되는 폴더 이름 (버전 관리 / 의존성 캐시)
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git"];

/// 병합 옵션
#[derive(Debug, Clone)]
pub struct CombineOptions {
    /// 파일 이름 글로브 패턴 (None이면 확장자 매칭만 적용)
    pub pattern: Option<String>,
    /// 최대 폴더 탐색 깊이 (None이면 무제한)
    pub max_depth: Option<usize>,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            max_depth: None,
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl CombineOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 이름 패턴 설정
    pub fn with_pattern(mut self, pattern: Option<String>) -> Self {
        self.pattern = pattern;
        self
    }

    /// 최대 탐색 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// 병합 실행 결과
#[derive(Debug)]
pub struct CombineReport {
    /// 출력 파일 경로
    pub output_path: PathBuf,
    /// 병합에 성공한 파일들 (정렬된 순서)
    pub combined: Vec<PathBuf>,
    /// 건너뛴 파일/폴더와 사유
    pub skipped: Vec<(PathBuf, String)>,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
}

/// 루트 폴더 검증 후 정규화된 절대 경로 반환
pub fn validate_root(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        return Err(CombineError::InputNotFound {
            path: directory.to_path_buf(),
        });
    }

    if !directory.is_dir() {
        return Err(CombineError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    fs::canonicalize(directory).map_err(|_| CombineError::InputNotFound {
        path: directory.to_path_buf(),
    })
}

/// 확장자 입력 정규화
///
/// 선행 `.` 하나를 제거하고 소문자로 변환합니다.
/// 결과가 비어 있으면 에러를 반환합니다.
pub fn normalize_extension(input: &str) -> Result<String> {
    let stripped = input.strip_prefix('.').unwrap_or(input);
    let normalized = stripped.to_lowercase();

    if normalized.is_empty() {
        return Err(CombineError::EmptyExtension);
    }

    Ok(normalized)
}

/// 출력 파일 경로 계산
///
/// 항상 루트 바로 아래의 `{ext}_combined.{ext}` 형태입니다.
/// 입력에 대한 순수 함수이며 부수 효과가 없습니다.
pub fn resolve_output_path(root: &Path, ext: &str) -> PathBuf {
    root.join(format!("{}_combined.{}", ext, ext))
}

/// 탐색에서 제외할 폴더인지 확인
fn is_skip_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name))
            .unwrap_or(false)
}

/// 후보 파일이 출력 파일 자신인지 확인
///
/// 이전 실행의 출력이 새 실행의 입력으로 섞이는 것을 막기 위해
/// 심볼릭 링크를 해석한 정규화 경로끼리 비교합니다.
fn is_output_file(candidate: &Path, output_path: &Path) -> bool {
    match fs::canonicalize(candidate) {
        Ok(canonical) => canonical == output_path,
        Err(_) => candidate == output_path,
    }
}

/// 확장자가 일치하는 파일 수집
///
/// 루트 아래를 재귀 탐색하며 제외 폴더로는 내려가지 않습니다.
/// 출력 파일 자신은 확장자가 일치해도 결과에서 제외됩니다.
/// 나열할 수 없는 항목은 치명적 에러가 아니라 `skipped`에 기록됩니다.
/// 반환 순서는 정해져 있지 않으며 정렬은 별도 단계에서 수행합니다.
pub fn collect_matching_files(
    root: &Path,
    ext: &str,
    output_path: &Path,
    matcher: &PatternMatcher,
    max_depth: Option<usize>,
    skipped: &mut Vec<(PathBuf, String)>,
) -> Vec<PathBuf> {
    let walker = if let Some(max_depth) = max_depth {
        WalkDir::new(root).max_depth(max_depth)
    } else {
        WalkDir::new(root)
    };

    let mut matches = Vec::new();

    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skip_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                skipped.push((path, e.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        let ext_matches = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.eq_ignore_ascii_case(ext))
            .unwrap_or(false);
        if !ext_matches {
            continue;
        }

        let name_matches = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| matcher.matches(s))
            .unwrap_or(false);
        if !name_matches {
            continue;
        }

        if is_output_file(path, output_path) {
            continue;
        }

        matches.push(path.to_path_buf());
    }

    matches
}

/// 루트 기준 상대 경로 문자열 반환 (정렬 키)
fn relative_key(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// 상대 경로 기준 사전순 정렬
///
/// 병합 출력의 표준 순서를 결정합니다. 동일 입력에 대해
/// 항상 같은 순서를 내는 것이 결정적 동작의 핵심입니다.
pub fn sort_by_relative_path(paths: &mut [PathBuf], root: &Path) {
    paths.sort_by_key(|p| relative_key(p, root));
}

/// 단일 파일의 전체 내용을 UTF-8 텍스트로 읽기
///
/// 임계값 이상의 대용량 파일은 메모리 매핑으로 읽습니다.
/// 읽기/디코딩 실패는 에러로 반환되며 호출 측에서 비치명적으로 처리합니다.
pub fn read_file_content(path: &Path, mmap_threshold: u64) -> Result<String> {
    let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    if file_size >= mmap_threshold {
        read_with_mmap(path)
    } else {
        fs::read_to_string(path).map_err(|e| CombineError::FileReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// 메모리 매핑을 사용한 읽기 (대용량 파일용)
fn read_with_mmap(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| CombineError::FileReadError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mmap = unsafe {
        Mmap::map(&file).map_err(|e| CombineError::FileReadError {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    std::str::from_utf8(&mmap)
        .map(|s| s.to_string())
        .map_err(|e| CombineError::FileReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// 병합 결과를 출력 파일에 쓰기 (기존 파일 덮어쓰기)
///
/// 쓰기 실패는 전체 작업의 치명적 에러입니다.
pub fn write_output(output_path: &Path, content: &str) -> Result<()> {
    fs::write(output_path, content).map_err(|e| CombineError::WriteError {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 전체 병합 파이프라인
///
/// 검증 → 정규화 → 출력 경로 계산 → 수집 → 정렬 → 읽기/병합 → 쓰기.
/// 개별 파일 읽기 실패는 건너뛰고 계속 진행하며, 내용은 파일 사이에
/// 개행 문자 하나씩을 넣어 이어 붙입니다.
pub fn combine_files(
    directory: &Path,
    extension: &str,
    options: &CombineOptions,
) -> Result<CombineReport> {
    let root = validate_root(directory)?;
    let ext = normalize_extension(extension)?;
    let output_path = resolve_output_path(&root, &ext);
    let matcher = PatternMatcher::new(options.pattern.clone())?;

    let mut skipped = Vec::new();
    let mut files = collect_matching_files(
        &root,
        &ext,
        &output_path,
        &matcher,
        options.max_depth,
        &mut skipped,
    );
    sort_by_relative_path(&mut files, &root);

    let mut combined = Vec::with_capacity(files.len());
    let mut contents: Vec<String> = Vec::with_capacity(files.len());
    let mut bytes_read = 0u64;

    for path in files {
        match read_file_content(&path, options.mmap_threshold) {
            Ok(text) => {
                bytes_read += text.len() as u64;
                contents.push(text);
                combined.push(path);
            }
            Err(e) => skipped.push((path, e.to_string())),
        }
    }

    let joined = contents.join("\n");
    write_output(&output_path, &joined)?;

    Ok(CombineReport {
        output_path,
        combined,
        skipped,
        bytes_read,
        bytes_written: joined.len() as u64,
    })
}
