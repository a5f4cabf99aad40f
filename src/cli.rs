//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// fcombine CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "fcombine",
    author = "YourName <your@email.com>",
    version,
    about = "SAME-EXTENSION FILE COMBINER - 폴더 내 동일 확장자 파일들을 하나의 파일로 병합하는 CLI 도구",
    long_about = r#"
SAME-EXTENSION FILE COMBINER
============================

지정된 폴더 아래의 모든 동일 확장자 파일을 재귀적으로 탐색하여
하나의 파일로 병합합니다.

동작:
  • 상대 경로 사전순으로 결정적 병합
  • .git / node_modules 폴더는 탐색에서 제외
  • 출력 파일은 <root>/<ext>_combined.<ext> 로 고정 (덮어쓰기)
  • 읽을 수 없는 파일은 경고 후 건너뛰고 계속 진행

예제:
  fcombine ./data txt
  fcombine ./data .txt
  fcombine ./notes md --pattern "chapter_*"
  fcombine ./data txt --dry-run --verbose
"#
)]
pub struct Args {
    /// 파일을 탐색할 루트 폴더 경로
    pub directory: PathBuf,

    /// 병합할 파일 확장자 (예: txt 또는 .txt)
    pub extension: String,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "chapter_*", "part?.txt")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 병합 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 건너뛴 파일 로그 경로
    #[arg(long)]
    pub log: Option<PathBuf>,
}
