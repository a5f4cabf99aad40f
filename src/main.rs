//! fcombine - SAME-EXTENSION FILE COMBINER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use fcombine::{
    cli::Args,
    combiner::{self, CombineOptions},
    pattern::PatternMatcher,
    stats::Statistics,
};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "Error:".bright_red(), e);
        std::process::exit(1);
    }
}

/// 인자가 부족하거나 잘못된 경우의 사용법 출력
fn print_usage() {
    println!("Usage: fcombine <directory> <extension> [options]");
    println!("Example: fcombine ./data txt");
    println!("Try 'fcombine --help' for more information.");
}

fn run(args: &Args) -> Result<()> {
    // 입력 검증 및 정규화
    let root = combiner::validate_root(&args.directory)?;
    let ext = combiner::normalize_extension(&args.extension)?;
    let output_path = combiner::resolve_output_path(&root, &ext);

    print_header(args, &root, &ext, &output_path);

    // 패턴 매처 및 옵션 초기화
    let options = CombineOptions::new()
        .with_pattern(args.pattern.clone())
        .with_max_depth(args.max_depth);
    let matcher = PatternMatcher::new(options.pattern.clone())?;

    // 파일 수집 및 정렬
    let mut skipped: Vec<(PathBuf, String)> = Vec::new();
    let mut files = combiner::collect_matching_files(
        &root,
        &ext,
        &output_path,
        &matcher,
        options.max_depth,
        &mut skipped,
    );
    combiner::sort_by_relative_path(&mut files, &root);

    if files.is_empty() {
        println!("{}", "⚠️ 병합할 파일이 없습니다.".yellow());
    } else {
        println!(
            "  {} 발견된 파일 수: {}",
            "📋".bright_white(),
            files.len().to_string().bright_green()
        );
    }

    // 드라이런 모드
    if args.dry_run {
        print_dry_run(&files, &root);
        return Ok(());
    }

    // 순차 읽기 및 병합
    let mut stats = Statistics::new(files.len());
    let pb = create_progress_bar(files.len());

    println!("\n{}", "📖 파일 읽는 중...".bright_cyan());

    let mut contents: Vec<String> = Vec::with_capacity(files.len());

    for path in &files {
        let result = combiner::read_file_content(path, options.mmap_threshold);
        pb.inc(1);

        match result {
            Ok(text) => {
                stats.add_bytes_read(text.len() as u64);
                stats.increment_combined();
                contents.push(text);

                if args.verbose {
                    println!("  {} {}", "✓".green(), relative_display(path, &root));
                }
            }
            Err(e) => {
                stats.increment_skipped();
                skipped.push((path.clone(), e.to_string()));
            }
        }
    }

    pb.finish_with_message("완료!");

    // 출력 파일 쓰기
    println!("\n{}", "💾 병합 파일 저장 중...".bright_cyan());

    let joined = contents.join("\n");
    combiner::write_output(&output_path, &joined)?;
    stats.add_bytes_written(joined.len() as u64);

    // 건너뛴 파일 경고 출력
    print_skipped(&skipped, args.verbose);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_skip_log(log_path, &skipped)?;
    }

    // 통계 출력
    stats.print_summary();

    println!(
        "\n{} Combined {} file(s) into: {}\n",
        "✅".bright_green(),
        stats.combined_count,
        output_path.display()
    );

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, root: &Path, ext: &str, output_path: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 📚 SAME-EXTENSION FILE COMBINER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 루트 폴더: {:?}", "📂".bright_cyan(), root);
    println!("  {} 대상 확장자: {}", "🔤".bright_yellow(), ext);
    println!("  {} 출력 파일: {:?}", "📄".bright_green(), output_path);

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if let Some(depth) = args.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 병합 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 루트 기준 상대 경로 표시 문자열
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// 드라이런 출력 (정렬된 병합 순서 그대로)
fn print_dry_run(files: &[PathBuf], root: &Path) {
    println!("\n{}", "📋 병합 예정 파일 목록:".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, relative_display(path, root));
    }
    println!(
        "\n{} 총 {} 개의 파일이 병합될 예정입니다.",
        "ℹ️".bright_blue(),
        files.len().to_string().bright_green()
    );
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}

/// 건너뛴 파일 경고 출력
fn print_skipped(skipped: &[(PathBuf, String)], verbose: bool) {
    if skipped.is_empty() {
        return;
    }

    for (path, reason) in skipped {
        eprintln!(
            "{} Could not read {:?}: {}",
            "Warning:".bright_yellow(),
            path,
            reason
        );
    }

    if verbose {
        eprintln!(
            "{} 총 {} 개의 파일을 건너뛰었습니다.",
            "⚠️".bright_yellow(),
            skipped.len()
        );
    }
}

/// 건너뛴 파일 로그 작성
fn write_skip_log(log_path: &PathBuf, skipped: &[(PathBuf, String)]) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "fcombine 건너뛴 파일 로그")?;
    writeln!(log_file, "생성 시간: {}", unix_now())?;
    writeln!(log_file, "총 건너뛴 수: {}", skipped.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, reason) in skipped {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "사유: {}", reason)?;
    }

    println!("\n{} 건너뛴 파일 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn unix_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now();
    let duration = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
