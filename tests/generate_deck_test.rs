use std::fs;
use std::io::Read;
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn read_archive_file(archive: &mut ZipArchive<fs::File>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Missing archive entry: {}", name))
        .read_to_string(&mut content)
        .expect("Failed to read archive entry");
    content
}

const WEEKLY_REPORT: &str = "\
**格式規範說明: 請依照以下格式填寫**
## Fake Task: inside format block
### Objective
  should never appear
---
## Task 1: Build pipeline
### Objective
  Ship v2
### Side Notes
  internal only
### 困難
  Flaky CI
---
## 任務二：文件整理
### 本週進度
  整理完成 80%
---
";

#[test]
fn test_generate_deck_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let markdown_path = temp_dir.path().join("week12.md");
    fs::write(&markdown_path, WEEKLY_REPORT).expect("Failed to write markdown file");

    let output_path = temp_dir.path().join("week12.pptx");

    let output = run_command(&[
        "generate",
        "12",
        markdown_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Total slides: 3 (1 title + 2 task slides)"),
        "Unexpected summary: {}",
        stdout
    );

    // Verify slide files within the PPTX archive
    let file = fs::File::open(&output_path).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");

    let slide_files: Vec<String> = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .collect();
    assert_eq!(slide_files.len(), 3, "Expected exactly three slide XML files");
    assert!(slide_files.contains(&"ppt/slides/slide1.xml".to_string()));
    assert!(slide_files.contains(&"ppt/slides/slide3.xml".to_string()));

    // Title slide carries the week label with the localized suffix
    let slide1 = read_archive_file(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide1.contains("Week 12 週報"), "Missing deck title: {}", slide1);

    // First task slide: name, canonical section labels, content
    let slide2 = read_archive_file(&mut archive, "ppt/slides/slide2.xml");
    assert!(slide2.contains("Task 1: Build pipeline"));
    assert!(slide2.contains("目標"));
    assert!(slide2.contains("Ship v2"));
    assert!(slide2.contains("困難"));
    assert!(slide2.contains("Flaky CI"));
    // Non-canonical section is parsed but never rendered
    assert!(!slide2.contains("Side Notes"));
    assert!(!slide2.contains("internal only"));
    // Canonical section order: 目標 renders before 困難
    assert!(slide2.find("目標").unwrap() < slide2.find("困難").unwrap());

    // Second task slide, localized task name
    let slide3 = read_archive_file(&mut archive, "ppt/slides/slide3.xml");
    assert!(slide3.contains("任務二：文件整理"));
    assert!(slide3.contains("進度"));
    assert!(slide3.contains("整理完成 80%"));

    // Format-spec block contributes nothing anywhere
    for name in ["ppt/slides/slide1.xml", "ppt/slides/slide2.xml", "ppt/slides/slide3.xml"] {
        let content = read_archive_file(&mut archive, name);
        assert!(!content.contains("should never appear"), "Leaked format block in {}", name);
    }

    // Presentation part declares the 10 x 7.5 inch canvas
    let presentation = read_archive_file(&mut archive, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
}

#[test]
fn test_generate_deck_escapes_xml_metacharacters() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let markdown_path = temp_dir.path().join("week1.md");
    fs::write(
        &markdown_path,
        "## Task 1: a < b & c\n### Objective\n  use <tags> & \"quotes\"\n---\n",
    )
    .expect("Failed to write markdown file");

    let output_path = temp_dir.path().join("week1.pptx");
    let output = run_command(&[
        "generate",
        "1",
        markdown_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let file = fs::File::open(&output_path).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let slide2 = read_archive_file(&mut archive, "ppt/slides/slide2.xml");

    assert!(slide2.contains("Task 1: a &lt; b &amp; c"));
    assert!(slide2.contains("use &lt;tags&gt; &amp;"));
    assert!(!slide2.contains("use <tags>"));
}
