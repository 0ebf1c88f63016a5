use super::{render, render_tags, render_tree, OutputFormat};
use crate::scan::scan;
use crate::section::Outline;

fn outline_of(path: &str, text: &str) -> Outline {
    let mut outline = Outline::new(path);
    scan(text.lines(), &mut outline);
    outline
}

fn guide() -> Outline {
    outline_of(
        "guide.rst",
        "Guide\n=====\n\nInstall\n-------\n\nLinux\n~~~~~\n\nUsage\n-----\n\nAppendix\n========\n",
    )
}

#[test]
fn test_tree_draws_hierarchy() {
    let rendered = render_tree(&[guide()]);

    let expected = "\
guide.rst
[1] Guide
[4] ├── Install
[7] │   └── Linux
[10] └── Usage
[13] Appendix
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_tree_closes_finished_branches() {
    let outline = outline_of("deep.rst", "A\n=\n\nB\n-\n\nC\n~\n\nD\n^\n\nE\n-\n");
    let rendered = render_tree(&[outline]);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[2], "[4] ├── B");
    assert_eq!(lines[3], "[7] │   └── C");
    assert_eq!(lines[4], "[10] │       └── D");
    assert_eq!(lines[5], "[13] └── E");
}

#[test]
fn test_tags_lines() {
    let rendered = render_tags(&[guide()]);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Guide\tguide.rst\t1;\"\tn\tline:1");
    assert_eq!(
        lines[2],
        "Linux\tguide.rst\t7;\"\td\tline:7\tsection:Install"
    );
    assert_eq!(
        lines[3],
        "Usage\tguide.rst\t10;\"\tm\tline:10\tchapter:Guide"
    );
}

#[test]
fn test_tags_escape_tabs_and_backslashes() {
    let outline = outline_of("doc.rst", "A\tB\\C\n=====\n\nInner\n-----\n");
    let rendered = render_tags(&[outline]);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "A\\tB\\\\C\tdoc.rst\t1;\"\tn\tline:1");
    assert_eq!(
        lines[1],
        "Inner\tdoc.rst\t4;\"\tm\tline:4\tchapter:A\\tB\\\\C"
    );
    for line in lines {
        assert!(line.split('\t').count() <= 6, "unescaped tab in {line:?}");
    }
}

#[test]
fn test_json_round_trips() {
    let outlines = vec![guide(), outline_of("empty.rst", "No headings here.\n")];
    let rendered = render(&outlines, OutputFormat::Json).unwrap();
    let parsed: Vec<Outline> = serde_json::from_str(&rendered).unwrap();

    assert_eq!(parsed, outlines);
}

#[test]
fn test_every_format_covers_every_heading() {
    let outlines = [guide()];

    for format in [OutputFormat::Tree, OutputFormat::Tags] {
        let rendered = render(&outlines, format).unwrap();
        for title in ["Guide", "Install", "Linux", "Usage", "Appendix"] {
            assert!(
                rendered.contains(title),
                "{format:?} output is missing {title}"
            );
        }
    }
}
