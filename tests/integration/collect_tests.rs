//! Integration tests for link collection
//!
//! These tests write HTML documents, input lists and configuration files to
//! temporary directories and run them through the public API end-to-end.

use linkscan::collector::{ScanSummary, Scanner};
use linkscan::config::load_config_with_hash;
use linkscan::input::{expand_inputs, load_document, InputSource};
use linkscan::output::{DocumentLinks, OutputHandler, OutputResult, PlainTextOutput};
use linkscan::{collect_links, HtmlDocument, LinkCollector, LinkscanError};
use std::path::Path;
use tempfile::TempDir;
use url::Url;

/// Collects every document handed to it
#[derive(Default)]
struct CapturingOutput {
    documents: Vec<DocumentLinks>,
    summary: Option<ScanSummary>,
}

impl OutputHandler for CapturingOutput {
    fn write_document(&mut self, document: &DocumentLinks) -> OutputResult<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> OutputResult<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn example_url() -> Url {
    Url::parse("https://example.com/").expect("Failed to parse URL")
}

#[test]
fn test_mixed_document_in_traversal_order() {
    let html = r#"<!DOCTYPE html>
        <html>
        <head><link rel="canonical" href="https://example.com/b"></head>
        <body>
            <a href="https://example.com/a">A</a>
            <p>No reference here</p>
            <nav><a href="/c">C</a></nav>
        </body>
        </html>"#;

    let document = HtmlDocument::parse(html, example_url());
    let links = collect_links(&document);

    // <link> sits in <head>, which precedes <body> in traversal order
    assert_eq!(
        links,
        vec![
            "https://example.com/b",
            "https://example.com/a",
            "https://example.com/c",
        ]
    );
    assert!(links.len() <= document.element_count());
}

#[test]
fn test_document_without_links() {
    let document = HtmlDocument::parse(
        "<html><body><h1>Title</h1><p>Text</p></body></html>",
        example_url(),
    );
    assert!(collect_links(&document).is_empty());
}

#[test]
fn test_empty_markup() {
    let document = HtmlDocument::parse("", example_url());
    assert!(collect_links(&document).is_empty());
}

#[test]
fn test_svg_links_are_not_collected() {
    let html = r#"<body>
        <a href="/html-link">HTML</a>
        <svg><a href="/svg-link"><text>SVG</text></a></svg>
    </body>"#;
    let document = HtmlDocument::parse(html, example_url());

    let collection = LinkCollector::default().collect_with_stats(&document);
    assert_eq!(collection.links, vec!["https://example.com/html-link"]);
    assert_eq!(collection.stats.opaque_references, 1);
}

#[test]
fn test_no_deduplication_or_scheme_filtering() {
    let html = r#"
        <a href="/same">1</a>
        <a href="/same">2</a>
        <a href="mailto:team@example.com">Mail</a>
        <a href="javascript:void(0)">Script</a>
        <a>No href</a>
    "#;
    let document = HtmlDocument::parse(html, example_url());
    assert_eq!(
        collect_links(&document),
        vec![
            "https://example.com/same",
            "https://example.com/same",
            "mailto:team@example.com",
            "javascript:void(0)",
        ]
    );
}

#[test]
fn test_collection_is_idempotent() {
    let document = HtmlDocument::parse(
        r#"<a href="/x">x</a><area href="/y"><link href="/z">"#,
        example_url(),
    );
    assert_eq!(collect_links(&document), collect_links(&document));
}

#[test]
fn test_permuted_inputs_scanned_in_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for page in 1..=3 {
        write(
            dir.path(),
            &format!("page{}.html", page),
            &format!(r#"<a href="/target/{}">Target</a>"#, page),
        );
    }

    let spec = format!("{}/page[1-3].html", dir.path().display());
    let sources = expand_inputs(&[spec]).expect("Failed to expand inputs");
    assert_eq!(sources.len(), 3);

    let scanner = Scanner::default().with_base_url(Some(example_url()));
    let mut output = PlainTextOutput::new(Vec::new());
    let summary = scanner
        .run(&sources, &mut output)
        .expect("Scan failed");

    let written = String::from_utf8(output.into_inner()).expect("Output is not UTF-8");
    assert_eq!(
        written,
        "https://example.com/target/1\nhttps://example.com/target/2\nhttps://example.com/target/3\n"
    );
    assert_eq!(summary.documents, 3);
    assert_eq!(summary.links_written, 3);
}

#[test]
fn test_input_list_with_relative_links_resolved_per_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "docs/index.html", r#"<a href="guide.html">Guide</a>"#);
    write(
        dir.path(),
        "blog/index.html",
        r#"<base href="https://blog.example.com/"><a href="post">Post</a>"#,
    );
    write(
        dir.path(),
        "inputs.txt",
        &format!(
            "{}\n\n{}\n",
            dir.path().join("docs/index.html").display(),
            dir.path().join("blog/index.html").display()
        ),
    );

    let list = format!("@{}", dir.path().join("inputs.txt").display());
    let sources = expand_inputs(&[list]).expect("Failed to expand inputs");

    let mut output = CapturingOutput::default();
    Scanner::default()
        .run(&sources, &mut output)
        .expect("Scan failed");

    assert_eq!(output.documents.len(), 2);

    let docs_link = &output.documents[0].links[0];
    assert!(docs_link.starts_with("file://"));
    assert!(docs_link.ends_with("/docs/guide.html"));

    // <base> exposes its own href before the anchor it rebases
    assert_eq!(
        output.documents[1].links,
        vec!["https://blog.example.com/", "https://blog.example.com/post"]
    );
}

#[test]
fn test_configured_scan() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(
        dir.path(),
        "linkscan.toml",
        r#"
[document]
base-url = "https://example.com/app/"

[collector]
include-sources = true

[filter]
include = "^https://example\\.com/"
exclude = "\\.js$"
"#,
    );
    write(
        dir.path(),
        "index.html",
        r#"<html>
        <head><script src="bundle.js"></script></head>
        <body>
            <img src="hero.png">
            <a href="settings">Settings</a>
            <a href="https://elsewhere.org/">Elsewhere</a>
        </body>
        </html>"#,
    );

    let (config, hash) = load_config_with_hash(&dir.path().join("linkscan.toml"))
        .expect("Failed to load config");
    let scanner = Scanner::from_config(&config)
        .expect("Failed to build scanner")
        .with_config_hash(Some(hash.clone()));

    let sources = vec![InputSource::File(dir.path().join("index.html"))];
    let mut output = CapturingOutput::default();
    let summary = scanner.run(&sources, &mut output).expect("Scan failed");

    assert_eq!(
        output.documents[0].links,
        vec![
            "https://example.com/app/hero.png",
            "https://example.com/app/settings",
        ]
    );
    assert_eq!(summary.stats.links, 4);
    assert_eq!(summary.stats.sources, 2);
    assert_eq!(summary.links_written, 2);
    assert_eq!(output.summary.and_then(|s| s.config_hash), Some(hash));
}

#[test]
fn test_missing_input_does_not_stop_other_inputs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "present.html", r#"<a href="/here">Here</a>"#);

    let sources = vec![
        InputSource::File(dir.path().join("absent.html")),
        InputSource::File(dir.path().join("present.html")),
    ];

    let mut output = CapturingOutput::default();
    let result = Scanner::default()
        .with_base_url(Some(example_url()))
        .run(&sources, &mut output);

    assert!(matches!(
        result,
        Err(LinkscanError::InputsFailed { failed: 1, total: 2 })
    ));
    assert_eq!(output.documents.len(), 1);
    assert_eq!(output.documents[0].links, vec!["https://example.com/here"]);
}

#[test]
fn test_load_document_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "page.html", "<a href='#top'>Top</a>");

    let source = InputSource::File(dir.path().join("page.html"));
    let document = load_document(&source, None).expect("Failed to load document");

    let links = collect_links(&document);
    assert_eq!(links.len(), 1);
    assert!(links[0].ends_with("/page.html#top"));
}
