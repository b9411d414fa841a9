//! End-to-end CLI tests: run the compiled binary against a temporary site
//! directory and inspect what it prints and writes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(site: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_konverter-meta"))
        .arg("--site")
        .arg(site)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run konverter-meta");
    assert!(
        output.status.success(),
        "konverter-meta {args:?} failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn site_with_posts() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(
        posts.join("svg-in-css.md"),
        "+++\ndate = \"2024-04-02\"\n+++\n\n# Using SVG in CSS\n",
    )
    .unwrap();
    fs::write(
        posts.join("json-tips.md"),
        "+++\ndate = \"2024-06-01\"\n+++\n\n# JSON tips\n",
    )
    .unwrap();
    tmp
}

#[test]
fn meta_prints_canonical_json() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["meta", "/json-formatter/", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value["canonical"],
        "https://www.konverter-online.com/json-formatter"
    );
    assert_eq!(
        value["structured_data"],
        serde_json::json!(["application", "breadcrumb"])
    );
}

#[test]
fn meta_summary_for_unknown_route_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["meta", "/does-not-exist"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Konverter Online | Free Online Developer Tools");
    assert_eq!(
        lines[1],
        "    Canonical: https://www.konverter-online.com/does-not-exist"
    );
}

#[test]
fn breadcrumbs_for_root_print_nothing_as_html() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["breadcrumbs", "/", "--html"]));
    assert_eq!(out.trim(), "");
}

#[test]
fn breadcrumbs_list_blog_post() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["breadcrumbs", "/blog/my-post"]));
    assert!(out.contains("002 Blog → https://www.konverter-online.com/blog"));
    assert!(out.contains("003 My-post (current)"));
}

#[test]
fn breadcrumbs_as_json_use_href() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["breadcrumbs", "/svg-to-css", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "label": "Home", "href": "https://www.konverter-online.com", "current": false },
            { "label": "SVG to CSS", "href": "https://www.konverter-online.com/svg-to-css", "current": true },
        ])
    );
}

#[test]
fn sitemap_includes_posts() {
    let tmp = site_with_posts();
    let xml_path = tmp.path().join("out/sitemap.xml");
    let out = stdout(&run(
        tmp.path(),
        &["sitemap", "--output", xml_path.to_str().unwrap()],
    ));
    assert!(out.contains("11 URLs (9 static, 2 posts)"));

    let xml = fs::read_to_string(xml_path).unwrap();
    assert!(xml.contains("<loc>https://www.konverter-online.com/blog/json-tips</loc>"));
    assert!(xml.contains("<loc>https://www.konverter-online.com/blog/svg-in-css</loc>"));
}

#[test]
fn sitemap_without_posts_dir_keeps_static_routes() {
    let tmp = TempDir::new().unwrap();
    let xml_path = tmp.path().join("sitemap.xml");
    let out = run(
        tmp.path(),
        &["sitemap", "--output", xml_path.to_str().unwrap()],
    );
    assert!(stdout(&out).contains("9 URLs (9 static, 0 posts)"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("content store unavailable"));
}

#[test]
fn build_writes_all_artifacts() {
    let tmp = site_with_posts();
    let dist = tmp.path().join("dist");
    run(tmp.path(), &["build", "--output", dist.to_str().unwrap()]);

    assert!(dist.join("sitemap.xml").is_file());
    let robots = fs::read_to_string(dist.join("robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: https://www.konverter-online.com/sitemap.xml"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dist.join("manifest.webmanifest")).unwrap())
            .unwrap();
    assert_eq!(manifest["short_name"], "Konverter");

    let home = fs::read_to_string(dist.join("head/index.html")).unwrap();
    assert!(home.contains(r#"<link rel="canonical" href="https://www.konverter-online.com/">"#));
    let tool = fs::read_to_string(dist.join("head/svg-to-css.html")).unwrap();
    assert!(tool.contains("SVG to CSS Converter"));
}

#[test]
fn config_overrides_apply() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
base_url = "https://staging.konverter-online.com"

[labels]
regex-tester = "Regex Tester"
"#,
    )
    .unwrap();
    let out = stdout(&run(tmp.path(), &["breadcrumbs", "/regex-tester"]));
    assert!(out.contains("002 Regex Tester (current) → https://staging.konverter-online.com/regex-tester"));
}

#[test]
fn invalid_config_fails_check() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "base_url = \"nope\"\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_konverter-meta"))
        .arg("--site")
        .arg(tmp.path())
        .arg("check")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base_url"));
}

#[test]
fn gen_config_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["gen-config"]));
    fs::write(tmp.path().join("config.toml"), out).unwrap();
    let check = stdout(&run(tmp.path(), &["check"]));
    assert!(check.contains("Configuration is valid"));
}
