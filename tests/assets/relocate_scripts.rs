//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;

    use classmint::assets::{relocate_scripts, RelocationOptions};
    use classmint::utils::url::Url;

    use crate::common::StubFetcher;

    fn options(dir: &std::path::Path, base: Option<&str>) -> RelocationOptions {
        RelocationOptions {
            base_url: base.map(|b| Url::parse(b).unwrap()),
            output_dir: dir.to_path_buf(),
            scripts_dir: "js".to_string(),
        }
    }

    #[test]
    fn identical_urls_are_fetched_once() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new().with("https://cdn.example.com/app.js", "app()");
        let html = r#"<script src="https://cdn.example.com/app.js"></script><script src='https://cdn.example.com/app.js'></script>"#;

        let (rewritten, report) = relocate_scripts(html, &options(dir.path(), None), &fetcher).unwrap();

        assert_eq!(fetcher.requests(), vec!["https://cdn.example.com/app.js"]);
        assert_eq!(report.relocated.len(), 1);
        assert_eq!(
            rewritten,
            r#"<script src="js/app.js"></script><script src='js/app.js'></script>"#
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("js").join("app.js")).unwrap(),
            "app()"
        );
    }

    #[test]
    fn relative_sources_resolve_against_base() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new()
            .with("https://example.com/site/lib/a.js", "a")
            .with("https://cdn.example.com/b.js", "b");
        let html = r#"<script src="lib/a.js"></script><script src="//cdn.example.com/b.js"></script>"#;

        let (rewritten, report) = relocate_scripts(
            html,
            &options(dir.path(), Some("https://example.com/site/index.html")),
            &fetcher,
        )
        .unwrap();

        assert!(report.is_clean());
        assert_eq!(
            rewritten,
            r#"<script src="js/a.js"></script><script src="js/b.js"></script>"#
        );
    }

    #[test]
    fn same_file_name_from_two_hosts_gets_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new()
            .with("https://a.example.com/main.js", "a")
            .with("https://b.example.com/main.js", "b");
        let html = r#"<script src="https://b.example.com/main.js"></script><script src="https://a.example.com/main.js"></script>"#;

        let (rewritten, _) = relocate_scripts(html, &options(dir.path(), None), &fetcher).unwrap();

        assert_eq!(
            rewritten,
            r#"<script src="js/main_1.js"></script><script src="js/main.js"></script>"#
        );
        assert_eq!(fs::read_to_string(dir.path().join("js/main.js")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dir.path().join("js/main_1.js")).unwrap(), "b");
    }

    #[test]
    fn file_name_falls_back_to_digest() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new().with("https://cdn.example.com/bundle?v=3", "x");
        let html = r#"<script src="https://cdn.example.com/bundle?v=3"></script>"#;

        let (rewritten, report) = relocate_scripts(html, &options(dir.path(), None), &fetcher).unwrap();
        let local_path = &report.relocated[0].local_path;

        assert!(local_path.starts_with("js/script_"));
        assert!(local_path.ends_with(".js"));
        assert_eq!(rewritten, format!(r#"<script src="{local_path}"></script>"#));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use classmint::assets::{relocate_scripts, RelocationOptions};

    use crate::common::StubFetcher;

    fn options(dir: &std::path::Path) -> RelocationOptions {
        RelocationOptions {
            base_url: None,
            output_dir: dir.to_path_buf(),
            scripts_dir: "js".to_string(),
        }
    }

    #[test]
    fn data_sources_are_never_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new();
        let html = r#"<script src="data:text/javascript,alert(1)"></script>"#;

        let (rewritten, report) = relocate_scripts(html, &options(dir.path()), &fetcher).unwrap();

        assert_eq!(rewritten, html);
        assert!(fetcher.requests().is_empty());
        assert!(report.relocated.is_empty());
        assert!(report.failures.is_empty());
        assert_eq!(report.skipped, 1);
        assert!(!dir.path().join("js").exists());
    }

    #[test]
    fn failed_fetch_keeps_remote_url() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new().with("https://cdn.example.com/ok.js", "ok");
        let html = r#"<script src="https://cdn.example.com/missing.js"></script><script src="https://cdn.example.com/ok.js"></script>"#;

        let (rewritten, report) = relocate_scripts(html, &options(dir.path()), &fetcher).unwrap();

        assert_eq!(
            rewritten,
            r#"<script src="https://cdn.example.com/missing.js"></script><script src="js/ok.js"></script>"#
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].url, "https://cdn.example.com/missing.js");
        assert!(report.failures[0].reason.contains("404"));
        assert!(!dir.path().join("js").join("missing.js").exists());
    }

    #[test]
    fn relative_sources_without_base_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new();
        let html = r#"<script src="js/local.js"></script><script src="//cdn.example.com/x.js"></script>"#;

        let (rewritten, report) = relocate_scripts(html, &options(dir.path()), &fetcher).unwrap();

        assert_eq!(rewritten, html);
        assert_eq!(report.skipped, 2);
        assert!(fetcher.requests().is_empty());
    }
}
