use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{io, render_page};
use std::path::{Path, PathBuf};

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

/// Rebuilds the public directory from static assets and markdown content.
///
/// Stops at the first page that fails to render. Pages already written stay
/// in place; the failing page is never written.
pub fn build_site(config: &Config) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    if config.public_dir.exists() {
        log::info!("Deleting public directory {}", config.public_dir.display());
        std::fs::remove_dir_all(&config.public_dir).with_context(|| {
            format!("Failed to delete {}", config.public_dir.display())
        })?;
    }

    if config.static_dir.is_dir() {
        log::info!(
            "Copying static files from {} to {}",
            config.static_dir.display(),
            config.public_dir.display()
        );
        report.assets = io::copy_dir_recursive(&config.static_dir, &config.public_dir)
            .with_context(|| format!("Failed to copy {}", config.static_dir.display()))?;
        for asset in &report.assets {
            log::debug!("Copied {}", asset.display());
        }
    } else {
        log::warn!(
            "Static directory {} not found, skipping assets",
            config.static_dir.display()
        );
    }

    let template = io::read_file(&config.template_path)
        .with_context(|| format!("Failed to read template {}", config.template_path.display()))?;

    let sources = io::scan_markdown_files(&config.content_dir)?;
    for source in sources {
        let dest = io::output_path(&config.content_dir, &source, &config.public_dir)?;
        generate_page(&source, &template, &config.template_path, &dest)?;
        report.pages.push(dest);
    }

    log::info!(
        "Built {} pages and copied {} assets",
        report.pages.len(),
        report.assets.len()
    );
    Ok(report)
}

/// Renders one markdown file through the template and writes it to `dest`.
pub fn generate_page(
    from: &Path,
    template: &str,
    template_path: &Path,
    dest: &Path,
) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown =
        io::read_file(from).with_context(|| format!("Failed to read {}", from.display()))?;
    let page = render_page(template, &markdown)
        .with_context(|| format!("Failed to render {}", from.display()))?;
    io::write_file(dest, &page).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn site(root: &TempDir) -> Config {
        let root = root.path();
        write(root, "template.html", TEMPLATE);
        Config {
            content_dir: root.join("content"),
            template_path: root.join("template.html"),
            public_dir: root.join("public"),
            static_dir: root.join("static"),
        }
    }

    #[test]
    fn builds_pages_and_copies_assets() {
        let root = TempDir::new().unwrap();
        let config = site(&root);
        write(root.path(), "content/index.md", "# Home\n\nWelcome **in**");
        write(root.path(), "content/blog/post.md", "## Post\n\n- a\n- b");
        write(root.path(), "static/index.css", "body {}");

        let report = build_site(&config).unwrap();

        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.assets, vec![config.public_dir.join("index.css")]);
        assert_eq!(
            std::fs::read_to_string(config.public_dir.join("index.html")).unwrap(),
            "<title>Home</title><main><div><h1>Home</h1><p>Welcome <b>in</b></p></div></main>"
        );
        assert_eq!(
            std::fs::read_to_string(config.public_dir.join("blog/post.html")).unwrap(),
            "<title>Post</title><main><div><h2>Post</h2><ul><li>a</li><li>b</li></ul></div></main>"
        );
    }

    #[test]
    fn stale_output_is_removed() {
        let root = TempDir::new().unwrap();
        let config = site(&root);
        write(root.path(), "content/index.md", "# Home");
        write(root.path(), "public/old.html", "stale");

        build_site(&config).unwrap();

        assert!(!config.public_dir.join("old.html").exists());
        assert!(config.public_dir.join("index.html").exists());
    }

    #[test]
    fn failing_page_is_not_written() {
        let root = TempDir::new().unwrap();
        let config = site(&root);
        write(root.path(), "content/broken.md", "# Broken\n\nan _open italic");

        let err = build_site(&config).unwrap_err();

        assert!(format!("{err:#}").contains("broken.md"));
        assert!(!config.public_dir.join("broken.html").exists());
    }

    #[test]
    fn page_without_title_fails() {
        let root = TempDir::new().unwrap();
        let config = site(&root);
        write(root.path(), "content/untitled.md", "just a paragraph");

        let err = build_site(&config).unwrap_err();

        assert!(format!("{err:#}").contains("title"));
    }

    #[test]
    fn missing_template_fails() {
        let root = TempDir::new().unwrap();
        let mut config = site(&root);
        config.template_path = root.path().join("missing.html");
        write(root.path(), "content/index.md", "# Home");

        let err = build_site(&config).unwrap_err();

        assert!(format!("{err:#}").contains("missing.html"));
    }
}
