//! Static export of category pages.
//!
//! Resolves the category paths, renders every page and writes it under
//! `{out_dir}/category/{slug}/index.html`. When on-demand rendering is
//! allowed, the loading shell is written to `{out_dir}/category/_fallback.html`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cms::CmsSource;
use crate::pages::RouteState;
use crate::render::render_category_page;
use crate::resolve::CategoryResolver;

pub const FALLBACK_FILE: &str = "_fallback.html";

/// Summary of an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    /// Slugs whose posts could not be fetched and were written empty
    pub degraded: Vec<String>,
    pub fallback_shell: bool,
    /// Whether the category list itself could not be fetched
    pub paths_degraded: bool,
}

/// Export every known category page into `out_dir`.
///
/// Fetch failures never fail the export; only writing the output does.
pub async fn export_site<S: CmsSource>(resolver: &CategoryResolver<S>, out_dir: &Path) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    let resolved = resolver.resolve_categories().await;
    report.paths_degraded = resolved.is_degraded();
    let resolved = resolved.into_value();

    let category_dir = out_dir.join("category");
    tokio::fs::create_dir_all(&category_dir)
        .await
        .with_context(|| format!("Failed to create {}", category_dir.display()))?;

    for path in &resolved.static_paths.paths {
        if !is_safe_segment(path.slug.as_str()) {
            tracing::warn!(slug = %path.slug, "Skipping slug that is not a single path segment");
            continue;
        }

        let props = resolver.resolve_props(&path.slug).await;
        if props.is_degraded() {
            report.degraded.push(path.slug.to_string());
        }

        let html = render_category_page(
            &RouteState::Resolved(path.slug.clone()),
            &props.value().posts,
            &resolved.categories,
        );

        let page_dir = category_dir.join(path.slug.as_str());
        tokio::fs::create_dir_all(&page_dir)
            .await
            .with_context(|| format!("Failed to create {}", page_dir.display()))?;

        let file = page_dir.join("index.html");
        tokio::fs::write(&file, html)
            .await
            .with_context(|| format!("Failed to write {}", file.display()))?;

        tracing::debug!(slug = %path.slug, file = %file.display(), "Wrote category page");
        report.written.push(file);
    }

    if resolved.static_paths.fallback {
        let file = category_dir.join(FALLBACK_FILE);
        let html = render_category_page(&RouteState::Fallback, &[], &[]);
        tokio::fs::write(&file, html)
            .await
            .with_context(|| format!("Failed to write {}", file.display()))?;
        report.fallback_shell = true;
    }

    tracing::info!(
        pages = report.written.len(),
        degraded = report.degraded.len(),
        fallback = report.fallback_shell,
        "Export complete"
    );

    Ok(report)
}

/// Slugs come from CMS content and become directory names. The fallback
/// shell shares the `category/` directory, so its name is reserved.
fn is_safe_segment(slug: &str) -> bool {
    slug != "." && slug != ".." && slug != FALLBACK_FILE && !slug.contains(['/', '\\'])
}
