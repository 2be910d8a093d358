// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Utility to generate an HTML report about the number of translated
//! messages in a set of catalog files.

mod stats;

use anyhow::Context as _;
use clap::Parser;
use po_workbench::parser;
use stats::CatalogStats;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tera::{Context, Tera};

const REPORT_TEMPLATE: &str = include_str!("../templates/report.html");

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args {
        Args::Report {
            report_file,
            catalog_files,
        } => {
            report(&report_file, &catalog_files)?;
        }
        Args::Summary { catalog_files } => {
            summary(&catalog_files)?;
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Generate an HTML report about the status of each of the given catalog files.
    Report {
        /// The filename to which to write the report.
        #[arg(id = "report.html")]
        report_file: PathBuf,
        #[arg(id = "catalog.po")]
        catalog_files: Vec<PathBuf>,
    },
    /// Print a one-line status summary per catalog file.
    Summary {
        #[arg(id = "catalog.po")]
        catalog_files: Vec<PathBuf>,
    },
}

/// Compute status counts for the catalog file at `path`.
fn catalog_stats(path: &Path) -> anyhow::Result<CatalogStats> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog = parser::parse(&content);
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(CatalogStats::for_catalog(&name, &catalog))
}

/// Generate an HTML report about the given catalog files.
fn report(report_file: &Path, catalog_files: &[PathBuf]) -> anyhow::Result<()> {
    let mut catalogs = Vec::new();
    for path in catalog_files {
        catalogs.push(catalog_stats(path)?.to_context());
    }

    let mut context = Context::new();
    context.insert("catalogs", &catalogs);
    let report = Tera::one_off(REPORT_TEMPLATE, &context, true)
        .context("failed to render report template")?;
    fs::write(report_file, report)
        .with_context(|| format!("failed to write {}", report_file.display()))?;

    Ok(())
}

/// Print a one-line summary per catalog file.
fn summary(catalog_files: &[PathBuf]) -> anyhow::Result<()> {
    for path in catalog_files {
        println!("{}", catalog_stats(path)?);
    }
    Ok(())
}
