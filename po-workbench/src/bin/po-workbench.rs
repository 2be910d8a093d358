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

//! Command-line front end for the catalog workbench.
//!
//! The session lives in a JSON state file, so the two wizard steps span
//! invocations: `upload` stores a parsed catalog, and later `view`
//! calls filter and page through it. Filter flags override the
//! persisted preferences and become the new preferences, like a filter
//! form that remembers its last submission.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use po_workbench::session::{FilterPrefs, Workbench};
use po_workbench::store::JsonFileStore;
use po_workbench::{Page, PageRequest, StatusFilter, TranslationEntry};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Uploads are bounded before parsing; the parser itself accepts
/// anything.
const MAX_UPLOAD_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(version, about = "Upload, filter and page through a Gettext translation catalog.")]
struct Cli {
    /// JSON state file holding the session between runs.
    #[arg(long, default_value = "po-workbench.json")]
    store: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a catalog file and replace the session's catalog with it.
    Upload {
        /// A Gettext Portable Object file.
        file: PathBuf,
    },
    /// Show one page of the stored catalog.
    View {
        /// Status filter: all, translated or untranslated.
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive search by msgid or msgstr.
        #[arg(long)]
        search: Option<String>,
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Results per page.
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },
    /// Write the stored catalog back out as msgid/msgstr pairs.
    Export {
        /// Output file.
        file: PathBuf,
    },
    /// Forget the stored catalog and preferences.
    Reset,
}

fn upload(workbench: &mut Workbench<JsonFileStore>, file: &Path) -> anyhow::Result<()> {
    if file.extension().and_then(|ext| ext.to_str()) != Some("po") {
        bail!("{} is not a .po file", file.display());
    }
    let size = fs::metadata(file)
        .with_context(|| format!("failed to read {}", file.display()))?
        .len();
    if size > MAX_UPLOAD_BYTES {
        bail!(
            "{} is {size} bytes, larger than the {MAX_UPLOAD_BYTES} byte upload limit",
            file.display()
        );
    }

    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let count = workbench.upload(&content)?;
    println!("Extracted {count} messages from {}.", file.display());
    Ok(())
}

fn view(
    workbench: &mut Workbench<JsonFileStore>,
    status: Option<&str>,
    search: Option<&str>,
    page: usize,
    page_size: Option<NonZeroUsize>,
) -> anyhow::Result<()> {
    let mut prefs = workbench.load_prefs()?;
    if let Some(status) = status {
        prefs.status = status.parse::<StatusFilter>()?;
    }
    if let Some(search) = search {
        prefs.search = search.to_string();
    }
    if let Some(page_size) = page_size {
        prefs.page_size = page_size;
    }

    let criteria = prefs.criteria();
    let request = PageRequest::new(page, prefs.page_size);
    let result = workbench.view(&criteria, &request)?;

    // Only remember the filters once they have been accepted.
    workbench.save_prefs(&prefs)?;

    print_page(&result);
    Ok(())
}

fn print_page(page: &Page<TranslationEntry>) {
    if page.items.is_empty() {
        println!("No strings available.");
    } else {
        let width = page
            .items
            .iter()
            .map(|entry| entry.msgid.chars().count())
            .max()
            .unwrap_or(0)
            .max("Source string".len());
        println!("{:<width$}  {}", "Source string", "Translation");
        for entry in &page.items {
            println!("{:<width$}  {}", entry.msgid, entry.msgstr);
        }
    }
    println!(
        "page {} of {} ({} messages)",
        page.index + 1,
        page.total_pages,
        page.total_count
    );
}

fn export(workbench: &Workbench<JsonFileStore>, file: &Path) -> anyhow::Result<()> {
    let Some(catalog) = workbench.catalog()? else {
        bail!("no catalog uploaded yet");
    };
    fs::write(file, catalog.to_po_string())
        .with_context(|| format!("failed to write {}", file.display()))?;
    println!("Wrote {} messages to {}.", catalog.len(), file.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let cli = Cli::parse();

    let store = JsonFileStore::open(&cli.store)
        .with_context(|| format!("failed to open state file {}", cli.store.display()))?;
    let mut workbench = Workbench::new(store);

    match cli.command {
        Command::Upload { file } => upload(&mut workbench, &file)?,
        Command::View {
            status,
            search,
            page,
            page_size,
        } => view(
            &mut workbench,
            status.as_deref(),
            search.as_deref(),
            page,
            page_size,
        )?,
        Command::Export { file } => export(&workbench, &file)?,
        Command::Reset => {
            workbench.reset();
            info!("session cleared");
            println!("Session cleared.");
        }
    }
    Ok(())
}
