//! Web build for Scrapbook
//!
//! Usage:
//!   cargo xtask build-web               # WASM page into dist/web
//!   cargo xtask build-web --dev         # same, title marked [DEV]
//!   cargo xtask build-web --out site    # stage somewhere else

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TARGET: &str = "wasm32-unknown-unknown";
const WASM_NAME: &str = "scrapbook.wasm";
const LOADER_NAME: &str = "mq_js_bundle.js";
const LOADER_URL: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";
const PHOTOS_DIR: &str = "assets/photos";

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for Scrapbook")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile to WASM and stage a static web page
    BuildWeb {
        /// Mark the page title as a dev build
        #[arg(long)]
        dev: bool,
        /// Output directory, relative to the workspace root
        #[arg(long, default_value = "dist/web")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::BuildWeb { dev, out } => {
            let build = WebBuild::new(&out)?;
            build.compile()?;
            build.stage(dev)?;
            println!("Web build complete: {}", build.dist.display());
            Ok(())
        }
    }
}

struct WebBuild {
    root: PathBuf,
    dist: PathBuf,
}

impl WebBuild {
    fn new(out: &Path) -> Result<Self> {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .context("xtask must live inside the workspace")?
            .to_path_buf();
        let dist = root.join(out);
        Ok(Self { root, dist })
    }

    fn compile(&self) -> Result<()> {
        println!("Compiling for {}...", TARGET);
        let status = Command::new(env!("CARGO"))
            .current_dir(&self.root)
            .args(["build", "--release", "--target", TARGET])
            .status()
            .context("Failed to start cargo")?;
        if !status.success() {
            bail!("cargo build failed: {}", status);
        }
        Ok(())
    }

    /// Fill `dist` with the page, the module, the JS loader and the photos
    fn stage(&self, dev: bool) -> Result<()> {
        // The loader is kept across builds so offline rebuilds work
        let loader = self.fetch_loader()?;
        if self.dist.exists() {
            fs::remove_dir_all(&self.dist)?;
        }
        fs::create_dir_all(&self.dist)?;
        fs::write(self.dist.join(LOADER_NAME), loader)?;

        let wasm = self.root.join("target").join(TARGET).join("release").join(WASM_NAME);
        fs::copy(&wasm, self.dist.join(WASM_NAME))
            .with_context(|| format!("{} missing after build", wasm.display()))?;

        let page = fs::read_to_string(self.root.join("web/index.html")).context("web/index.html missing")?;
        let page = if dev {
            page.replace("<title>Scrapbook", "<title>[DEV] Scrapbook")
        } else {
            page
        };
        fs::write(self.dist.join("index.html"), page)?;

        let copied = self.copy_photos()?;
        println!("Staged {} bundled photo files", copied);
        Ok(())
    }

    fn fetch_loader(&self) -> Result<Vec<u8>> {
        let cached = self.dist.join(LOADER_NAME);
        if let Ok(bytes) = fs::read(&cached) {
            return Ok(bytes);
        }
        println!("Downloading {}...", LOADER_URL);
        let output = Command::new("curl")
            .args(["-fsSL", LOADER_URL])
            .output()
            .context("Failed to start curl")?;
        if !output.status.success() {
            bail!("curl failed: {}", String::from_utf8_lossy(&output.stderr).trim());
        }
        Ok(output.stdout)
    }

    /// The photos directory is flat: images plus build.rs's manifest
    fn copy_photos(&self) -> Result<usize> {
        let src = self.root.join(PHOTOS_DIR);
        if !src.is_dir() {
            return Ok(0);
        }
        let dst = self.dist.join(PHOTOS_DIR);
        fs::create_dir_all(&dst)?;

        let mut copied = 0;
        for entry in fs::read_dir(&src)? {
            let path = entry?.path();
            let Some(name) = path.file_name() else { continue };
            if path.is_file() {
                fs::copy(&path, dst.join(name))?;
                copied += 1;
            }
        }
        Ok(copied)
    }
}
