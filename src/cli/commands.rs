//! CLI command implementations
//!
//! Each command returns `CliResult<ExitCode>`; printing diagnostics is done here, exiting is left to `cli::run`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{FailurePolicy, GeneratedSupplier, SupplierCodegen};
use crate::format::FormatConfig;
use crate::input::{self, BeanSpec};

use super::{CliError, CliResult, ExitCode};

/// Options for `beangen generate`.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub indent: usize,
    pub skip_unresolvable: bool,
    pub json: bool,
}

fn load(file: &Path) -> CliResult<Vec<BeanSpec>> {
    input::load_manifest(file).map_err(|e| CliError::failure(format!("error: {}", e)))
}

/// Render a generation failure the way miette does for the terminal.
fn report(err: crate::backend::SupplierError) -> String {
    format!("{:?}", miette::Report::new(err))
}

/// Generate suppliers for every bean in the manifest.
pub fn generate(options: &GenerateOptions) -> CliResult<ExitCode> {
    let beans = load(&options.file)?;
    let policy = if options.skip_unresolvable {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };
    let codegen =
        SupplierCodegen::new(FormatConfig::new().with_indent_width(options.indent)).with_failure_policy(policy);
    let generated = codegen.generate(&beans).map_err(|e| CliError::failure(report(e)))?;

    for skipped in &generated.skipped {
        eprintln!("warning: skipped {}", skipped.definition());
    }

    let rendered = if options.json {
        serde_json::to_string_pretty(&generated.suppliers)
            .map_err(|e| CliError::failure(format!("error: cannot serialize output: {}", e)))?
    } else {
        render_text(&generated.suppliers)
    };

    match &options.output {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(|e| CliError::failure(format!("error: cannot write '{}': {}", path.display(), e)))?;
            tracing::info!(
                path = %path.display(),
                suppliers = generated.suppliers.len(),
                "wrote instance suppliers"
            );
        }
        None => print!("{}", rendered),
    }
    Ok(ExitCode::SUCCESS)
}

/// Report every bean that cannot be generated.
pub fn check(file: &Path) -> CliResult<ExitCode> {
    let beans = load(file)?;
    let codegen = SupplierCodegen::default().with_failure_policy(FailurePolicy::Skip);
    let generated = codegen.generate(&beans).map_err(|e| CliError::failure(report(e)))?;

    let failures = generated.skipped.len();
    for err in generated.skipped {
        eprintln!("{}", report(err));
    }
    println!(
        "{} of {} beans have a resolvable instance creator",
        generated.suppliers.len(),
        beans.len()
    );
    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// `// bean: NAME`, the supplier, and a blank line per bean.
pub fn render_text(suppliers: &[GeneratedSupplier]) -> String {
    let mut out = String::new();
    for supplier in suppliers {
        out.push_str("// bean: ");
        out.push_str(&supplier.bean_name);
        out.push('\n');
        out.push_str(&supplier.code);
        out.push_str("\n\n");
    }
    out
}
