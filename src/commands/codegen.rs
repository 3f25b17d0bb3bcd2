use crate::codegen::{self, EmitOptions, GenerateStatus, Manifest};
use crate::error::{AgentkitError, Result};
use std::path::{Path, PathBuf};

pub fn execute(schema: Option<&Path>, output: Option<&Path>, manifest: Option<&Path>, check: bool) -> Result<()> {
    let results = match (manifest, schema, output) {
        (Some(manifest), _, _) => {
            let base = manifest.parent().unwrap_or(Path::new("."));
            Manifest::load(manifest)?.run(base, check)?
        }
        (None, Some(schema), Some(output)) => {
            let status = codegen::generate_file(schema, output, &EmitOptions::default(), check)?;
            vec![(output.to_path_buf(), status)]
        }
        _ => {
            return Err(AgentkitError::Codegen(
                "pass SCHEMA with --output, or --manifest".to_string(),
            ))
        }
    };
    report(&results, check)
}

fn report(results: &[(PathBuf, GenerateStatus)], check: bool) -> Result<()> {
    let mut stale = 0;
    for (path, status) in results {
        match status {
            GenerateStatus::Written => println!("✓ Generated {}", path.display()),
            GenerateStatus::Unchanged => println!("  {} is up to date", path.display()),
            GenerateStatus::Stale => {
                stale += 1;
                println!("✗ {} is out of date", path.display());
            }
        }
    }

    if check && stale > 0 {
        return Err(AgentkitError::Codegen(format!(
            "{} file(s) out of date, run 'agentkit codegen' without --check",
            stale
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_check_fails_on_stale() {
        let results = vec![
            (PathBuf::from("a.rs"), GenerateStatus::Unchanged),
            (PathBuf::from("b.rs"), GenerateStatus::Stale),
        ];
        let err = report(&results, true).unwrap_err();
        assert!(err.to_string().contains("1 file(s) out of date"));
        assert!(report(&results[..1], true).is_ok());
    }
}
