//! The `eval` command: evaluate statements given on the command line.

use splice_scan::{ScanConfig, ScanResult};

use super::{fail, run_source};

/// Evaluate `source` as an anonymous script.
pub fn evaluate_expression(source: &str, config: ScanConfig) -> ScanResult<Vec<String>> {
    run_source(source, None, config)
}

/// Evaluate `source` and print each resulting value on its own line.
pub fn eval_expression(source: &str, config: ScanConfig) {
    match evaluate_expression(source, config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => fail(&e.to_string()),
    }
}
