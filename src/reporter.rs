//! Output formatting for discovered stack sets.

use crate::error::Result;
use crate::stackset::StackSet;
use colored::Colorize;

pub trait Reporter {
    fn report(&self, stack_sets: &[StackSet]) -> Result<String>;
}

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, stack_sets: &[StackSet]) -> Result<String> {
        let mut output = String::new();

        for stack_set in stack_sets {
            let scope = if stack_set.is_global {
                "global".yellow().bold()
            } else {
                "regional".cyan()
            };
            output.push_str(&format!("{} [{}]\n", stack_set.name.bold(), scope));

            if self.verbose {
                output.push_str(&format!("  template: {}\n", stack_set.path.display()));
                if !stack_set.account_blacklist.is_empty() {
                    output.push_str(&format!(
                        "  blacklisted accounts: {}\n",
                        stack_set.account_blacklist.join(", ")
                    ));
                }
                if !stack_set.region_blacklist.is_empty() {
                    output.push_str(&format!(
                        "  blacklisted regions: {}\n",
                        stack_set.region_blacklist.join(", ")
                    ));
                }
            }
        }

        let global = stack_sets.iter().filter(|s| s.is_global).count();
        output.push_str(&format!(
            "\n{} stack sets ({} global, {} regional)\n",
            stack_sets.len(),
            global,
            stack_sets.len() - global
        ));

        Ok(output)
    }
}

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn report(&self, stack_sets: &[StackSet]) -> Result<String> {
        Ok(serde_json::to_string_pretty(stack_sets)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> Vec<StackSet> {
        vec![
            StackSet {
                path: PathBuf::from("/srv/stacksets/vpc.template"),
                prefix: PathBuf::from("/srv/stacksets/vpc"),
                name: "vpc".to_string(),
                is_global: false,
                account_blacklist: vec!["0123456789".to_string()],
                region_blacklist: vec!["us-east-1".to_string()],
            },
            StackSet {
                path: PathBuf::from("/srv/stacksets/iam.template"),
                prefix: PathBuf::from("/srv/stacksets/iam"),
                name: "iam".to_string(),
                is_global: true,
                account_blacklist: Vec::new(),
                region_blacklist: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_terminal_report_summary_line() {
        let output = TerminalReporter::new(false).report(&sample()).unwrap();
        assert!(output.contains("vpc"));
        assert!(output.contains("iam"));
        assert!(output.contains("2 stack sets (1 global, 1 regional)"));
    }

    #[test]
    fn test_terminal_report_verbose_lists_blacklists() {
        let output = TerminalReporter::new(true).report(&sample()).unwrap();
        assert!(output.contains("blacklisted accounts: 0123456789"));
        assert!(output.contains("blacklisted regions: us-east-1"));
    }

    #[test]
    fn test_terminal_report_non_verbose_omits_blacklists() {
        let output = TerminalReporter::new(false).report(&sample()).unwrap();
        assert!(!output.contains("blacklisted accounts"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let output = JsonReporter.report(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["name"], "vpc");
        assert_eq!(parsed[1]["is_global"], true);
    }

    #[test]
    fn test_report_empty_list() {
        let output = TerminalReporter::new(false).report(&[]).unwrap();
        assert!(output.contains("0 stack sets (0 global, 0 regional)"));
    }
}
