//! Console reporter - colored terminal rendering of engine events

use colored::Colorize;
use gauntlet_engine::{
    HookStage, ListEntry, ListStatus, ModuleError, ModuleRow, Outcome, Reporter, SelectionError,
    TestStatus,
};

/// Renders engine events to stdout/stderr with ANSI colors.
///
/// Honors `--no-color` / `NO_COLOR` through the global color override.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new(no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn module_header(&mut self, _id: &str, description: &str) {
        let title = format!("{description} Unit Tests");
        println!("{}", title.bold());
        println!("{}", "-".repeat(title.len()));
    }

    fn hook_stage(&mut self, description: &str, stage: HookStage) {
        match stage {
            HookStage::ModuleSetup => println!("{}", format!("{description} Init").bold()),
            HookStage::ModuleTeardown => println!("{}", format!("{description} Uninit").bold()),
            HookStage::PreTest | HookStage::PostTest => {}
        }
    }

    fn hook_warning(&mut self, stage: HookStage, message: &str) {
        let what = match stage {
            HookStage::ModuleSetup => "module setup",
            HookStage::ModuleTeardown => "module teardown",
            HookStage::PreTest => "test setup",
            HookStage::PostTest => "test teardown",
        };
        eprintln!("{} {what}: {message}", "warning:".yellow().bold());
    }

    fn test_line(&mut self, index: usize, description: &str, status: TestStatus<'_>) {
        print!("{} ", format!("{index}. {description}").bold());
        match status {
            TestStatus::Passed => println!("{}", "OK".green()),
            TestStatus::Failed { message } => {
                println!("{}", "Failed".red());
                if !message.is_empty() {
                    println!("   {}", message.dimmed());
                }
            }
            TestStatus::Disabled => println!("{}", "disabled".cyan()),
            TestStatus::KnownIssue(text) => {
                println!("{}{}", "known issue: ".blue(), text)
            }
            TestStatus::MissingFn => println!("{}", "function does not exist".cyan()),
        }
    }

    fn selection_error(&mut self, error: &SelectionError) {
        eprintln!("{} {error}", "error:".red().bold());
    }

    fn module_error(&mut self, error: &ModuleError) {
        eprintln!("{} {error}", "error:".red().bold());
    }

    fn summary(&mut self, description: &str, comment: Option<&str>, outcome: &Outcome) {
        let title = match comment {
            Some(comment) => format!("{description} Test Summary ({comment})"),
            None => format!("{description} Test Summary"),
        };
        println!();
        println!("{title}");
        println!("{}", "-".repeat(title.len()));
        println!("{}", format!("total:        {}", outcome.total).bold());
        println!("passed:       {}", outcome.passed);
        println!("failed:       {}", outcome.failed);
        println!("known issues: {}", outcome.known_issue);
        println!("disabled:     {}", outcome.disabled);
    }

    fn list_modules(&mut self, rows: &[ModuleRow]) {
        println!("{}", format!("{:<5} {:<30} name", "num", "description").bold());
        println!("{}", "-".repeat(45));
        for (i, row) in rows.iter().enumerate() {
            println!("{:>3}.  {:<30} {}", i + 1, row.description, row.id);
        }
    }

    fn list_tests(&mut self, description: &str, comment: Option<&str>, entries: &[ListEntry]) {
        let header = match comment {
            Some(comment) => format!("{description} Unit Tests ({comment})"),
            None => format!("{description} Unit Tests"),
        };
        println!("{}", header.bold());
        for entry in entries {
            match &entry.status {
                ListStatus::Normal => {
                    println!("{}. {}", entry.index, entry.description);
                }
                ListStatus::Disabled => {
                    println!(
                        "{}. {} {}",
                        entry.index,
                        entry.description.dimmed(),
                        "(disabled)".cyan()
                    );
                }
                ListStatus::KnownIssue(text) => {
                    println!(
                        "{}. {} {}{}{}",
                        entry.index,
                        entry.description,
                        "(known issue: ".blue(),
                        text.as_str().dimmed(),
                        ")".blue()
                    );
                }
            }
        }
    }
}
